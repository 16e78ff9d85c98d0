//! Form controller workflows: product form, best collection, testimonial
//! form.

use velvetine_console::controllers::{
    BestCollectionManager, ImageSource, ProductFormController, TestimonialManager,
    COLLECTION_CAPACITY, TESTIMONIAL_PAGE_SIZE,
};
use velvetine_core::{ProductTag, Rating};
use velvetine_integration_tests::fixtures;

// ============================================================================
// Product form
// ============================================================================

#[test]
fn test_product_form_keeps_at_least_one_variant() {
    let mut form = ProductFormController::new();
    let first = form.variants()[0].id;

    let second = form.add_variant();
    let third = form.add_variant();
    assert_eq!(form.variants().len(), 3);

    form.remove_variant(second);
    form.remove_variant(third);
    form.remove_variant(first);
    assert_eq!(form.variants().len(), 1, "last variant must survive");
}

#[test]
fn test_product_form_edit_round_trip() {
    let record = fixtures::product("p1", "Velvet Tote");
    let mut form = ProductFormController::new();
    form.load_record(&record);

    let payload = form.payload();
    assert_eq!(payload.name, "Velvet Tote");
    assert_eq!(payload.original_price.as_deref(), Some("59.99"));
    assert_eq!(payload.tags, [ProductTag::BestSeller, ProductTag::New]);
    assert_eq!(payload.color_variants.len(), 2);
    assert_eq!(payload.color_variants[1].color_name, "Black");
}

#[test]
fn test_tag_toggling_is_involutive() {
    let mut form = ProductFormController::new();
    for tag in ProductTag::ALL {
        form.toggle_tag(tag);
    }
    assert_eq!(form.tags().len(), ProductTag::ALL.len());

    for tag in ProductTag::ALL {
        form.toggle_tag(tag);
    }
    assert!(form.tags().is_empty());
}

// ============================================================================
// Best collection
// ============================================================================

fn draft(manager: &mut BestCollectionManager, name: &str) {
    let form = manager.form_mut().draft_mut();
    form.name = name.to_owned();
    form.price = "25.00".into();
}

#[test]
fn test_collection_caps_at_four() {
    let mut manager = BestCollectionManager::new();
    for i in 0..COLLECTION_CAPACITY {
        draft(&mut manager, &format!("Slot {i}"));
        manager.save().expect("under capacity");
    }

    draft(&mut manager, "Overflow");
    assert!(manager.save().is_err());
    assert_eq!(manager.products().len(), COLLECTION_CAPACITY);
}

#[test]
fn test_collection_edit_does_not_consume_capacity() {
    let mut manager = BestCollectionManager::new();
    for i in 0..COLLECTION_CAPACITY {
        draft(&mut manager, &format!("Slot {i}"));
        manager.save().expect("under capacity");
    }

    manager.edit(0);
    draft(&mut manager, "Slot 0 v2");
    manager.save().expect("in-place edits always fit");
    assert_eq!(manager.products().len(), COLLECTION_CAPACITY);
    assert_eq!(manager.products()[0].draft.name, "Slot 0 v2");
}

#[test]
fn test_collection_delete_frees_a_slot() {
    let mut manager = BestCollectionManager::new();
    for i in 0..COLLECTION_CAPACITY {
        draft(&mut manager, &format!("Slot {i}"));
        manager.save().expect("under capacity");
    }
    assert!(!manager.can_add_more());

    manager.delete(3);
    assert!(manager.can_add_more());
    assert!(manager.form_visible());
}

// ============================================================================
// Testimonial form
// ============================================================================

#[test]
fn test_testimonial_image_modes_exclude_each_other() {
    let mut manager = TestimonialManager::new();

    manager
        .select_image_file("dana.png", vec![0xff, 0xd8])
        .expect("png accepted");
    manager.set_image_url("https://cdn/dana.jpg".into());
    assert!(matches!(
        manager.form().image,
        Some(ImageSource::Url(_))
    ));

    manager
        .select_image_file("dana2.jpeg", vec![0x89])
        .expect("jpeg accepted");
    assert!(matches!(
        manager.form().image,
        Some(ImageSource::File { .. })
    ));
}

#[test]
fn test_testimonial_edit_then_reset() {
    let mut manager = TestimonialManager::new();
    manager.open_edit(&fixtures::testimonial("t1"));

    assert_eq!(manager.edit_id(), Some("t1"));
    assert_eq!(manager.form().review, Rating::MAX);
    assert_eq!(manager.form().user_address, "Lisbon, PT");

    manager.reset_form();
    assert!(manager.edit_id().is_none());
    assert!(manager.form().user_name.is_empty());
}

#[test]
fn test_testimonial_pagination_uses_smaller_page_size() {
    let mut manager = TestimonialManager::new();
    let seq = manager.begin_load();
    manager.apply_list(seq, vec![fixtures::testimonial("t1")], 95);

    assert_eq!(TESTIMONIAL_PAGE_SIZE, 10);
    assert_eq!(manager.pagination().total_pages(), 10);
}
