//! Resource clients, one module per API surface.

pub mod auth;
pub mod landing;
pub mod orders;
pub mod products;
pub mod testimonials;
pub mod upload;

pub use landing::{HeroContent, LandingSection, SectionPayload, HERO_SECTION_KEY};
pub use orders::{DeliveryAddress, Order, OrderItem, OrderUser, ProductRef};
pub use products::{ColorVariantPayload, ProductPayload, ProductRecord};
pub use testimonials::{Testimonial, TestimonialPatch, TestimonialPayload};
pub use upload::resolve_upload_url;
