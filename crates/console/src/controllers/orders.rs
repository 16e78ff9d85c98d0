//! Order management screen: paginated list, detail drawer, status changes.

use tracing::{debug, error, instrument};

use velvetine_api::resources::Order;
use velvetine_api::{ApiClient, ApiError};
use velvetine_core::{OrderStatus, Pagination};

/// Orders shown per page.
pub const ORDER_PAGE_SIZE: u32 = 20;

/// State behind the order management screen.
///
/// Loads are tagged with a monotonic sequence number; only the response for
/// the newest request is applied, so a slow page-1 response can never
/// clobber a later page-2 response.
#[derive(Debug, Default)]
pub struct OrderManager {
    orders: Vec<Order>,
    total: u64,
    page: u32,
    loading: bool,
    seq: u64,
    selected: Option<Order>,
    detail_loading: bool,
    updating_status: bool,
}

impl OrderManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Order> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn is_detail_loading(&self) -> bool {
        self.detail_loading
    }

    #[must_use]
    pub const fn is_updating_status(&self) -> bool {
        self.updating_status
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination::new(self.page, ORDER_PAGE_SIZE, self.total)
    }

    // ========================================================================
    // Pure transitions
    // ========================================================================

    /// Start a load; returns the sequence number the response must present
    /// to be applied.
    pub const fn begin_load(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Apply a list response. Returns `false` (and changes nothing) when a
    /// newer load has started since `seq` was issued.
    pub fn apply_list(&mut self, seq: u64, orders: Vec<Order>, total: u64) -> bool {
        if seq != self.seq {
            debug!(seq, current = self.seq, "discarding stale order list");
            return false;
        }
        self.orders = orders;
        self.total = total;
        self.loading = false;
        true
    }

    /// Record a failed load. Stale failures are ignored the same way stale
    /// successes are.
    pub const fn fail_load(&mut self, seq: u64) {
        if seq == self.seq {
            self.loading = false;
        }
    }

    /// Patch the open detail after a status update succeeds. The list is
    /// not touched; the follow-up reload refreshes it.
    pub fn apply_status_update(&mut self, updated: Order) {
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.id == updated.id)
        {
            self.selected = Some(updated);
        }
    }

    /// Jump to a page, clamped to at least 1.
    pub const fn set_page(&mut self, page: u32) {
        self.page = if page == 0 { 1 } else { page };
    }

    pub const fn next_page(&mut self) {
        if self.pagination().can_go_next() {
            self.page += 1;
        }
    }

    pub const fn prev_page(&mut self) {
        if self.pagination().can_go_prev() {
            self.page -= 1;
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    // ========================================================================
    // Async operations
    // ========================================================================

    /// Load the current page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the previous list is kept.
    #[instrument(skip(self, client), fields(page = self.page))]
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let seq = self.begin_load();
        match client.list_orders(self.page, ORDER_PAGE_SIZE).await {
            Ok(envelope) => {
                self.apply_list(seq, envelope.data, envelope.total);
                Ok(())
            }
            Err(err) => {
                self.fail_load(seq);
                error!(error = %err, "failed to load orders");
                Err(err)
            }
        }
    }

    /// Open the detail drawer for an order, fetching the expanded record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the drawer stays closed.
    #[instrument(skip(self, client))]
    pub async fn open_detail(&mut self, client: &ApiClient, id: &str) -> Result<(), ApiError> {
        self.detail_loading = true;
        let result = client.order_detail(id).await;
        self.detail_loading = false;
        self.selected = Some(result?);
        Ok(())
    }

    /// Change an order's status, patch the open detail optimistically, then
    /// reload the list so derived fields stay fresh.
    ///
    /// Concurrent changes are serialized client-side: a second call while
    /// one is in flight is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the update or the follow-up reload fails. A
    /// failed update leaves the screen unchanged.
    #[instrument(skip(self, client))]
    pub async fn change_status(
        &mut self,
        client: &ApiClient,
        id: &str,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        if self.updating_status {
            return Ok(());
        }
        self.updating_status = true;

        let result = client.update_order_status(id, status).await;
        self.updating_status = false;

        let updated = result?;
        self.apply_status_update(updated);
        self.load(client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: &str, status: &str) -> Order {
        serde_json::from_value(json!({ "_id": id, "status": status })).expect("valid fixture")
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut manager = OrderManager::new();
        let first = manager.begin_load();
        let second = manager.begin_load();

        assert!(!manager.apply_list(first, vec![order("o1", "confirmed")], 1));
        assert!(manager.orders().is_empty());
        assert!(manager.is_loading());

        assert!(manager.apply_list(second, vec![order("o2", "shipped")], 1));
        assert_eq!(manager.orders()[0].id, "o2");
        assert!(!manager.is_loading());
    }

    #[test]
    fn test_stale_failure_keeps_loading_flag() {
        let mut manager = OrderManager::new();
        let first = manager.begin_load();
        let _second = manager.begin_load();

        manager.fail_load(first);
        assert!(manager.is_loading());
    }

    #[test]
    fn test_pagination_tracks_total() {
        let mut manager = OrderManager::new();
        let seq = manager.begin_load();
        manager.apply_list(seq, vec![order("o1", "confirmed")], 45);

        let pagination = manager.pagination();
        assert_eq!(pagination.total_pages(), 3);
        assert!(pagination.can_go_next());
        assert!(!pagination.can_go_prev());
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut manager = OrderManager::new();
        manager.prev_page();
        assert_eq!(manager.pagination().page, 1);

        let seq = manager.begin_load();
        manager.apply_list(seq, Vec::new(), 45);
        manager.next_page();
        manager.next_page();
        manager.next_page();
        assert_eq!(manager.pagination().page, 3);

        manager.set_page(0);
        assert_eq!(manager.pagination().page, 1);
    }

    #[test]
    fn test_status_update_patches_open_detail_only() {
        let mut manager = OrderManager::new();
        let seq = manager.begin_load();
        manager.apply_list(
            seq,
            vec![order("o1", "confirmed"), order("o2", "confirmed")],
            2,
        );
        manager.selected = Some(order("o1", "confirmed"));

        manager.apply_status_update(order("o1", "shipped"));
        assert_eq!(
            manager.selected().map(|o| o.status),
            Some(OrderStatus::Shipped)
        );
        // The list waits for the reload that follows a status change.
        assert_eq!(manager.orders()[0].status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_status_update_ignores_unrelated_selection() {
        let mut manager = OrderManager::new();
        manager.selected = Some(order("o2", "confirmed"));

        manager.apply_status_update(order("o1", "delivered"));
        assert_eq!(
            manager.selected().map(|o| o.status),
            Some(OrderStatus::Confirmed)
        );
    }

    #[test]
    fn test_close_detail() {
        let mut manager = OrderManager::new();
        manager.selected = Some(order("o1", "confirmed"));
        manager.close_detail();
        assert!(manager.selected().is_none());
    }
}
