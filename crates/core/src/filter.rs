//! Status classification for order listings.
//!
//! Pure functions over a loaded order list: one linear pass, storage order
//! preserved, no sorting. These back the listing endpoint and the
//! pending-delivery / pending-payment views.

use serde::Deserialize;

use crate::order::Order;

/// Status subsets offered by the listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    PendingDelivery,
    Delivered,
    Paid,
    DeliveredUnpaid,
}

impl StatusFilter {
    /// Whether `order` belongs to this subset.
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::PendingDelivery => !order.delivered,
            StatusFilter::Delivered => order.delivered,
            StatusFilter::Paid => order.paid,
            StatusFilter::DeliveredUnpaid => order.delivered && !order.paid,
        }
    }
}

/// Case-insensitive substring match against the client name.
pub fn client_matches(order: &Order, query: &str) -> bool {
    order
        .client
        .to_lowercase()
        .contains(&query.trim().to_lowercase())
}

/// Apply a status filter and an optional client search to a loaded list.
pub fn apply(orders: Vec<Order>, status: StatusFilter, client: Option<&str>) -> Vec<Order> {
    orders
        .into_iter()
        .filter(|o| status.matches(o))
        .filter(|o| match client {
            Some(q) if !q.trim().is_empty() => client_matches(o, q),
            _ => true,
        })
        .collect()
}

/// Orders awaiting delivery, in storage order.
pub fn pending_delivery(orders: Vec<Order>) -> Vec<Order> {
    apply(orders, StatusFilter::PendingDelivery, None)
}

/// Delivered orders awaiting payment, in storage order.
pub fn pending_payment(orders: Vec<Order>) -> Vec<Order> {
    apply(orders, StatusFilter::DeliveredUnpaid, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Product;

    fn order(id: i64, client: &str, delivered: bool, paid: bool) -> Order {
        Order {
            id,
            client: client.to_string(),
            product: Product::Queijo,
            quantity: 1,
            amount: 10.0,
            ordered_at: chrono::Utc::now(),
            delivered,
            paid,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order(1, "Maria", true, false),
            order(2, "João", false, false),
            order(3, "Ana Silva", true, true),
        ]
    }

    fn ids(orders: &[Order]) -> Vec<i64> {
        orders.iter().map(|o| o.id).collect()
    }

    #[test]
    fn delivered_unpaid_selects_exactly_the_delivered_unpaid() {
        let out = apply(sample(), StatusFilter::DeliveredUnpaid, None);
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn pending_delivery_selects_the_undelivered() {
        let out = apply(sample(), StatusFilter::PendingDelivery, None);
        assert_eq!(ids(&out), vec![2]);
    }

    #[test]
    fn paid_selects_the_paid() {
        let out = apply(sample(), StatusFilter::Paid, None);
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn all_preserves_storage_order() {
        let out = apply(sample(), StatusFilter::All, None);
        assert_eq!(ids(&out), vec![1, 2, 3]);
    }

    #[test]
    fn client_search_is_case_insensitive_substring() {
        let out = apply(sample(), StatusFilter::All, Some("ana"));
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn blank_client_search_matches_everything() {
        let out = apply(sample(), StatusFilter::All, Some("   "));
        assert_eq!(ids(&out), vec![1, 2, 3]);
    }

    #[test]
    fn client_search_composes_with_status() {
        let out = apply(sample(), StatusFilter::Delivered, Some("maria"));
        assert_eq!(ids(&out), vec![1]);
    }
}
