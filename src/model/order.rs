/// A customer purchase record as returned by the backend order API.
///
/// Orders are created by the backend at checkout time. The admin panel only
/// ever reads them and changes their [`OrderStatus`].
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Backend-assigned identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fulfillment stage of an order.
///
/// The wire representation is the human-readable label (`"Out for Delivery"`),
/// which is also what the admin selector displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Order Placed")]
    OrderPlaced,
    #[serde(rename = "Packing")]
    Packing,
    #[serde(rename = "Shipped")]
    Shipped,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
}

impl OrderStatus {
    /// Every status in lifecycle order, as offered by the status selector.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::OrderPlaced,
        OrderStatus::Packing,
        OrderStatus::Shipped,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::OrderPlaced => "Order Placed",
            OrderStatus::Packing => "Packing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Parses a selector value back into a status.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One purchased line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub size: String,
}

/// Shipping address attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub address: Option<Address>,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment: bool,
    pub status: OrderStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}

/// Payload of `POST /api/order/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub order_id: OrderId,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_uses_display_labels_on_the_wire() {
        let encoded = serde_json::to_value(OrderStatus::OutForDelivery).unwrap();
        assert_eq!(encoded, json!("Out for Delivery"));

        let decoded: OrderStatus = serde_json::from_value(json!("Order Placed")).unwrap();
        assert_eq!(decoded, OrderStatus::OrderPlaced);

        assert!(serde_json::from_value::<OrderStatus>(json!("Lost")).is_err());
    }

    #[test]
    fn test_from_label_matches_every_status() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(OrderStatus::from_label("shipped"), None);
    }

    #[test]
    fn test_order_decodes_backend_document() {
        let doc = json!({
            "_id": "66a1",
            "userId": "u1",
            "items": [{ "_id": "p1", "name": "Tee", "price": 20, "quantity": 2, "size": "M" }],
            "address": {
                "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com",
                "street": "1 Main St", "city": "London", "state": "LDN",
                "country": "UK", "zipcode": "N1", "phone": "123"
            },
            "amount": 50,
            "paymentMethod": "COD",
            "payment": false,
            "status": "Packing",
            "date": 1_700_000_000_000i64
        });

        let order: Order = serde_json::from_value(doc).unwrap();
        assert_eq!(order.id, OrderId::from("66a1"));
        assert_eq!(order.items[0].name, "Tee");
        assert_eq!(order.items[0].size, "M");
        assert_eq!(order.address.as_ref().unwrap().first_name, "Ada");
        assert_eq!(order.amount, 50.0);
        assert_eq!(order.status, OrderStatus::Packing);
        assert_eq!(order.date.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_order_without_payment_fields_still_decodes() {
        let doc = json!({
            "_id": "66a2",
            "items": [],
            "amount": 12.5,
            "status": "Order Placed",
            "date": 1_700_000_000_000i64
        });

        let order: Order = serde_json::from_value(doc).unwrap();
        assert_eq!(order.payment_method, "");
        assert!(!order.payment);
        assert_eq!(order.address, None);
    }

    #[test]
    fn test_status_update_body_shape() {
        let body = StatusUpdate {
            order_id: OrderId::from("o1"),
            status: OrderStatus::Shipped,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "orderId": "o1", "status": "Shipped" })
        );
    }
}
