//! Fish order schema - fish and fish-pack orders placed under a booking

use serde::{Deserialize, Deserializer, Serialize};

use crate::aggregate::finite_or_zero;
use crate::errors::{KoiError, Result};

use super::{EntityKind, FishOrderStatus, PaymentStatus};

/// A single koi on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishOrderDetail {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub variety_id: Option<i64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,
}

/// A pack of koi sold by quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishPackOrderDetail {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub variety_id: Option<i64>,

    #[serde(default)]
    pub quantity: Option<u32>,

    /// Price per pack
    #[serde(default)]
    pub price: Option<f64>,
}

impl FishPackOrderDetail {
    /// Line total; a missing quantity counts as one pack
    pub fn line_total(&self) -> f64 {
        finite_or_zero(self.price) * f64::from(self.quantity.unwrap_or(1))
    }
}

fn lenient_payment_status<'de, D>(deserializer: D) -> std::result::Result<PaymentStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

/// An order for fish from one farm under a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishOrder {
    pub id: i64,

    pub booking_id: i64,

    #[serde(default)]
    pub farm_id: Option<i64>,

    #[serde(default)]
    pub delivery_address: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Null or unrecognized values read as Pending
    #[serde(default, deserialize_with = "lenient_payment_status")]
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub total: Option<f64>,

    #[serde(default)]
    pub fish_order_details: Vec<FishOrderDetail>,

    #[serde(default)]
    pub fish_pack_order_details: Vec<FishPackOrderDetail>,
}

impl FishOrder {
    /// Create a deposited order with no lines
    pub fn new(id: i64, booking_id: i64, farm_id: i64) -> Self {
        FishOrder {
            id,
            booking_id,
            farm_id: Some(farm_id),
            delivery_address: None,
            status: Some(FishOrderStatus::Deposited.label().to_string()),
            payment_status: PaymentStatus::Deposited,
            total: None,
            fish_order_details: Vec::new(),
            fish_pack_order_details: Vec::new(),
        }
    }

    pub fn status(&self) -> Result<FishOrderStatus> {
        match self.status.as_deref() {
            Some(label) => label.parse(),
            None => Err(KoiError::invalid_status(EntityKind::FishOrder, "")),
        }
    }

    pub fn with_status(mut self, status: FishOrderStatus) -> Self {
        self.status = Some(status.label().to_string());
        self
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    /// The order total, recomputed from the detail lines when the server
    /// total is missing or not a finite number
    pub fn effective_total(&self) -> f64 {
        match self.total {
            Some(total) if total.is_finite() => total,
            _ => {
                let fish: f64 = self
                    .fish_order_details
                    .iter()
                    .map(|d| finite_or_zero(d.price))
                    .fold(0.0, |acc, v| acc + v);
                let packs: f64 = self
                    .fish_pack_order_details
                    .iter()
                    .map(FishPackOrderDetail::line_total)
                    .fold(0.0, |acc, v| acc + v);
                fish + packs
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fish_order_deserialization() {
        let json = r#"{
            "id": 30,
            "bookingId": 7,
            "farmId": 2,
            "deliveryAddress": "12 Le Loi, HCMC",
            "status": "In Transit",
            "paymentStatus": "Deposited",
            "total": 3200,
            "fishOrderDetails": [{"varietyId": 1, "price": 1200}],
            "fishPackOrderDetails": [{"varietyId": 2, "quantity": 2, "price": 1000}]
        }"#;
        let order: FishOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.status().unwrap(), FishOrderStatus::InTransit);
        assert_eq!(order.payment_status, PaymentStatus::Deposited);
        assert_eq!(order.effective_total(), 3200.0);
    }

    #[test]
    fn test_effective_total_falls_back_to_lines() {
        let json = r#"{
            "id": 31,
            "bookingId": 7,
            "fishOrderDetails": [{"price": 500}, {"price": null}],
            "fishPackOrderDetails": [{"quantity": 3, "price": 100}, {"price": 50}]
        }"#;
        let order: FishOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.effective_total(), 850.0);
    }

    #[test]
    fn test_payment_status_is_lenient() {
        let null: FishOrder =
            serde_json::from_str(r#"{"id": 1, "bookingId": 2, "paymentStatus": null}"#).unwrap();
        assert_eq!(null.payment_status, PaymentStatus::Pending);
        let odd: FishOrder =
            serde_json::from_str(r#"{"id": 1, "bookingId": 2, "paymentStatus": "Refunded"}"#)
                .unwrap();
        assert_eq!(odd.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_effective_total_ignores_nan() {
        let order = FishOrder::new(1, 1, 1).with_total(f64::NAN);
        assert_eq!(order.effective_total(), 0.0);
    }

    #[test]
    fn test_effective_total_without_lines_is_positive_zero() {
        let order = FishOrder::new(1, 1, 1);
        assert!(order.effective_total().is_sign_positive());
    }
}
