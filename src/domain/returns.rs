use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

// ── Enumerations ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnReason {
    Defective,
    Damaged,
    WrongItem,
    NotAsDescribed,
    ChangedMind,
    TooSmall,
    TooLarge,
    ArrivedLate,
    DuplicateOrder,
    Other,
}

/// How the customer wants to hand the merchandise back. Closed set: the
/// fulfillment router dispatches exhaustively on this enum, so an unsupported
/// method can only appear at the string boundary (request parsing, stored
/// rows), never inside the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnMethod {
    StoreDropOff,
    ShipToWarehouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnStatus {
    Pending,
    Approved,
    Shipped,
    Received,
    Inspected,
    ProcessingRefund,
    Completed,
    Rejected,
    Cancelled,
}

impl ReturnStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ReturnStatus::Completed | ReturnStatus::Rejected | ReturnStatus::Cancelled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnItemStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReturnMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnMethod::StoreDropOff => "STORE_DROP_OFF",
            ReturnMethod::ShipToWarehouse => "SHIP_TO_WAREHOUSE",
        }
    }
}

impl std::str::FromStr for ReturnMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STORE_DROP_OFF" => Ok(ReturnMethod::StoreDropOff),
            "SHIP_TO_WAREHOUSE" => Ok(ReturnMethod::ShipToWarehouse),
            other => Err(DomainError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl ReturnStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnStatus::Pending => "PENDING",
            ReturnStatus::Approved => "APPROVED",
            ReturnStatus::Shipped => "SHIPPED",
            ReturnStatus::Received => "RECEIVED",
            ReturnStatus::Inspected => "INSPECTED",
            ReturnStatus::ProcessingRefund => "PROCESSING_REFUND",
            ReturnStatus::Completed => "COMPLETED",
            ReturnStatus::Rejected => "REJECTED",
            ReturnStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::str::FromStr for ReturnStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ReturnStatus::Pending),
            "APPROVED" => Ok(ReturnStatus::Approved),
            "SHIPPED" => Ok(ReturnStatus::Shipped),
            "RECEIVED" => Ok(ReturnStatus::Received),
            "INSPECTED" => Ok(ReturnStatus::Inspected),
            "PROCESSING_REFUND" => Ok(ReturnStatus::ProcessingRefund),
            "COMPLETED" => Ok(ReturnStatus::Completed),
            "REJECTED" => Ok(ReturnStatus::Rejected),
            "CANCELLED" => Ok(ReturnStatus::Cancelled),
            other => Err(DomainError::InvalidInput(format!(
                "unknown return status '{other}'"
            ))),
        }
    }
}

impl ReturnReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnReason::Defective => "DEFECTIVE",
            ReturnReason::Damaged => "DAMAGED",
            ReturnReason::WrongItem => "WRONG_ITEM",
            ReturnReason::NotAsDescribed => "NOT_AS_DESCRIBED",
            ReturnReason::ChangedMind => "CHANGED_MIND",
            ReturnReason::TooSmall => "TOO_SMALL",
            ReturnReason::TooLarge => "TOO_LARGE",
            ReturnReason::ArrivedLate => "ARRIVED_LATE",
            ReturnReason::DuplicateOrder => "DUPLICATE_ORDER",
            ReturnReason::Other => "OTHER",
        }
    }
}

impl std::str::FromStr for ReturnReason {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEFECTIVE" => Ok(ReturnReason::Defective),
            "DAMAGED" => Ok(ReturnReason::Damaged),
            "WRONG_ITEM" => Ok(ReturnReason::WrongItem),
            "NOT_AS_DESCRIBED" => Ok(ReturnReason::NotAsDescribed),
            "CHANGED_MIND" => Ok(ReturnReason::ChangedMind),
            "TOO_SMALL" => Ok(ReturnReason::TooSmall),
            "TOO_LARGE" => Ok(ReturnReason::TooLarge),
            "ARRIVED_LATE" => Ok(ReturnReason::ArrivedLate),
            "DUPLICATE_ORDER" => Ok(ReturnReason::DuplicateOrder),
            "OTHER" => Ok(ReturnReason::Other),
            other => Err(DomainError::InvalidInput(format!(
                "unknown return reason '{other}'"
            ))),
        }
    }
}

impl ReturnItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnItemStatus::Pending => "PENDING",
            ReturnItemStatus::Approved => "APPROVED",
            ReturnItemStatus::Rejected => "REJECTED",
        }
    }
}

// ── Read views ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: i64,
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub id: i64,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub is_large_item: bool,
    pub is_hazardous: bool,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: i64,
    pub order_number: String,
    pub customer_id: i64,
    pub status: String,
    pub order_date: DateTime<Utc>,
    pub items: Vec<OrderItemView>,
}

/// A persisted return request, shaped for the external response contract.
#[derive(Debug, Clone)]
pub struct ReturnView {
    pub rma_number: String,
    pub order_number: String,
    pub customer_id: String,
    pub reason: ReturnReason,
    pub method: ReturnMethod,
    pub status: ReturnStatus,
    pub notes: Option<String>,
    pub tracking_number: Option<String>,
    pub qr_code_data: Option<String>,
    pub shipping_label_url: Option<String>,
    pub requested_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
}

// ── Workflow inputs ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ReturnLineInput {
    pub order_item_id: i64,
    pub quantity_to_return: i32,
    pub condition: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReturnSubmission {
    pub order_number: String,
    pub reason: ReturnReason,
    pub method: ReturnMethod,
    pub notes: Option<String>,
    pub items: Vec<ReturnLineInput>,
}

/// Fully assembled return request, handed to the store for a single
/// transactional insert (request, its line items, and the outbox event).
#[derive(Debug, Clone)]
pub struct NewReturnRecord {
    pub rma_number: String,
    pub order_id: i64,
    pub customer_id: i64,
    pub reason: ReturnReason,
    pub method: ReturnMethod,
    pub status: ReturnStatus,
    pub notes: Option<String>,
    pub tracking_number: Option<String>,
    pub qr_code_data: Option<String>,
    pub qr_code_image: Option<String>,
    pub shipping_label_url: Option<String>,
    pub requested_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
    pub lines: Vec<ReturnLineInput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn method_round_trips_through_strings() {
        for m in [ReturnMethod::StoreDropOff, ReturnMethod::ShipToWarehouse] {
            assert_eq!(ReturnMethod::from_str(m.as_str()).unwrap(), m);
        }
    }

    #[test]
    fn unknown_method_is_unsupported() {
        let err = ReturnMethod::from_str("MAIL_PIGEON").unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedMethod(_)));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for s in [
            ReturnStatus::Pending,
            ReturnStatus::Approved,
            ReturnStatus::Shipped,
            ReturnStatus::Received,
            ReturnStatus::Inspected,
            ReturnStatus::ProcessingRefund,
            ReturnStatus::Completed,
            ReturnStatus::Rejected,
            ReturnStatus::Cancelled,
        ] {
            assert_eq!(ReturnStatus::from_str(s.as_str()).unwrap(), s);
        }
    }

    #[test]
    fn terminal_states() {
        assert!(ReturnStatus::Completed.is_terminal());
        assert!(ReturnStatus::Rejected.is_terminal());
        assert!(ReturnStatus::Cancelled.is_terminal());
        assert!(!ReturnStatus::Approved.is_terminal());
        assert!(!ReturnStatus::Pending.is_terminal());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&ReturnMethod::StoreDropOff).unwrap();
        assert_eq!(json, "\"STORE_DROP_OFF\"");
        let json = serde_json::to_string(&ReturnStatus::ProcessingRefund).unwrap();
        assert_eq!(json, "\"PROCESSING_REFUND\"");
    }
}
