use chrono::{DateTime, Utc};

use super::errors::DomainError;
use super::returns::{CustomerView, NewReturnRecord, OrderView, ReturnStatus, ReturnView};

/// Persistence port for the return workflow.
///
/// `insert_return` must write the request, its line items, and the outbox
/// event as a single atomic unit, and report an RMA collision with
/// `DomainError::DuplicateIdentifier` so the workflow can redraw.
pub trait ReturnStore: Send + Sync + 'static {
    fn find_customer(&self, customer_id: &str) -> Result<Option<CustomerView>, DomainError>;

    fn find_order(&self, order_number: &str) -> Result<Option<OrderView>, DomainError>;

    fn insert_return(&self, record: NewReturnRecord) -> Result<ReturnView, DomainError>;

    fn find_by_rma(&self, rma_number: &str) -> Result<Option<ReturnView>, DomainError>;

    /// All returns for a customer, newest first by creation time.
    fn find_by_customer(&self, customer_id: i64) -> Result<Vec<ReturnView>, DomainError>;

    fn update_status(
        &self,
        rma_number: &str,
        status: ReturnStatus,
        completed_date: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError>;
}

/// External QR-image producer. Takes the pipe-delimited payload and returns
/// an image reference (base64 data URI in the mock implementation).
pub trait QrImageProducer: Send + Sync + 'static {
    fn render(&self, payload: &str) -> Result<String, DomainError>;
}

/// Everything the label renderer needs to produce a retrievable label.
#[derive(Debug, Clone)]
pub struct LabelRequest {
    pub tracking_number: String,
    pub rma_number: String,
    pub return_address: String,
    pub customer_address: String,
    pub weight: String,
    pub service_type: String,
}

/// External shipping-label producer. Returns a locator (URL) for the label.
pub trait LabelRenderer: Send + Sync + 'static {
    fn render(&self, request: &LabelRequest) -> Result<String, DomainError>;
}
