use chrono::Utc;

use crate::application::fulfillment::{self, FulfillmentArtifact};
use crate::domain::eligibility;
use crate::domain::errors::DomainError;
use crate::domain::identifier::{self, MAX_IDENTIFIER_ATTEMPTS};
use crate::domain::ports::{LabelRenderer, QrImageProducer, ReturnStore};
use crate::domain::returns::{NewReturnRecord, ReturnStatus, ReturnSubmission, ReturnView};

/// Orchestrates the return lifecycle: load and authorize, validate
/// eligibility, allocate the RMA number, produce the fulfillment artifact,
/// and persist the approved request in one transaction. Also serves the
/// read-only queries and the administrative status transition.
pub struct ReturnService<S, Q, L> {
    store: S,
    qr: Q,
    labels: L,
}

impl<S, Q, L> ReturnService<S, Q, L>
where
    S: ReturnStore,
    Q: QrImageProducer,
    L: LabelRenderer,
{
    pub fn new(store: S, qr: Q, labels: L) -> Self {
        Self { store, qr, labels }
    }

    pub fn create_return(
        &self,
        customer_id: &str,
        submission: ReturnSubmission,
    ) -> Result<ReturnView, DomainError> {
        let now = Utc::now();

        let customer = self
            .store
            .find_customer(customer_id)?
            .ok_or(DomainError::NotFound("Customer"))?;

        let order = self
            .store
            .find_order(&submission.order_number)?
            .ok_or(DomainError::NotFound("Order"))?;

        if order.customer_id != customer.id {
            return Err(DomainError::Forbidden);
        }

        eligibility::validate(&order, &submission.items, now)?;

        // The unique index on rma_number is the authoritative uniqueness
        // guard; on a collision the whole attempt (artifact included, since
        // the QR payload embeds the RMA number) is redone with a fresh draw.
        for attempt in 1..=MAX_IDENTIFIER_ATTEMPTS {
            let rma_number = identifier::new_rma_number();

            let artifact = fulfillment::route(
                &self.qr,
                &self.labels,
                submission.method,
                &rma_number,
                &order.order_number,
                &customer,
                now,
            )?;

            let mut record = NewReturnRecord {
                rma_number,
                order_id: order.id,
                customer_id: customer.id,
                reason: submission.reason,
                method: submission.method,
                status: ReturnStatus::Pending,
                notes: submission.notes.clone(),
                tracking_number: None,
                qr_code_data: None,
                qr_code_image: None,
                shipping_label_url: None,
                requested_date: now,
                processed_date: None,
                lines: submission.items.clone(),
            };

            match artifact {
                FulfillmentArtifact::StoreDropOff {
                    qr_code_data,
                    qr_code_image,
                } => {
                    record.qr_code_data = Some(qr_code_data);
                    record.qr_code_image = Some(qr_code_image);
                }
                FulfillmentArtifact::ShipToWarehouse {
                    tracking_number,
                    shipping_label_url,
                } => {
                    record.tracking_number = Some(tracking_number);
                    record.shipping_label_url = Some(shipping_label_url);
                }
            }

            // Artifact produced and everything validated: approve before the
            // insert so PENDING is never observable through the API.
            record.status = ReturnStatus::Approved;
            record.processed_date = Some(now);

            match self.store.insert_return(record) {
                Ok(view) => return Ok(view),
                Err(DomainError::DuplicateIdentifier) => {
                    log::warn!(
                        "RMA number collision on attempt {attempt}/{MAX_IDENTIFIER_ATTEMPTS}, redrawing"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::IdentifierExhausted)
    }

    pub fn get_by_rma(&self, rma_number: &str) -> Result<ReturnView, DomainError> {
        self.store
            .find_by_rma(rma_number)?
            .ok_or(DomainError::NotFound("Return request"))
    }

    pub fn get_customer_returns(&self, customer_id: &str) -> Result<Vec<ReturnView>, DomainError> {
        let customer = self
            .store
            .find_customer(customer_id)?
            .ok_or(DomainError::NotFound("Customer"))?;
        self.store.find_by_customer(customer.id)
    }

    /// Administrative transition. Any status may be set from any
    /// non-terminal status; transitions out of COMPLETED, REJECTED or
    /// CANCELLED are refused. Setting COMPLETED stamps the completion time.
    pub fn update_status(
        &self,
        rma_number: &str,
        new_status: ReturnStatus,
    ) -> Result<(), DomainError> {
        let current = self
            .store
            .find_by_rma(rma_number)?
            .ok_or(DomainError::NotFound("Return request"))?;

        if current.status.is_terminal() {
            return Err(DomainError::Ineligible(format!(
                "Return request is {} and cannot change status",
                current.status.as_str()
            )));
        }

        let completed_date = (new_status == ReturnStatus::Completed).then(Utc::now);
        self.store.update_status(rma_number, new_status, completed_date)
    }
}
