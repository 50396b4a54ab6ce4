use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;
use crate::domain::identifier;
use crate::domain::ports::{LabelRequest, LabelRenderer, QrImageProducer};
use crate::domain::returns::{CustomerView, ReturnMethod};

/// Fixed warehouse address printed on every return shipping label.
pub const WAREHOUSE_RETURN_ADDRESS: &str =
    "Returns Warehouse\n1234 Returns Blvd\nAtlanta, GA 30309";

const DEFAULT_WEIGHT: &str = "5 lbs";
const DEFAULT_SERVICE_TYPE: &str = "Ground";

/// What the router produced for a return request. Exactly one variant per
/// method; the workflow copies its fields onto the persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentArtifact {
    StoreDropOff {
        qr_code_data: String,
        qr_code_image: String,
    },
    ShipToWarehouse {
        tracking_number: String,
        shipping_label_url: String,
    },
}

/// Pipe-delimited QR payload scanned at the store counter. Field order is
/// fixed and part of the external contract.
pub fn qr_payload(
    rma_number: &str,
    order_number: &str,
    customer_id: &str,
    requested_date: DateTime<Utc>,
) -> String {
    format!(
        "RMA:{rma_number}|Order:{order_number}|Customer:{customer_id}|Method:STORE|Date:{}",
        requested_date.to_rfc3339()
    )
}

fn customer_address(customer: &CustomerView) -> String {
    // Placeholder street; a real integration would pull the shipping
    // address from the customer profile.
    format!(
        "{} {}\n123 Main Street\nCustomer City, ST 12345",
        customer.first_name, customer.last_name
    )
}

/// Produce the fulfillment artifact for `method`.
///
/// Dispatch is exhaustive over the closed method enum. Producer failures
/// propagate as `FulfillmentArtifact` errors and abort the whole creation;
/// nothing is persisted for a request whose artifact could not be built.
pub fn route(
    qr: &dyn QrImageProducer,
    labels: &dyn LabelRenderer,
    method: ReturnMethod,
    rma_number: &str,
    order_number: &str,
    customer: &CustomerView,
    requested_date: DateTime<Utc>,
) -> Result<FulfillmentArtifact, DomainError> {
    match method {
        ReturnMethod::StoreDropOff => {
            let payload = qr_payload(
                rma_number,
                order_number,
                &customer.customer_id,
                requested_date,
            );
            let image = qr.render(&payload)?;
            Ok(FulfillmentArtifact::StoreDropOff {
                qr_code_data: payload,
                qr_code_image: image,
            })
        }
        ReturnMethod::ShipToWarehouse => {
            let tracking_number = identifier::new_tracking_number();
            let label = LabelRequest {
                tracking_number: tracking_number.clone(),
                rma_number: rma_number.to_string(),
                return_address: WAREHOUSE_RETURN_ADDRESS.to_string(),
                customer_address: customer_address(customer),
                weight: DEFAULT_WEIGHT.to_string(),
                service_type: DEFAULT_SERVICE_TYPE.to_string(),
            };
            let shipping_label_url = labels.render(&label)?;
            Ok(FulfillmentArtifact::ShipToWarehouse {
                tracking_number,
                shipping_label_url,
            })
        }
    }
}
