use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::errors::DomainError;
use crate::domain::ports::{LabelRequest, LabelRenderer, QrImageProducer};

/// Stand-in QR producer: wraps the payload in a base64 data URI instead of
/// rasterizing a real PNG. A production deployment would swap in a renderer
/// behind the same trait.
pub struct Base64QrImageProducer;

impl QrImageProducer for Base64QrImageProducer {
    fn render(&self, payload: &str) -> Result<String, DomainError> {
        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(payload.as_bytes())
        ))
    }
}

/// Stand-in label renderer: returns a deterministic label URL under a
/// configured base instead of calling a carrier API.
pub struct LabelLinkRenderer {
    base_url: String,
}

impl LabelLinkRenderer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for LabelLinkRenderer {
    fn default() -> Self {
        Self::new("https://shipping.example.com/labels")
    }
}

impl LabelRenderer for LabelLinkRenderer {
    fn render(&self, request: &LabelRequest) -> Result<String, DomainError> {
        Ok(format!(
            "{}/{}.pdf",
            self.base_url.trim_end_matches('/'),
            request.tracking_number
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_image_is_a_data_uri_of_the_payload() {
        let image = Base64QrImageProducer
            .render("RMA:RMA-ABCD1234|Order:ORD-2024-001")
            .unwrap();
        assert!(image.starts_with("data:image/png;base64,"));

        let encoded = image.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"RMA:RMA-ABCD1234|Order:ORD-2024-001");
    }

    #[test]
    fn label_url_embeds_the_tracking_number() {
        let renderer = LabelLinkRenderer::default();
        let url = renderer
            .render(&LabelRequest {
                tracking_number: "1Z0123456789ABCDEF".to_string(),
                rma_number: "RMA-ABCD1234".to_string(),
                return_address: "warehouse".to_string(),
                customer_address: "customer".to_string(),
                weight: "5 lbs".to_string(),
                service_type: "Ground".to_string(),
            })
            .unwrap();
        assert_eq!(
            url,
            "https://shipping.example.com/labels/1Z0123456789ABCDEF.pdf"
        );
    }
}
