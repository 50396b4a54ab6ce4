use uuid::Uuid;

/// How many times the workflow redraws an identifier after a unique-index
/// collision before giving up with `IdentifierExhausted`.
pub const MAX_IDENTIFIER_ATTEMPTS: u32 = 3;

/// Draw a fresh RMA number: `RMA-` + 8 uppercase hex characters taken from a
/// v4 UUID. Collisions are negligible but possible; the unique index on
/// `return_requests.rma_number` is the authoritative guard.
pub fn new_rma_number() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("RMA-{}", &hex[..8])
}

/// Draw a fresh shipment tracking number: `1Z` + 16 uppercase hex characters.
pub fn new_tracking_number() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("1Z{}", &hex[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_upper_alnum(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    #[test]
    fn rma_number_format() {
        let rma = new_rma_number();
        assert_eq!(rma.len(), 12);
        assert!(rma.starts_with("RMA-"));
        assert!(is_upper_alnum(&rma[4..]));
    }

    #[test]
    fn tracking_number_format() {
        let tn = new_tracking_number();
        assert_eq!(tn.len(), 18);
        assert!(tn.starts_with("1Z"));
        assert!(is_upper_alnum(&tn[2..]));
    }

    #[test]
    fn successive_draws_differ() {
        // 32 random bits per draw; a duplicate here would indicate a broken
        // random source rather than bad luck.
        let a = new_rma_number();
        let b = new_rma_number();
        assert_ne!(a, b);
    }
}
