//! Test fixtures and utilities

use uuid::Uuid;

/// Generate a unique, valid customer id for testing
pub fn unique_customer_id() -> String {
    format!("test_{}", &Uuid::new_v4().simple().to_string()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_are_valid_format() {
        let id = unique_customer_id();
        assert_eq!(id.len(), 17);
        assert!(id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-'));
        assert_ne!(id, unique_customer_id());
    }
}
