//! Opaque identifier helpers

use uuid::Uuid;

/// Generate a new opaque identifier (hyphenless UUIDv4).
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Check that an identifier is well formed.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == 32 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid() {
        let id = new_id();
        assert_eq!(id.len(), 32);
        assert!(is_valid_id(&id));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("not-an-id"));
        assert!(!is_valid_id("g0000000000000000000000000000000"));
        // hyphenated form is not accepted
        assert!(!is_valid_id("550e8400-e29b-41d4-a716-446655440000"));
    }
}
