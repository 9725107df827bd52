//! Unit tests for store error types

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::store::error::StoreError;

    #[test]
    fn test_write_rejected_error() {
        let error = StoreError::WriteRejected("bookmarks".to_string());
        assert_eq!(error.to_string(), "Write rejected for key 'bookmarks'");
    }

    #[test]
    fn test_error_debug() {
        let error = StoreError::WriteRejected("bookmarks".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("WriteRejected"));
        assert!(debug.contains("bookmarks"));
    }

    #[test]
    fn test_write_rejected_has_no_source() {
        let error = StoreError::WriteRejected("bookmarks".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_decode_error_from_truncated_input() {
        let result: Result<(Vec<String>, usize), _> =
            bincode::serde::decode_from_slice(&[], bincode::config::standard());
        let error: StoreError = result.unwrap_err().into();
        assert!(error.to_string().starts_with("Error while decoding data"));
    }
}
