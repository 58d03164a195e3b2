use thiserror::Error;

/// Client errors raised while validating a write request.
///
/// Variants are ordered the way the checks run; the first failing check wins.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WriteRequestError {
    #[error("Request body is missing")]
    MissingBody,
    #[error("Invalid JSON format")]
    InvalidJson,
    #[error("Missing required fields (ItemId and Data)")]
    MissingFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            WriteRequestError::MissingBody.to_string(),
            "Request body is missing"
        );
        assert_eq!(
            WriteRequestError::InvalidJson.to_string(),
            "Invalid JSON format"
        );
        assert_eq!(
            WriteRequestError::MissingFields.to_string(),
            "Missing required fields (ItemId and Data)"
        );
    }
}
