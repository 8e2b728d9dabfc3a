use crate::errors::WlOutputError;

#[derive(Debug, thiserror::Error)]
pub enum ParseScaleError {
    #[error("Scale value is empty")]
    Empty,

    #[error("Invalid scale value: '{value}'")]
    Invalid { value: String },

    #[error("Scale value '{value}' has more than two fractional digits")]
    TooPrecise { value: String },

    #[error("Scale must be greater than zero")]
    NotPositive,
}

impl WlOutputError for ParseScaleError {
    fn error_code(&self) -> &'static str {
        match self {
            ParseScaleError::Empty => "SCALE_EMPTY",
            ParseScaleError::Invalid { .. } => "SCALE_INVALID",
            ParseScaleError::TooPrecise { .. } => "SCALE_TOO_PRECISE",
            ParseScaleError::NotPositive => "SCALE_NOT_POSITIVE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale_error_display() {
        let error = ParseScaleError::Invalid {
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid scale value: 'abc'");
        assert_eq!(error.error_code(), "SCALE_INVALID");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseScaleError>();
    }
}
