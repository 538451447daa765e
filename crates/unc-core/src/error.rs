use thiserror::Error;

pub type UncResult<T> = Result<T, UncError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UncError {
    #[error("Domain error in {op}: {reason}")]
    Domain {
        op: &'static str,
        reason: &'static str,
    },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative uncertainty: {value}")]
    NegativeUncertainty { value: f64 },

    #[error("Invalid number format: {spec:?}")]
    InvalidFormat { spec: String },
}
