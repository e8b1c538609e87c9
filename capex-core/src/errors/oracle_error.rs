/// Factor-oracle contract violations.
///
/// The oracle's reasoning is opaque; its payload shape is not. Any deviation
/// from the documented contract aborts the run before scaling.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Payload failed structural deserialization (missing required field,
    /// non-numeric factor, wrong shape). The reason names the field.
    #[error("oracle payload violates contract: {reason}")]
    MalformedPayload { reason: String },

    /// Payload parsed but a field's value is outside the contract
    /// (non-positive factor, non-finite number, negative percentage).
    #[error("oracle payload field {field} has invalid value {value}: {reason}")]
    InvalidValue {
        field: String,
        value: f64,
        reason: String,
    },

    #[error("oracle call failed: {reason}")]
    CallFailed { reason: String },
}
