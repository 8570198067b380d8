//! Registry error types.

/// Errors from registry operations. None of them leave a partial mutation behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("maximum number of boats reached ({capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("no boat named '{name}'")]
    NotFound { name: String },

    /// The payment is larger than the outstanding balance.
    #[error("payment of ${amount:.2} exceeds amount owed, ${owed:.2}")]
    Overpayment { amount: f64, owed: f64 },

    /// Zero or negative payment while the strict payment policy is active.
    #[error("payment must be a positive amount, got ${amount:.2}")]
    NonPositivePayment { amount: f64 },
}
