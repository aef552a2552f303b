//! The `{ "result": [...] }` wrapper shared by every operation's output.

use serde::{Deserialize, Serialize};

/// Output envelope carrying an ordered list of results.
///
/// # Examples
/// ```
/// use dashboard_core::ResultEnvelope;
///
/// let empty: ResultEnvelope<u32> = ResultEnvelope::new(Vec::new());
/// assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"result":[]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    /// Ordered results.
    pub result: Vec<T>,
}

impl<T> ResultEnvelope<T> {
    /// Wrap `result` in an envelope.
    #[must_use]
    pub const fn new(result: Vec<T>) -> Self {
        Self { result }
    }
}
