//! Structural check of the upstream envelope.

use serde_json::Value;

/// Outcome of inspecting an upstream document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `result.records` is present and is an array.
    WellFormed { record_count: usize },
    /// Anything else.
    Malformed,
}

impl EnvelopeShape {
    /// Only `result.records` is inspected; records themselves are opaque.
    pub fn inspect(document: &Value) -> Self {
        match document.pointer("/result/records") {
            Some(Value::Array(records)) => Self::WellFormed {
                record_count: records.len(),
            },
            _ => Self::Malformed,
        }
    }
}
