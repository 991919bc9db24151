use serde::{Deserialize, Serialize};

/// A single binary operation to evaluate.
///
/// `operator` admits any character; requests with an unrecognized operator
/// are still valid values and only fail when evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub a: i64,
    pub b: i64,
    pub operator: char,
}

impl OperationRequest {
    pub fn new(a: i64, operator: char, b: i64) -> Self {
        Self { a, b, operator }
    }
}
