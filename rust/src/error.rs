//! Error handling and result types for BTreeIndex operations.
//!
//! Construction is the only fallible public entry point; everything else
//! either succeeds, is a defined no-op (absent-key search/delete), or is a
//! programmer error that fails fast via an assertion.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BTreeError {
    /// Invalid minimum degree specified at construction.
    InvalidDegree(String),
    /// Internal bookkeeping and tree structure disagree.
    CorruptedTree(String),
}

impl BTreeError {
    /// Create an InvalidDegree error with context
    pub fn invalid_degree(degree: usize, min_required: usize) -> Self {
        Self::InvalidDegree(format!(
            "Degree {} is invalid (minimum required: {})",
            degree, min_required
        ))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a degree error
    pub fn is_degree_error(&self) -> bool {
        matches!(self, Self::InvalidDegree(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::InvalidDegree(msg) => write!(f, "Invalid degree: {}", msg),
            BTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;

/// Internal result type for tree diagnostics
pub(crate) type TreeResult<T> = Result<T, BTreeError>;
