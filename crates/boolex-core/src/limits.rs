//! Input size limits for untrusted expressions.

/// Resource limits applied before and during conversion.
///
/// Conversion and evaluation are linear in the input, so these only bound
/// memory held by the two stacks when expressions come from untrusted
/// sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum expression length in bytes.
    pub max_len: usize,
    /// Maximum parenthesis nesting depth.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_len: 4096,
            max_depth: 256,
        }
    }
}

impl Limits {
    /// Create limits with custom values.
    pub fn new(max_len: usize, max_depth: usize) -> Self {
        Self { max_len, max_depth }
    }

    /// Permissive limits for testing and benchmarks.
    pub fn permissive() -> Self {
        Self {
            max_len: 1 << 20,
            max_depth: 1 << 16,
        }
    }

    /// Strict limits for interactive input.
    pub fn strict() -> Self {
        Self {
            max_len: 512,
            max_depth: 32,
        }
    }
}
