//! Evaluator settings.

/// Knobs an embedder can set on an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest allowed nesting of block calls before the statement aborts.
    pub max_block_depth: usize,
    /// Largest Array `a to: b` may build. Longer intervals answer a
    /// ValueError; `a to: b do:` never builds one and is not limited.
    pub max_interval_size: usize,
    /// Store each top-level result in scope under `_`.
    pub store_last_result: bool,
}

/// Scope name holding the most recent top-level result.
pub const LAST_RESULT: &str = "_";

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_block_depth: 10_000,
            max_interval_size: 1_000_000,
            store_last_result: true,
        }
    }
}
