//! Table construction options.

/// Which lookahead keys a complete item reduces on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ReducePolicy {
    /// Reduce on the end marker and on every terminal of the grammar.
    ///
    /// Broader than textbook LR(0); it lets a reduce fire whatever terminal
    /// follows, and surfaces more conflicts on ambiguous grammars.
    #[default]
    EveryTerminal,
    /// Reduce only on the end marker.
    EndOfInputOnly,
}

/// Options for [`TableBuilder`](crate::TableBuilder).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TableConfig {
    pub reduce_policy: ReducePolicy,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reduce_policy(mut self, reduce_policy: ReducePolicy) -> Self {
        self.reduce_policy = reduce_policy;
        self
    }
}
