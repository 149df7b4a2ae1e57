//! Search policy types.

/// Search configuration.
///
/// The engine has no expansion or depth budget: it runs until the goal is
/// reached or the frontier is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// How equal-f frontier entries are ordered.
    pub tie_break: TieBreakV1,
    /// Whether per-expansion events are kept in the search graph. Aggregate
    /// counters are always kept.
    pub record_expansions: bool,
}

impl SearchPolicyV1 {
    /// Stable identifier echoed into graph metadata.
    #[must_use]
    pub const fn tie_break_id(&self) -> &'static str {
        self.tie_break.as_str()
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            tie_break: TieBreakV1::InsertionOrder,
            record_expansions: true,
        }
    }
}

/// Ordering among frontier entries with equal `f_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreakV1 {
    /// Earlier-created node first (FIFO among equals).
    #[default]
    InsertionOrder,
    /// Shallower node first, then earlier-created.
    ShallowerFirst,
}

impl TieBreakV1 {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsertionOrder => "insertion_order",
            Self::ShallowerFirst => "shallower_first",
        }
    }

    /// Frontier tie rank for a node at `depth`.
    #[must_use]
    pub const fn rank(self, depth: u32) -> u32 {
        match self {
            Self::InsertionOrder => 0,
            Self::ShallowerFirst => depth,
        }
    }
}
