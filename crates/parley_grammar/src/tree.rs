//! The grammar tree.
//!
//! A grammar is an immutable tree of [`GrammarNode`]s. Trees never carry
//! match state: captured entities and numbers live on the match attempt, so
//! one tree can serve any number of concurrent attempts.

/// Identifies one bounded-wildcard occurrence within a compiled grammar.
///
/// Assigned in depth-first order during compilation and used to look up the
/// wildcard's precomputed stop signal.
pub type WildcardId = u32;

/// Default maximum number of tokens a `+` wildcard may skip.
pub const DEFAULT_MAX_SKIP: usize = 5;

/// One node of a grammar tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrammarNode {
    /// Ordered conjunction: all children must match in order.
    Sequence(Vec<GrammarNode>),
    /// Zero-or-one group: children are attempted, failure is not propagated.
    Optional(Vec<GrammarNode>),
    /// Alternation: children tried in order, first success wins.
    OneOf(Vec<GrammarNode>),
    /// Conjunction used for morphological alternatives.
    AllOf(Vec<GrammarNode>),
    /// Literal word, compared fuzzily against one token.
    Word(String),
    /// Numeric slot. A named slot records its parsed value on match.
    Number {
        /// Capture name, or `None` for an anonymous slot.
        slot: Option<String>,
    },
    /// Named capturing group: records the consumed token span as text.
    Entity {
        /// Capture name.
        name: String,
        /// The wrapped sub-pattern, matched as a conjunction.
        children: Vec<GrammarNode>,
    },
    /// Bounded, non-greedy skip that stops at a precomputed stop signal.
    ShortWildcard {
        /// Maximum number of tokens this wildcard may consume.
        max_skip: usize,
        /// Occurrence id, assigned at compile time.
        id: WildcardId,
    },
    /// Unbounded trailing skip: absorbs every remaining token.
    LongWildcard,
}

impl GrammarNode {
    /// Creates a bounded wildcard with the default maximum skip length.
    ///
    /// The occurrence id is a placeholder until [`crate::Grammar::compile`]
    /// renumbers every wildcard in the tree.
    #[must_use]
    pub fn short_wildcard(max_skip: usize) -> Self {
        Self::ShortWildcard { max_skip, id: 0 }
    }

    /// Creates a literal word node.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    /// Counts the terminal nodes (words, numbers, wildcards) in this subtree.
    ///
    /// Used to rank alternatives by specificity: a higher leaf count means a
    /// longer, more specific alternative that must be tried first.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Word(_) | Self::Number { .. } | Self::ShortWildcard { .. } | Self::LongWildcard => 1,
            Self::Sequence(children)
            | Self::Optional(children)
            | Self::OneOf(children)
            | Self::AllOf(children)
            | Self::Entity { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Returns true if this node is a group with children.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(
            self,
            Self::Sequence(_)
                | Self::Optional(_)
                | Self::OneOf(_)
                | Self::AllOf(_)
                | Self::Entity { .. }
        )
    }
}
