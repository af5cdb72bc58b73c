//! Compiled grammars.
//!
//! A [`Grammar`] is a tree prepared for matching: alternatives are sorted by
//! specificity, wildcard occurrences are numbered, and the stopper index is
//! prebuilt. Because trees are immutable and carry no capture state, all of
//! this happens once per grammar rather than once per match attempt.

use parley_foundation::Result;

use crate::parser;
use crate::stopper::StopperIndex;
use crate::tree::{GrammarNode, WildcardId};

/// A compiled, matcher-ready grammar.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    /// The prepared tree (sorted, wildcard ids assigned).
    root: GrammarNode,
    /// Stop signals per wildcard occurrence.
    stoppers: StopperIndex,
}

impl Grammar {
    /// Parses and compiles a pattern string.
    ///
    /// # Errors
    /// Returns a pattern error if the pattern is empty or malformed.
    pub fn parse(pattern: &str) -> Result<Self> {
        Ok(Self::compile(parser::parse(pattern)?))
    }

    /// Compiles a hand-built grammar tree.
    ///
    /// Sorts every alternation and optional group by descending leaf count
    /// so longer alternatives are tried first, renumbers all bounded
    /// wildcards, and builds the stopper index.
    #[must_use]
    pub fn compile(mut root: GrammarNode) -> Self {
        sort_alternatives(&mut root);
        let mut next_id: WildcardId = 0;
        assign_wildcard_ids(&mut root, &mut next_id);
        let stoppers = StopperIndex::build(&root);
        Self { root, stoppers }
    }

    /// The prepared grammar tree.
    #[must_use]
    pub const fn root(&self) -> &GrammarNode {
        &self.root
    }

    /// Returns the stop signal for a wildcard occurrence, if it has one.
    #[must_use]
    pub fn stopper(&self, id: WildcardId) -> Option<&GrammarNode> {
        self.stoppers.get(id)
    }

    /// Counts the terminal nodes in this grammar.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

/// Sorts alternation and optional children by descending leaf count.
///
/// This is the disambiguation rule: given alternatives "very" and
/// "very very", input "very very very" must prefer the two-word alternative
/// so no trailing token is left dangling. The sort is stable, so equally
/// sized alternatives keep their declaration order.
fn sort_alternatives(node: &mut GrammarNode) {
    match node {
        GrammarNode::OneOf(children) | GrammarNode::Optional(children) => {
            for child in children.iter_mut() {
                sort_alternatives(child);
            }
            children.sort_by_key(|child| std::cmp::Reverse(child.leaf_count()));
        }
        GrammarNode::Sequence(children)
        | GrammarNode::AllOf(children)
        | GrammarNode::Entity { children, .. } => {
            for child in children.iter_mut() {
                sort_alternatives(child);
            }
        }
        GrammarNode::Word(_)
        | GrammarNode::Number { .. }
        | GrammarNode::ShortWildcard { .. }
        | GrammarNode::LongWildcard => {}
    }
}

/// Renumbers every bounded wildcard in depth-first order.
fn assign_wildcard_ids(node: &mut GrammarNode, next: &mut WildcardId) {
    match node {
        GrammarNode::ShortWildcard { id, .. } => {
            *id = *next;
            *next += 1;
        }
        GrammarNode::Sequence(children)
        | GrammarNode::Optional(children)
        | GrammarNode::OneOf(children)
        | GrammarNode::AllOf(children)
        | GrammarNode::Entity { children, .. } => {
            for child in children.iter_mut() {
                assign_wildcard_ids(child, next);
            }
        }
        GrammarNode::Word(_) | GrammarNode::Number { .. } | GrammarNode::LongWildcard => {}
    }
}
