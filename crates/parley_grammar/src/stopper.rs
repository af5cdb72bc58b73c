//! Stop signals for bounded wildcards.
//!
//! A `+` wildcard consumes tokens until "whatever comes next in the grammar"
//! matches, and it must know what that is without a full lookahead search.
//! This module precomputes, for every bounded-wildcard occurrence, a
//! synthesized [`GrammarNode::OneOf`] wrapping the node(s) that follow it.
//! When the wildcard's sibling is an optional group, the group's children
//! and the node after the group are all stop candidates, since the optional
//! content may or may not be present.
//!
//! A wildcard with no following node gets no stopper at all - it can never
//! know when to stop, so it fails at match time. A bounded wildcard cannot
//! be a grammar's final element.

use std::collections::HashMap;

use crate::tree::{GrammarNode, WildcardId};

/// Precomputed stop signals, keyed by wildcard occurrence.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopperIndex {
    stoppers: HashMap<WildcardId, GrammarNode>,
}

impl StopperIndex {
    /// Builds the index for a tree whose wildcard ids are already assigned.
    #[must_use]
    pub fn build(root: &GrammarNode) -> Self {
        let mut stoppers = HashMap::new();
        collect(std::slice::from_ref(root), &[], &mut stoppers);
        Self { stoppers }
    }

    /// Returns the stop signal for the given wildcard occurrence.
    #[must_use]
    pub fn get(&self, id: WildcardId) -> Option<&GrammarNode> {
        self.stoppers.get(&id)
    }

    /// Returns the number of wildcard occurrences that have a stop signal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stoppers.len()
    }

    /// Returns true if no wildcard occurrence has a stop signal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stoppers.is_empty()
    }
}

/// Depth-first walk recording a stopper for every bounded wildcard.
///
/// `following` holds the nodes that come after the current child list in
/// enclosing scopes, so a wildcard at the end of a nested group still sees
/// the sibling that follows the group.
fn collect<'tree>(
    children: &'tree [GrammarNode],
    following: &[&'tree GrammarNode],
    out: &mut HashMap<WildcardId, GrammarNode>,
) {
    for (i, child) in children.iter().enumerate() {
        let rest: Vec<&GrammarNode> = children[i + 1..]
            .iter()
            .chain(following.iter().copied())
            .collect();

        match child {
            GrammarNode::ShortWildcard { id, .. } => {
                let candidates = stop_candidates(&rest);
                if !candidates.is_empty() {
                    out.insert(*id, GrammarNode::OneOf(candidates));
                }
            }
            GrammarNode::Sequence(inner)
            | GrammarNode::AllOf(inner)
            | GrammarNode::Optional(inner)
            | GrammarNode::Entity {
                children: inner, ..
            } => {
                collect(inner, &rest, out);
            }
            GrammarNode::OneOf(alternatives) => {
                for alternative in alternatives {
                    collect(std::slice::from_ref(alternative), &rest, out);
                }
            }
            GrammarNode::Word(_) | GrammarNode::Number { .. } | GrammarNode::LongWildcard => {}
        }
    }
}

/// Collects the stop candidates from the nodes following a wildcard.
///
/// Optional groups contribute their children and do not end the scan; the
/// first non-optional node contributes itself and ends it.
fn stop_candidates(followers: &[&GrammarNode]) -> Vec<GrammarNode> {
    let mut candidates = Vec::new();
    for node in followers {
        match node {
            GrammarNode::Optional(children) => {
                candidates.extend(children.iter().cloned());
            }
            other => {
                candidates.push((*other).clone());
                break;
            }
        }
    }
    candidates
}
