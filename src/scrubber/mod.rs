//! Scrubbers: visitors that decide, one node at a time, what survives
//! sanitization.
//!
//! Built-in scrubbers, all implementing [`Scrub`](crate::walk::Scrub):
//!
//! - [`PermitScrubber`] -- keep only allow-listed tags/attributes.
//! - [`TargetScrubber`] -- remove exactly the targeted tags/attributes,
//!   keep everything else.
//! - [`TextOnlyScrubber`] -- reduce the tree to its text nodes.

mod permit;
mod target;
mod text_only;

pub use permit::PermitScrubber;
pub use target::TargetScrubber;
pub use text_only::TextOnlyScrubber;

use std::collections::HashSet;

use ego_tree::{NodeId, Tree};
use scraper::node::Node;

use crate::dom;
use crate::error::{HtmlScrubberError, Result};
use crate::safelist;
use crate::walk::ScrubResult;

/// A tag or attribute allow list.
///
/// `Baseline` defers the judgment to the [`safelist`](crate::safelist)
/// predicates; `Explicit` is a plain membership test over the given names.
/// Names are matched case-sensitively and are not normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowList {
    /// No explicit names configured; use the baseline safety judgment.
    #[default]
    Baseline,
    /// Exactly these names.
    Explicit(HashSet<String>),
}

impl AllowList {
    /// Build an explicit allow list from the given names.
    ///
    /// # Panics
    ///
    /// Panics if any name is unusable as an HTML tag or attribute name. Use
    /// [`try_explicit`](Self::try_explicit) for a fallible alternative.
    pub fn explicit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::try_explicit(names).expect("invalid allow-list name")
    }

    /// Fallible constructor that rejects unusable names.
    pub fn try_explicit<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::Explicit(validate_names(names)?))
    }

    /// Returns `true` when no explicit names are configured.
    pub fn is_baseline(&self) -> bool {
        matches!(self, Self::Baseline)
    }
}

/// Collect names into a set, rejecting anything that could not be an HTML
/// tag or attribute name.
pub(crate) fn validate_names<I, S>(names: I) -> Result<HashSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out = HashSet::new();
    for name in names {
        let name = name.into();
        let usable = !name.is_empty()
            && !name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '&' | '/' | '"' | '\''));
        if !usable {
            return Err(HtmlScrubberError::InvalidName(name));
        }
        out.insert(name);
    }
    Ok(out)
}

/// Elements whose raw text payload is code, not content. They are always
/// pruned whole -- never unwrapped -- so their text cannot resurface as
/// visible output.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Remove a node that was not kept: prune the whole subtree, or unwrap it
/// so the (already scrubbed, in a bottom-up walk) children survive.
pub(crate) fn scrub_node(tree: &mut Tree<Node>, id: NodeId, prune: bool) {
    let raw_text = tree.get(id).is_some_and(|node| {
        node.value()
            .as_element()
            .is_some_and(|el| RAW_TEXT_ELEMENTS.contains(&el.name()))
    });
    if prune || raw_text {
        dom::remove_subtree(tree, id);
    } else {
        dom::unwrap_node(tree, id);
    }
}

/// The shared single-node scrub sequence. The order is a strict sequence:
///
/// 1. text nodes are skipped untouched;
/// 2. a node that is not kept is removed (pruned or unwrapped) and the walk
///    must not descend into it;
/// 3. a kept element has its attributes filtered.
pub(crate) fn scrub_step<F>(
    tree: &mut Tree<Node>,
    id: NodeId,
    prune: bool,
    keep_node: F,
    attributes: &AllowList,
    invert_attributes: bool,
) -> ScrubResult
where
    F: Fn(&str) -> bool,
{
    let Some(node) = tree.get(id) else {
        return ScrubResult::Continue;
    };
    if node.value().is_text() {
        return ScrubResult::Continue;
    }

    let keep = match dom::node_name(node.value()) {
        Some(name) => keep_node(name),
        None => false,
    };
    if !keep {
        scrub_node(tree, id, prune);
        return ScrubResult::Stop;
    }

    if let Some(mut node) = tree.get_mut(id) {
        if let Node::Element(element) = node.value() {
            match attributes {
                AllowList::Baseline => safelist::scrub_attributes(element),
                AllowList::Explicit(set) => safelist::scrub_attributes_with(element, |name| {
                    set.contains(name) != invert_attributes
                }),
            }
        }
    }
    ScrubResult::Continue
}
