//! Deny-list scrubber: removes exactly the targeted tags and attributes.

use ego_tree::{NodeId, Tree};
use scraper::node::Node;

use super::{AllowList, scrub_step};
use crate::safelist;
use crate::walk::{Direction, Scrub, ScrubResult};

/// Scrubber that targets tags and attributes for removal and spares the
/// rest -- the mirror image of [`PermitScrubber`](super::PermitScrubber).
///
/// An element whose name is in the tag set is stripped (or pruned); every
/// other element is kept. An attribute whose name is in the attribute set is
/// removed from kept elements; every other attribute stays, except that
/// URI-valued attributes still lose disallowed schemes and `style` values
/// are still scrubbed. When a set is not configured, that axis falls back to
/// the baseline judgment un-inverted.
///
/// # Example
///
/// ```
/// use html_scrubber::{SafeListSanitizer, TargetScrubber};
///
/// let sanitizer = SafeListSanitizer::new();
/// let mut scrubber = TargetScrubber::new().tags(["a"]).attributes(["href"]);
/// let out = sanitizer.sanitize_with_scrubber(
///     r#"<a href="x.com">text</a><b href="y">bold</b>"#,
///     &mut scrubber,
/// );
/// assert_eq!(out, "text<b>bold</b>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TargetScrubber {
    tags: AllowList,
    attributes: AllowList,
    prune: bool,
}

impl TargetScrubber {
    /// Create a scrubber with nothing targeted (baseline judgment on both
    /// axes) and strip (unwrap) semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target exactly these tags for removal.
    ///
    /// # Panics
    ///
    /// Panics on names unusable as HTML tag names; use
    /// [`AllowList::try_explicit`] and [`with_tags`](Self::with_tags) for a
    /// fallible path.
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_tags(AllowList::explicit(tags))
    }

    /// Target exactly these attributes for removal.
    ///
    /// # Panics
    ///
    /// Panics on names unusable as HTML attribute names; use
    /// [`AllowList::try_explicit`] and
    /// [`with_attributes`](Self::with_attributes) for a fallible path.
    pub fn attributes<I, S>(self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_attributes(AllowList::explicit(attributes))
    }

    /// Set the targeted tag list directly.
    pub fn with_tags(mut self, tags: AllowList) -> Self {
        self.tags = tags;
        self
    }

    /// Set the targeted attribute list directly.
    pub fn with_attributes(mut self, attributes: AllowList) -> Self {
        self.attributes = attributes;
        self
    }

    /// Remove targeted elements subtree and all instead of unwrapping.
    pub fn prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    fn keep_node(&self, name: &str) -> bool {
        match &self.tags {
            AllowList::Baseline => safelist::allowed_element(name),
            AllowList::Explicit(set) => !set.contains(name),
        }
    }
}

impl Scrub for TargetScrubber {
    fn direction(&self) -> Direction {
        if self.prune {
            Direction::TopDown
        } else {
            Direction::BottomUp
        }
    }

    fn scrub(&mut self, tree: &mut Tree<Node>, id: NodeId) -> ScrubResult {
        scrub_step(
            tree,
            id,
            self.prune,
            |name| self.keep_node(name),
            &self.attributes,
            true,
        )
    }
}
