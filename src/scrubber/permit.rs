//! Allow-list scrubber: only permitted tags and attributes survive.

use ego_tree::{NodeId, Tree};
use scraper::node::Node;

use super::{AllowList, scrub_step};
use crate::safelist;
use crate::walk::{Direction, Scrub, ScrubResult};

/// Scrubber that keeps only the tags and attributes its policy permits.
///
/// With no explicit [`tags`](Self::tags)/[`attributes`](Self::attributes)
/// configured, the baseline safety judgment of
/// [`safelist`](crate::safelist) applies. Disallowed elements are stripped
/// (unwrapped, keeping their descendants' content) by default; with
/// [`prune`](Self::prune) they are removed subtree and all. Script and
/// style elements are always removed whole, whatever the mode.
///
/// The traversal direction is derived, not configurable: stripping needs a
/// bottom-up walk, pruning a top-down one.
///
/// # Example
///
/// ```
/// use html_scrubber::{PermitScrubber, SafeListSanitizer};
///
/// let sanitizer = SafeListSanitizer::new();
/// let mut scrubber = PermitScrubber::new().tags(["b"]);
/// let out = sanitizer.sanitize_with_scrubber("<b>keep</b><i>drop</i>", &mut scrubber);
/// assert_eq!(out, "<b>keep</b>drop");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PermitScrubber {
    tags: AllowList,
    attributes: AllowList,
    prune: bool,
}

impl PermitScrubber {
    /// Create a scrubber deferring to the baseline allow lists, with strip
    /// (unwrap) semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Permit exactly these tags. Elements outside the set are removed.
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

    /// Permit exactly these attributes. Attributes outside the set are
    /// removed from kept elements.
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

    /// Set the tag allow list directly.
    pub fn with_tags(mut self, tags: AllowList) -> Self {
        self.tags = tags;
        self
    }

    /// Set the attribute allow list directly.
    pub fn with_attributes(mut self, attributes: AllowList) -> Self {
        self.attributes = attributes;
        self
    }

    /// Remove disallowed elements subtree and all instead of unwrapping.
    pub fn prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    fn keep_node(&self, name: &str) -> bool {
        match &self.tags {
            AllowList::Baseline => safelist::allowed_element(name),
            AllowList::Explicit(set) => set.contains(name),
        }
    }
}

impl Scrub for PermitScrubber {
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
            false,
        )
    }
}
