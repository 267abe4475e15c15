//! Text-flattening scrubber.

use ego_tree::{NodeId, Tree};
use scraper::node::Node;

use super::scrub_node;
use crate::walk::{Direction, Scrub, ScrubResult};

/// Scrubber that reduces a tree to its text nodes.
///
/// Text nodes pass through untouched; every other node is unwrapped so its
/// descendants' text survives in place. Script and style elements are the
/// exception: their raw payload is removed with them. The policy
/// configuration of the other scrubbers plays no part here.
///
/// Always walks bottom-up.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextOnlyScrubber;

impl TextOnlyScrubber {
    /// Create the scrubber. Stateless; equivalent to the unit value.
    pub fn new() -> Self {
        Self
    }
}

impl Scrub for TextOnlyScrubber {
    fn direction(&self) -> Direction {
        Direction::BottomUp
    }

    fn scrub(&mut self, tree: &mut Tree<Node>, id: NodeId) -> ScrubResult {
        if tree.get(id).is_some_and(|node| node.value().is_text()) {
            return ScrubResult::Continue;
        }
        scrub_node(tree, id, false);
        ScrubResult::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::walk::scrub_fragment;
    use scraper::Html;

    fn flatten(html: &str) -> String {
        let mut doc = Html::parse_fragment(html);
        scrub_fragment(&mut doc, &mut TextOnlyScrubber::new());
        dom::to_text(&doc)
    }

    #[test]
    fn flattens_nested_markup_to_text() {
        assert_eq!(
            flatten("<div><b>Bold</b> and <i>italic</i></div>"),
            "Bold and italic"
        );
    }

    #[test]
    fn drops_comments() {
        assert_eq!(flatten("a<!--hidden-->b"), "ab");
    }

    #[test]
    fn script_and_style_payloads_are_not_text() {
        assert_eq!(flatten("<script>alert(1)</script>visible"), "visible");
        assert_eq!(flatten("<style>p{}</style>visible"), "visible");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(flatten("already plain"), "already plain");
    }
}
