//! The tree-walk contract: the [`Scrub`] visitor trait and the depth-first
//! walk that drives it.
//!
//! The walk is owned by this crate rather than delegated to the tree
//! library, so the traversal rules are ordinary functions with tests of
//! their own.
//!
//! Direction is load-bearing, not cosmetic. Unwrapping requires
//! [`Direction::BottomUp`]: a disallowed child must be scrubbed before its
//! parent splices it upward, or it would survive hidden inside the spliced
//! subtree. Pruning requires [`Direction::TopDown`]: the subtree is
//! discarded whole, and visiting children first would be wasted work.

use ego_tree::{NodeId, Tree};
use scraper::{Html, node::Node};

use crate::dom;

/// Traversal order for a scrubbing pass, fixed per scrubber instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Parents before children.
    TopDown,
    /// Children before parents.
    BottomUp,
}

/// Outcome of scrubbing a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrubResult {
    /// Descend into this node's children next (top-down walks only; in a
    /// bottom-up walk the children have already been visited).
    Continue,
    /// This subtree has been fully handled, do not descend further.
    Stop,
}

/// A visitor applying removal/retention/attribute-filtering decisions to one
/// node at a time.
///
/// Caller-supplied scrubbers implement this trait and can be passed to
/// [`SafeListSanitizer::sanitize_with_scrubber`](crate::SafeListSanitizer::sanitize_with_scrubber)
/// in place of the built-in ones. Structural changes go through the
/// [`crate::dom`] helpers.
pub trait Scrub {
    /// The traversal order this scrubber requires.
    fn direction(&self) -> Direction {
        Direction::BottomUp
    }

    /// Visit one node. The node is identified by `id`; it may already have
    /// been detached by an earlier visit, in which case `tree.get(id)` still
    /// resolves but the node has no parent.
    fn scrub(&mut self, tree: &mut Tree<Node>, id: NodeId) -> ScrubResult;
}

/// Walk the subtree rooted at `id` (inclusive) in the scrubber's direction,
/// invoking `scrubber.scrub` once per visited node.
pub fn walk_tree(tree: &mut Tree<Node>, id: NodeId, scrubber: &mut dyn Scrub) {
    match scrubber.direction() {
        Direction::TopDown => walk_top_down(tree, id, scrubber),
        Direction::BottomUp => walk_bottom_up(tree, id, scrubber),
    }
}

/// Run a scrubber over every top-level node of a parsed fragment.
pub fn scrub_fragment(doc: &mut Html, scrubber: &mut dyn Scrub) {
    let Some(root) = dom::fragment_root(doc) else {
        return;
    };
    for id in child_ids(&doc.tree, root) {
        walk_tree(&mut doc.tree, id, scrubber);
    }
}

fn walk_top_down(tree: &mut Tree<Node>, id: NodeId, scrubber: &mut dyn Scrub) {
    if scrubber.scrub(tree, id) == ScrubResult::Stop {
        return;
    }
    // Child list is re-read after the visit: the scrub may have restructured
    // this node.
    for child in child_ids(tree, id) {
        walk_top_down(tree, child, scrubber);
    }
}

fn walk_bottom_up(tree: &mut Tree<Node>, id: NodeId, scrubber: &mut dyn Scrub) {
    // The child list is snapshotted before descending. A child that gets
    // unwrapped splices already-visited grandchildren into this node; they
    // must not be visited twice, and the remaining siblings keep their ids.
    for child in child_ids(tree, id) {
        walk_bottom_up(tree, child, scrubber);
    }
    scrubber.scrub(tree, id);
}

fn child_ids(tree: &Tree<Node>, id: NodeId) -> Vec<NodeId> {
    tree.get(id)
        .map(|node| node.children().map(|child| child.id()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        direction: Direction,
        visited: Vec<String>,
    }

    impl Recorder {
        fn new(direction: Direction) -> Self {
            Self {
                direction,
                visited: Vec::new(),
            }
        }
    }

    impl Scrub for Recorder {
        fn direction(&self) -> Direction {
            self.direction
        }

        fn scrub(&mut self, tree: &mut Tree<Node>, id: NodeId) -> ScrubResult {
            if let Some(node) = tree.get(id) {
                let label = match node.value() {
                    Node::Text(_) => "#text".to_string(),
                    other => dom::node_name(other).unwrap_or("#other").to_string(),
                };
                self.visited.push(label);
            }
            ScrubResult::Continue
        }
    }

    struct StopAt(&'static str);

    impl Scrub for StopAt {
        fn direction(&self) -> Direction {
            Direction::TopDown
        }

        fn scrub(&mut self, tree: &mut Tree<Node>, id: NodeId) -> ScrubResult {
            let hit = tree
                .get(id)
                .is_some_and(|node| dom::node_name(node.value()) == Some(self.0));
            if hit {
                dom::remove_subtree(tree, id);
                ScrubResult::Stop
            } else {
                ScrubResult::Continue
            }
        }
    }

    #[test]
    fn top_down_visits_parents_first() {
        let mut doc = Html::parse_fragment("<div><p>a</p><span>b</span></div>");
        let mut recorder = Recorder::new(Direction::TopDown);
        scrub_fragment(&mut doc, &mut recorder);
        assert_eq!(recorder.visited, ["div", "p", "#text", "span", "#text"]);
    }

    #[test]
    fn bottom_up_visits_children_first() {
        let mut doc = Html::parse_fragment("<div><p>a</p><span>b</span></div>");
        let mut recorder = Recorder::new(Direction::BottomUp);
        scrub_fragment(&mut doc, &mut recorder);
        assert_eq!(recorder.visited, ["#text", "p", "#text", "span", "div"]);
    }

    #[test]
    fn stop_skips_the_subtree() {
        let mut doc = Html::parse_fragment("<p>x</p><div><b>hidden</b></div><p>y</p>");
        let mut scrubber = StopAt("div");
        scrub_fragment(&mut doc, &mut scrubber);
        assert_eq!(dom::to_markup(&doc), "<p>x</p><p>y</p>");
    }

    #[test]
    fn bottom_up_survives_unwrapping_during_the_walk() {
        struct UnwrapSpans;

        impl Scrub for UnwrapSpans {
            fn scrub(&mut self, tree: &mut Tree<Node>, id: NodeId) -> ScrubResult {
                if tree
                    .get(id)
                    .is_some_and(|node| dom::node_name(node.value()) == Some("span"))
                {
                    dom::unwrap_node(tree, id);
                    return ScrubResult::Stop;
                }
                ScrubResult::Continue
            }
        }

        let mut doc = Html::parse_fragment("<div><span><span>deep</span> text</span>tail</div>");
        scrub_fragment(&mut doc, &mut UnwrapSpans);
        assert_eq!(dom::to_markup(&doc), "<div>deep texttail</div>");
    }

    #[test]
    fn walk_tolerates_empty_fragments() {
        let mut doc = Html::parse_fragment("");
        let mut recorder = Recorder::new(Direction::TopDown);
        scrub_fragment(&mut doc, &mut recorder);
        assert!(recorder.visited.is_empty());
    }
}
