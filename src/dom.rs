//! Helpers over the parsed HTML tree: node naming, structural mutation, and
//! fragment serialization.
//!
//! The tree itself belongs to `scraper`/`ego-tree`; nothing here allocates
//! nodes. Scrubbers only request structural changes ([`remove_subtree`],
//! [`unwrap_node`]) and read node identity through [`node_name`].

use ego_tree::{NodeId, Tree};
use scraper::{ElementRef, Html, node::Node};

/// Name under which a node is classified against tag allow lists.
///
/// Elements classify under their tag name and comments under the pseudo-name
/// `"comment"`, so a policy can opt comments in or out like any tag. Text and
/// every other node kind have no name and can never be kept by name.
pub fn node_name(node: &Node) -> Option<&str> {
    match node {
        Node::Element(element) => Some(element.name()),
        Node::Comment(_) => Some("comment"),
        _ => None,
    }
}

/// Detach a node and its entire subtree from the tree.
///
/// Detached nodes stay in the arena, so previously captured [`NodeId`]s
/// remain valid; the subtree simply no longer serializes.
pub fn remove_subtree(tree: &mut Tree<Node>, id: NodeId) {
    if let Some(mut node) = tree.get_mut(id) {
        node.detach();
    }
}

/// Unwrap a node: splice its children into the parent at the node's current
/// position (preserving order), then detach the now-childless node.
///
/// No-op for nodes without a parent.
pub fn unwrap_node(tree: &mut Tree<Node>, id: NodeId) {
    if !tree.get(id).is_some_and(|node| node.parent().is_some()) {
        return;
    }
    while let Some(child_id) = tree
        .get(id)
        .and_then(|node| node.first_child())
        .map(|child| child.id())
    {
        if let Some(mut node) = tree.get_mut(id) {
            node.insert_id_before(child_id);
        }
    }
    remove_subtree(tree, id);
}

/// The fragment's content root: the synthetic element the fragment parser
/// wraps all top-level nodes in.
pub fn fragment_root(doc: &Html) -> Option<NodeId> {
    doc.tree
        .root()
        .children()
        .find(|child| child.value().is_element())
        .map(|child| child.id())
}

/// Serialize the fragment's contents back to markup (UTF-8, default entity
/// escaping), without the synthetic wrapper element.
pub fn to_markup(doc: &Html) -> String {
    fragment_root(doc)
        .and_then(|id| doc.tree.get(id))
        .and_then(ElementRef::wrap)
        .map(|root| root.inner_html())
        .unwrap_or_default()
}

/// Concatenate the fragment's text content literally, in document order.
///
/// Unlike [`to_markup`] this does not re-encode entities: `&amp;` parsed
/// into a text node comes back out as `&`.
pub fn to_text(doc: &Html) -> String {
    fragment_root(doc)
        .and_then(|id| doc.tree.get(id))
        .and_then(ElementRef::wrap)
        .map(|root| root.text().collect())
        .unwrap_or_default()
}
