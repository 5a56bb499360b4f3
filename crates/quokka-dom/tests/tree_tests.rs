//! Integration tests for the arena DOM tree, with a focus on the
//! connectivity query the style system depends on.

use quokka_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert!(matches!(
        tree.get(tree.root()).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
}

#[test]
fn test_root_is_connected() {
    let tree = DomTree::new();
    assert!(tree.is_connected(NodeId::ROOT));
}

#[test]
fn test_allocated_node_is_disconnected() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    assert!(!tree.is_connected(div));
    assert_eq!(tree.parent(div), None);
}

#[test]
fn test_appended_node_is_connected() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    let body = alloc_element(&mut tree, "body");
    tree.append_child(html, body);

    assert!(tree.is_connected(html));
    assert!(tree.is_connected(body));
    assert_eq!(tree.parent(body), Some(html));
    assert_eq!(tree.children(html), &[body]);
}

#[test]
fn test_subtree_of_disconnected_node_is_disconnected() {
    let mut tree = DomTree::new();
    let detached = alloc_element(&mut tree, "div");
    let child = alloc_element(&mut tree, "span");
    tree.append_child(detached, child);

    // Both are linked to each other, but neither reaches the document.
    assert!(!tree.is_connected(detached));
    assert!(!tree.is_connected(child));
}

#[test]
fn test_remove_child_disconnects_subtree() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    let div = alloc_element(&mut tree, "div");
    tree.append_child(html, div);
    let span = alloc_element(&mut tree, "span");
    tree.append_child(div, span);

    assert!(tree.is_connected(span));

    tree.remove_child(html, div);

    assert_eq!(tree.parent(div), None);
    assert_eq!(tree.children(html).len(), 0);
    assert!(!tree.is_connected(div));
    // The descendant still hangs off the removed node, and is just as
    // disconnected.
    assert!(!tree.is_connected(span));
}

#[test]
fn test_reappending_reconnects() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    let div = alloc_element(&mut tree, "div");
    tree.append_child(html, div);

    tree.remove_child(html, div);
    assert!(!tree.is_connected(div));

    tree.append_child(html, div);
    assert!(tree.is_connected(div));
}

#[test]
fn test_document_element() {
    let mut tree = DomTree::new();
    assert_eq!(tree.document_element(), None);

    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    assert_eq!(tree.document_element(), Some(html));
}

#[test]
fn test_as_element() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    let text = tree.alloc(NodeType::Text("hello".to_string()));

    assert_eq!(tree.as_element(div).map(|e| e.tag_name.as_str()), Some("div"));
    assert!(tree.as_element(text).is_none());
    assert!(tree.as_element(NodeId::ROOT).is_none());
}

#[test]
fn test_ancestors_iteration() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    let body = alloc_element(&mut tree, "body");
    tree.append_child(html, body);
    let div = alloc_element(&mut tree, "div");
    tree.append_child(body, div);

    let ancestors: Vec<NodeId> = tree.ancestors(div).collect();
    assert_eq!(ancestors, vec![body, html, NodeId::ROOT]);
}
