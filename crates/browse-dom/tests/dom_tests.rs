//! Tests for tree construction, traversal helpers and snapshots.

use browse_dom::{DomTree, ElementData, NodeId, NodeSnapshot, NodeType, Selector};

/// Helper to create an element node under `parent` and return its `NodeId`.
fn append_element(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    let id = tree.alloc(NodeType::Element(ElementData::new(tag)));
    tree.append_child(parent, id);
    id
}

/// Helper to create a text node under `parent`.
fn append_text(tree: &mut DomTree, parent: NodeId, text: &str) -> NodeId {
    let id = tree.alloc(NodeType::Text(text.to_string()));
    tree.append_child(parent, id);
    id
}

#[test]
fn test_append_child_links_parent_and_order() {
    let mut tree = DomTree::new();
    let ul = append_element(&mut tree, NodeId::ROOT, "ul");
    let a = append_element(&mut tree, ul, "li");
    let b = append_element(&mut tree, ul, "li");

    assert_eq!(tree.children(ul), &[a, b]);
    assert_eq!(tree.first_child(ul), Some(a));
    assert_eq!(tree.last_child(ul), Some(b));
    assert_eq!(tree.parent(a), Some(ul));
    assert_eq!(tree.parent(ul), Some(NodeId::ROOT));
    assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![ul, NodeId::ROOT]);
}

#[test]
fn test_every_node_appears_once_in_its_parent() {
    let mut tree = DomTree::new();
    let div = append_element(&mut tree, NodeId::ROOT, "div");
    let _ = append_text(&mut tree, div, "x");
    let p = append_element(&mut tree, div, "p");
    let _ = append_text(&mut tree, p, "y");

    for id in tree.pre_order(NodeId::ROOT).skip(1) {
        let parent = tree.parent(id).expect("non-root nodes have a parent");
        let count = tree.children(parent).iter().filter(|&&c| c == id).count();
        assert_eq!(count, 1);
    }
}

#[test]
fn test_unknown_ids_are_harmless() {
    let mut tree = DomTree::new();
    tree.append_child(NodeId::ROOT, NodeId(99));
    assert!(tree.children(NodeId::ROOT).is_empty());
    assert!(tree.children(NodeId(99)).is_empty());
    assert_eq!(tree.parent(NodeId(99)), None);
    assert!(tree.snapshot(NodeId(99)).is_none());
}

#[test]
fn test_text_content_flattens_in_document_order() {
    let mut tree = DomTree::new();
    let p = append_element(&mut tree, NodeId::ROOT, "p");
    let _ = append_text(&mut tree, p, "Hello ");
    let b = append_element(&mut tree, p, "b");
    let _ = append_text(&mut tree, b, "big");
    let _ = append_text(&mut tree, p, " world");

    assert_eq!(tree.text_content(p), "Hello big world");
    assert_eq!(tree.text_content(b), "big");
}

#[test]
fn test_pretty_print_nesting() {
    let mut tree = DomTree::new();
    let div = append_element(&mut tree, NodeId::ROOT, "div");
    let br = tree.alloc(NodeType::Element(ElementData {
        self_closing: true,
        ..ElementData::new("br")
    }));
    tree.append_child(div, br);
    let _ = append_text(&mut tree, div, "say \"hi\"");

    let expected = "<div>\n  <br/>\n  \"say \\\"hi\\\"\"\n</div>\n";
    assert_eq!(tree.pretty().to_string(), expected);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut tree = DomTree::new();
    let mut data = ElementData::new("a");
    let _ = data.attrs.insert("href".to_string(), "/x".to_string());
    let a = tree.alloc(NodeType::Element(data));
    tree.append_child(NodeId::ROOT, a);
    let _ = append_text(&mut tree, a, "link");

    let snapshot = tree.snapshot(a).expect("node exists");
    assert!(matches!(&snapshot, NodeSnapshot::Element { tag, .. } if tag == "a"));

    let json = serde_json::to_value(&snapshot).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "type": "element",
            "tag": "a",
            "attributes": { "href": "/x" },
            "selfClosing": false,
            "children": [ { "type": "text", "text": "link" } ]
        })
    );
}

#[test]
fn test_selector_dispatch_on_hand_built_tree() {
    let mut tree = DomTree::new();
    let mut data = ElementData::new("Section");
    let _ = data.attrs.insert("class".to_string(), "a c b".to_string());
    let section = tree.alloc(NodeType::Element(data));
    tree.append_child(NodeId::ROOT, section);

    assert_eq!(tree.select(NodeId::ROOT, &Selector::Class("c".to_string())), vec![section]);
    assert_eq!(tree.query_selector_all(NodeId::ROOT, "section"), vec![section]);
    assert_eq!(tree.query_selector(NodeId::ROOT, ".ac"), None);
    assert!(tree.query_selector_all(NodeId::ROOT, "").is_empty());
}
