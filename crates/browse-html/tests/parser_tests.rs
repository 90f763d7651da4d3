//! Integration tests for the tree builder.

use std::io::{self, Read};

use browse_dom::{DomTree, NodeId, NodeType, ROOT_TAG_NAME};
use browse_html::{HtmlParser, ParseError, VoidElement, parse_document, parse_str};
use strum::IntoEnumIterator;

/// Helper to parse markup and return the tree.
fn parse(html: &str) -> DomTree {
    parse_str(html).expect("in-memory input cannot fail")
}

/// Helper to get the tag name of an element node.
fn tag(tree: &DomTree, id: NodeId) -> &str {
    tree.as_element(id)
        .map(|e| e.tag_name.as_str())
        .expect("expected an element")
}

/// Helper to get the only child of a node.
fn only_child(tree: &DomTree, id: NodeId) -> NodeId {
    let children = tree.children(id);
    assert_eq!(children.len(), 1, "expected exactly one child of {id:?}");
    children[0]
}

#[test]
fn test_root_is_synthetic_element() {
    let tree = parse("");
    assert_eq!(tree.len(), 1);
    assert_eq!(tag(&tree, NodeId::ROOT), ROOT_TAG_NAME);
    assert_eq!(tree.pretty().to_string(), "");
}

#[test]
fn test_end_to_end_nesting() {
    let tree = parse(r#"<div id="x"><p>Hello &amp; welcome</p></div>"#);

    let div = only_child(&tree, NodeId::ROOT);
    assert_eq!(tag(&tree, div), "div");
    assert_eq!(tree.as_element(div).and_then(|e| e.id()), Some("x"));

    let p = only_child(&tree, div);
    assert_eq!(tag(&tree, p), "p");

    let text = only_child(&tree, p);
    assert_eq!(tree.as_text(text), Some("Hello & welcome"));
    assert_eq!(tree.parent(text), Some(p));

    assert_eq!(
        tree.pretty().to_string(),
        "<div id=\"x\">\n  <p>\n    \"Hello & welcome\"\n  </p>\n</div>\n"
    );
}

#[test]
fn test_void_elements_never_take_children() {
    for element in VoidElement::iter() {
        for name in [element.to_string(), element.to_string().to_ascii_uppercase()] {
            let tree = parse(&format!("<div><{name}>after</div>"));
            let div = only_child(&tree, NodeId::ROOT);
            let children = tree.children(div);
            assert_eq!(children.len(), 2, "{name}");

            let void = tree.as_element(children[0]).expect("element");
            assert_eq!(void.tag_name, name);
            assert!(void.self_closing, "{name}");
            assert!(tree.children(children[0]).is_empty(), "{name}");
            assert_eq!(tree.as_text(children[1]), Some("after"));
        }
    }
}

#[test]
fn test_explicit_self_closing_is_not_pushed() {
    let tree = parse("<div/><p>x</p>");
    let children = tree.children(NodeId::ROOT);
    assert_eq!(children.len(), 2);
    assert!(tree.is_self_closing(children[0]));
    assert_eq!(tag(&tree, children[1]), "p");
    assert_eq!(tree.pretty().to_string(), "<div/>\n<p>\n  \"x\"\n</p>\n");
}

#[test]
fn test_mismatched_end_tag_is_discarded() {
    let (tree, issues) = HtmlParser::new(&b"<div><span></div>"[..])
        .parse_with_issues()
        .unwrap();

    let div = only_child(&tree, NodeId::ROOT);
    assert_eq!(tag(&tree, div), "div");
    let span = only_child(&tree, div);
    assert_eq!(tag(&tree, span), "span");
    assert!(tree.children(span).is_empty());

    assert_eq!(issues.len(), 2);
    assert!(issues[0].message.contains("</div>"));
    assert!(issues[1].message.contains("div, span"));
}

#[test]
fn test_end_tag_does_not_search_ancestors() {
    // The </div> is dropped, so <b> still nests inside <span>.
    let tree = parse("<div><span></div><b>x</b>");
    assert_eq!(
        tree.pretty().to_string(),
        "<div>\n  <span>\n    <b>\n      \"x\"\n    </b>\n  </span>\n</div>\n"
    );
}

#[test]
fn test_list_items_without_end_tags_nest() {
    // No implicit closing: the second <li> lands inside the first, and </ul>
    // does not match the open <li> so it is discarded too.
    let tree = parse("<ul><li>a<li>b</ul>");
    assert_eq!(
        tree.pretty().to_string(),
        concat!(
            "<ul>\n",
            "  <li>\n",
            "    \"a\"\n",
            "    <li>\n",
            "      \"b\"\n",
            "    </li>\n",
            "  </li>\n",
            "</ul>\n",
        )
    );

    let ul = only_child(&tree, NodeId::ROOT);
    let first = only_child(&tree, ul);
    let second = tree.children(first)[1];
    assert_eq!(tag(&tree, second), "li");
    assert_eq!(tree.parent(second), Some(first));
}

#[test]
fn test_end_tag_match_is_case_sensitive() {
    let tree = parse("<DIV></div><p></p>");
    let div = only_child(&tree, NodeId::ROOT);
    assert_eq!(tag(&tree, div), "DIV");
    assert_eq!(tag(&tree, only_child(&tree, div)), "p");
}

#[test]
fn test_stray_end_tag_at_root_is_ignored() {
    let (tree, issues) = HtmlParser::new(&b"</p>text"[..]).parse_with_issues().unwrap();
    assert_eq!(tree.as_text(only_child(&tree, NodeId::ROOT)), Some("text"));
    assert_eq!(issues.len(), 1);
}

#[test]
fn test_siblings_after_close() {
    let tree = parse("<a><b></b></a><c>");
    let children = tree.children(NodeId::ROOT);
    assert_eq!(children.len(), 2);
    assert_eq!(tag(&tree, children[0]), "a");
    assert_eq!(tag(&tree, children[1]), "c");
}

#[test]
fn test_text_runs_are_trimmed_individually() {
    let tree = parse("<p>a <b>bold</b> c</p>");
    let p = only_child(&tree, NodeId::ROOT);
    let texts: Vec<&str> = tree
        .pre_order(p)
        .filter_map(|id| tree.as_text(id))
        .collect();
    assert_eq!(texts, vec!["a", "bold", "c"]);
    assert_eq!(tree.text_content(p), "aboldc");
}

#[test]
fn test_comments_leave_no_nodes() {
    let tree = parse("<div><!-- hidden <p> --></div>");
    let div = only_child(&tree, NodeId::ROOT);
    assert!(tree.children(div).is_empty());
}

#[test]
fn test_attributes_reach_the_element() {
    let tree = parse(r#"<img src="a.png" alt="A &amp; B" hidden>"#);
    let img = tree.as_element(only_child(&tree, NodeId::ROOT)).unwrap();
    assert_eq!(img.get_attribute("src"), Some("a.png"));
    assert_eq!(img.get_attribute("alt"), Some("A & B"));
    assert_eq!(img.get_attribute("hidden"), Some(""));
    assert!(img.self_closing);
    assert_eq!(
        tree.pretty().to_string(),
        "<img alt=\"A & B\" hidden src=\"a.png\"/>\n"
    );
}

#[test]
fn test_clean_input_has_no_issues() {
    let (_, issues) = HtmlParser::new(&b"<p class=\"x\">ok<br></p>"[..])
        .parse_with_issues()
        .unwrap();
    assert!(issues.is_empty(), "{issues:?}");
}

#[test]
fn test_issues_are_ordered_by_position() {
    let (_, issues) = HtmlParser::new(&b"<a x=1 x=2></b><!-- open"[..])
        .parse_with_issues()
        .unwrap();
    let positions: Vec<usize> = issues.iter().map(|i| i.position).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert_eq!(issues.len(), 4);
}

#[test]
fn test_tree_invariants_on_messy_input() {
    let tree = parse(
        "<html><body><p>one<br><p>two</div><img/><ul><li>x</li><li>y</ul>\
         <span a='1' a='2'>&bogus; &#x41;</span></body>",
    );
    for id in tree.pre_order(NodeId::ROOT) {
        let node = tree.get(id).unwrap();
        if matches!(&node.node_type, NodeType::Element(data) if data.self_closing) {
            assert!(node.children.is_empty());
        }
        for &child in &node.children {
            assert_eq!(tree.parent(child), Some(id));
        }
    }
    // Every allocated node is reachable exactly once from the root.
    assert_eq!(tree.pre_order(NodeId::ROOT).count(), tree.len());

    let span = tree.get_elements_by_tag_name(NodeId::ROOT, "span")[0];
    assert_eq!(tree.text_content(span), "&bogus; A");
    assert_eq!(tree.as_element(span).unwrap().get_attribute("a"), Some("2"));
}

#[test]
fn test_parse_document_from_reader() {
    let tree = parse_document(io::Cursor::new("<h1>Title</h1>")).unwrap();
    let h1 = only_child(&tree, NodeId::ROOT);
    assert_eq!(tree.text_content(h1), "Title");
}

/// A reader that always fails.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))
    }
}

#[test]
fn test_io_error_aborts_parse() {
    match parse_document(BrokenReader) {
        Err(ParseError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        Ok(tree) => panic!("expected an error, got {} nodes", tree.len()),
    }
}
