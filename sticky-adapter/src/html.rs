//! Selector matching and wrapper markup for [`Document`], backed by `scraper`.
//!
//! The arena is serialized to HTML with every node tagged by its id, parsed, queried, and the
//! ids of the matches are read back.
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write as _;

use scraper::{ElementRef, Html, Selector};
use sticky::Host;

use crate::document::{Document, NodeId};

/// Carries the arena id of each node through serialization.
const NODE_ID_ATTR: &str = "data-sticky-node-id";

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Nodes matching `selector`, in document order. An unparsable selector matches nothing.
pub(crate) fn select(doc: &Document, selector: &str) -> Vec<NodeId> {
    let parsed = match Selector::parse(selector) {
        Ok(parsed) => parsed,
        Err(_err) => {
            swarn!(selector, error = ?_err, "unsupported selector");
            return Vec::new();
        }
    };
    let mut markup = String::new();
    write_node(doc, doc.body(), &mut markup);
    let html = Html::parse_document(&markup);
    html.select(&parsed)
        .filter_map(|el| el.value().attr(NODE_ID_ATTR)?.parse().ok().map(NodeId))
        .collect()
}

/// Tag name and attributes of the first element in an HTML fragment.
pub(crate) fn parse_wrapper(markup: &str) -> Option<(String, Vec<(String, String)>)> {
    let fragment = Html::parse_fragment(markup);
    let element = fragment.root_element().children().find_map(ElementRef::wrap)?;
    let value = element.value();
    let attributes = value
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    Some((value.name().to_string(), attributes))
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(node) = doc.node(id) else {
        return;
    };
    let _ = write!(out, "<{} {NODE_ID_ATTR}=\"{}\"", node.tag, id.0);
    if !node.classes.is_empty() {
        push_attribute(out, "class", &node.classes.join(" "));
    }
    for (name, value) in &node.attributes {
        push_attribute(out, name, value);
    }
    out.push('>');
    // Children of a void element end up as its siblings once parsed.
    for &child in &node.children {
        write_node(doc, child, out);
    }
    if !VOID_TAGS.contains(&node.tag.as_str()) {
        let _ = write!(out, "</{}>", node.tag);
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out.push('"');
}
