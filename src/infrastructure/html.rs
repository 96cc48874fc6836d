// HTML serialization of the presentational node tree
use crate::domain::node::{Child, HostAction, Node};
use std::fmt::Write;

const FULL_SCREEN_SCRIPT: &str =
    "var view = this.parentNode; if (view.requestFullscreen) view.requestFullscreen();";

pub fn render_page(title: &str, body: &Node) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    escape_into(&mut out, title);
    out.push_str("</title>\n</head>\n<body>\n");
    out.push_str(&render_node(body));
    out.push_str("\n</body>\n</html>\n");
    out
}

pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    render_node_into(&mut out, node);
    out
}

fn render_node_into(out: &mut String, node: &Node) {
    out.push('<');
    out.push_str(node.tag);

    if let Some(id) = &node.id {
        write_attribute(out, "id", id);
    }
    if !node.classes.is_empty() {
        write_attribute(out, "class", &node.classes.join(" "));
    }
    for (name, value) in &node.attributes {
        write_attribute(out, name, value);
    }
    if let Some(action) = node.action {
        let script = match action {
            HostAction::RequestFullScreen => FULL_SCREEN_SCRIPT,
        };
        write_attribute(out, "onclick", script);
    }
    out.push('>');

    for child in &node.children {
        match child {
            Child::Text(text) => escape_into(out, text),
            Child::Element(element) => render_node_into(out, element),
        }
    }

    let _ = write!(out, "</{}>", node.tag);
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
