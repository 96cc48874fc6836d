// Presentational node tree handed to the host surface

/// Side effects the host attaches to a node; the pipeline only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Ask the host to show the enclosing view container full screen
    RequestFullScreen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(Node),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub action: Option<HostAction>,
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            action: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append one or more whitespace separated classes. Empty input is ignored.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn action(mut self, action: HostAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(Child::Element(node));
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes.into_iter().map(Child::Element));
        self
    }
}

// Query helpers for asserting on rendered trees
#[cfg(test)]
impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|child| match child {
            Child::Element(node) => Some(node),
            Child::Text(_) => None,
        })
    }

    /// Depth-first search for the first node carrying `class`, including self
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.elements().find_map(|node| node.find_by_class(class))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|node| node.find_by_id(id))
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(node) => node.collect_text(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_queries() {
        let node = Node::new("div")
            .id("outer")
            .class("tile success  height-2")
            .class("")
            .child(Node::new("h4").class("tile-title").text("Api"))
            .text(" tail");

        assert_eq!(node.classes, vec!["tile", "success", "height-2"]);
        assert!(node.has_class("success"));
        assert_eq!(node.find_by_class("tile-title").map(|n| n.tag), Some("h4"));
        assert!(node.find_by_id("outer").is_some());
        assert!(node.find_by_id("missing").is_none());
        assert_eq!(node.text_content(), "Api tail");
    }
}
