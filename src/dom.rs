//! The tree-walk interface the renderer consumes.
//!
//! Anything that can report a node's kind and its children can be rendered.
//! Implementations are provided for `markup5ever_rcdom` handles (the output
//! of [`crate::parse`]) and for the small owned [`Node`] tree, which is handy
//! for building documents in code.

use markup5ever_rcdom::{Handle, NodeData};

/// What a node is, as far as rendering is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root.
    Document,
    /// An element with its lower-case tag name and attributes in source
    /// order.
    Element {
        /// Tag name.
        tag: String,
        /// `(name, value)` pairs.
        attrs: Vec<(String, String)>,
    },
    /// Text, with entities already decoded.
    Text(String),
    /// Comments, doctypes and processing instructions; never rendered.
    Other,
}

/// A node of an HTML tree.
pub trait HtmlNode: Sized {
    /// The kind of this node.
    fn kind(&self) -> NodeKind;
    /// The node's children in document order.
    fn children(&self) -> Vec<Self>;
}

impl HtmlNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Element {
                ref name,
                ref attrs,
                ..
            } => NodeKind::Element {
                tag: name.local.to_string(),
                attrs: attrs
                    .borrow()
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect(),
            },
            NodeData::Text { ref contents } => NodeKind::Text(contents.borrow().to_string()),
            NodeData::Comment { .. }
            | NodeData::Doctype { .. }
            | NodeData::ProcessingInstruction { .. } => NodeKind::Other,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.children.borrow().clone()
    }
}

/// An owned HTML tree.
///
/// ```
/// use htmlcanvas::dom::Node;
///
/// let doc = Node::element("body")
///     .child(Node::text("Thomas"))
///     .child(Node::element("div").child(Node::text("Anton")));
/// assert_eq!(htmlcanvas::config::strict().render_node(&doc), "Thomas\nAnton");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    /// An empty document root.
    pub fn document() -> Node {
        Node {
            kind: NodeKind::Document,
            children: Vec::new(),
        }
    }

    /// An element without attributes or children.  The tag is lower-cased.
    pub fn element(tag: &str) -> Node {
        Node {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                attrs: Vec::new(),
            },
            children: Vec::new(),
        }
    }

    /// A text node.
    pub fn text(text: &str) -> Node {
        Node {
            kind: NodeKind::Text(text.into()),
            children: Vec::new(),
        }
    }

    /// Add an attribute.  Has no effect on nodes other than elements.
    pub fn attr(mut self, name: &str, value: &str) -> Node {
        if let NodeKind::Element { ref mut attrs, .. } = self.kind {
            attrs.push((name.to_ascii_lowercase(), value.into()));
        }
        self
    }

    /// Append a child.
    pub fn child(mut self, child: Node) -> Node {
        self.children.push(child);
        self
    }
}

impl<'a> HtmlNode for &'a Node {
    fn kind(&self) -> NodeKind {
        self.kind.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.children.iter().collect()
    }
}
