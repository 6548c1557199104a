/*!
 * HTML document text model.
 *
 * Parses an HTML document into a DOM tree and exposes the ordered list of
 * translatable text leaves. A leaf is a text node with non-whitespace content
 * that does not sit anywhere under a non-content element (script, style,
 * meta, noscript, link, title). Leaves can be rewritten in place and the
 * document serialized back out with only the text swapped.
 */

use html5ever::parse_document;
use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::errors::DocumentError;

/// Element tags whose subtree never contains translatable text
pub const EXCLUDED_TAGS: [&str; 6] = ["script", "style", "meta", "noscript", "link", "title"];

/// Context reported for text that has no element parent
const FALLBACK_CONTEXT: &str = "body";

/// One contiguous run of human-visible text inside a parsed document.
///
/// The raw text may carry leading/trailing whitespace; it is preserved
/// verbatim on write-back.
#[derive(Debug, Clone)]
pub struct TextLeaf {
    /// The text node itself
    node: Handle,

    /// Tag name of the immediate parent element
    parent_tag: String,

    /// Position in document (traversal) order
    index: usize,
}

impl TextLeaf {
    /// Tag name of the element directly containing this text
    pub fn parent_tag(&self) -> &str {
        &self.parent_tag
    }

    /// Position of this leaf in document order
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A parsed HTML document with its translatable text leaves collected
/// in document order.
pub struct DocumentTextModel {
    dom: RcDom,
    leaves: Vec<TextLeaf>,
}

impl DocumentTextModel {
    /// Parse an HTML document and collect its text leaves.
    ///
    /// Parsing uses lenient HTML5 semantics, so arbitrary authored content
    /// is accepted the way a browser would accept it.
    pub fn parse(html: &str) -> Result<Self, DocumentError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| DocumentError::Parse(e.to_string()))?;

        let mut leaves = Vec::new();
        collect_leaves(&dom.document, FALLBACK_CONTEXT, &mut leaves);

        Ok(DocumentTextModel { dom, leaves })
    }

    /// The translatable text leaves, in document order
    pub fn text_leaves(&self) -> &[TextLeaf] {
        &self.leaves
    }

    /// Raw text content of a leaf, whitespace preserved
    pub fn leaf_text(&self, leaf: &TextLeaf) -> String {
        match leaf.node.data {
            NodeData::Text { ref contents } => contents.borrow().to_string(),
            _ => String::new(),
        }
    }

    /// Replace the text content of a leaf in place.
    ///
    /// Only the text node is touched; tags, attributes, comments and
    /// surrounding whitespace nodes are left as parsed.
    pub fn set_leaf_text(&self, leaf: &TextLeaf, new_text: &str) {
        if let NodeData::Text { ref contents } = leaf.node.data {
            let mut text = contents.borrow_mut();
            text.clear();
            text.push_slice(new_text);
        }
    }

    /// Serialize the document back to markup text
    pub fn serialize(&self) -> Result<String, DocumentError> {
        let mut buf: Vec<u8> = Vec::new();
        let serializable: SerializableHandle = self.dom.document.clone().into();
        serialize(&mut buf, &serializable, SerializeOpts::default())
            .map_err(|e| DocumentError::Serialize(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| DocumentError::Serialize(e.to_string()))
    }
}

fn is_excluded_tag(tag: &str) -> bool {
    EXCLUDED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Depth-first traversal collecting qualifying text nodes.
///
/// Excluded elements are never descended into, so no text under them can
/// qualify regardless of nesting depth.
fn collect_leaves(node: &Handle, parent_tag: &str, leaves: &mut Vec<TextLeaf>) {
    match node.data {
        NodeData::Text { ref contents } => {
            let has_content = !contents.borrow().trim().is_empty();
            if has_content {
                leaves.push(TextLeaf {
                    node: node.clone(),
                    parent_tag: parent_tag.to_string(),
                    index: leaves.len(),
                });
            }
        }
        NodeData::Element { ref name, .. } => {
            let tag = name.local.as_ref();
            if is_excluded_tag(tag) {
                return;
            }
            for child in node.children.borrow().iter() {
                collect_leaves(child, tag, leaves);
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                collect_leaves(child, parent_tag, leaves);
            }
        }
    }
}
