use thiserror::Error;

/// Errors from rendering a node tree. These indicate a bug in whatever
/// built the tree, not malformed user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("parent node requires a tag")]
    MissingTag,
    #[error("parent node <{0}> requires at least one child")]
    EmptyChildren(String),
}

/// A renderable HTML element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Terminal node: a text value, optionally wrapped in a tag.
    /// Without a tag the value is emitted verbatim.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    /// Composite node: a tag wrapping one or more child nodes.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: &str,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs,
        }
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Render the tree to an HTML string.
    ///
    /// No HTML escaping is performed; values pass through verbatim.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => Ok(value.clone()),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => Ok(format!("<{tag}{}>{value}</{tag}>", attrs_to_html(attrs))),
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingTag);
                }
                if children.is_empty() {
                    return Err(RenderError::EmptyChildren(tag.clone()));
                }
                let mut out = format!("<{tag}{}>", attrs_to_html(attrs));
                for child in children {
                    out.push_str(&child.render()?);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                Ok(out)
            }
        }
    }
}

/// Serialize attributes in insertion order, each preceded by a space.
fn attrs_to_html(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn untagged_leaf_renders_value_verbatim() {
        let node = HtmlNode::leaf(None, "x");
        assert_eq!(node.render().unwrap(), "x");
    }

    #[test]
    fn tagged_leaf_wraps_value() {
        let node = HtmlNode::leaf(Some("p"), "Hello, world!");
        assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn leaf_attrs_render_in_insertion_order() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            "go",
            vec![("href".to_string(), "u".to_string())],
        );
        assert_eq!(node.render().unwrap(), "<a href=\"u\">go</a>");

        let node = HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), "cat.png".to_string()),
                ("alt".to_string(), "a cat".to_string()),
            ],
        );
        assert_eq!(
            node.render().unwrap(),
            "<img src=\"cat.png\" alt=\"a cat\"></img>"
        );
    }

    #[test]
    fn empty_value_is_valid() {
        let node = HtmlNode::leaf(Some("code"), "");
        assert_eq!(node.render().unwrap(), "<code></code>");
    }

    #[test]
    fn parent_concatenates_children() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::leaf(None, "Normal "),
                HtmlNode::leaf(Some("b"), "bold"),
                HtmlNode::leaf(None, " text"),
            ],
        );
        assert_eq!(node.render().unwrap(), "<p>Normal <b>bold</b> text</p>");
    }

    #[test]
    fn parents_nest() {
        let inner = HtmlNode::parent("li", vec![HtmlNode::leaf(None, "one")]);
        let node = HtmlNode::parent("ul", vec![inner]);
        assert_eq!(node.render().unwrap(), "<ul><li>one</li></ul>");
    }

    #[test]
    fn parent_without_tag_fails() {
        let node = HtmlNode::parent("", vec![HtmlNode::leaf(None, "x")]);
        assert_eq!(node.render(), Err(RenderError::MissingTag));
    }

    #[test]
    fn parent_without_children_fails() {
        let node = HtmlNode::parent("div", vec![]);
        assert_eq!(
            node.render(),
            Err(RenderError::EmptyChildren("div".to_string()))
        );
    }
}
