use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::block::{self, BlockKind};
use crate::inline::{self, ParseError};
use crate::node::{HtmlNode, RenderError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("no h1 heading found in document")]
    NoTitle,
}

static ORDERED_TEXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)").unwrap());

/// Convert a whole Markdown document into a single `div` node tree.
pub fn markdown_to_node(document: &str) -> Result<HtmlNode, DocumentError> {
    let mut children = Vec::new();
    for block in block::split_blocks(document) {
        let node = match block::classify(&block) {
            BlockKind::Heading => heading_node(&block)?,
            BlockKind::Code => code_node(&block),
            BlockKind::Quote => quote_node(&block)?,
            BlockKind::UnorderedList => unordered_list_node(&block)?,
            BlockKind::OrderedList => ordered_list_node(&block)?,
            BlockKind::Paragraph => {
                HtmlNode::parent("p", inline_children(&block)?)
            }
        };
        children.push(node);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Inline-parse a block's text into child nodes. A block with no inline
/// content still gets one empty leaf so parent invariants hold.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, DocumentError> {
    let spans = inline::parse_inline(text)?;
    if spans.is_empty() {
        return Ok(vec![HtmlNode::leaf(None, "")]);
    }
    Ok(spans.iter().map(inline::span_to_node).collect())
}

fn heading_node(block: &str) -> Result<HtmlNode, DocumentError> {
    // The classifier guarantees 1-6 leading '#' followed by a space.
    let level = block.chars().take_while(|&c| c == '#').count();
    let text = &block[level + 1..];
    Ok(HtmlNode::parent(&format!("h{level}"), inline_children(text)?))
}

fn code_node(block: &str) -> HtmlNode {
    // Backticks are stripped from the whole block, not just the fences.
    let text = block.replace('`', "");
    HtmlNode::parent("pre", vec![HtmlNode::leaf(Some("code"), text)])
}

fn quote_node(block: &str) -> Result<HtmlNode, DocumentError> {
    let text = block.replace("> ", "");
    Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, DocumentError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        items.push(HtmlNode::parent("li", inline_children(&line[2..])?));
    }
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, DocumentError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(caps) = ORDERED_TEXT_RE.captures(line) {
            let text = caps[1].trim().to_string();
            items.push(HtmlNode::parent("li", inline_children(&text)?));
        }
    }
    Ok(HtmlNode::parent("ol", items))
}

/// Return the text of the document's first h1 line.
pub fn extract_title(document: &str) -> Result<String, DocumentError> {
    for line in document.split('\n') {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("# ") {
            return Ok(rest.trim().to_string());
        }
    }
    Err(DocumentError::NoTitle)
}
