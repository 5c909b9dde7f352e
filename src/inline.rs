use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::node::HtmlNode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unmatched delimiter '{0}'")]
    UnmatchedDelimiter(String),
}

/// The styling carried by a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A contiguous run of inline text with one style. Link and Image spans
/// additionally carry a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan {
            text: text.into(),
            kind: SpanKind::Plain,
            url: None,
        }
    }

    pub fn styled(text: impl Into<String>, kind: SpanKind) -> Self {
        TextSpan {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        TextSpan {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }
}

// Alt text excludes square brackets, URLs exclude parentheses.
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Parse a raw text string into an ordered sequence of styled spans.
///
/// Delimiter passes run bold, italic, code in that order (bold first so
/// `**` is never split as two italic markers), then images, then links.
/// Unbalanced delimiters are the only failure; malformed link or image
/// syntax is left as plain text.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, kind) in [
        ("**", SpanKind::Bold),
        ("_", SpanKind::Italic),
        ("`", SpanKind::Code),
    ] {
        spans = split_on_delimiter(spans, delimiter, kind)?;
    }
    let spans = extract_pattern(spans, &IMAGE_RE, SpanKind::Image);
    Ok(extract_pattern(spans, &LINK_RE, SpanKind::Link))
}

/// Split every Plain span on `delimiter`, tagging the delimited fragments
/// with `kind`. Already-styled spans pass through untouched so styles never
/// nest or overlap.
fn split_on_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let parts: Vec<&str> = span.text.split(delimiter).collect();
        // Delimiters must pair up: an even fragment count means one is
        // left dangling.
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter(delimiter.to_string()));
        }
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(*part));
            } else {
                out.push(TextSpan::styled(*part, kind));
            }
        }
    }
    Ok(out)
}

/// Pull image or link matches out of Plain spans, leaving the surrounding
/// text as Plain and dropping empty segments.
fn extract_pattern(spans: Vec<TextSpan>, pattern: &Regex, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let text = &span.text;
        let mut last = 0;
        for caps in pattern.captures_iter(text) {
            let m = caps.get(0).unwrap();
            // The link pattern must not swallow image syntax: skip matches
            // directly preceded by '!'. (The regex crate has no lookbehind.)
            if kind == SpanKind::Link && m.start() > 0 && text.as_bytes()[m.start() - 1] == b'!'
            {
                continue;
            }
            if m.start() > last {
                out.push(TextSpan::plain(&text[last..m.start()]));
            }
            out.push(TextSpan::with_url(&caps[1], kind, &caps[2]));
            last = m.end();
        }
        if last < text.len() {
            out.push(TextSpan::plain(&text[last..]));
        }
    }
    out
}

/// Convert a span to its HTML node form.
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    let url = || span.url.clone().unwrap_or_default();
    match span.kind {
        SpanKind::Plain => HtmlNode::leaf(None, &span.text),
        SpanKind::Bold => HtmlNode::leaf(Some("b"), &span.text),
        SpanKind::Italic => HtmlNode::leaf(Some("i"), &span.text),
        SpanKind::Code => HtmlNode::leaf(Some("code"), &span.text),
        SpanKind::Link => HtmlNode::leaf_with_attrs(
            "a",
            &span.text,
            vec![("href".to_string(), url())],
        ),
        SpanKind::Image => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), url()),
                ("alt".to_string(), span.text.clone()),
            ],
        ),
    }
}
