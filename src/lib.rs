mod block;
mod config;
mod document;
mod inline;
mod node;
mod page;
mod site;

pub use block::{BlockKind, classify, split_blocks};
pub use config::SiteConfig;
pub use document::{DocumentError, extract_title, markdown_to_node};
pub use inline::{ParseError, SpanKind, TextSpan, parse_inline};
pub use node::{HtmlNode, RenderError};
pub use page::{PageError, generate_page, generate_pages_recursive};
pub use site::{BuildError, build, copy_directory};

/// Convert a Markdown document to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String, DocumentError> {
    let node = document::markdown_to_node(markdown)?;
    Ok(node.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn markdown_to_html_end_to_end() {
        let html = markdown_to_html(
            "# Tolkien Fan Club\n\n\
             **I like Tolkien**.\n\n\
             > All that is gold does not glitter\n\n\
             - elves\n- hobbits",
        )
        .unwrap();
        assert_eq!(
            html,
            "<div><h1>Tolkien Fan Club</h1>\
             <p><b>I like Tolkien</b>.</p>\
             <blockquote>All that is gold does not glitter</blockquote>\
             <ul><li>elves</li><li>hobbits</li></ul></div>"
        );
    }
}
