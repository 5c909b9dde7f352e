use once_cell::sync::Lazy;
use regex::Regex;

/// Structural kind of one Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6} ").unwrap());
// The classifier requires a space after the number, the splitter does not.
static ORDERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\. ").unwrap());
static ORDERED_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// Classify a single block by pattern-matching its lines. First rule wins.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();
    if HEADING_RE.is_match(lines[0]) {
        return BlockKind::Heading;
    }
    if lines[0].starts_with("```") && lines[lines.len() - 1].starts_with("```") {
        return BlockKind::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }
    // Any starting number is accepted; sequencing is not checked.
    if lines.iter().all(|line| ORDERED_ITEM_RE.is_match(line)) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// Split a document into block strings on blank-line boundaries.
///
/// Fenced code blocks are flattened: the fence lines and every interior
/// line become separate entries. List blocks keep their lines joined with
/// newlines; everything else collapses its lines into a single
/// space-joined paragraph.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    for raw in document.trim().split("\n\n") {
        let lines: Vec<&str> = raw.split('\n').map(str::trim).collect();
        if raw.starts_with("```") && raw.ends_with("```") {
            blocks.push(lines[0].to_string());
            if lines.len() > 1 {
                for line in &lines[1..lines.len() - 1] {
                    blocks.push((*line).to_string());
                }
                blocks.push(lines[lines.len() - 1].to_string());
            } else {
                // A lone ``` line is both fence-open and fence-close.
                blocks.push(lines[0].to_string());
            }
        } else if lines.iter().all(|line| line.starts_with("- ")) {
            blocks.push(lines.join("\n"));
        } else if lines.iter().all(|line| ORDERED_PREFIX_RE.is_match(line)) {
            blocks.push(lines.join("\n"));
        } else {
            blocks.push(lines.join(" "));
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", BlockKind::Heading)]
    #[case("###### Deep", BlockKind::Heading)]
    #[case("####### Too deep", BlockKind::Paragraph)]
    #[case("#NoSpace", BlockKind::Paragraph)]
    #[case("```\ncode\n```", BlockKind::Code)]
    #[case("```", BlockKind::Code)]
    #[case("> a\n> b", BlockKind::Quote)]
    #[case(">terse\n>quote", BlockKind::Quote)]
    #[case("- a\n- b", BlockKind::UnorderedList)]
    #[case("-a\n-b", BlockKind::Paragraph)]
    #[case("1. one\n2. two", BlockKind::OrderedList)]
    #[case("3. any\n9. numbering", BlockKind::OrderedList)]
    #[case("1.missing space", BlockKind::Paragraph)]
    #[case("just a paragraph", BlockKind::Paragraph)]
    #[case("- a\nnot a list", BlockKind::Paragraph)]
    fn classify_cases(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn heading_looks_at_first_line_only() {
        assert_eq!(classify("# Title\n> not a quote"), BlockKind::Heading);
    }

    #[test]
    fn splits_on_blank_lines() {
        assert_eq!(
            split_blocks("# Title\n\nBody text."),
            vec!["# Title", "Body text."]
        );
    }

    #[test]
    fn trims_document_and_lines() {
        assert_eq!(
            split_blocks("\n\n  # Title  \n\n  Body.  \n\n"),
            vec!["# Title", "Body."]
        );
    }

    #[test]
    fn paragraph_lines_collapse_to_spaces() {
        assert_eq!(
            split_blocks("one line\ntwo line\n\nnext"),
            vec!["one line two line", "next"]
        );
    }

    #[test]
    fn list_lines_stay_joined_by_newlines() {
        assert_eq!(split_blocks("- a\n- b"), vec!["- a\n- b"]);
        assert_eq!(split_blocks("1. a\n2. b"), vec!["1. a\n2. b"]);
    }

    #[test]
    fn fenced_code_is_flattened_into_lines() {
        assert_eq!(
            split_blocks("```\nlet x = 1;\nlet y = 2;\n```"),
            vec!["```", "let x = 1;", "let y = 2;", "```"]
        );
    }

    #[test]
    fn empty_document_yields_one_empty_block() {
        assert_eq!(split_blocks(""), vec![""]);
    }

    #[test]
    fn document_without_blank_lines_is_one_block() {
        assert_eq!(split_blocks("a\nb\nc"), vec!["a b c"]);
    }
}
