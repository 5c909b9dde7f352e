use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::{self, DocumentError};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generate one HTML page from a Markdown file and a template.
///
/// The template's `{{ Title }}` and `{{ Content }}` placeholders are
/// replaced with the extracted title and the rendered document. When
/// `base_path` is not `/`, root-relative `href`/`src` values are rewritten
/// to start with it instead (for subpath deployments).
pub fn generate_page(
    from: &Path,
    template: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), PageError> {
    println!("Generating {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(|source| PageError::Read {
        path: from.to_path_buf(),
        source,
    })?;
    let template_html = fs::read_to_string(template).map_err(|source| PageError::Read {
        path: template.to_path_buf(),
        source,
    })?;

    let content = document::markdown_to_node(&markdown)?
        .render()
        .map_err(DocumentError::from)?;
    let title = document::extract_title(&markdown)?;

    let mut html = template_html
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &content);
    if base_path != "/" {
        html = html
            .replace("href=\"/", &format!("href=\"{base_path}"))
            .replace("src=\"/", &format!("src=\"{base_path}"));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, html).map_err(|source| PageError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

/// Walk `content_dir` and generate a mirrored tree of HTML pages under
/// `dest_dir`, one per `.md` file.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<(), PageError> {
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            generate_pages_recursive(&path, template, &dest_dir.join(entry.file_name()), base_path)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest, base_path)?;
        }
    }
    Ok(())
}
