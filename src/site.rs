use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::SiteConfig;
use crate::page::{self, PageError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Recursively copy the contents of `src` into `dest`, creating
/// directories as needed.
pub fn copy_directory(src: &Path, dest: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        if src_path.is_dir() {
            copy_directory(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
            println!("Copied {} -> {}", src_path.display(), dest_path.display());
        }
    }
    Ok(())
}

/// Build the site under `root`: wipe the output directory, copy static
/// assets into it, then generate a page for every content file.
pub fn build(root: &Path, config: &SiteConfig) -> Result<(), BuildError> {
    let content_dir = root.join(&config.content_dir);
    let static_dir = root.join(&config.static_dir);
    let output_dir = root.join(&config.output_dir);
    let template = root.join(&config.template);

    if output_dir.exists() {
        println!("Deleting {}", output_dir.display());
        fs::remove_dir_all(&output_dir)?;
    }
    if static_dir.exists() {
        copy_directory(&static_dir, &output_dir)?;
    }
    page::generate_pages_recursive(&content_dir, &template, &output_dir, &config.base_path)?;
    println!("Site generated at {}", output_dir.display());
    Ok(())
}
