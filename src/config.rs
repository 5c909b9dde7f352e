use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Site layout and deployment settings, read from `sitegen.toml`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of Markdown source files.
    pub content_dir: String,
    /// Directory of assets copied verbatim into the output.
    pub static_dir: String,
    /// Directory the generated site is written to.
    pub output_dir: String,
    /// Page template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: String,
    /// Prefix replacing root-relative asset paths, e.g. `/my-site/`.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            output_dir: "public".to_string(),
            template: "template.html".to_string(),
            base_path: "/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
