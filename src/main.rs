use std::path::PathBuf;

use clap::Parser;
use sitegen::SiteConfig;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Generate a static HTML site from Markdown files")]
struct Cli {
    /// Site root containing the content and static directories
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to sitegen.toml under the site root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prefix for root-relative asset paths, e.g. "/my-site/"
    #[arg(short, long)]
    base_path: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| cli.root.join("sitegen.toml"));
    let mut config = SiteConfig::load(&config_path);
    if let Some(base_path) = cli.base_path {
        config.base_path = base_path;
    }

    if let Err(e) = sitegen::build(&cli.root, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
