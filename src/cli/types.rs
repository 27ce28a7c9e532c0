use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "jbmafp")]
#[command(about = "Static site generator: Markdown content, Liquid templates, HTML out", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initialize a new project in the project root
    #[arg(short, long, default_value_t = false)]
    pub init: bool,

    /// Build the website into public/
    #[arg(short, long, default_value_t = false)]
    pub build: bool,

    /// Serve public/ on http://127.0.0.1:6969
    #[arg(short, long, default_value_t = false)]
    pub server: bool,

    /// Create a new draft page titled TITLE
    #[arg(short, long, default_value_t = false)]
    pub new: bool,

    /// Title of the page created by --new
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Project root
    #[arg(long, env = "PROJECT_ROOT", value_name = "DIR", default_value = "./")]
    pub root: PathBuf,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Whether any action flag was given
    pub fn has_action(&self) -> bool {
        self.init || self.build || self.server || self.new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_flags() {
        let cli = Cli::try_parse_from(["jbmafp", "-i", "-b", "--root", "/srv/blog"]).unwrap();
        assert!(cli.init && cli.build);
        assert!(!cli.server && !cli.new);
        assert_eq!(cli.root, PathBuf::from("/srv/blog"));
    }

    #[test]
    fn test_new_with_title() {
        let cli = Cli::try_parse_from(["jbmafp", "--new", "Hello World"]).unwrap();
        assert!(cli.new);
        assert_eq!(cli.title.as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["jbmafp"]).unwrap();
        assert!(!cli.has_action());
    }
}
