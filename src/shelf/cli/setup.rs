use clap::Parser;
use shelf::config::MAX_PAGE_SIZE;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Menu-driven, in-memory book catalog", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of the user config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Books per page in the View menu
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE as u64))]
    pub page_size: Option<u64>,

    /// Start with three demo books
    #[arg(long)]
    pub demo: bool,

    /// Never clear the screen between menus
    #[arg(long)]
    pub no_clear: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["shelf"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.page_size.is_none());
        assert!(!cli.demo);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "shelf",
            "--demo",
            "--page-size",
            "5",
            "--no-clear",
            "--config",
            "/tmp/shelf.json",
            "-vv",
        ])
        .unwrap();
        assert!(cli.demo);
        assert!(cli.no_clear);
        assert_eq!(cli.page_size, Some(5));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/shelf.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_out_of_range_page_size() {
        assert!(Cli::try_parse_from(["shelf", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["shelf", "--page-size", "51"]).is_err());
    }
}
