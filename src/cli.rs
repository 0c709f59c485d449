use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "vega-deps",
    about = "Aggregate declared dependencies across every project under a folder tree",
    version
)]
pub struct Cli {
    /// Root directory to scan [default: `root` from config, else .]
    pub root: Option<PathBuf>,

    /// Report path [default: list.json next to the executable]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file [default: ./.vega-deps/config.toml, fallback ~/.config/vega-deps/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print every aggregated dependency
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vega-deps"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose && !cli.quiet);
    }

    #[test]
    fn test_root_and_output() {
        let cli = Cli::try_parse_from(["vega-deps", "/srv/vega", "-o", "out.json"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/vega")));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vega-deps", "-q", "-v"]).is_err());
    }
}
