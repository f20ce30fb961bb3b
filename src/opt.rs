use clap::{ArgAction, Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Socket address to listen on
    #[arg(default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    #[arg(
        help = "YAML file containing paths and URLs (--help for more)",
        long_help = r"YAML file containing paths and URLs:
    - read once at startup, only used with `--source yaml`
    - if missing, unreadable, or empty, built-in routes are substituted
Expected format:
    - path: /some-path
      url: https://www.some-url.com/demo"
    )]
    #[arg(short, long, default_value = "link.yaml")]
    pub config: PathBuf,

    #[arg(
        help = "Source of the active redirect table (--help for more)",
        long_help = r"Source of the active redirect table:
    - map:  built-in path/URL pairs
    - yaml: routes decoded from the config file
    - json: routes decoded from the embedded sample document
Unmatched paths fall through to the built-in map, then to the greeting page"
    )]
    #[arg(short, long, value_enum, default_value_t = Source::Json)]
    pub source: Source,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Source {
    Map,
    Yaml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let options = Options::parse_from(["urlshort"]);
        assert_eq!(options.listen, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(options.config, PathBuf::from("link.yaml"));
        assert!(matches!(options.source, Source::Json));
    }

    #[test]
    fn invalid_source_is_rejected() {
        let err = Options::try_parse_from(["urlshort", "--source", "toml"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }
}
