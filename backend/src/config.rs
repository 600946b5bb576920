use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Checkers over HTTP, or in the terminal
#[derive(Parser, Debug)]
#[command(name = "checkers-web", version, long_about = None)]
pub struct Cli {
    /// Directory the daily rolling log files are written to
    #[arg(long, global = true, default_value = "./logs")]
    pub log_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Serve one shared game and the web client over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        #[arg(short, long, default_value_t = 9090)]
        port: u16,

        /// Number of rows and columns on the board
        #[arg(short, long, default_value_t = 4)]
        dimension: usize,

        /// Directory holding the built web client
        #[arg(long, default_value = "frontend/dist")]
        static_dir: PathBuf,
    },
    /// Play both sides of a game from the terminal
    Terminal {
        #[arg(short, long, default_value_t = 3)]
        dimension: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["checkers-web", "serve"]).unwrap();
        assert_eq!(cli.log_dir, PathBuf::from("./logs"));
        assert_eq!(
            cli.command,
            Command::Serve {
                host: IpAddr::from([127, 0, 0, 1]),
                port: 9090,
                dimension: 4,
                static_dir: PathBuf::from("frontend/dist"),
            }
        );
    }

    #[test]
    fn test_terminal_args() {
        let cli =
            Cli::try_parse_from(["checkers-web", "terminal", "-d", "5", "--log-dir", "/tmp/logs"])
                .unwrap();
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(cli.command, Command::Terminal { dimension: 5 });
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["checkers-web", "serve", "--port", "http"]).is_err());
    }
}
