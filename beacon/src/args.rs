use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Beacon error classifier
#[derive(Debug, Parser)]
#[command(
    name = "beacon",
    about = "Classify a failed HTTP response into the platform error taxonomy"
)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "BEACON_CONFIG")]
    pub config: Option<PathBuf>,

    /// HTTP status code of the response
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(100..=999))]
    pub status: u16,

    /// Response body text
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the response body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Classifier to use, overriding the configured default
    #[arg(long, value_enum)]
    pub subsystem: Option<SubsystemArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SubsystemArg {
    Platform,
    Messaging,
}

impl From<SubsystemArg> for beacon_core::Subsystem {
    fn from(arg: SubsystemArg) -> Self {
        match arg {
            SubsystemArg::Platform => Self::Platform,
            SubsystemArg::Messaging => Self::Messaging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let args = Args::try_parse_from(["beacon", "--status", "404"]).unwrap();

        assert_eq!(args.status, 404);
        assert!(args.body.is_none());
        assert!(args.subsystem.is_none());
    }

    #[test]
    fn parses_subsystem() {
        let args = Args::try_parse_from(["beacon", "-s", "500", "--subsystem", "messaging", "-b", "{}"]).unwrap();

        assert_eq!(args.subsystem, Some(SubsystemArg::Messaging));
        assert_eq!(args.body.as_deref(), Some("{}"));
    }

    #[test]
    fn rejects_out_of_range_status() {
        assert!(Args::try_parse_from(["beacon", "--status", "42"]).is_err());
        assert!(Args::try_parse_from(["beacon", "--status", "1000"]).is_err());
    }

    #[test]
    fn body_and_body_file_conflict() {
        assert!(Args::try_parse_from(["beacon", "--status", "400", "--body", "x", "--body-file", "y"]).is_err());
    }
}
