use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};

/// Run configuration. Everything comes in through flags (or the environment
/// for the credential); nothing is compiled into the binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "places-etl", about = "Search for restaurants around a point and append them to a CSV file")]
pub struct Settings {
    /// API key for the places service
    #[arg(long, env = "PLACES_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Central point to search around, as "lat,lng"
    #[arg(long, default_value = "24.796074,46.669509")]
    pub location: String,

    /// Search radius around the central point, in meters
    #[arg(long, default_value = "3000")]
    pub radius: String,

    /// Place keyword to search for
    #[arg(long)]
    pub name: String,

    /// Output CSV file, created if missing, appended to otherwise
    #[arg(long, default_value = "data.csv")]
    pub output: PathBuf,
}

impl Settings {
    /// Rejects blank required values before any network call is made. The
    /// parser already rejects missing flags; this catches `--key ""`.
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(Error::Config("no API key provided".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Config("no place keyword provided".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(key: &str, name: &str) -> Settings {
        Settings {
            key: key.to_string(),
            location: "24.796074,46.669509".to_string(),
            radius: "3000".to_string(),
            name: name.to_string(),
            output: PathBuf::from("data.csv"),
        }
    }

    #[test]
    fn blank_key_is_rejected() {
        let err = settings("  ", "coffee").validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn blank_keyword_is_rejected() {
        let err = settings("k", "").validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn populated_settings_pass() {
        assert!(settings("k", "coffee").validate().is_ok());
    }
}
