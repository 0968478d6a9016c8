use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when reading fails after some lines were already counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadFailurePolicy {
    /// Keep the lines counted so far and report the file as truncated.
    #[default]
    Truncate,
    /// Drop the file's counts and report an error.
    Discard,
}

impl FromStr for ReadFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "discard" => Ok(Self::Discard),
            other => Err(format!("Unknown read failure policy: {other}")),
        }
    }
}
