//! Output format value object

use serde::{Deserialize, Serialize};

/// How drafted responses are printed by the command-line client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Readable cards for the terminal (default)
    #[default]
    Cards,
    /// The markup injected into the suggestions container
    Html,
    /// The suggestions as JSON
    Json,
}
