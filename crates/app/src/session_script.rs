//! JSON action scripts: a top-level array of `TrackerAction` objects, e.g.
//!
//! ```json
//! [
//!   { "type": "rename", "name": "Pemba" },
//!   { "type": "submit_waste", "category": "Glass", "location_label": "Lukla",
//!     "latitude": 27.68, "longitude": 86.73 }
//! ]
//! ```

use std::fmt;
use std::path::Path;

use tracker::actions::TrackerAction;

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "cannot read script: {e}"),
            ScriptError::Parse(e) => write!(f, "invalid script: {e}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(e) => Some(e),
            ScriptError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Io(e)
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        ScriptError::Parse(e)
    }
}

pub fn parse_script(text: &str) -> Result<Vec<TrackerAction>, ScriptError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_script(path: &Path) -> Result<Vec<TrackerAction>, ScriptError> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}
