// Action scripts: a JSON array of actions, one per UI event, replayed in order.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tiling_layout::Action;

use crate::session::TabContent;

pub type HostAction = Action<TabContent>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("cannot read script {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed action script: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_script(json: &str) -> Result<Vec<HostAction>, ScriptError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

/// Read a script from `path`, or from stdin when no path is given.
pub fn read_script(path: Option<&Path>) -> Result<Vec<HostAction>, ScriptError> {
    let (label, result) = match path {
        Some(path) => (path.display().to_string(), std::fs::read_to_string(path)),
        None => {
            let mut buf = String::new();
            let result = std::io::stdin().read_to_string(&mut buf).map(|_| buf);
            ("<stdin>".to_string(), result)
        }
    };
    let json = result.map_err(|source| ScriptError::Read {
        path: label,
        source,
    })?;
    parse_script(&json)
}
