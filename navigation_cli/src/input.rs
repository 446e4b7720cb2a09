use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use tracing::debug;

/// Reads JSON from `path`, or from stdin when no path is given.
pub fn read_json(path: Option<&Path>) -> anyhow::Result<serde_json::Value> {
    let value = match path {
        Some(path) => {
            debug!("Reading {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            serde_json::from_reader(reader)?
        }
        None => {
            debug!("Reading stdin");
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            serde_json::from_str(&content)?
        }
    };

    Ok(value)
}
