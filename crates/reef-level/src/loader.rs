//! JSON level loader.
//!
//! A missing or broken level document is never fatal for a running
//! simulation: [`load_level_or_default`] logs why and falls back to
//! [`LevelDocument::default`].

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::{LevelDocument, LevelError};

/// Load and validate a level document from a JSON file.
pub fn load_level(path: &Path) -> Result<LevelDocument, LevelError> {
    let file = std::fs::File::open(path).map_err(LevelError::Io)?;
    load_level_reader(std::io::BufReader::new(file))
}

/// Like [`load_level`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or documents fetched over
/// the network.
pub fn load_level_reader<R: Read>(reader: R) -> Result<LevelDocument, LevelError> {
    let level: LevelDocument = serde_json::from_reader(reader)?;
    level.validate()?;
    Ok(level)
}

/// Load `path` if given, substituting the built-in defaults when the file is
/// absent, unreadable, or invalid.
pub fn load_level_or_default(path: Option<&Path>) -> LevelDocument {
    let Some(path) = path else {
        info!("no level document given, using built-in defaults");
        return LevelDocument::default();
    };
    match load_level(path) {
        Ok(level) => {
            info!(
                path = %path.display(),
                fish = level.number_of_fish,
                bg_fish = level.number_of_bg_fish,
                "level loaded"
            );
            level
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "level unavailable, using built-in defaults");
            LevelDocument::default()
        }
    }
}
