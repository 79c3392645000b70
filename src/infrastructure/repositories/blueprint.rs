//! Blueprint metadata loader
//!
//! Reads `blueprint.yaml` from a blueprint directory. A blueprint without
//! metadata is valid and behaves like an empty document.

use std::path::Path;

use crate::domain::entities::Blueprint;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::path::METADATA_FILE;
use crate::error::{ForgeError, ForgeResult};

/// Load the metadata of the blueprint rooted at `blueprint_dir`
pub fn load_blueprint<FS: FileSystem>(fs: &FS, blueprint_dir: &Path) -> ForgeResult<Blueprint> {
    let path = blueprint_dir.join(METADATA_FILE);
    let bytes = match fs.read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.is_not_found() => return Ok(Blueprint::default()),
        Err(e) => return Err(e.into()),
    };

    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Blueprint::default());
    }

    serde_yaml_ng::from_slice(&bytes).map_err(|e| ForgeError::InvalidBlueprint {
        file: path,
        message: e.to_string(),
    })
}
