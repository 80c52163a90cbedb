//! Write the generated declarations to `<type_name>.ts`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GenError;

/// Join the declaration lines and write them to `<dir>/<type_name>.ts`.
///
/// Missing directories are created, an existing file is overwritten.
/// Returns the path of the written file.
pub fn write_artifact(dir: &Path, type_name: &str, lines: &[String]) -> Result<PathBuf, GenError> {
    fs::create_dir_all(dir).map_err(|err| {
        GenError::Write(format!("could not create directory {}: {err}", dir.display()))
    })?;

    let path = dir.join(format!("{type_name}.ts"));
    let contents = lines.join("\n");
    fs::write(&path, contents)
        .map_err(|err| GenError::Write(format!("could not write {}: {err}", path.display())))?;

    debug!(path = %path.display(), lines = lines.len(), "wrote declaration file");
    Ok(path)
}
