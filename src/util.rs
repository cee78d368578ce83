pub mod fs {
    use std::fs;

    use camino::Utf8Path;

    use crate::error::{ScaffoldError, ScaffoldResult};

    /// Ensure a directory exists, creating it recursively if needed.
    ///
    /// Returns `true` when the directory was created by this call and `false`
    /// when it was already present. A non-directory entry in the way is an error.
    pub fn ensure_dir(path: &Utf8Path) -> ScaffoldResult<bool> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path).map_err(|source| ScaffoldError::Filesystem {
            path: path.to_owned(),
            source,
        })?;
        Ok(true)
    }

}
