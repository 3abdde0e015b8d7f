use crate::error::AssetError;
use std::path::{Component, Path, PathBuf};

/// Checks that a document name is a plain `*.json` file name: exactly one
/// normal path component, no separators, no `.`/`..`, no absolute prefix.
pub(crate) fn validate_name(name: &str) -> Result<(), AssetError> {
    if name.is_empty() {
        return Err(AssetError::InvalidName(name.to_owned()));
    }

    let path = Path::new(name);
    let mut components = path.components();
    let only_normal = matches!(components.next(), Some(Component::Normal(c)) if c == name);
    if !only_normal || components.next().is_some() {
        return Err(AssetError::InvalidName(name.to_owned()));
    }

    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(AssetError::InvalidName(name.to_owned()));
    }

    Ok(())
}

/// Joins a validated name to the canonical root and re-checks containment.
///
/// The containment check is redundant with [`validate_name`] for well-formed
/// input; it stays as the last line of defense for the sandbox invariant.
pub(crate) fn resolve_name(root: &Path, name: &str) -> Result<PathBuf, AssetError> {
    validate_name(name)?;

    let joined = root.join(name);
    if !joined.starts_with(root) {
        return Err(AssetError::Sandbox(joined.display().to_string()));
    }

    Ok(joined)
}
