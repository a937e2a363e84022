/// Asset file discovery for the naming audit.
use std::fs;
use std::path::Path;

use crate::report::AuditError;

/// Extensions considered renderable geometry assets.
const ASSET_EXTENSIONS: &[&str] = &["glb", "gltf", "obj", "fbx"];

/// Recursively collects asset files under `asset_dir` as canonical
/// root-relative paths (`/<root dir name>/<relative path>`), matching the
/// form the runtime sweep classifies. Sorted for stable report output.
pub fn discover_asset_paths(asset_dir: &Path) -> Result<Vec<String>, AuditError> {
    if !asset_dir.is_dir() {
        return Err(AuditError::MissingAssetDir(asset_dir.to_path_buf()));
    }

    let root_name = asset_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "assets".to_string());

    let mut paths = Vec::new();
    walk_directory(asset_dir, asset_dir, &root_name, &mut paths)?;
    paths.sort();

    Ok(paths)
}

fn walk_directory(
    root: &Path,
    dir: &Path,
    root_name: &str,
    out: &mut Vec<String>,
) -> Result<(), AuditError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            walk_directory(root, &path, root_name, out)?;
        } else if is_asset_file(&path) {
            if let Ok(relative) = path.strip_prefix(root) {
                // Normalise to forward slashes so the audited string is
                // byte-identical to the runtime canonical path.
                let relative = relative.to_string_lossy().replace('\\', "/");
                out.push(format!("/{}/{}", root_name, relative));
            }
        }
    }

    Ok(())
}

fn is_asset_file(path: &Path) -> bool {
    path.extension()
        .map(|extension| {
            let ext = extension.to_string_lossy().to_lowercase();
            ASSET_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
