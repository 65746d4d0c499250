use std::io;
use std::path::{Component, Path, PathBuf};

use tokio::fs;

use crate::errors::AppError;

/// A static file resolved from the assets directory, ready to serve.
#[derive(Debug)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Joins a requested relative path onto the assets root. Anything but plain
/// path segments (parent hops, absolute paths, prefixes) is rejected.
pub fn resolve_asset_path(root: &Path, requested: &str) -> Result<PathBuf, AppError> {
    if requested.is_empty() {
        return Err(AppError::InvalidPath(requested.to_string()));
    }

    let relative = Path::new(requested);
    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(AppError::InvalidPath(requested.to_string())),
        }
    }

    Ok(root.join(relative))
}

/// Reads one asset from disk and detects its content type, preferring magic
/// bytes over the file extension.
pub async fn read_asset(root: &Path, requested: &str) -> Result<Asset, AppError> {
    let path = resolve_asset_path(root, requested)?;

    let bytes = fs::read(&path).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::NotFound(format!("asset '{requested}'")),
        _ => AppError::InternalError(format!("Failed to read asset '{requested}': {e}")),
    })?;

    let content_type = detect_content_type(&path, &bytes);
    Ok(Asset { bytes, content_type })
}

fn detect_content_type(path: &Path, bytes: &[u8]) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }

    // Text formats carry no magic bytes; fall back to the extension.
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("svg") => "image/svg+xml",
        Some("html") => "text/html",
        Some("txt") | Some("md") => "text/plain",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_hops_are_rejected() {
        let root = Path::new("public");
        assert!(resolve_asset_path(root, "../secrets.txt").is_err());
        assert!(resolve_asset_path(root, "images/../../etc/passwd").is_err());
        assert!(resolve_asset_path(root, "/etc/passwd").is_err());
        assert!(resolve_asset_path(root, "").is_err());
    }

    #[test]
    fn nested_plain_segments_are_allowed() {
        let root = Path::new("public");
        let path = resolve_asset_path(root, "thesis-images/ios-app-prototypes.png");
        assert_eq!(path.ok(), Some(PathBuf::from("public/thesis-images/ios-app-prototypes.png")));
    }

    #[test]
    fn content_type_prefers_magic_bytes() {
        let png_header = [0x89u8, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(detect_content_type(Path::new("odd.bin"), &png_header), "image/png");
    }

    #[test]
    fn text_formats_fall_back_to_extension() {
        assert_eq!(detect_content_type(Path::new("styles.css"), b"body{}"), "text/css");
        assert_eq!(detect_content_type(Path::new("unknown.xyz"), b"??"), "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_assets_surface_as_not_found() {
        let result = read_asset(Path::new("public"), "definitely-not-there.png").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
