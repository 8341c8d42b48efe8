//! MIME type detection for manifest icons.

use std::path::Path;

/// Image MIME type constants accepted by install prompts.
pub mod types {
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
    pub const BMP: &str = "image/bmp";
}

/// Get MIME type for an icon file.
///
/// Defaults to `image/x-icon` for unknown types, which is what platforms
/// assume for extensionless favicons.
pub fn for_icon(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).map(|s| s.to_lowercase()) {
        Some(ext) => match ext.as_str() {
            "png" => types::PNG,
            "svg" => types::SVG,
            "avif" => types::AVIF,
            "webp" => types::WEBP,
            "gif" => types::GIF,
            "jpg" | "jpeg" => types::JPEG,
            "bmp" => types::BMP,
            _ => types::ICO,
        },
        None => types::ICO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_for_icon() {
        assert_eq!(for_icon(&PathBuf::from("favicon.ico")), types::ICO);
        assert_eq!(for_icon(&PathBuf::from("pwa-192.png")), types::PNG);
        assert_eq!(for_icon(&PathBuf::from("pwa-logo.svg")), types::SVG);
        assert_eq!(for_icon(&PathBuf::from("LOGO.SVG")), types::SVG);
        assert_eq!(for_icon(&PathBuf::from("photo.jpeg")), types::JPEG);
        assert_eq!(for_icon(&PathBuf::from("favicon.unknown")), types::ICO);
        assert_eq!(for_icon(&PathBuf::from("favicon")), types::ICO);
    }
}
