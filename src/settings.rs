use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bitmap::is_image_file;

/// Persisted configuration for the readout. Every field tolerates being
/// absent from the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// When enabled the logger is initialised at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Extra file extensions (beyond the built-in raster set) the host wants
    /// treated as images, e.g. for formats it decodes itself.
    #[serde(default)]
    pub extra_image_extensions: Vec<String>,
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Whether a file should be treated as a displayable image, taking the
    /// configured extra extensions into account.
    pub fn recognizes_image(&self, path: &Path) -> bool {
        if is_image_file(path) {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extra_image_extensions
                    .iter()
                    .any(|extra| extra.eq_ignore_ascii_case(ext))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::path::Path;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(!settings.debug_logging);
        assert!(settings.extra_image_extensions.is_empty());
    }

    #[test]
    fn extra_extensions_extend_the_builtin_set() {
        let settings = Settings {
            extra_image_extensions: vec!["tga".into()],
            ..Settings::default()
        };
        assert!(settings.recognizes_image(Path::new("sprite.TGA")));
        assert!(settings.recognizes_image(Path::new("shot.png")));
        assert!(!settings.recognizes_image(Path::new("doc.pdf")));
    }
}
