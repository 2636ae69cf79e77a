use serde::Deserialize;

/// One playable audio asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub name: String,
    pub src: String,
}

impl Track {
    pub fn new(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src: src.into(),
        }
    }
}

pub fn default_playlist() -> Vec<Track> {
    vec![
        Track::new(
            "Sound of Java Orchestra",
            "/static/audio/sound_of_java_orchestra.ogg",
        ),
        Track::new("Sabilulungan", "/static/audio/sabilulungan.ogg"),
    ]
}

/// User-facing strings. Defaults are the Indonesian copy the host pages ship with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Shown next to the spinner on a submitting button.
    pub processing: String,
    /// Track label when a track is requested from an empty playlist.
    pub no_track: String,
    /// Track label when the player cannot start at all.
    pub empty_playlist: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            processing: "Memproses...".to_string(),
            no_track: "Tidak ada lagu".to_string(),
            empty_playlist: "Tidak ada lagu dalam playlist.".to_string(),
        }
    }
}

fn default_storage_prefix() -> String {
    "music_".to_string()
}

/// Everything the page script can be tuned with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_playlist")]
    pub playlist: Vec<Track>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default = "default_storage_prefix")]
    pub storage_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            playlist: default_playlist(),
            labels: Labels::default(),
            storage_prefix: default_storage_prefix(),
        }
    }
}

#[derive(Debug)]
pub struct ConfigError(String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid page config: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ConfigError(e.to_string()))
    }

    /// Parses an optional embedded config document, falling back to defaults when it is
    /// missing or malformed.
    pub fn from_embedded(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                crate::diagnostics::log_warn("config", &format!("{err}; using defaults"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_shipped_pages() {
        let config = PageConfig::default();
        assert_eq!(config.playlist.len(), 2);
        assert_eq!(config.playlist[1].name, "Sabilulungan");
        assert_eq!(config.storage_prefix, "music_");
        assert_eq!(config.labels.processing, "Memproses...");
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = PageConfig::from_json(
            r#"{"labels": {"processing": "Processing..."}, "playlist": []}"#,
        )
        .unwrap();
        assert!(config.playlist.is_empty());
        assert_eq!(config.labels.processing, "Processing...");
        assert_eq!(config.labels.no_track, "Tidak ada lagu");
        assert_eq!(config.storage_prefix, "music_");
    }

    #[test]
    fn malformed_json_is_an_error_but_embedded_falls_back() {
        assert!(PageConfig::from_json("{not json").is_err());
        assert_eq!(
            PageConfig::from_embedded(Some("{not json")),
            PageConfig::default()
        );
        assert_eq!(PageConfig::from_embedded(None), PageConfig::default());
        assert_eq!(PageConfig::from_embedded(Some("  ")), PageConfig::default());
    }
}
