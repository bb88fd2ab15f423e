//! Persisted play settings and the share codes that carry them.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use ladders_core::{Difficulty, OvershootRule, Rules, StartPosition};
use serde::{Deserialize, Serialize};

const SHARE_DOMAIN: &str = "ladders";
const SHARE_VERSION: &str = "v1";
/// Identifier prefix emitted before the encoded settings payload.
pub(crate) const SHARE_HEADER: &str = "ladders:v1";
const FIELD_DELIMITER: char = ':';

/// Match setup remembered between runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) difficulty: Difficulty,
    pub(crate) player_names: Vec<String>,
    pub(crate) start: StartPosition,
    pub(crate) overshoot: OvershootRule,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            player_names: vec!["Player 1".to_owned(), "Player 2".to_owned()],
            start: StartPosition::default(),
            overshoot: OvershootRule::default(),
        }
    }
}

impl Settings {
    /// Rule variants selected by these settings.
    pub(crate) fn rules(&self) -> Rules {
        Rules {
            start: self.start,
            overshoot: self.overshoot,
        }
    }

    /// Reads settings from a TOML file.
    pub(crate) fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Reads settings from `path`, or the defaults when the file is missing.
    pub(crate) fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes settings to `path` as TOML.
    pub(crate) fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encodes the settings into a single-line share code.
    pub(crate) fn encode(&self) -> Result<String, ShareCodeError> {
        let json = serde_json::to_vec(self).map_err(ShareCodeError::InvalidPayload)?;
        Ok(format!("{SHARE_HEADER}:{}", STANDARD_NO_PAD.encode(json)))
    }

    /// Decodes settings from a share code.
    pub(crate) fn decode(value: &str) -> Result<Self, ShareCodeError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ShareCodeError::EmptyPayload);
        }

        let mut parts = trimmed.splitn(3, FIELD_DELIMITER);
        let domain = parts.next().ok_or(ShareCodeError::MissingPrefix)?;
        let version = parts.next().ok_or(ShareCodeError::MissingVersion)?;
        let payload = parts.next().ok_or(ShareCodeError::MissingPayload)?;

        if domain != SHARE_DOMAIN {
            return Err(ShareCodeError::InvalidPrefix(domain.to_owned()));
        }
        if version != SHARE_VERSION {
            return Err(ShareCodeError::UnsupportedVersion(version.to_owned()));
        }

        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(ShareCodeError::InvalidEncoding)?;
        serde_json::from_slice(&bytes).map_err(ShareCodeError::InvalidPayload)
    }
}

/// Errors raised while reading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SettingsError {
    #[error("could not read settings from {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write settings to {}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("settings file is not valid TOML")]
    Parse(#[from] toml::de::Error),
    #[error("settings could not be rendered as TOML")]
    Render(#[from] toml::ser::Error),
}

/// Errors that can occur while decoding share codes.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ShareCodeError {
    #[error("share code was empty")]
    EmptyPayload,
    #[error("share code is missing the prefix")]
    MissingPrefix,
    #[error("share code is missing the version")]
    MissingVersion,
    #[error("share code is missing the payload")]
    MissingPayload,
    #[error("share code prefix '{0}' is not supported")]
    InvalidPrefix(String),
    #[error("share code version '{0}' is not supported")]
    UnsupportedVersion(String),
    #[error("could not decode share code payload")]
    InvalidEncoding(#[source] base64::DecodeError),
    #[error("could not parse share code payload")]
    InvalidPayload(#[source] serde_json::Error),
}
