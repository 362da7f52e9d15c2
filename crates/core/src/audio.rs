use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::BundleError;

/// MIME type of the narration produced by the backend.
pub const AUDIO_MIME: &str = "audio/mpeg";

const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Origin of the processing backend that serves generated audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOrigin(String);

impl BackendOrigin {
    /// # Errors
    ///
    /// Returns `BundleError::InvalidOrigin` unless `raw` is an absolute
    /// `http` or `https` URL.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, BundleError> {
        let raw = raw.as_ref().trim();
        let invalid = || BundleError::InvalidOrigin {
            raw: raw.to_string(),
        };
        let url = Url::parse(raw).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(invalid());
        }
        Ok(Self(raw.trim_end_matches('/').to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve a backend-relative audio path into a playable source.
    ///
    /// The path is appended verbatim so the backend's route prefix survives.
    #[must_use]
    pub fn audio_source(&self, path: &str) -> AudioSource {
        AudioSource {
            src: format!("{}{}", self.0, path),
            mime: AUDIO_MIME,
        }
    }
}

impl Default for BackendOrigin {
    fn default() -> Self {
        Self(DEFAULT_ORIGIN.to_string())
    }
}

impl FromStr for BackendOrigin {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BackendOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    pub src: String,
    pub mime: &'static str,
}
