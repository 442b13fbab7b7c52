//! Remote configuration for the `walk_logs` table.
//!
//! The Supabase project URL and its anonymous key are public values shipped
//! with the client. Both must be present for remote sync; with neither, the
//! service runs local-only.

use std::fmt;

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Environment variable holding the Supabase project URL.
pub const SUPABASE_URL_ENV: &str = "DOGWALK_SUPABASE_URL";
/// Environment variable holding the Supabase anonymous API key.
pub const SUPABASE_ANON_KEY_ENV: &str = "DOGWALK_SUPABASE_ANON_KEY";

const REST_PATH: &str = "/rest/v1";

/// Supabase project URL and anonymous API key.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    supabase_url: String,
    anon_key: String,
}

impl RemoteConfig {
    /// Validate and normalize a project URL and anon key.
    ///
    /// The URL must use `http://` or `https://`; trailing slashes and a
    /// trailing `/rest/v1` are stripped.
    pub fn new(supabase_url: impl AsRef<str>, anon_key: impl Into<String>) -> Result<Self> {
        let supabase_url = normalize_project_url(supabase_url.as_ref())?;
        let anon_key = anon_key.into().trim().to_string();
        if anon_key.is_empty() {
            return Err(Error::InvalidInput(
                "Supabase anon key must not be empty".to_string(),
            ));
        }
        Ok(Self {
            supabase_url,
            anon_key,
        })
    }

    /// Build a config from optional values.
    ///
    /// Returns `Ok(None)` when neither value is set, and an error when only
    /// one of them is.
    pub fn resolve(url: Option<String>, anon_key: Option<String>) -> Result<Option<Self>> {
        match (normalize_text_option(url), normalize_text_option(anon_key)) {
            (None, None) => Ok(None),
            (Some(url), Some(anon_key)) => Self::new(url, anon_key).map(Some),
            _ => Err(Error::InvalidInput(format!(
                "set both {SUPABASE_URL_ENV} and {SUPABASE_ANON_KEY_ENV} to enable sync"
            ))),
        }
    }

    pub fn supabase_url(&self) -> &str {
        &self.supabase_url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// PostgREST base URL, e.g. `https://project.supabase.co/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}{REST_PATH}", self.supabase_url)
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RemoteConfig")
            .field("supabase_url", &self.supabase_url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

fn normalize_project_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "Supabase URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(trimmed) {
        return Err(Error::InvalidInput(
            "Supabase URL must include http:// or https://".to_string(),
        ));
    }
    Ok(trimmed
        .strip_suffix(REST_PATH)
        .unwrap_or(trimmed)
        .trim_end_matches('/')
        .to_string())
}
