//! Page settings.
//!
//! The host page may embed a JSON object with two optional sections:
//!
//! ```json
//! {
//!   "client": { "submit_endpoint": "/submit", "timezone": "America/Denver" },
//!   "page": { "show_submission_form": true, "submission_id": 7 }
//! }
//! ```
//!
//! Every field has a default, so `{}` and a missing element are both valid.

use chrono_tz::Tz;
use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::comment::Comment;
use crate::model::submission::Submission;

pub const DEFAULT_SITE_NAME: &str = "Colorado Citizens Project - Report Damaged Road";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Denver;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub client: ClientConfig,
    pub page: PageContext,
}

/// Where requests go and how things are displayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub submit_endpoint: String,
    pub comment_endpoint: String,
    pub uploads_prefix: String,
    pub detail_prefix: String,
    /// IANA name of the display timezone.
    pub timezone: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            submit_endpoint: "/submit".to_string(),
            comment_endpoint: "/comment".to_string(),
            uploads_prefix: "/static/uploads/".to_string(),
            detail_prefix: "/submission/".to_string(),
            timezone: "America/Denver".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::Timezone(self.timezone.clone()))
    }

    /// The configured timezone, or Denver when the name does not resolve.
    pub fn display_tz(&self) -> Tz {
        self.tz().unwrap_or(DEFAULT_TIMEZONE)
    }
}

/// Which features this page variant carries and what it starts with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageContext {
    pub site_name: String,
    pub show_submission_form: bool,
    /// Submission the comment form posts for. No comment form without it.
    pub submission_id: Option<i64>,
    pub submissions: Vec<Submission>,
    pub comments: Vec<Comment>,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            show_submission_form: true,
            submission_id: None,
            submissions: Vec::new(),
            comments: Vec::new(),
        }
    }
}

impl Settings {
    /// Parses embedded settings and checks the timezone name.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.client.tz()?;
        debug!(
            "settings loaded: submit={} comment={} tz={}",
            settings.client.submit_endpoint,
            settings.client.comment_endpoint,
            settings.client.timezone
        );
        Ok(settings)
    }
}
