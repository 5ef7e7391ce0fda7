use serde::{Deserialize, Serialize};

/// A reported road damage issue as returned by the server.
///
/// The client never creates these; it receives them from `POST /submit`
/// or from the page settings and renders them as cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub location: String,
    /// Stored file name of the uploaded photo, relative to the uploads folder.
    pub photo: String,
    /// Creation time exactly as the server formatted it.
    pub created_at: String,
    /// Moderation status. Moderators may set any string; `active` when absent.
    #[serde(default = "default_status")]
    pub status: String,
}

pub const STATUS_ACTIVE: &str = "active";

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

impl Submission {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Human readable status, e.g. `on_hold` becomes `On hold`.
    pub fn status_label(&self) -> String {
        let spaced = self.status.replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Public URL of the photo given the uploads prefix, e.g. `/static/uploads/`.
    pub fn photo_url(&self, uploads_prefix: &str) -> String {
        join_path(uploads_prefix, &self.photo)
    }

    /// Path of the server-rendered detail page for this submission.
    pub fn detail_path(&self, detail_prefix: &str) -> String {
        join_path(detail_prefix, &self.id.to_string())
    }
}

fn join_path(prefix: &str, tail: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        tail.trim_start_matches('/')
    )
}
