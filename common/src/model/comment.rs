use serde::{Deserialize, Serialize};

/// A comment attached to a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: Option<i64>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A comment as it is shown in the comment list: text plus an already
/// formatted timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedComment {
    pub content: String,
    pub timestamp: String,
}
