//! Response schemas of the two endpoints and the boundary that validates them.
//!
//! Bodies are read as text first and decoded here, so a body that is not the
//! expected shape turns into [`ClientError::MalformedResponse`] instead of a
//! missing-field panic somewhere in the view.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::model::comment::Comment;
use crate::model::submission::Submission;

/// Body of a successful `POST /submit`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub submission: Submission,
}

/// Body of a successful `POST /comment`.
///
/// The server may echo the stored comment or send a bare acknowledgement;
/// both decode into this type.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CommentResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

/// Body sent with a failure status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decodes a response body according to its HTTP status.
///
/// - 2xx: the body must decode as `T`, otherwise `MalformedResponse`.
/// - anything else: `Rejected` when the body carries `{ "error": ... }`,
///   `Status` when it does not.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    if is_success(status) {
        return serde_json::from_str::<T>(body).map_err(|e| {
            debug!("status {} body did not match schema: {}", status, e);
            ClientError::MalformedResponse(e.to_string())
        });
    }

    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) => Err(ClientError::Rejected {
            status,
            message: error,
        }),
        Err(e) => {
            debug!("status {} without error body: {}", status, e);
            Err(ClientError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_decodes_submission() {
        let body = json!({
            "message": "ok",
            "submission": {
                "id": 7,
                "location": "Main St",
                "photo": "p.jpg",
                "created_at": "2024-01-01 10:00:00"
            }
        })
        .to_string();

        let resp: SubmitResponse = interpret(200, &body).unwrap();
        assert_eq!(resp.message.as_deref(), Some("ok"));
        assert_eq!(resp.submission.id, 7);
        assert_eq!(resp.submission.location, "Main St");
    }

    #[test]
    fn success_with_wrong_shape_is_malformed() {
        let err = interpret::<SubmitResponse>(200, r#"{"id": 7}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn success_with_non_json_is_malformed() {
        let err = interpret::<CommentResponse>(201, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn failure_with_error_body_is_rejected() {
        let err = interpret::<CommentResponse>(400, r#"{"error":"Too long"}"#).unwrap_err();
        assert_eq!(
            err,
            ClientError::Rejected {
                status: 400,
                message: "Too long".into()
            }
        );
    }

    #[test]
    fn failure_without_error_body_keeps_status() {
        let err = interpret::<SubmitResponse>(500, "Internal Server Error").unwrap_err();
        assert_eq!(err, ClientError::Status(500));
    }

    #[test]
    fn bare_acknowledgement_is_a_valid_comment_response() {
        let resp: CommentResponse = interpret(200, "{}").unwrap();
        assert_eq!(resp, CommentResponse::default());

        let resp: CommentResponse = interpret(
            200,
            r#"{"success":true,"message":"Comment added successfully"}"#,
        )
        .unwrap();
        assert_eq!(resp.success, Some(true));
        assert!(resp.comment.is_none());
    }

    #[test]
    fn echoed_comment_is_decoded() {
        let body = json!({
            "success": true,
            "comment": {"id": 3, "content": "Pothole here", "created_at": "2024-01-01 10:00 AM"}
        })
        .to_string();
        let resp: CommentResponse = interpret(200, &body).unwrap();
        let comment = resp.comment.unwrap();
        assert_eq!(comment.id, Some(3));
        assert_eq!(comment.content, "Pothole here");
    }
}
