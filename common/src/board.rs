//! Single owner of everything the page shows.
//!
//! `Board` never touches the DOM. Each operation updates the state and
//! returns the [`Effect`]s the view layer must carry out (notifications,
//! form resets, console logging). The frontend component owns one `Board`
//! and re-renders from it after each operation.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::config::PageContext;
use crate::datetime::{display_timestamp, format_date};
use crate::error::ClientError;
use crate::model::comment::{Comment, RenderedComment};
use crate::model::submission::Submission;
use crate::response::{CommentResponse, SubmitResponse};

pub const SUBMITTED_FALLBACK: &str = "Your report has been submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Submission,
    Comment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Blocking notification with this exact text.
    Notify(String),
    /// Clear the fields of the given form.
    ResetForm(FormKind),
    /// Diagnostic line for the console error channel.
    Log(String),
}

/// Identifies one photo read. Only the newest ticket may install a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

#[derive(Debug)]
pub struct Board {
    tz: Tz,
    /// Newest first.
    submissions: Vec<Submission>,
    /// Oldest first.
    comments: Vec<RenderedComment>,
    preview: Option<String>,
    preview_generation: u64,
    in_flight: u32,
}

impl Board {
    pub fn new(tz: Tz, page: &PageContext) -> Self {
        let comments = page
            .comments
            .iter()
            .map(|c| render_stored_comment(c, tz))
            .collect();
        Self {
            tz,
            submissions: page.submissions.clone(),
            comments,
            preview: None,
            preview_generation: 0,
            in_flight: 0,
        }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn comments(&self) -> &[RenderedComment] {
        &self.comments
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// True while at least one submission request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Marks a submission request as started. Overlapping submissions are
    /// allowed; the indicator stays up until the last one finishes.
    pub fn begin_submission(&mut self) {
        self.in_flight += 1;
    }

    /// Applies the outcome of `POST /submit`.
    ///
    /// Always releases the loading indicator taken by [`Board::begin_submission`].
    pub fn finish_submission(&mut self, result: Result<SubmitResponse, ClientError>) -> Vec<Effect> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(SubmitResponse {
                message,
                submission,
            }) => {
                debug!("submission {} accepted", submission.id);
                self.submissions.insert(0, submission);
                // The reset empties the photo input, so its preview goes too.
                self.clear_preview();
                vec![
                    Effect::Notify(message.unwrap_or_else(|| SUBMITTED_FALLBACK.to_string())),
                    Effect::ResetForm(FormKind::Submission),
                ]
            }
            Err(err) => failure_effects(&err),
        }
    }

    /// Applies the outcome of `POST /comment`.
    ///
    /// `submitted` is the text the user typed; it is shown when the server
    /// only acknowledges. The timestamp is generated here from `now`.
    pub fn finish_comment(
        &mut self,
        submitted: &str,
        result: Result<CommentResponse, ClientError>,
        now: DateTime<Utc>,
    ) -> Vec<Effect> {
        match result {
            Ok(resp) => {
                let content = resp
                    .comment
                    .map(|c| c.content)
                    .unwrap_or_else(|| submitted.to_string());
                self.comments.push(RenderedComment {
                    content,
                    timestamp: format_date(now, self.tz),
                });
                vec![Effect::ResetForm(FormKind::Comment)]
            }
            Err(err) => failure_effects(&err),
        }
    }

    /// Starts a new photo read and invalidates any read still running.
    pub fn next_preview(&mut self) -> PreviewTicket {
        self.preview_generation += 1;
        PreviewTicket(self.preview_generation)
    }

    /// Installs a finished read, replacing the previous preview.
    ///
    /// Returns false when a newer selection has happened since `ticket` was issued.
    pub fn show_preview(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.0 != self.preview_generation {
            debug!("dropping stale preview {}", ticket.0);
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    pub fn clear_preview(&mut self) {
        self.preview_generation += 1;
        self.preview = None;
    }
}

fn failure_effects(err: &ClientError) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if err.is_diagnostic() {
        effects.push(Effect::Log(err.to_string()));
    }
    effects.push(Effect::Notify(err.user_message()));
    effects
}

fn render_stored_comment(comment: &Comment, tz: Tz) -> RenderedComment {
    RenderedComment {
        content: comment.content.clone(),
        timestamp: comment
            .created_at
            .as_deref()
            .map(|raw| display_timestamp(raw, tz))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE;
    use crate::response::interpret;
    use chrono::TimeZone;
    use chrono_tz::America::Denver;
    use serde_json::json;

    fn board() -> Board {
        Board::new(Denver, &PageContext::default())
    }

    fn main_st_body() -> String {
        json!({
            "message": "ok",
            "submission": {
                "id": 7,
                "location": "Main St",
                "photo": "p.jpg",
                "created_at": "2024-01-01 10:00:00"
            }
        })
        .to_string()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    fn resets(effects: &[Effect], kind: FormKind) -> usize {
        effects
            .iter()
            .filter(|e| **e == Effect::ResetForm(kind))
            .count()
    }

    #[test]
    fn successful_submission_prepends_one_card_and_resets_once() {
        let mut board = board();
        board.begin_submission();
        board.finish_submission(interpret(200, &main_st_body()));

        let mut body: serde_json::Value = serde_json::from_str(&main_st_body()).unwrap();
        body["submission"]["id"] = json!(8);
        body["submission"]["location"] = json!("Elm St");

        board.begin_submission();
        let effects = board.finish_submission(interpret(200, &body.to_string()));

        assert_eq!(resets(&effects, FormKind::Submission), 1);
        assert_eq!(board.submissions().len(), 2);
        assert_eq!(board.submissions()[0].location, "Elm St");
        assert_eq!(board.submissions()[1].location, "Main St");
    }

    #[test]
    fn main_st_scenario_puts_card_first_with_photo_url() {
        let mut board = board();
        board.begin_submission();
        let effects = board.finish_submission(interpret(200, &main_st_body()));

        let first = &board.submissions()[0];
        assert_eq!(first.location, "Main St");
        assert_eq!(first.photo_url("/static/uploads/"), "/static/uploads/p.jpg");
        assert_eq!(effects[0], Effect::Notify("ok".into()));
    }

    #[test]
    fn missing_message_uses_fallback_notification() {
        let mut board = board();
        board.begin_submission();
        let body = json!({
            "submission": {"id": 1, "location": "A", "photo": "a.png", "created_at": "2024-01-01 10:00:00"}
        });
        let effects = board.finish_submission(interpret(200, &body.to_string()));
        assert_eq!(effects[0], Effect::Notify(SUBMITTED_FALLBACK.into()));
    }

    #[test]
    fn unrecognised_status_still_adds_card() {
        let mut board = board();
        board.begin_submission();
        let body = json!({
            "message": "ok",
            "submission": {
                "id": 9,
                "location": "Main St",
                "photo": "p.jpg",
                "created_at": "2024-01-01 10:00:00",
                "status": "resolved"
            }
        });
        let effects = board.finish_submission(interpret(200, &body.to_string()));

        assert_eq!(
            effects,
            vec![
                Effect::Notify("ok".into()),
                Effect::ResetForm(FormKind::Submission),
            ]
        );
        assert_eq!(board.submissions().len(), 1);
        assert_eq!(board.submissions()[0].status, "resolved");
    }

    #[test]
    fn rejected_submission_notifies_server_text_without_reset() {
        let mut board = board();
        board.begin_submission();
        let effects = board.finish_submission(interpret(400, r#"{"error":"X"}"#));

        assert_eq!(effects, vec![Effect::Notify("Error: X".into())]);
        assert_eq!(resets(&effects, FormKind::Submission), 0);
        assert!(board.submissions().is_empty());
    }

    #[test]
    fn loading_is_released_on_every_path() {
        let mut board = board();

        board.begin_submission();
        assert!(board.is_loading());
        board.finish_submission(interpret(200, &main_st_body()));
        assert!(!board.is_loading());

        board.begin_submission();
        board.finish_submission(interpret(500, r#"{"error":"boom"}"#));
        assert!(!board.is_loading());

        board.begin_submission();
        let effects =
            board.finish_submission(Err(ClientError::Transport("connection reset".into())));
        assert!(!board.is_loading());
        assert_eq!(
            effects,
            vec![
                Effect::Log("Transport error: connection reset".into()),
                Effect::Notify(GENERIC_FAILURE.into()),
            ]
        );
    }

    #[test]
    fn overlapping_submissions_keep_indicator_until_last_finishes() {
        let mut board = board();
        board.begin_submission();
        board.begin_submission();

        board.finish_submission(interpret(200, &main_st_body()));
        assert!(board.is_loading());
        board.finish_submission(Err(ClientError::Status(502)));
        assert!(!board.is_loading());
    }

    #[test]
    fn malformed_success_body_is_logged_and_generic() {
        let mut board = board();
        board.begin_submission();
        let effects = board.finish_submission(interpret(200, r#"{"id": 7}"#));

        assert!(matches!(effects[0], Effect::Log(ref line) if line.starts_with("Malformed response")));
        assert_eq!(effects[1], Effect::Notify(GENERIC_FAILURE.into()));
        assert!(board.submissions().is_empty());
    }

    #[test]
    fn rejected_comment_leaves_list_unchanged() {
        let mut board = board();
        let effects = board.finish_comment(
            "Pothole here",
            interpret(422, r#"{"error":"Too long"}"#),
            now(),
        );

        assert_eq!(effects, vec![Effect::Notify("Error: Too long".into())]);
        assert!(board.comments().is_empty());
    }

    #[test]
    fn acknowledged_comment_uses_typed_text_and_client_stamp() {
        let mut board = board();
        let effects = board.finish_comment("Pothole here", interpret(200, "{}"), now());

        assert_eq!(effects, vec![Effect::ResetForm(FormKind::Comment)]);
        assert_eq!(
            board.comments(),
            &[RenderedComment {
                content: "Pothole here".into(),
                timestamp: "1/1/2024, 3:00:00 AM".into(),
            }]
        );
    }

    #[test]
    fn echoed_comment_content_wins_and_is_appended_last() {
        let page = PageContext {
            comments: vec![Comment {
                id: Some(1),
                content: "first".into(),
                created_at: Some("2024-01-01 10:00:00".into()),
            }],
            ..PageContext::default()
        };
        let mut board = Board::new(Denver, &page);
        let body = json!({"comment": {"content": "Pothole here!", "created_at": "2024-01-01 10:00 AM"}});
        board.finish_comment("Pothole here", interpret(200, &body.to_string()), now());

        assert_eq!(board.comments().len(), 2);
        assert_eq!(board.comments()[0].timestamp, "1/1/2024, 3:00:00 AM");
        assert_eq!(board.comments()[1].content, "Pothole here!");
    }

    #[test]
    fn second_photo_replaces_first_preview() {
        let mut board = board();
        let first = board.next_preview();
        assert!(board.show_preview(first, "data:image/png;base64,AAA".into()));
        let second = board.next_preview();
        assert!(board.show_preview(second, "data:image/png;base64,BBB".into()));

        assert_eq!(board.preview(), Some("data:image/png;base64,BBB"));
    }

    #[test]
    fn slow_first_read_cannot_overwrite_newer_preview() {
        let mut board = board();
        let first = board.next_preview();
        let second = board.next_preview();

        assert!(board.show_preview(second, "second".into()));
        assert!(!board.show_preview(first, "first".into()));
        assert_eq!(board.preview(), Some("second"));
    }

    #[test]
    fn successful_submission_drops_preview() {
        let mut board = board();
        let ticket = board.next_preview();
        board.show_preview(ticket, "data:image/jpeg;base64,CCC".into());

        board.begin_submission();
        board.finish_submission(interpret(201, &main_st_body()));
        assert_eq!(board.preview(), None);
    }

    #[test]
    fn failed_submission_keeps_preview() {
        let mut board = board();
        let ticket = board.next_preview();
        board.show_preview(ticket, "data:image/jpeg;base64,CCC".into());

        board.begin_submission();
        board.finish_submission(interpret(400, r#"{"error":"Invalid file type"}"#));
        assert_eq!(board.preview(), Some("data:image/jpeg;base64,CCC"));
    }
}
