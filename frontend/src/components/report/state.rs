//! Component state for the report board.
//!
//! Page content lives in [`Board`]; this struct adds the settings the view
//! needs and the DOM handles the effects are applied to.

use common::board::Board;
use common::config::{ClientConfig, PageContext};
use yew::prelude::*;

pub struct ReportBoardComponent {
    /// Submissions, comments, preview and loading state.
    pub board: Board,

    /// Endpoints and URL prefixes.
    pub config: ClientConfig,

    pub site_name: String,

    /// Whether this page variant carries the submission form.
    pub show_submission_form: bool,

    /// Submission the comment form posts for; `None` hides comments entirely.
    pub submission_id: Option<i64>,

    /// The `<form>` reset after a successful submission.
    pub submission_form_ref: NodeRef,

    /// The `<form>` reset after a successful comment.
    pub comment_form_ref: NodeRef,
}

impl ReportBoardComponent {
    pub fn new(config: ClientConfig, page: PageContext) -> Self {
        let board = Board::new(config.display_tz(), &page);
        Self {
            board,
            config,
            site_name: page.site_name,
            show_submission_form: page.show_submission_form,
            submission_id: page.submission_id,
            submission_form_ref: Default::default(),
            comment_form_ref: Default::default(),
        }
    }
}
