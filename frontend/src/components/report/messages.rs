use common::board::PreviewTicket;
use common::error::ClientError;
use common::response::{CommentResponse, SubmitResponse};

pub enum Msg {
    SubmitReport,
    SubmissionFinished(Result<SubmitResponse, ClientError>),
    SubmitComment,
    CommentFinished {
        content: String,
        result: Result<CommentResponse, ClientError>,
    },
    PhotoSelected(Option<web_sys::File>),
    PreviewLoaded(PreviewTicket, String),
}
