//! Update function for the report board component.
//!
//! Each submit handler runs as one `spawn_local` task with a single await
//! (the request), then reports back through a `*Finished` message. Results
//! are applied to `Board` in the order they arrive; nothing stops a second
//! submission while one is in flight.

use common::board::{Effect, FormKind};
use common::response::{CommentResponse, SubmitResponse};
use gloo_console as console;
use gloo_file::futures::read_as_data_url;
use web_sys::HtmlFormElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{form_data, notify, now_utc, post_form, reset_form};
use super::messages::Msg;
use super::state::ReportBoardComponent;

/// Central update function for the component.
///
/// Returns `true` when the board changed and the view must re-render.
pub fn update(
    component: &mut ReportBoardComponent,
    ctx: &Context<ReportBoardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SubmitReport => {
            let Some(form) = component.submission_form_ref.cast::<HtmlFormElement>() else {
                return false;
            };
            let body = form_data(&form);
            let endpoint = component.config.submit_endpoint.clone();
            let link = ctx.link().clone();

            component.board.begin_submission();
            spawn_local(async move {
                let result = match body {
                    Ok(body) => post_form::<SubmitResponse>(&endpoint, body).await,
                    Err(err) => Err(err),
                };
                link.send_message(Msg::SubmissionFinished(result));
            });
            true
        }
        Msg::SubmissionFinished(result) => {
            let effects = component.board.finish_submission(result);
            apply_effects(component, effects);
            true
        }
        Msg::SubmitComment => {
            let Some(form) = component.comment_form_ref.cast::<HtmlFormElement>() else {
                return false;
            };
            let body = form_data(&form);
            let content = body
                .as_ref()
                .ok()
                .and_then(|b| b.get("content").as_string())
                .unwrap_or_default();
            let endpoint = component.config.comment_endpoint.clone();
            let link = ctx.link().clone();

            spawn_local(async move {
                let result = match body {
                    Ok(body) => post_form::<CommentResponse>(&endpoint, body).await,
                    Err(err) => Err(err),
                };
                link.send_message(Msg::CommentFinished { content, result });
            });
            false
        }
        Msg::CommentFinished { content, result } => {
            let effects = component.board.finish_comment(&content, result, now_utc());
            apply_effects(component, effects);
            true
        }
        Msg::PhotoSelected(None) => false,
        Msg::PhotoSelected(Some(file)) => {
            let ticket = component.board.next_preview();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let file = gloo_file::File::from(file);
                match read_as_data_url(&file).await {
                    Ok(data_url) => link.send_message(Msg::PreviewLoaded(ticket, data_url)),
                    Err(err) => console::error!(format!("could not read photo: {}", err)),
                }
            });
            false
        }
        Msg::PreviewLoaded(ticket, data_url) => component.board.show_preview(ticket, data_url),
    }
}

/// Carries out what `Board` asked for, in order.
fn apply_effects(component: &ReportBoardComponent, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Notify(message) => notify(&message),
            Effect::ResetForm(FormKind::Submission) => {
                reset_form(&component.submission_form_ref)
            }
            Effect::ResetForm(FormKind::Comment) => reset_form(&component.comment_form_ref),
            Effect::Log(line) => console::error!(line),
        }
    }
}
