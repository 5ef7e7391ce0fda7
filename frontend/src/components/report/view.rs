//! View rendering for the report board.
//!
//! The results list is always rendered. The submission form with its photo
//! preview, and the comment list and form of a single submission, appear
//! only when the page variant enables them. Submit events never navigate;
//! they are turned into messages after `prevent_default`.

use common::datetime::display_timestamp;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::cards::{comment_block, submission_card};
use super::dialogs::loading::loading_overlay;
use super::messages::Msg;
use super::state::ReportBoardComponent;

pub fn view(component: &ReportBoardComponent, ctx: &Context<ReportBoardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="report-board">
            <header class="mb-6">
                <h1 class="text-2xl font-bold">{ component.site_name.clone() }</h1>
            </header>
            {
                if component.show_submission_form {
                    build_submission_form(component, link)
                } else {
                    html! {}
                }
            }
            { build_results(component) }
            {
                match component.submission_id {
                    Some(id) => build_comments(component, link, id),
                    None => html! {},
                }
            }
            { loading_overlay(component.board.is_loading()) }
        </div>
    }
}

fn build_submission_form(
    component: &ReportBoardComponent,
    link: &Scope<ReportBoardComponent>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitReport
    });
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::PhotoSelected(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <form id="submission-form" ref={component.submission_form_ref.clone()} {onsubmit}>
            <label for="location">{ "Location" }</label>
            <input id="location" name="location" type="text" required={true} />

            <div class="photo-field">
                <label for="photo">{ "Photo" }</label>
                <input id="photo" name="photo" type="file" accept="image/*" required={true} {onchange} />
                {
                    match component.board.preview() {
                        Some(data_url) => html! {
                            <img class="photo-preview mt-2 max-w-xs" src={data_url.to_string()} alt="Selected photo" />
                        },
                        None => html! {},
                    }
                }
            </div>

            <button type="submit">{ "Submit report" }</button>
        </form>
    }
}

fn build_results(component: &ReportBoardComponent) -> Html {
    let tz = component.board.tz();
    let config = &component.config;

    html! {
        <div id="submissions-container">
            {
                for component.board.submissions().iter().map(|s| {
                    submission_card(
                        s,
                        s.photo_url(&config.uploads_prefix),
                        s.detail_path(&config.detail_prefix),
                        display_timestamp(&s.created_at, tz),
                    )
                })
            }
        </div>
    }
}

fn build_comments(
    component: &ReportBoardComponent,
    link: &Scope<ReportBoardComponent>,
    submission_id: i64,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitComment
    });

    html! {
        <section class="comments mt-8">
            <h2 class="text-xl font-bold">{ "Comments" }</h2>
            <div id="comments-container">
                { for component.board.comments().iter().map(comment_block) }
            </div>
            <form id="comment-form" ref={component.comment_form_ref.clone()} {onsubmit}>
                <input type="hidden" name="submission_id" value={submission_id.to_string()} />
                <textarea name="content" required={true} rows="3" />
                <button type="submit">{ "Post comment" }</button>
            </form>
        </section>
    }
}
