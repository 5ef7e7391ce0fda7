use common::model::comment::RenderedComment;
use common::model::submission::Submission;
use yew::prelude::*;

/// One reported issue in the results list.
///
/// `created` is the already formatted timestamp.
pub fn submission_card(
    submission: &Submission,
    photo_url: String,
    detail_path: String,
    created: String,
) -> Html {
    html! {
        <div class="submission-card bg-white rounded shadow p-4 mb-4" key={submission.id.to_string()}>
            <img
                src={photo_url}
                alt={format!("Road damage at {}", submission.location)}
                class="w-full h-48 object-cover rounded"
            />
            <h3 class="font-bold mt-2">{ submission.location.clone() }</h3>
            <p class="text-sm text-gray-500">{ created }</p>
            {
                if !submission.is_active() {
                    html! { <span class="status-badge">{ submission.status_label() }</span> }
                } else {
                    html! {}
                }
            }
            <a href={detail_path} class="text-blue-600">{ "View details" }</a>
        </div>
    }
}

pub fn comment_block(comment: &RenderedComment) -> Html {
    html! {
        <div class="bg-gray-100 p-3 rounded mb-2">
            <p>{ comment.content.clone() }</p>
            <p class="text-sm text-gray-500">{ comment.timestamp.clone() }</p>
        </div>
    }
}
