//! Report board: the page's form interaction controller.
//!
//! Wires the submission form, the photo preview and the comment form to
//! the server. State transitions live in `common::board::Board`; the
//! submodules here only translate browser events into `Msg`s, run the
//! requests, and carry out the effects `Board` returns.

use yew::prelude::*;

mod cards;
mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use helpers::load_settings;
pub use messages::Msg;
pub use props::ReportBoardProps;
pub use state::ReportBoardComponent;

impl Component for ReportBoardComponent {
    type Message = Msg;
    type Properties = ReportBoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings = ctx.props().settings.clone();
        ReportBoardComponent::new(settings.client, settings.page)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
