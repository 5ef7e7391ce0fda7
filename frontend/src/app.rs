use crate::components::report::{load_settings, ReportBoardComponent};
use common::config::Settings;
use yew::{html, Component, Context, Html};

pub struct App {
    settings: Settings,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            settings: load_settings(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <ReportBoardComponent settings={self.settings.clone()} />
            </div>
        }
    }
}
