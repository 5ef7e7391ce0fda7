use crate::app::App;

mod app;
mod components;

fn main() {
    gloo_console::log!("roadwatch: mounting report board");
    yew::Renderer::<App>::new().render();
}
