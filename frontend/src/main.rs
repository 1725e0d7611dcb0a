use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod helpers;
mod navigation;

fn main() {
    yew::Renderer::<App>::new().render();
}
