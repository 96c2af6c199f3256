mod api;
mod app;
mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod utils;
use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
