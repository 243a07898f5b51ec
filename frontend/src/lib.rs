use log::info;
use yew::prelude::*;

pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod state;
pub mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    html! { <Landing /> }
}

/// Installs the panic hook and console logger, then mounts the page on
/// `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log", e.to_string());
    }

    info!("Starting campaign page");
    yew::Renderer::<App>::new().render();
}
