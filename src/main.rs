use yew::prelude::*;
use log::info;

mod config;
mod motion {
    pub mod context;
    pub mod dom;
    pub mod ease;
    pub mod error;
    pub mod playback;
    pub mod snap;
    pub mod style;
    pub mod timeline;
}
mod pages {
    pub mod landing;
    pub mod scenes;
}
mod components {
    pub mod lead_form;
    pub mod nav;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
