use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod animation {
    pub mod ambient;
    pub mod reveal;
    pub mod scrub;
    pub mod tilt;
    pub mod trigger;
}
mod components {
    pub mod anchor_link;
    pub mod countdown;
    pub mod floating;
    pub mod scroll_indicator;
}
mod sections {
    pub mod benefits;
    pub mod cta;
    pub mod footer;
    pub mod header;
    pub mod intro;
    pub mod problem;
    pub mod solution;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
