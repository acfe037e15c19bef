use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod error;
mod motion {
    pub mod easing;
    pub mod props;
    pub mod trigger;
    pub mod tween;
    pub mod toggle;
    pub mod stack;
    pub mod entrance;
    pub mod stage;
    pub mod scene;
    pub mod driver;
    pub mod dom;
}
mod pages {
    pub mod landing;
}
mod components {
    pub mod feature_card;
    pub mod protocol_card;
}

use pages::landing::{Landing, PHONE_DISPLAY, PHONE_HREF};

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
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    // Background, blur and border colour are driven by the scroll motion
    // once the page has mounted; the class list stays static.
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Hartwell"}<span class="nav-logo-accent">{" Heating & Plumbing"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#services" class="nav-link" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="#how-we-work" class="nav-link" onclick={close_menu.clone()}>{"How we work"}</a>
                    <a href="#contact" class="nav-link" onclick={close_menu.clone()}>{"Contact"}</a>
                    <a href={PHONE_HREF} class="nav-call-button" onclick={close_menu}>
                        {format!("Call {}", PHONE_DISPLAY)}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
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
