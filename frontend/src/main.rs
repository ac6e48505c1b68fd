use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::info;
use web_sys::MouseEvent;

mod config;
mod error;
mod catalog;
mod pricing;
mod motion {
    pub mod visibility;
    pub mod gate;
    pub mod schedule;
    pub mod progress;
    pub mod particles;
}
mod hooks {
    pub mod viewport;
    pub mod idle;
    pub mod frame;
    pub mod scroll;
}
mod components {
    pub mod lazy_section;
    pub mod lazy_image;
    pub mod animated_section;
    pub mod section_wrapper;
    pub mod parallax_section;
    pub mod sand_particles;
    pub mod preloader;
    pub mod licensing;
    pub mod contact_form;
    pub mod shared_styles;
}
mod pages {
    pub mod landing;
    pub mod licensing;
    pub mod not_found;
}

use components::preloader::Preloader;
use pages::{
    landing::Landing,
    licensing::LicensingPage,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/licensing")]
    Licensing,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Licensing => {
            info!("Rendering Licensing page");
            html! { <LicensingPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > f64::from(config::NAV_SCROLL_THRESHOLD_PX);

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

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Aurum Vault"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#products" class="nav-link" onclick={close_menu.clone()}>{"Bullion"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Licensing} classes="nav-link">
                            {"Licensing"}
                        </Link<Route>>
                    </div>
                    <a href="/#contact" class="nav-contact-button" onclick={close_menu}>{"Contact"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(11, 11, 13, 0.92);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }
                    .nav-logo {
                        color: #d4af37;
                        font-weight: 700;
                        letter-spacing: 0.12em;
                        text-decoration: none;
                        text-transform: uppercase;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                        align-items: center;
                    }
                    .nav-link, .nav-contact-button {
                        color: #f4efe3;
                        text-decoration: none;
                    }
                    .nav-contact-button {
                        border: 1px solid #d4af37;
                        border-radius: 999px;
                        padding: 0.5rem 1.25rem;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #f4efe3;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(11, 11, 13, 0.97);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Preloader />
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
