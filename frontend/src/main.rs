use log::{error, info, Level};
use web_sys::ErrorEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod config;
mod dom;
mod scroll;
mod validation;
mod components {
    pub mod counter;
    pub mod cursor_trail;
    pub mod effects;
    pub mod forms;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod scroll_top;
    pub mod theme_toggle;
    pub mod typewriter;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::{
    cursor_trail::{CursorTrail, MIN_VIEWPORT_WIDTH},
    effects::{use_load_timing, Preloader},
    nav::Nav,
    notification::NotificationProvider,
    scroll_top::{ScrollProgress, ScrollToTop},
    theme_toggle::{self, LocalThemeStore, ThemeToggle},
};
use config::SiteConfig;
use pages::{home::Home, not_found::NotFound};
use scroll::{use_scroll_coordinator, ScrollMetrics};

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
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
    initial_dark: bool,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let metrics = use_scroll_coordinator();
    use_load_timing();

    use_event_with_window("error", |e: ErrorEvent| {
        error!(
            "An error occurred: {} ({}:{})",
            e.message(),
            e.filename(),
            e.lineno()
        );
    });

    let config = &props.config;
    let show_trail = config.cursor_trail && metrics.viewport_width > MIN_VIEWPORT_WIDTH;

    html! {
        <ContextProvider<SiteConfig> context={config.clone()}>
            <ContextProvider<ScrollMetrics> context={metrics}>
                <NotificationProvider>
                    <BrowserRouter>
                        <Preloader />
                        if config.progress_bar {
                            <ScrollProgress />
                        }
                        <Nav>
                            <ThemeToggle initial_dark={props.initial_dark} />
                        </Nav>
                        <Switch<Route> render={switch} />
                        <ScrollToTop />
                        if show_trail {
                            <CursorTrail />
                        }
                    </BrowserRouter>
                </NotificationProvider>
            </ContextProvider<ScrollMetrics>>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    gloo_console::log!(
        "%c Welcome to Edammura Software Consultant! ",
        "background: #6c63ff; color: white; font-size: 20px; padding: 10px; border-radius: 5px;"
    );
    gloo_console::log!("%c Developed with ❤️ by Edammura Team", "color: #6c63ff; font-size: 14px;");

    let config = SiteConfig::from_document();
    dom::set_root_style("scroll-behavior", "smooth");
    let initial_dark = theme_toggle::restore(&LocalThemeStore);

    info!("🚀 Edammura Software Consultant - starting application");
    yew::Renderer::<App>::with_props(AppProps {
        config,
        initial_dark,
    })
    .render();
}
