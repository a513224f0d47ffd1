use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::SiteConfig;
use crate::dom;
use crate::scroll::{in_viewport, parallax_offset, use_scroll_metrics};

#[derive(Properties, PartialEq)]
pub struct ParallaxLayerProps {
    /// `parallax-bg` or `parallax-bg-light`.
    #[prop_or(Classes::from("parallax-bg"))]
    pub class: Classes,
}

#[function_component(ParallaxLayer)]
pub fn parallax_layer(props: &ParallaxLayerProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let metrics = use_scroll_metrics();
    let offset = parallax_offset(metrics.scroll_y, config.parallax_speed);

    html! {
        <div
            class={props.class.clone()}
            style={format!("transform: translateY({}px)", offset)}
            aria-hidden="true"
        />
    }
}

pub const RESTING_TILT: &str = "perspective(1000px) rotateX(0) rotateY(0) scale(1)";

/// Rotation (degrees) for a pointer at `(x, y)` inside a `width` x `height` card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn at(width: f64, height: f64, x: f64, y: f64) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / 10.0,
            rotate_y: (width / 2.0 - x) / 10.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale(1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    /// `service-card`, `feature-box` or `blog-card`.
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node = use_node_ref();
    let transform = use_state(|| None::<String>);

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        let enabled = config.tilt_cards;
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            if let Some(card) = node.cast::<web_sys::Element>() {
                let rect = card.get_bounding_client_rect();
                let x = f64::from(e.client_x()) - rect.left();
                let y = f64::from(e.client_y()) - rect.top();
                transform.set(Some(Tilt::at(rect.width(), rect.height(), x, y).transform()));
            }
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(None))
    };

    let style = (*transform)
        .as_ref()
        .map(|t| format!("transform: {}", t))
        .unwrap_or_else(|| format!("transform: {}", RESTING_TILT));

    html! {
        <div ref={node} class={props.class.clone()} {style} {onmousemove} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `img[data-src]` that only gets its real `src` once it reaches the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let metrics = use_scroll_metrics();
    let node = use_node_ref();
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |metrics| {
                if !*loaded {
                    if let Some(img) = node.cast::<web_sys::Element>() {
                        let (top, bottom) = dom::viewport_edges(&img);
                        if in_viewport(top, bottom, metrics.viewport_height) {
                            loaded.set(true);
                        }
                    }
                }
                || ()
            },
            metrics,
        );
    }

    html! {
        <img
            ref={node}
            class={classes!(props.class.clone(), (*loaded).then(|| "fade-in"))}
            data-src={props.src.clone()}
            src={(*loaded).then(|| props.src.clone())}
            alt={props.alt.clone()}
        />
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Visible,
    Fading,
    Hidden,
}

const PRELOADER_FADE_MS: u32 = 500;

#[function_component(Preloader)]
pub fn preloader() -> Html {
    let phase = use_state(|| PreloaderPhase::Visible);

    let start_fade = {
        let phase = phase.clone();
        move || {
            if *phase != PreloaderPhase::Visible {
                return;
            }
            phase.set(PreloaderPhase::Fading);
            let phase = phase.clone();
            Timeout::new(PRELOADER_FADE_MS, move || phase.set(PreloaderPhase::Hidden)).forget();
        }
    };

    {
        let start_fade = start_fade.clone();
        use_event_with_window("load", move |_: web_sys::Event| start_fade());
    }

    // The wasm bundle can finish loading after the window's load event.
    use_effect_with_deps(
        move |_| {
            if dom::document_loaded() {
                start_fade();
            }
            || ()
        },
        (),
    );

    let style = match *phase {
        PreloaderPhase::Visible => "opacity: 1",
        PreloaderPhase::Fading => "opacity: 0; transition: opacity 0.5s ease",
        PreloaderPhase::Hidden => "display: none",
    };

    html! {
        <div class="preloader" {style}>
            <div class="spinner"></div>
        </div>
    }
}

/// Logs how long the page took to load, once it has.
#[hook]
pub fn use_load_timing() {
    let report = || {
        if let Some(ms) = dom::page_load_time() {
            info!("⚡ Page Load Time: {}ms", ms);
        }
    };

    use_event_with_window("load", move |_: web_sys::Event| {
        // loadEventEnd is only recorded after the handlers return.
        Timeout::new(0, report).forget();
    });

    use_effect_with_deps(
        move |_| {
            if dom::document_loaded() {
                report();
            }
            || ()
        },
        (),
    );
}
