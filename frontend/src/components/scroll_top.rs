use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom;
use crate::scroll::{progress_percent, scroll_top_visible, use_scroll_metrics};

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let metrics = use_scroll_metrics();
    let visible = scroll_top_visible(metrics.scroll_y, config.scroll_top_threshold);

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            dom::smooth_scroll_to(&window, 0.0);
        }
    });

    html! {
        <button
            id="scrollToTop"
            class={classes!("scroll-to-top", visible.then(|| "show"))}
            aria-label="Scroll to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let metrics = use_scroll_metrics();
    let width = progress_percent(&metrics);

    html! {
        <div
            id="scrollProgress"
            style={format!(
                "position: fixed; top: 0; left: 0; height: 4px; \
                 background: linear-gradient(90deg, #6c63ff, #5a52d5); width: {}%; \
                 z-index: 10000; transition: width 0.1s ease;",
                width
            )}
        />
    }
}
