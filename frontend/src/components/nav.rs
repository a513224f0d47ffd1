use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::SiteConfig;
use crate::dom;
use crate::scroll::{active_section, navbar_scrolled, use_scroll_metrics, SectionBox};

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Beranda"),
    ("#services", "Layanan"),
    ("#about", "Tentang"),
    ("#blog", "Blog"),
    ("#contact", "Kontak"),
];

fn section_boxes() -> Vec<SectionBox> {
    dom::query_all_html("section[id]")
        .into_iter()
        .map(|section| SectionBox {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

fn contains(container: &NodeRef, target: Option<&Node>) -> bool {
    container
        .get()
        .map_or(false, |node| node.contains(target))
}

#[derive(Properties, PartialEq)]
pub struct AnchorProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after a successful in-page scroll.
    #[prop_or_default]
    pub onnavigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page `#id` link that scrolls smoothly and clears the fixed navbar
/// instead of jumping to the fragment.
#[function_component(Anchor)]
pub fn anchor(props: &AnchorProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if dom::scroll_to_anchor(&href) {
                onnavigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let metrics = use_scroll_metrics();
    let menu_open = use_state(|| false);
    let active = use_state(|| None::<String>);
    let collapse = use_node_ref();
    let toggler = use_node_ref();

    // Links only change when some section matches; otherwise the last one stays.
    {
        let active = active.clone();
        let offset = config.nav_offset;
        use_effect_with_deps(
            move |metrics| {
                let sections = section_boxes();
                if let Some(id) = active_section(&sections, metrics.scroll_y, offset) {
                    if active.as_deref() != Some(id) {
                        active.set(Some(id.to_string()));
                    }
                }
                || ()
            },
            metrics,
        );
    }

    {
        use_effect_with_deps(
            move |open| {
                dom::set_body_style("overflow", if *open { "hidden" } else { "auto" });
                || ()
            },
            *menu_open,
        );
    }

    {
        let menu_open = menu_open.clone();
        let collapse = collapse.clone();
        let toggler = toggler.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !*menu_open {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !contains(&collapse, target.as_ref()) && !contains(&toggler, target.as_ref()) {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(false))
    };

    let scrolled = navbar_scrolled(metrics.scroll_y, config.navbar_scrolled_threshold);

    html! {
        <nav id="mainNav" class={classes!("navbar", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Anchor href="#home" class="nav-logo" onnavigate={close_menu.clone()}>
                    {"Edammura"}
                </Anchor>
                <button
                    ref={toggler}
                    class={classes!("navbar-toggler", (*menu_open).then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div ref={collapse} class={classes!("navbar-collapse", (*menu_open).then(|| "show"))}>
                    {
                        for NAV_LINKS.iter().map(|&(href, label)| {
                            let is_active = active.as_deref() == Some(&href[1..]);
                            html! {
                                <Anchor
                                    {href}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onnavigate={close_menu.clone()}
                                >
                                    {label}
                                </Anchor>
                            }
                        })
                    }
                    { for props.children.iter() }
                </div>
            </div>
        </nav>
    }
}
