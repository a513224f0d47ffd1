use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom;
use crate::scroll::{in_reveal_range, use_scroll_metrics};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Scheduled,
    Revealed,
}

impl RevealState {
    /// Only a hidden element that came into range moves on.
    pub fn on_frame(self, in_range: bool) -> Self {
        match (self, in_range) {
            (RevealState::Hidden, true) => RevealState::Scheduled,
            (state, _) => state,
        }
    }

    pub fn on_timer(self) -> Self {
        match self {
            RevealState::Scheduled => RevealState::Revealed,
            state => state,
        }
    }
}

/// Explicit `data-delay` wins; otherwise elements stagger in groups of four.
pub fn reveal_delay(data_delay: Option<u32>, index: usize, stagger_ms: u32) -> u32 {
    data_delay.unwrap_or_else(|| (index % 4) as u32 * stagger_ms)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    /// `.scroll-reveal`, gains `revealed` after its delay.
    Reveal,
    /// `.animate-on-scroll`, gains `animated` straight away.
    Animate,
}

impl RevealKind {
    fn marker(self) -> &'static str {
        match self {
            RevealKind::Reveal => "scroll-reveal",
            RevealKind::Animate => "animate-on-scroll",
        }
    }

    fn done_class(self) -> &'static str {
        match self {
            RevealKind::Reveal => "revealed",
            RevealKind::Animate => "animated",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    /// Position among the page's reveal elements, used for the default stagger.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub delay: Option<u32>,
    #[prop_or(RevealKind::Reveal)]
    pub kind: RevealKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let metrics = use_scroll_metrics();
    let node = use_node_ref();
    let state = use_state(|| RevealState::Hidden);

    let delay = match props.kind {
        RevealKind::Reveal => reveal_delay(props.delay, props.index, config.reveal_stagger_ms),
        RevealKind::Animate => 0,
    };

    {
        let state = state.clone();
        let node = node.clone();
        let offset = config.reveal_offset;
        use_effect_with_deps(
            move |metrics| {
                if *state == RevealState::Hidden {
                    if let Some(el) = node.cast::<web_sys::Element>() {
                        let (top, _) = dom::viewport_edges(&el);
                        let in_range = in_reveal_range(top, metrics.viewport_height, offset);
                        let next = state.on_frame(in_range);
                        if next != *state {
                            state.set(next);
                        }
                    }
                }
                || ()
            },
            metrics,
        );
    }

    {
        let current = *state;
        let state = state.clone();
        use_effect_with_deps(
            move |current| {
                if *current == RevealState::Scheduled {
                    let target = current.on_timer();
                    if delay == 0 {
                        state.set(target);
                    } else {
                        Timeout::new(delay, move || state.set(target)).forget();
                    }
                }
                || ()
            },
            current,
        );
    }

    let done = (*state == RevealState::Revealed).then(|| props.kind.done_class());
    html! {
        <div
            ref={node}
            class={classes!(props.kind.marker(), done, props.class.clone())}
            data-delay={props.delay.map(|d| d.to_string())}
        >
            { for props.children.iter() }
        </div>
    }
}
