use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::SiteConfig;

/// How much of `text` has been typed so far, counted in chars.
#[derive(Clone, Debug, PartialEq)]
pub struct Typing {
    text: AttrValue,
    shown: usize,
    total: usize,
}

impl Typing {
    pub fn new(text: AttrValue) -> Self {
        let total = text.chars().count();
        Self { text, shown: 0, total }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    pub fn tick(&self) -> Self {
        Self {
            shown: (self.shown + 1).min(self.total),
            ..self.clone()
        }
    }

    pub fn visible(&self) -> String {
        self.text.chars().take(self.shown).collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Types `text` out one character at a time. Timers run to completion.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let typing = {
        let text = props.text.clone();
        use_state(move || Typing::new(text))
    };

    {
        let current = (*typing).clone();
        let typing = typing.clone();
        let speed = config.typing_speed_ms;
        use_effect_with_deps(
            move |current: &Typing| {
                if !current.is_done() {
                    let next = current.tick();
                    Timeout::new(speed, move || typing.set(next)).forget();
                }
                || ()
            },
            current,
        );
    }

    html! {
        <span class={classes!("typed-text", props.class.clone())} aria-label={props.text.clone()}>
            {typing.visible()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_tick() {
        let mut typing = Typing::new(AttrValue::from("Hello"));
        assert_eq!(typing.visible(), "");
        for _ in 0..3 {
            typing = typing.tick();
        }
        assert_eq!(typing.visible(), "Hel");
        assert!(!typing.is_done());
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundaries() {
        let mut typing = Typing::new(AttrValue::from("Solusi 🚀 digital"));
        for _ in 0..8 {
            typing = typing.tick();
        }
        assert_eq!(typing.visible(), "Solusi 🚀");
    }

    #[test]
    fn test_finishes_and_stays_finished() {
        let mut typing = Typing::new(AttrValue::from("ab"));
        for _ in 0..5 {
            typing = typing.tick();
        }
        assert!(typing.is_done());
        assert_eq!(typing.visible(), "ab");
    }

    #[test]
    fn test_each_char_rekeys_until_done() {
        let mut typing = Typing::new(AttrValue::from("abc"));
        while !typing.is_done() {
            let next = typing.tick();
            assert_ne!(next, typing);
            typing = next;
        }
        assert_eq!(typing.tick(), typing);
    }

    #[test]
    fn test_empty_text_is_done_immediately() {
        assert!(Typing::new(AttrValue::from("")).is_done());
    }
}
