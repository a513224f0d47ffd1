use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom;
use crate::scroll::{in_viewport, use_scroll_metrics};

/// Nominal frame length the per-frame increment is derived from.
const FRAME_MS: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Animating,
    Done,
}

/// Count-up animation for one `.counter`.
///
/// Phases only move forward: Idle -> Animating -> Done. Re-entering the
/// viewport after the first time changes nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / FRAME_MS).max(1.0);
        Self {
            target,
            current: 0.0,
            increment: target as f64 / frames,
            phase: CounterPhase::Idle,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn enter_view(self) -> Self {
        match self.phase {
            CounterPhase::Idle => Self {
                phase: CounterPhase::Animating,
                ..self
            },
            _ => self,
        }
    }

    /// Advances one animation frame.
    pub fn tick(self) -> Self {
        if self.phase != CounterPhase::Animating {
            return self;
        }
        let current = self.current + self.increment;
        if current < self.target as f64 {
            Self { current, ..self }
        } else {
            Self {
                current: self.target as f64,
                phase: CounterPhase::Done,
                ..self
            }
        }
    }

    pub fn display(&self) -> u64 {
        match self.phase {
            CounterPhase::Done => self.target,
            _ => (self.current.floor() as u64).min(self.target),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let metrics = use_scroll_metrics();
    let node = use_node_ref();
    let animation = {
        let target = props.target;
        let duration = config.counter_duration_ms;
        use_state(move || CounterAnimation::new(target, duration))
    };

    {
        let animation = animation.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if animation.phase() == CounterPhase::Idle {
                    if let Some(el) = node.cast::<web_sys::Element>() {
                        let (top, bottom) = dom::viewport_edges(&el);
                        if in_viewport(top, bottom, metrics.viewport_height) {
                            animation.set(animation.enter_view());
                        }
                    }
                }
                || ()
            },
            metrics,
        );
    }

    // One tick per animation frame while animating.
    {
        let current = *animation;
        let animation = animation.clone();
        use_effect_with_deps(
            move |current: &CounterAnimation| {
                let frame = if current.phase() == CounterPhase::Animating {
                    let next = current.tick();
                    dom::request_frame(move || animation.set(next))
                } else {
                    None
                };
                move || drop(frame)
            },
            current,
        );
    }

    let animated = animation.phase() != CounterPhase::Idle;
    html! {
        <span
            ref={node}
            class={classes!("counter", animated.then(|| "animated"), props.class.clone())}
            data-target={props.target.to_string()}
        >
            {animation.display()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut counter: CounterAnimation) -> Vec<u64> {
        let mut shown = vec![counter.display()];
        while counter.phase() == CounterPhase::Animating {
            counter = counter.tick();
            shown.push(counter.display());
        }
        shown
    }

    #[test]
    fn test_counts_up_to_exact_target() {
        let shown = run(CounterAnimation::new(100, 2000).enter_view());
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert!(shown.iter().all(|&v| v <= 100));
        assert_eq!(shown.last(), Some(&100));
        // roughly 2000ms worth of 16ms frames
        assert!((125..=128).contains(&shown.len()));
    }

    #[test]
    fn test_done_counter_does_not_restart() {
        let mut counter = CounterAnimation::new(100, 2000).enter_view();
        while counter.phase() != CounterPhase::Done {
            counter = counter.tick();
        }
        let again = counter.enter_view();
        assert_eq!(again.phase(), CounterPhase::Done);
        assert_eq!(again.tick().display(), 100);
    }

    #[test]
    fn test_reentering_while_animating_keeps_progress() {
        let counter = CounterAnimation::new(1000, 2000).enter_view().tick().tick();
        let shown = counter.display();
        assert_eq!(counter.enter_view().display(), shown);
        assert_eq!(counter.enter_view().phase(), CounterPhase::Animating);
    }

    #[test]
    fn test_frames_rekey_until_done() {
        let mut counter = CounterAnimation::new(10, 2000).enter_view();
        while counter.phase() == CounterPhase::Animating {
            let next = counter.tick();
            assert_ne!(next, counter);
            counter = next;
        }
        assert_eq!(counter.tick(), counter);
    }

    #[test]
    fn test_idle_counter_ignores_ticks() {
        let counter = CounterAnimation::new(50, 2000);
        assert_eq!(counter.tick().display(), 0);
        assert_eq!(counter.tick().phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_zero_target_finishes_on_first_frame() {
        let counter = CounterAnimation::new(0, 2000).enter_view().tick();
        assert_eq!(counter.phase(), CounterPhase::Done);
        assert_eq!(counter.display(), 0);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = CounterAnimation::new(42, 0).enter_view().tick();
        assert_eq!(counter.phase(), CounterPhase::Done);
        assert_eq!(counter.display(), 42);
    }
}
