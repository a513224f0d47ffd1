use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom::FrameLoop;

const EASING: f64 = 0.3;
const CIRCLE_RADIUS: f64 = 12.0;
/// Below this width the trail is not mounted.
pub const MIN_VIEWPORT_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Circles chasing the cursor, each easing towards the next one's last spot.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: Vec<(f64, f64)>,
}

impl Trail {
    pub fn new(len: usize) -> Self {
        Self {
            points: vec![(0.0, 0.0); len],
        }
    }

    pub fn step(&mut self, cursor: (f64, f64)) -> Vec<TrailDot> {
        let len = self.points.len();
        let (mut x, mut y) = cursor;
        let mut dots = Vec::with_capacity(len);
        for i in 0..len {
            dots.push(TrailDot {
                x: x - CIRCLE_RADIUS,
                y: y - CIRCLE_RADIUS,
                scale: (len - i) as f64 / len as f64,
            });
            self.points[i] = (x, y);
            let (nx, ny) = self.points[(i + 1) % len];
            x += (nx - x) * EASING;
            y += (ny - y) * EASING;
        }
        dots
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorTrailProps {
    #[prop_or(12)]
    pub circles: usize,
}

#[function_component(CursorTrail)]
pub fn cursor_trail(props: &CursorTrailProps) -> Html {
    let cursor = use_state(|| Rc::new(Cell::new((0.0_f64, 0.0_f64))));
    let dots = use_state(Vec::<TrailDot>::new);

    {
        let cursor = (*cursor).clone();
        use_event_with_window("mousemove", move |e: web_sys::MouseEvent| {
            cursor.set((f64::from(e.client_x()), f64::from(e.client_y())));
        });
    }

    {
        let cursor = (*cursor).clone();
        let dots = dots.clone();
        use_effect_with_deps(
            move |len: &usize| {
                let mut trail = Trail::new(*len);
                let frames = FrameLoop::start(move || dots.set(trail.step(cursor.get())));
                move || drop(frames)
            },
            props.circles,
        );
    }

    html! {
        <div class="cursor-trail" aria-hidden="true">
            { for dots.iter().map(|dot| html! {
                <div
                    class="cursor-circle"
                    style={format!(
                        "left: {}px; top: {}px; transform: scale({});",
                        dot.x, dot.y, dot.scale
                    )}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_sits_on_cursor_and_scales_down() {
        let mut trail = Trail::new(4);
        let dots = trail.step((100.0, 50.0));
        assert_eq!(dots[0].x, 88.0);
        assert_eq!(dots[0].y, 38.0);
        assert_eq!(dots[0].scale, 1.0);
        assert_eq!(dots[3].scale, 0.25);
    }

    #[test]
    fn test_tail_converges_on_still_cursor() {
        let mut trail = Trail::new(5);
        let mut dots = Vec::new();
        for _ in 0..200 {
            dots = trail.step((300.0, 200.0));
        }
        for dot in dots {
            assert!((dot.x - 288.0).abs() < 1e-6);
            assert!((dot.y - 188.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_trail() {
        assert!(Trail::new(0).step((1.0, 1.0)).is_empty());
    }
}
