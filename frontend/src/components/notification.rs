use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#4caf50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196f3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

pub enum ToastAction {
    Show { message: String, severity: Severity },
    BeginExit(u64),
    Remove(u64),
}

/// Holds the single live notification.
///
/// Dismissal timers are never cancelled, so `BeginExit` and `Remove` carry
/// the id they were scheduled for and are ignored once a newer toast took
/// its place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toaster {
    current: Option<Notification>,
    next_id: u64,
}

impl Toaster {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    fn with_current(&self, current: Option<Notification>) -> Self {
        Self {
            current,
            next_id: self.next_id,
        }
    }
}

impl Reducible for Toaster {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Show { message, severity } => Rc::new(Toaster {
                current: Some(Notification {
                    id: self.next_id,
                    message,
                    severity,
                    phase: ToastPhase::Entering,
                }),
                next_id: self.next_id + 1,
            }),
            ToastAction::BeginExit(id) => {
                let leaving = match &self.current {
                    Some(n) if n.id == id && n.phase == ToastPhase::Entering => Some(Notification {
                        phase: ToastPhase::Leaving,
                        ..n.clone()
                    }),
                    _ => None,
                };
                match leaving {
                    Some(n) => Rc::new(self.with_current(Some(n))),
                    None => self,
                }
            }
            ToastAction::Remove(id) => {
                if self.current.as_ref().map_or(false, |n| n.id == id) {
                    Rc::new(self.with_current(None))
                } else {
                    self
                }
            }
        }
    }
}

/// Handle handed to anything that wants to raise a toast.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    show: Callback<(String, Severity)>,
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.show.emit((message.into(), severity));
    }
}

const TOAST_KEYFRAMES: &str = r#"
    @keyframes slideInRight {
        from { transform: translateX(400px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOutRight {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(400px); opacity: 0; }
    }
"#;

fn toast_style(notification: &Notification) -> String {
    let animation = match notification.phase {
        ToastPhase::Entering => "slideInRight 0.5s ease",
        ToastPhase::Leaving => "slideOutRight 0.5s ease forwards",
    };
    format!(
        "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
         padding: 15px 25px; border-radius: 10px; box-shadow: 0 5px 20px rgba(0,0,0,0.2); \
         z-index: 10000; animation: {}; font-family: 'Poppins', sans-serif;",
        notification.severity.background(),
        animation
    )
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides a [`Notifier`] to its children and renders the live toast.
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let toaster = use_reducer(Toaster::default);

    // Rebuilt only when the gate changes, so consumers are not re-rendered on
    // every scroll frame.
    let notifier = {
        let dispatcher = toaster.dispatcher();
        use_memo(
            move |&enabled| Notifier {
                show: Callback::from(move |(message, severity): (String, Severity)| {
                    if enabled {
                        dispatcher.dispatch(ToastAction::Show { message, severity });
                    } else {
                        info!("Notification suppressed ({}): {}", severity.as_str(), message);
                    }
                }),
            },
            config.notifications,
        )
    };

    // Each new toast gets its own dismissal timers.
    {
        let dispatcher = toaster.dispatcher();
        let shown_id = toaster.current().map(|n| n.id);
        let display_ms = config.toast_duration_ms;
        let exit_ms = config.toast_exit_ms;
        use_effect_with_deps(
            move |shown_id| {
                if let Some(id) = *shown_id {
                    Timeout::new(display_ms, move || {
                        dispatcher.dispatch(ToastAction::BeginExit(id));
                        Timeout::new(exit_ms, move || {
                            dispatcher.dispatch(ToastAction::Remove(id));
                        })
                        .forget();
                    })
                    .forget();
                }
                || ()
            },
            shown_id,
        );
    }

    let toast = match toaster.current() {
        Some(n) => html! {
            <div
                key={n.id.to_string()}
                class={classes!("notification", format!("notification-{}", n.severity.as_str()))}
                style={toast_style(n)}
                role="status"
            >
                {n.message.clone()}
            </div>
        },
        None => html! {},
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            <style>{TOAST_KEYFRAMES}</style>
            { for props.children.iter() }
            {toast}
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_equality_follows_callback_identity() {
        let notifier = Notifier {
            show: Callback::from(|_: (String, Severity)| ()),
        };
        assert!(notifier == notifier.clone());

        let rebuilt = Notifier {
            show: Callback::from(|_: (String, Severity)| ()),
        };
        assert!(notifier != rebuilt);
    }

    fn show(toaster: Rc<Toaster>, message: &str, severity: Severity) -> Rc<Toaster> {
        toaster.reduce(ToastAction::Show {
            message: message.to_string(),
            severity,
        })
    }

    #[test]
    fn test_second_toast_replaces_first() {
        let toaster = Rc::new(Toaster::default());
        let toaster = show(toaster, "first", Severity::Info);
        let toaster = show(toaster, "second", Severity::Error);

        let current = toaster.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.phase, ToastPhase::Entering);
    }

    #[test]
    fn test_stale_timers_do_not_touch_newer_toast() {
        let toaster = Rc::new(Toaster::default());
        let toaster = show(toaster, "first", Severity::Info);
        let first_id = toaster.current().unwrap().id;
        let toaster = show(toaster, "second", Severity::Success);

        let toaster = toaster.reduce(ToastAction::BeginExit(first_id));
        assert_eq!(toaster.current().unwrap().phase, ToastPhase::Entering);

        let toaster = toaster.reduce(ToastAction::Remove(first_id));
        assert_eq!(toaster.current().unwrap().message, "second");
    }

    #[test]
    fn test_exit_then_remove() {
        let toaster = show(Rc::new(Toaster::default()), "bye", Severity::Success);
        let id = toaster.current().unwrap().id;

        let toaster = toaster.reduce(ToastAction::BeginExit(id));
        assert_eq!(toaster.current().unwrap().phase, ToastPhase::Leaving);

        let toaster = toaster.reduce(ToastAction::Remove(id));
        assert!(toaster.current().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let toaster = show(Rc::new(Toaster::default()), "a", Severity::Info);
        let a = toaster.current().unwrap().id;
        let toaster = toaster.reduce(ToastAction::Remove(a));
        let toaster = show(toaster, "b", Severity::Info);
        assert_ne!(toaster.current().unwrap().id, a);
    }

    #[test]
    fn test_style_follows_severity_and_phase() {
        let mut n = Notification {
            id: 0,
            message: "x".into(),
            severity: Severity::Error,
            phase: ToastPhase::Entering,
        };
        assert!(toast_style(&n).contains("#f44336"));
        assert!(toast_style(&n).contains("slideInRight"));
        n.phase = ToastPhase::Leaving;
        assert!(toast_style(&n).contains("slideOutRight"));
    }
}
