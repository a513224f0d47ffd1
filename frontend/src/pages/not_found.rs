use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::notification::{Notifier, Severity};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let notifier = use_context::<Notifier>();

    use_effect_with_deps(
        move |_| {
            if let Some(notifier) = notifier {
                notifier.notify("Halaman tidak ditemukan", Severity::Info);
            }
            || ()
        },
        (),
    );

    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Kembali ke beranda"}
            </Link<Route>>
        </section>
    }
}
