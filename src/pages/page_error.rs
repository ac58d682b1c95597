use crate::components::ErrorList;
use leptos::*;
use leptos_router::A;

/// Shown in place of a page whose data failed to load.
#[component]
pub fn PageError(errors: RwSignal<Errors>) -> impl IntoView {
    let heading = move || match errors.with(|e| e.iter().count()) {
        1 => "This page ran into a problem".to_string(),
        n => format!("This page ran into {} problems", n),
    };

    view! {
        <main class="container">
            <section class="card page-error" role="alert">
                <h2>{heading}</h2>
                <ErrorList errors=errors/>
                <p>"The funding estimator on the start page does not depend on this data."</p>
                <A href="/" class="button">"Open the estimator"</A>
            </section>
        </main>
    }
}
