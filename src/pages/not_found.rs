use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container">
            <header class="page-header">
                <h1>"404"</h1>
                <p class="tagline">"This page does not exist (yet)"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to funding"</A>
                " \u{00B7} "
                <A href="/governance">"Governance"</A>
            </nav>
        </main>
    }
}
