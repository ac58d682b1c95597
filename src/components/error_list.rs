use leptos::*;

/// Messages of every error caught by the surrounding `ErrorBoundary`
#[component]
pub fn ErrorList(errors: RwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors.with(|errors| {
            errors
                .iter()
                .map(|(_, e)| e.to_string())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <ul class="error-list">
            {move || messages().into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
        </ul>
    }
}
