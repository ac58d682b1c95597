use leptos::*;
use leptos_router::{use_location, A};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Funding"),
    ("/governance", "Governance"),
    ("/events", "Events"),
    ("/learning", "Learning"),
];

fn is_current(pathname: &str, href: &str) -> bool {
    pathname == href || (href != "/" && pathname.starts_with(href))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            let class = move || {
                if is_current(&pathname.get(), href) {
                    "nav-link active"
                } else {
                    "nav-link"
                }
            };
            view! { <A href=href class=class>{label}</A> }
        })
        .collect_view();

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"Sustained Aachen"</A>
                <div class="nav-links">{links}</div>
            </div>
        </nav>
    }
}
