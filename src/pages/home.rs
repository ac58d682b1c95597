use crate::components::QuadraticFundingExplainer;
use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container">
            <header class="page-header">
                <h1>"Sustained Aachen"</h1>
                <p class="tagline">"Community funding for a greener Aachen"</p>
            </header>

            <section class="intro">
                <h2>"Funding That Counts People, Not Just Euros"</h2>
                <p>
                    "Projects in Aachen are funded in rounds. Each round has a matching pool, "
                    "and how much of it a project receives depends on how many people back it. "
                    "A hundred neighbours giving a few euros each count for more than one large donor."
                </p>
            </section>

            <section class="interactive" id="estimator">
                <h2>"Try It Yourself"</h2>
                <QuadraticFundingExplainer/>
            </section>

            <section class="explanation">
                <h2>"How Matching Works"</h2>
                <div class="card-row">
                    <div class="card">
                        <h3>"Contribute"</h3>
                        <p>"Support the local projects you care about with any amount."</p>
                    </div>
                    <div class="card">
                        <h3>"Match"</h3>
                        <p>
                            "At the end of a round the matching pool is split using the "
                            "square roots of individual contributions, so broad support wins."
                        </p>
                    </div>
                    <div class="card">
                        <h3>"Decide"</h3>
                        <p>
                            "Rounds and platform changes are decided by the community. "
                            <A href="/governance">"See current proposals and rounds"</A>
                            "."
                        </p>
                    </div>
                </div>
            </section>

            <footer>
                <p class="disclaimer">
                    "All figures on this site are illustrative. No contributions are collected or stored."
                </p>
            </footer>
        </main>
    }
}
