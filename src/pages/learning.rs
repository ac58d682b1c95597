use crate::community::{
    load_learning_resources, most_completed, top_rated, topics, LearningResource, Level,
    ResourceCategory, ResourceFilter,
};
use crate::components::ResourceCard;
use crate::interaction::{report_once, Interaction};
use leptos::*;

const ALL: &str = "all";
const HIGHLIGHTS: usize = 3;

fn learning_view(resources: Vec<LearningResource>) -> impl IntoView {
    let topic_options = topics(&resources)
        .into_iter()
        .map(|t| {
            let value = t.clone();
            view! { <option value=value>{t}</option> }
        })
        .collect_view();
    let popular = most_completed(&resources, HIGHLIGHTS)
        .into_iter()
        .map(|r| view! { <ResourceCard resource=r/> })
        .collect_view();
    let recommended = top_rated(&resources, HIGHLIGHTS)
        .into_iter()
        .map(|r| view! { <ResourceCard resource=r compact=true/> })
        .collect_view();
    let resources = store_value(resources);

    let (category, set_category) = create_signal(ALL.to_string());
    let (level, set_level) = create_signal(ALL.to_string());
    let (topic, set_topic) = create_signal(ALL.to_string());

    let filter = create_memo(move |_| ResourceFilter {
        category: category.with(|c| ResourceCategory::from_label(c)),
        level: level.with(|l| Level::from_label(l)),
        topic: topic.with(|t| (t != ALL).then(|| t.clone())),
    });
    let filtered = move || {
        let matching = resources.with_value(|all| filter.with(|f| f.apply(all)));
        if matching.is_empty() {
            view! {
                <div class="card empty-state">
                    <h3>"No Resources Found"</h3>
                    <p>"Try a different category, level or topic."</p>
                </div>
            }
            .into_view()
        } else {
            matching
                .into_iter()
                .map(|r| view! { <ResourceCard resource=r/> })
                .collect_view()
        }
    };

    let category_options = ResourceCategory::ALL
        .iter()
        .map(|c| view! { <option value=c.label()>{c.label()}</option> })
        .collect_view();
    let level_options = Level::ALL
        .iter()
        .map(|l| view! { <option value=l.label()>{l.label()}</option> })
        .collect_view();

    let on_filter = move |set: WriteSignal<String>| {
        move |ev: ev::Event| {
            set.set(event_target_value(&ev));
            report_once(Interaction::ResourcesFiltered);
        }
    };

    view! {
        <main class="container learning-page">
            <header class="page-header">
                <h1>"Learning Hub"</h1>
                <p class="tagline">
                    "Educational resources to build your sustainability knowledge, "
                    "from beginner guides to advanced courses."
                </p>
            </header>

            <div class="filter-bar">
                <label>
                    "Category"
                    <select on:change=on_filter(set_category)>
                        <option value=ALL>"All Categories"</option>
                        {category_options}
                    </select>
                </label>
                <label>
                    "Level"
                    <select on:change=on_filter(set_level)>
                        <option value=ALL>"All Levels"</option>
                        {level_options}
                    </select>
                </label>
                <label>
                    "Topic"
                    <select on:change=on_filter(set_topic)>
                        <option value=ALL>"All Topics"</option>
                        {topic_options}
                    </select>
                </label>
            </div>

            <div class="learning-layout">
                <section class="resources">
                    <h2>"Resources"</h2>
                    <div class="card-grid">{filtered}</div>
                </section>

                <aside class="recommended">
                    <h2>"Top Rated"</h2>
                    {recommended}
                </aside>
            </div>

            <section class="popular">
                <h2>"Most Completed"</h2>
                <div class="card-row">{popular}</div>
            </section>
        </main>
    }
}

#[component]
pub fn LearningPage() -> impl IntoView {
    load_learning_resources()
        .map(learning_view)
        .map_err(|e| {
            log::error!("Learning page unavailable: {}", e);
            e
        })
}
