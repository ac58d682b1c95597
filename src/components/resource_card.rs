use crate::community::LearningResource;
use leptos::*;

#[component]
pub fn ResourceCard(
    resource: LearningResource,
    /// Sidebar variant: title, badges and rating only
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let category = resource.category;
    let level = resource.level;
    let rating = format!("\u{2605} {:.1}", resource.rating);

    let details = (!compact).then(|| {
        let topics = resource
            .topics
            .iter()
            .map(|t| view! { <span class="tag">{t.clone()}</span> })
            .collect_view();
        view! {
            <p class="resource-description">{resource.description}</p>
            <div class="tags">{topics}</div>
            <div class="resource-meta">
                <span>{resource.creator}</span>
                <span class="separator">"\u{2022}"</span>
                <span>{resource.duration}</span>
                <span class="separator">"\u{2022}"</span>
                <span>{format!("{} completions", resource.completions)}</span>
            </div>
        }
    });

    let class = if compact { "card resource-card compact" } else { "card resource-card" };

    view! {
        <div class=class>
            <div class="card-header">
                <h3>{resource.title}</h3>
                <span class="resource-rating">{rating}</span>
            </div>
            <div class="badges">
                <span class=category.badge_class()>{category.label()}</span>
                <span class=level.badge_class()>{level.label()}</span>
            </div>
            {details}
        </div>
    }
}
