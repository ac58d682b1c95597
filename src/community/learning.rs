use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ResourceCategory {
    Course,
    Guide,
    Toolkit,
    Article,
    Video,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 5] = [
        ResourceCategory::Course,
        ResourceCategory::Guide,
        ResourceCategory::Toolkit,
        ResourceCategory::Article,
        ResourceCategory::Video,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Course => "Course",
            ResourceCategory::Guide => "Guide",
            ResourceCategory::Toolkit => "Toolkit",
            ResourceCategory::Article => "Article",
            ResourceCategory::Video => "Video",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ResourceCategory::Course => "badge badge-blue",
            ResourceCategory::Guide => "badge badge-green",
            ResourceCategory::Toolkit => "badge badge-purple",
            ResourceCategory::Article => "badge badge-yellow",
            ResourceCategory::Video => "badge badge-red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.label() == label)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Level::Beginner => "badge badge-green",
            Level::Intermediate => "badge badge-yellow",
            Level::Advanced => "badge badge-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LearningResource {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ResourceCategory,
    #[serde(default)]
    pub topics: Vec<String>,
    pub creator: String,
    pub duration: String,
    pub level: Level,
    #[serde(default)]
    pub completions: u32,
    /// Average rating out of 5
    #[serde(default)]
    pub rating: f64,
}

/// Category, level and topic restrictions; `None` lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub category: Option<ResourceCategory>,
    pub level: Option<Level>,
    pub topic: Option<String>,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &LearningResource) -> bool {
        self.category.map_or(true, |c| resource.category == c)
            && self.level.map_or(true, |l| resource.level == l)
            && self
                .topic
                .as_ref()
                .map_or(true, |t| resource.topics.iter().any(|rt| rt == t))
    }

    /// Matching resources in data order
    pub fn apply(&self, resources: &[LearningResource]) -> Vec<LearningResource> {
        resources
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Every topic used by any resource, sorted and deduplicated
pub fn topics(resources: &[LearningResource]) -> Vec<String> {
    resources
        .iter()
        .flat_map(|r| r.topics.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The `n` resources with the most completions. Ties keep data order.
pub fn most_completed(resources: &[LearningResource], n: usize) -> Vec<LearningResource> {
    let mut sorted = resources.to_vec();
    sorted.sort_by(|a, b| b.completions.cmp(&a.completions));
    sorted.truncate(n);
    sorted
}

/// The `n` best-rated resources. Ties keep data order.
pub fn top_rated(resources: &[LearningResource], n: usize) -> Vec<LearningResource> {
    let mut sorted = resources.to_vec();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(
        id: u32,
        category: ResourceCategory,
        level: Level,
        topics: &[&str],
        completions: u32,
        rating: f64,
    ) -> LearningResource {
        LearningResource {
            id,
            title: format!("Resource {}", id),
            description: String::new(),
            category,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            creator: "Team".to_string(),
            duration: "1 hour".to_string(),
            level,
            completions,
            rating,
        }
    }

    fn sample() -> Vec<LearningResource> {
        use Level::*;
        use ResourceCategory::*;
        vec![
            resource(1, Course, Beginner, &["SDGs", "Climate Basics"], 472, 4.8),
            resource(2, Guide, Beginner, &["Food", "Consumption"], 298, 4.7),
            resource(3, Toolkit, Intermediate, &["Engagement"], 134, 4.5),
            resource(4, Video, Beginner, &["Food", "Biodiversity"], 352, 4.9),
            resource(5, Guide, Beginner, &["Energy"], 264, 4.7),
        ]
    }

    fn ids(resources: &[LearningResource]) -> Vec<u32> {
        resources.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_topics_sorted_and_unique() {
        assert_eq!(
            topics(&sample()),
            vec![
                "Biodiversity",
                "Climate Basics",
                "Consumption",
                "Energy",
                "Engagement",
                "Food",
                "SDGs"
            ]
        );
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(ids(&ResourceFilter::default().apply(&sample())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filters_combine() {
        let filter = ResourceFilter {
            category: Some(ResourceCategory::Guide),
            level: Some(Level::Beginner),
            topic: Some("Food".to_string()),
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2]);
    }

    #[test]
    fn test_topic_filter_needs_exact_match() {
        let filter = ResourceFilter {
            topic: Some("food".to_string()),
            ..ResourceFilter::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_most_completed_top_three() {
        assert_eq!(ids(&most_completed(&sample(), 3)), vec![1, 4, 2]);
    }

    #[test]
    fn test_top_rated_ties_keep_data_order() {
        assert_eq!(ids(&top_rated(&sample(), 3)), vec![4, 1, 2]);
        assert_eq!(ids(&top_rated(&sample(), 4)), vec![4, 1, 2, 5]);
    }

    #[test]
    fn test_ranking_shorter_than_n() {
        let few = &sample()[..2];
        assert_eq!(most_completed(few, 3).len(), 2);
    }

    #[test]
    fn test_labels_parse_back() {
        for c in ResourceCategory::ALL {
            assert_eq!(ResourceCategory::from_label(c.label()), Some(c));
        }
        for l in Level::ALL {
            assert_eq!(Level::from_label(l.label()), Some(l));
        }
        assert_eq!(Level::from_label("all"), None);
    }
}
