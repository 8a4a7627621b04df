//! Search and category filtering over transformed apps.

use serde::{Deserialize, Serialize};

use crate::models::AppViewModel;

/// Category slug the UI uses for "show everything".
pub const ALL_APPS_SLUG: &str = "all-apps";

/// Category the user picked on the apps page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// No category restriction.
    #[default]
    All,
    /// A category slug as delivered by the CMS.
    Slug(String),
}

impl CategorySelection {
    /// Parses a slug, mapping the sentinel and blank input to [`Self::All`].
    pub fn from_slug(slug: &str) -> Self {
        let slug = slug.trim();
        if slug.is_empty() || slug == ALL_APPS_SLUG {
            Self::All
        } else {
            Self::Slug(slug.to_string())
        }
    }

    /// Slug to put back in a URL or chip id.
    pub fn slug(&self) -> &str {
        match self {
            Self::All => ALL_APPS_SLUG,
            Self::Slug(slug) => slug,
        }
    }

    /// Whether an app's category tag passes this selection. Hyphens in the
    /// slug are ignored, so `life-style` selects `lifestyle`.
    pub fn matches(&self, app: &AppViewModel) -> bool {
        match self {
            Self::All => true,
            Self::Slug(slug) => slug.replace('-', "") == app.category.as_str(),
        }
    }
}

/// Search term plus category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppFilter {
    search: String,
    category: CategorySelection,
}

impl AppFilter {
    /// Builds a filter; the search term is matched case-insensitively.
    pub fn new(search: &str, category: CategorySelection) -> Self {
        Self {
            search: search.to_lowercase(),
            category,
        }
    }

    /// Search hit on name, card description or any technology tag, and a
    /// category hit.
    pub fn matches(&self, app: &AppViewModel) -> bool {
        self.matches_search(app) && self.category.matches(app)
    }

    fn matches_search(&self, app: &AppViewModel) -> bool {
        if self.search.is_empty() {
            return true;
        }
        app.name.to_lowercase().contains(&self.search)
            || app.description.to_lowercase().contains(&self.search)
            || app
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&self.search))
    }
}

/// Filter output, split the way the apps page renders it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredApps {
    /// Featured matches, in fetch order.
    pub featured: Vec<AppViewModel>,
    /// Remaining matches, in fetch order.
    pub other: Vec<AppViewModel>,
}

impl FilteredApps {
    /// Number of matches across both sections.
    pub fn total(&self) -> usize {
        self.featured.len() + self.other.len()
    }

    /// No app matched.
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.other.is_empty()
    }
}

/// Applies `filter` and partitions the matches by their `featured` flag.
/// Relative order is preserved within each section.
pub fn filter_apps(apps: &[AppViewModel], filter: &AppFilter) -> FilteredApps {
    let (featured, other): (Vec<_>, Vec<_>) = apps
        .iter()
        .filter(|app| filter.matches(app))
        .cloned()
        .partition(|app| app.featured);
    FilteredApps {
        featured,
        other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cms::{RawAppRecord, RawLanguage},
        enrichment::FixedEnrichment,
        models::AppCategory,
        transform::{transform_app, FeaturedPolicy},
    };

    fn app(index: usize, name: &str, about: &str, tech: &[&str], featured: bool) -> AppViewModel {
        let record = RawAppRecord {
            title: name.to_string(),
            about: Some(about.to_string()),
            languages: tech
                .iter()
                .map(|tech| RawLanguage {
                    id: None,
                    languages: tech.to_string(),
                })
                .collect(),
            featured: Some(featured),
            ..RawAppRecord::default()
        };
        transform_app(&record, index, &FeaturedPolicy::default(), &mut FixedEnrichment::default())
    }

    fn names(apps: &[AppViewModel]) -> Vec<&str> {
        apps.iter().map(|app| app.name.as_str()).collect()
    }

    #[test]
    fn search_matches_tech_tags_case_insensitively() {
        let apps = vec![
            app(0, "TaskFlow", "Smart task management", &["React"], false),
            app(1, "WeatherPro", "Forecasts", &["Go"], false),
        ];
        let result = filter_apps(&apps, &AppFilter::new("react", CategorySelection::All));
        assert_eq!(names(&result.other), vec!["TaskFlow"]);
        assert!(result.featured.is_empty());
    }

    #[test]
    fn search_matches_name_and_description() {
        let apps = vec![
            app(0, "TaskFlow", "Smart planning", &[], false),
            app(1, "WeatherPro", "Location ALERTS", &[], false),
        ];
        let by_name = filter_apps(&apps, &AppFilter::new("TASK", CategorySelection::All));
        assert_eq!(names(&by_name.other), vec!["TaskFlow"]);

        let by_description = filter_apps(&apps, &AppFilter::new("alerts", CategorySelection::All));
        assert_eq!(names(&by_description.other), vec!["WeatherPro"]);

        let nothing = filter_apps(&apps, &AppFilter::new("zzz", CategorySelection::All));
        assert!(nothing.is_empty());
        assert_eq!(nothing.total(), 0);
    }

    #[test]
    fn empty_search_keeps_everything() {
        let apps = vec![app(0, "A", "a", &[], true), app(1, "B", "b", &[], false)];
        let result = filter_apps(&apps, &AppFilter::default());
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn category_and_search_are_conjunctive() {
        let apps = vec![
            app(0, "TaskFlow", "plan", &["React"], false),
            app(1, "FitTracker", "run", &["React"], false),
        ];
        let filter = AppFilter::new("react", CategorySelection::from_slug("health"));
        let result = filter_apps(&apps, &filter);
        assert_eq!(names(&result.other), vec!["FitTracker"]);
        assert_eq!(result.other[0].category, AppCategory::Health);
    }

    #[test]
    fn hyphens_in_slug_are_ignored() {
        let apps = vec![app(0, "Recipe Box", "cook", &[], false)];
        let filter = AppFilter::new("", CategorySelection::from_slug("life-sty-le"));
        assert_eq!(filter_apps(&apps, &filter).total(), 1);
    }

    #[test]
    fn sentinel_and_blank_slugs_mean_all() {
        assert_eq!(CategorySelection::from_slug(ALL_APPS_SLUG), CategorySelection::All);
        assert_eq!(CategorySelection::from_slug("  "), CategorySelection::All);
        assert_eq!(CategorySelection::All.slug(), ALL_APPS_SLUG);
        assert_eq!(CategorySelection::from_slug("finance").slug(), "finance");
    }

    #[test]
    fn partition_preserves_order() {
        let apps = vec![
            app(0, "A", "", &[], true),
            app(1, "B", "", &[], false),
            app(2, "C", "", &[], true),
            app(3, "D", "", &[], false),
        ];
        let result = filter_apps(&apps, &AppFilter::default());
        assert_eq!(names(&result.featured), vec!["A", "C"]);
        assert_eq!(names(&result.other), vec!["B", "D"]);
    }
}
