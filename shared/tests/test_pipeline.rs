//! Integration tests for the shared CMS-to-view-model pipeline.

#[cfg(test)]
mod tests {
    use appnest_shared::{
        cms::{CategoriesPayload, MobileAppsPayload},
        enrichment::FixedEnrichment,
        filter_apps, transform_apps, transform_categories, AppCategory, AppFilter, Catalog,
        CategorySelection, FeaturedPolicy, PageState, FETCH_FAILED_MESSAGE,
    };

    const APPS_JSON: &str = r#"{
      "mobileApps": [
        {
          "title": "TaskFlow",
          "about": "Smart task management with AI-powered scheduling",
          "appDetails": [{"id": "d1", "version": "2.1.0", "size": "18", "lastUpdated": "2024-03-02"}],
          "backgroundColor": {"css": "rgba(57,21,239,1)"},
          "dowlandApk": "https://cdn.example.com/taskflow.apk",
          "githubUrl": "https://github.com/example/taskflow",
          "images": [{"id": "i1", "image": {"url": "https://media.example.com/taskflow.png"}}],
          "keyFeatures": [{"id": "k1", "keyFeatures": "AI scheduling"}],
          "languages": [{"id": "l1", "languages": "React Native"}],
          "createdAt": "2024-01-01T00:00:00Z"
        },
        {
          "title": "WeatherPro",
          "about": "Beautiful weather forecasts with location-based alerts",
          "appDetails": {"id": "d2", "version": "1.4.0"},
          "images": [],
          "keyFeatures": [],
          "languages": [{"id": "l2", "languages": "Go"}]
        },
        {
          "title": "FitTracker",
          "about": null,
          "appDetails": null,
          "images": null,
          "keyFeatures": null,
          "languages": [{"id": "l3", "languages": "Expo"}]
        },
        {
          "title": "Expense Buddy",
          "about": "Track spending",
          "languages": [{"id": "l4", "languages": "React Native"}]
        },
        {
          "title": "Study Cards",
          "about": "Flashcards for exams"
        }
      ]
    }"#;

    const CATEGORIES_JSON: &str = r#"{
      "categories": [
        {"name": "📱 Utility", "slug": "utility", "id": "c1"},
        {"name": "💪 Health", "slug": "health", "id": "c2"},
        {"name": "Finance", "slug": "finance", "id": "c3"}
      ]
    }"#;

    fn load_catalog() -> Catalog {
        let apps: MobileAppsPayload = serde_json::from_str(APPS_JSON).expect("apps payload");
        let categories: CategoriesPayload =
            serde_json::from_str(CATEGORIES_JSON).expect("categories payload");
        Catalog {
            apps: transform_apps(
                &apps.mobile_apps,
                &FeaturedPolicy::default(),
                &mut FixedEnrichment::default(),
            ),
            categories: transform_categories(&categories.categories),
        }
    }

    #[test]
    fn raw_payload_becomes_fully_populated_catalog() {
        let catalog = load_catalog();
        assert_eq!(catalog.apps.len(), 5);
        assert_eq!(catalog.categories.len(), 3);

        let ids: Vec<u32> = catalog.apps.iter().map(|app| app.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let categories: Vec<AppCategory> = catalog.apps.iter().map(|app| app.category).collect();
        assert_eq!(
            categories,
            vec![
                AppCategory::Productivity,
                AppCategory::Utility,
                AppCategory::Health,
                AppCategory::Finance,
                AppCategory::Education,
            ]
        );

        let fit = catalog.app(3).expect("FitTracker");
        assert_eq!(fit.long_description, "No detailed description available");
        assert_eq!(fit.version, "1.0.0");
        assert_eq!(fit.screenshots.len(), 1);

        let weather = catalog.app(2).expect("WeatherPro");
        assert_eq!(weather.version, "1.4.0");

        assert_eq!(catalog.featured_apps().count(), 3);
        assert_eq!(catalog.categories[0].name, "Utility");
        assert_eq!(catalog.categories[2].icon, "📱");
    }

    #[test]
    fn filtering_the_catalog_partitions_by_featured() {
        let catalog = load_catalog();

        let react = filter_apps(&catalog.apps, &AppFilter::new("react", CategorySelection::All));
        let featured: Vec<&str> = react.featured.iter().map(|app| app.name.as_str()).collect();
        let other: Vec<&str> = react.other.iter().map(|app| app.name.as_str()).collect();
        assert_eq!(featured, vec!["TaskFlow"]);
        assert_eq!(other, vec!["Expense Buddy"]);

        let finance = filter_apps(
            &catalog.apps,
            &AppFilter::new("", CategorySelection::from_slug("finance")),
        );
        assert_eq!(finance.total(), 1);
        assert!(finance.featured.is_empty());
    }

    #[test]
    fn page_state_follows_fetch_outcomes() {
        let mut state: PageState<Catalog> = PageState::default();
        assert!(state.is_loading());

        state.resolve(Ok::<_, String>(load_catalog()));
        assert_eq!(state.ready().map(|catalog| catalog.apps.len()), Some(5));

        state.retry();
        assert!(state.is_loading());

        state.resolve(Err::<Catalog, _>("HTTP error: 502"));
        assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));

        state.retry();
        assert!(state.is_loading());
    }
}
