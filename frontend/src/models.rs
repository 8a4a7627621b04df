// View models come from the shared crate.
pub use appnest_shared::{AppViewModel, Catalog, CategoryViewModel};
#[cfg(feature = "mock")]
use appnest_shared::{
    cms::{CategoriesPayload, MobileAppsPayload},
    enrichment::FixedEnrichment,
    transform_apps, transform_categories, FeaturedPolicy,
};

// =============== Mock data ===============

/// Sample `mobileApps` payload shaped exactly like the CMS response.
#[cfg(feature = "mock")]
const MOCK_APPS_JSON: &str = r#"{
  "mobileApps": [
    {
      "title": "TaskFlow",
      "about": "Smart task management with AI-powered scheduling, recurring reminders and a focus timer that adapts to how you actually work through the day.",
      "appDetails": {"id": "d1", "version": "2.1.0", "size": "18", "lastUpdated": "2024-05-12", "requirements": "Android 8.0+", "stage": "Released"},
      "backgroundColor": {"css": "rgba(57,21,239,1)"},
      "dowlandApk": "https://example.com/downloads/taskflow.apk",
      "githubUrl": "https://github.com/appnest/taskflow",
      "images": [
        {"id": "i1", "image": {"url": "/placeholder.svg?height=400&width=200&text=TaskFlow"}},
        {"id": "i2", "image": {"url": "/placeholder.svg?height=400&width=200&text=Focus"}}
      ],
      "keyFeatures": [
        {"id": "k1", "keyFeatures": "AI scheduling"},
        {"id": "k2", "keyFeatures": "Recurring reminders"},
        {"id": "k3", "keyFeatures": "Focus timer"}
      ],
      "languages": [
        {"id": "l1", "languages": "React Native"},
        {"id": "l2", "languages": "Firebase"}
      ]
    },
    {
      "title": "WeatherPro",
      "about": "Beautiful weather forecasts with location-based alerts.",
      "appDetails": [{"id": "d2", "version": "1.4.0", "size": "12", "lastUpdated": "2024-02-03T09:30:00Z"}],
      "images": [{"id": "i3", "image": {"url": "/placeholder.svg?height=400&width=200&text=WeatherPro"}}],
      "keyFeatures": [{"id": "k4", "keyFeatures": "Hourly forecasts"}],
      "languages": [{"id": "l3", "languages": "Expo"}, {"id": "l4", "languages": "TypeScript"}]
    },
    {
      "title": "FitTracker",
      "about": "Workout logging and progress charts for everyday training.",
      "appDetails": {"id": "d3", "stage": "Beta"},
      "keyFeatures": [{"id": "k5", "keyFeatures": "Workout templates"}],
      "languages": [{"id": "l5", "languages": "React Native"}, {"id": "l6", "languages": "SQLite"}]
    },
    {
      "title": "Expense Buddy",
      "about": "Track spending, split bills and keep monthly budgets on target.",
      "githubUrl": "https://github.com/appnest/expense-buddy",
      "languages": [{"id": "l7", "languages": "React Native"}, {"id": "l8", "languages": "Zustand"}]
    },
    {
      "title": "Recipe Box",
      "about": "Save recipes, plan meals and build shopping lists.",
      "languages": [{"id": "l9", "languages": "Expo"}]
    },
    {
      "title": "Study Cards",
      "about": "Spaced-repetition flashcards for exam preparation.",
      "languages": [{"id": "l10", "languages": "TypeScript"}, {"id": "l11", "languages": "MongoDB"}]
    }
  ]
}"#;

#[cfg(feature = "mock")]
const MOCK_CATEGORIES_JSON: &str = r#"{
  "categories": [
    {"name": "📱 Utility", "slug": "utility", "id": "c1"},
    {"name": "⚡ Productivity", "slug": "productivity", "id": "c2"},
    {"name": "💪 Health & Fitness", "slug": "health", "id": "c3"},
    {"name": "💰 Finance", "slug": "finance", "id": "c4"},
    {"name": "🎨 Lifestyle", "slug": "lifestyle", "id": "c5"},
    {"name": "📚 Education", "slug": "education", "id": "c6"}
  ]
}"#;

/// Sample apps run through the same transform the backend uses.
#[cfg(feature = "mock")]
pub fn get_mock_apps() -> Result<Vec<AppViewModel>, String> {
    let payload: MobileAppsPayload =
        serde_json::from_str(MOCK_APPS_JSON).map_err(|e| format!("Parse error: {:?}", e))?;
    Ok(transform_apps(
        &payload.mobile_apps,
        &FeaturedPolicy::default(),
        &mut FixedEnrichment::default(),
    ))
}

#[cfg(feature = "mock")]
pub fn get_mock_categories() -> Result<Vec<CategoryViewModel>, String> {
    let payload: CategoriesPayload =
        serde_json::from_str(MOCK_CATEGORIES_JSON).map_err(|e| format!("Parse error: {:?}", e))?;
    Ok(transform_categories(&payload.categories))
}
