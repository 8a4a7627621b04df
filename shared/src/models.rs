//! UI-ready view models derived from CMS records.

use serde::{Deserialize, Serialize};

/// Card image used when an app has no screenshots.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=200";
/// Store landing page linked from every app until real listings exist.
pub const PLAY_STORE_URL: &str = "https://play.google.com/store";
/// Store landing page linked from every app until real listings exist.
pub const APP_STORE_URL: &str = "https://apps.apple.com";

/// Coarse app classification derived from the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    /// Weather and catch-all tools.
    Utility,
    /// Task and productivity apps.
    Productivity,
    /// Health and fitness apps.
    Health,
    /// Expense and finance apps.
    Finance,
    /// Recipe and lifestyle apps.
    Lifestyle,
    /// Study and education apps.
    Education,
}

impl AppCategory {
    /// Every category tag, in keyword-table order.
    pub const ALL: [AppCategory; 6] = [
        AppCategory::Utility,
        AppCategory::Productivity,
        AppCategory::Health,
        AppCategory::Finance,
        AppCategory::Lifestyle,
        AppCategory::Education,
    ];

    /// Lower-case tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            AppCategory::Utility => "utility",
            AppCategory::Productivity => "productivity",
            AppCategory::Health => "health",
            AppCategory::Finance => "finance",
            AppCategory::Lifestyle => "lifestyle",
            AppCategory::Education => "education",
        }
    }
}

impl std::fmt::Display for AppCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card background gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gradient {
    /// Indigo to purple, picked for the indigo CMS swatch.
    #[serde(rename = "from-indigo-600 to-purple-700")]
    Indigo,
    /// Blue to purple.
    #[default]
    #[serde(rename = "from-blue-500 to-purple-600")]
    Default,
}

impl Gradient {
    /// Tailwind gradient classes.
    pub fn classes(self) -> &'static str {
        match self {
            Gradient::Indigo => "from-indigo-600 to-purple-700",
            Gradient::Default => "from-blue-500 to-purple-600",
        }
    }
}

/// Download count and rating shown on app cards.
///
/// These are produced by [`crate::enrichment`] and are placeholders, not
/// analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppStats {
    /// Human-readable download count such as `2.5K+`.
    pub downloads: String,
    /// Star rating with one decimal.
    pub rating: f32,
}

/// Store listing links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLinks {
    /// Google Play link.
    pub play_store_url: String,
    /// Apple App Store link.
    pub app_store_url: String,
}

impl Default for StoreLinks {
    fn default() -> Self {
        Self {
            play_store_url: PLAY_STORE_URL.to_string(),
            app_store_url: APP_STORE_URL.to_string(),
        }
    }
}

/// Normalized app as rendered by cards and the detail modal.
///
/// Built only through [`crate::transform::transform_app`], which fills every
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppViewModel {
    /// 1-based position in the fetched list.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Card image URL.
    pub image: String,
    /// Truncated description for cards.
    pub description: String,
    /// Full description for the detail modal.
    pub long_description: String,
    /// Technology tags.
    pub technologies: Vec<String>,
    /// Placeholder download/rating figures.
    pub stats: AppStats,
    /// Shown in the "featured" section.
    pub featured: bool,
    /// Derived category tag.
    pub category: AppCategory,
    /// APK download link, `#` when missing.
    pub apk_url: String,
    /// Repository link, `#` when missing.
    pub github_url: String,
    /// Card gradient.
    pub gradient: Gradient,
    /// Screenshot URLs, never empty.
    pub screenshots: Vec<String>,
    /// Key feature bullet points.
    pub features: Vec<String>,
    /// Version string.
    pub version: String,
    /// Package size label.
    pub size: String,
    /// Month/year of the last update, or `Recently`.
    pub last_updated: String,
    /// Platform requirement.
    pub requirements: String,
    /// Lifecycle stage.
    pub stage: String,
    /// Store listing links.
    pub store_links: StoreLinks,
}

/// Category chip shown on the apps page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryViewModel {
    /// Filter identifier (the CMS slug).
    pub id: String,
    /// Name without the decorative glyph.
    pub name: String,
    /// Decorative glyph.
    pub icon: String,
}

/// Everything the apps page needs from one fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Apps in fetch order.
    pub apps: Vec<AppViewModel>,
    /// Category chips.
    pub categories: Vec<CategoryViewModel>,
}

impl Catalog {
    /// Looks an app up by its view-model id.
    pub fn app(&self, id: u32) -> Option<&AppViewModel> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Apps flagged as featured, in fetch order.
    pub fn featured_apps(&self) -> impl Iterator<Item = &AppViewModel> {
        self.apps.iter().filter(|app| app.featured)
    }
}
