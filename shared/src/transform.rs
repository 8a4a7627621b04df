//! Total transformation of raw CMS records into view models.
//!
//! Nothing here can fail: every missing or blank field degrades to a fixed
//! default so the UI never sees a hole.

use chrono::{DateTime, NaiveDate};

use crate::{
    cms::{RawAppRecord, RawCategoryRecord},
    enrichment::Enrichment,
    models::{AppCategory, AppViewModel, CategoryViewModel, Gradient, StoreLinks, PLACEHOLDER_IMAGE},
};

/// Characters kept on cards before the ellipsis.
pub const SHORT_DESCRIPTION_CHARS: usize = 120;
/// Name shown when an app has a blank title.
pub const UNTITLED_APP: &str = "Untitled App";
/// Card text when an app has no "about" body.
pub const NO_DESCRIPTION: &str = "No description available";
/// Modal text when an app has no "about" body.
pub const NO_LONG_DESCRIPTION: &str = "No detailed description available";
/// Version shown when the detail block has none.
pub const DEFAULT_VERSION: &str = "1.0.0";
/// Size label when the detail block has none.
pub const UNKNOWN_SIZE: &str = "Unknown";
/// Update label when the detail block has no usable timestamp.
pub const RECENTLY_UPDATED: &str = "Recently";
/// Requirement shown when the detail block has none.
pub const DEFAULT_REQUIREMENTS: &str = "Android 6.0+";
/// Stage shown when the detail block has none.
pub const DEFAULT_STAGE: &str = "Released";
/// Link target for missing download/repository URLs.
pub const MISSING_LINK: &str = "#";
/// Icon for categories without a recognized glyph.
pub const DEFAULT_CATEGORY_ICON: &str = "\u{1F4F1}";

/// Background colour marker that selects [`Gradient::Indigo`].
const INDIGO_MARKER: &str = "57,21,239";

/// Title keywords, checked in order; the first hit decides the category.
const CATEGORY_KEYWORDS: &[(&[&str], AppCategory)] = &[
    (&["weather"], AppCategory::Utility),
    (&["task", "productivity"], AppCategory::Productivity),
    (&["health", "fit"], AppCategory::Health),
    (&["expense", "finance"], AppCategory::Finance),
    (&["recipe", "lifestyle"], AppCategory::Lifestyle),
    (&["study", "education"], AppCategory::Education),
];

/// Decorative glyphs editors put in front of category names.
const CATEGORY_GLYPHS: &[char] = &[
    '\u{1F4F1}', // mobile phone
    '\u{26A1}',  // high voltage
    '\u{1F6E0}', // hammer and wrench
    '\u{1F4AA}', // flexed biceps
    '\u{1F4B0}', // money bag
    '\u{1F3A8}', // palette
    '\u{1F4DA}', // books
    VARIATION_SELECTOR,
];

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Decides which apps land in the "featured" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedPolicy {
    /// Apps at a lower fetch index than this are featured unless the record
    /// says otherwise.
    pub positional_count: usize,
}

impl Default for FeaturedPolicy {
    fn default() -> Self {
        Self {
            positional_count: 3,
        }
    }
}

impl FeaturedPolicy {
    /// An explicit flag on the record wins over fetch position.
    pub fn is_featured(&self, record: &RawAppRecord, index: usize) -> bool {
        record
            .featured
            .unwrap_or(index < self.positional_count)
    }
}

/// Classifies an app by keywords in its title.
pub fn derive_category(title: &str) -> AppCategory {
    let title = title.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(AppCategory::Utility)
}

/// Picks the card gradient from the CMS background colour.
pub fn derive_gradient(css: Option<&str>) -> Gradient {
    match css {
        Some(css) if css.contains(INDIGO_MARKER) => Gradient::Indigo,
        _ => Gradient::Default,
    }
}

/// Card description: the first [`SHORT_DESCRIPTION_CHARS`] characters plus
/// an ellipsis.
pub fn short_description(about: Option<&str>) -> String {
    match non_blank(about) {
        Some(about) => {
            let head: String = about.chars().take(SHORT_DESCRIPTION_CHARS).collect();
            format!("{head}...")
        },
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Formats a CMS timestamp as `Mon YYYY`, e.g. `May 2024`.
///
/// Accepts RFC 3339 date-times and plain `YYYY-MM-DD` dates; anything else
/// yields `None`.
pub fn format_last_updated(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|value| value.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%b %Y").to_string())
}

/// Builds the view model for the record at `index` in fetch order.
pub fn transform_app<E>(
    record: &RawAppRecord,
    index: usize,
    policy: &FeaturedPolicy,
    enrichment: &mut E,
) -> AppViewModel
where
    E: Enrichment + ?Sized,
{
    let details = record.app_details.clone().unwrap_or_default();

    let mut screenshots: Vec<String> = record
        .images
        .iter()
        .filter_map(|image| image.url())
        .map(str::to_string)
        .collect();
    let image = screenshots
        .first()
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    if screenshots.is_empty() {
        screenshots.push(image.clone());
    }

    let last_updated = non_blank(details.last_updated.as_deref())
        .and_then(format_last_updated)
        .unwrap_or_else(|| RECENTLY_UPDATED.to_string());

    AppViewModel {
        id: u32::try_from(index).map_or(u32::MAX, |index| index.saturating_add(1)),
        name: non_blank(Some(record.title.as_str()))
            .map_or(UNTITLED_APP, str::trim)
            .to_string(),
        image,
        description: short_description(record.about.as_deref()),
        long_description: or_default(record.about.as_deref(), NO_LONG_DESCRIPTION),
        technologies: record
            .languages
            .iter()
            .filter_map(|language| non_blank(Some(language.languages.as_str())))
            .map(str::to_string)
            .collect(),
        stats: enrichment.stats(),
        featured: policy.is_featured(record, index),
        category: derive_category(&record.title),
        apk_url: or_default(record.dowland_apk.as_deref(), MISSING_LINK),
        github_url: or_default(record.github_url.as_deref(), MISSING_LINK),
        gradient: derive_gradient(
            record
                .background_color
                .as_ref()
                .and_then(|color| color.css.as_deref()),
        ),
        screenshots,
        features: record
            .key_features
            .iter()
            .filter_map(|feature| non_blank(Some(feature.key_features.as_str())))
            .map(str::to_string)
            .collect(),
        version: or_default(details.version.as_deref(), DEFAULT_VERSION),
        size: non_blank(details.size.as_deref())
            .map(|size| format!("{size} MB"))
            .unwrap_or_else(|| UNKNOWN_SIZE.to_string()),
        last_updated,
        requirements: or_default(details.requirements.as_deref(), DEFAULT_REQUIREMENTS),
        stage: or_default(details.stage.as_deref(), DEFAULT_STAGE),
        store_links: StoreLinks::default(),
    }
}

/// Transforms a whole fetch, keeping its order.
pub fn transform_apps<E>(
    records: &[RawAppRecord],
    policy: &FeaturedPolicy,
    enrichment: &mut E,
) -> Vec<AppViewModel>
where
    E: Enrichment + ?Sized,
{
    let apps: Vec<AppViewModel> = records
        .iter()
        .enumerate()
        .map(|(index, record)| transform_app(record, index, policy, enrichment))
        .collect();
    tracing::debug!(
        apps = apps.len(),
        featured = apps.iter().filter(|app| app.featured).count(),
        "transformed app records"
    );
    apps
}

/// Splits the decorative glyph off a category name.
pub fn transform_category(record: &RawCategoryRecord) -> CategoryViewModel {
    let name: String = record
        .name
        .chars()
        .filter(|c| !CATEGORY_GLYPHS.contains(c))
        .collect();

    CategoryViewModel {
        id: record.slug.clone(),
        name: name.trim().to_string(),
        icon: category_icon(&record.name).unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
    }
}

/// Transforms every category, keeping the fetch order.
pub fn transform_categories(records: &[RawCategoryRecord]) -> Vec<CategoryViewModel> {
    records.iter().map(transform_category).collect()
}

fn category_icon(name: &str) -> Option<String> {
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == VARIATION_SELECTOR || !CATEGORY_GLYPHS.contains(&c) {
            continue;
        }
        let mut icon = c.to_string();
        if chars.peek() == Some(&VARIATION_SELECTOR) {
            icon.push(VARIATION_SELECTOR);
        }
        return Some(icon);
    }
    None
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn or_default(value: Option<&str>, default: &str) -> String {
    non_blank(value).unwrap_or(default).to_string()
}
