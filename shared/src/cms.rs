//! Raw records as delivered by the headless CMS GraphQL API.
//!
//! These mirror the CMS schema one-to-one and are never mutated. Every field
//! tolerates being absent or `null` so a half-filled entry in the CMS still
//! deserializes; filling in defaults is the job of [`crate::transform`].

use serde::{Deserialize, Deserializer, Serialize};

/// One mobile application entry from the `mobileApps` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppRecord {
    /// Display title of the app.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free-text "about" body.
    #[serde(default)]
    pub about: Option<String>,
    /// Version/size/requirements block. The CMS models this as a union
    /// field, so it may arrive as a single object or a list.
    #[serde(default, deserialize_with = "one_or_first")]
    pub app_details: Option<RawAppDetails>,
    /// Background colour picked in the CMS editor.
    #[serde(default)]
    pub background_color: Option<RawColor>,
    /// Direct APK download link. The CMS field really is spelled `dowlandApk`.
    #[serde(default)]
    pub dowland_apk: Option<String>,
    /// Source repository link.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Rich-text description (unused by the list views, kept for detail
    /// rendering).
    #[serde(default)]
    pub description: Option<RawRichText>,
    /// Creation timestamp assigned by the CMS.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Ordered screenshots; the first one doubles as the card image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<RawImage>,
    /// Ordered "key feature" bullet points.
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_features: Vec<RawKeyFeature>,
    /// Ordered language/technology tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<RawLanguage>,
    /// Explicit curation flag. Only requested from the CMS when the schema
    /// carries it; absent means "decide by position".
    #[serde(default)]
    pub featured: Option<bool>,
}

/// Nested detail block of an app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppDetails {
    /// CMS identifier of the block.
    #[serde(default)]
    pub id: Option<String>,
    /// Last update timestamp (date or RFC 3339 date-time).
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Minimum platform requirement, e.g. `Android 8.0+`.
    #[serde(default)]
    pub requirements: Option<String>,
    /// Package size in megabytes, as entered in the CMS.
    #[serde(default)]
    pub size: Option<String>,
    /// Lifecycle stage (`Beta`, `Released`, ...).
    #[serde(default)]
    pub stage: Option<String>,
    /// Version string.
    #[serde(default)]
    pub version: Option<String>,
}

/// CSS colour descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawColor {
    /// CSS value such as `rgba(57,21,239,1)`.
    #[serde(default)]
    pub css: Option<String>,
}

/// Rich-text field rendered to HTML by the CMS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRichText {
    /// Pre-rendered HTML.
    #[serde(default)]
    pub html: Option<String>,
}

/// Screenshot component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawImage {
    /// CMS identifier of the component.
    #[serde(default)]
    pub id: Option<String>,
    /// Uploaded asset, missing when the editor left the slot empty.
    #[serde(default)]
    pub image: Option<RawAsset>,
}

impl RawImage {
    /// The asset URL, if the slot holds a non-empty one.
    pub fn url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .map(|asset| asset.url.as_str())
            .filter(|url| !url.trim().is_empty())
    }
}

/// Uploaded CMS asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAsset {
    /// Public URL of the asset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// Key feature component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawKeyFeature {
    /// CMS identifier of the component.
    #[serde(default)]
    pub id: Option<String>,
    /// Feature text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_features: String,
}

/// Language/technology component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLanguage {
    /// CMS identifier of the component.
    #[serde(default)]
    pub id: Option<String>,
    /// Technology name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: String,
}

/// One entry from the `categories` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCategoryRecord {
    /// Display name, possibly prefixed with a decorative emoji.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// URL slug, used as the filter identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// CMS identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

/// `data` payload of the app list query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppsPayload {
    /// Apps in the collection's natural order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile_apps: Vec<RawAppRecord>,
}

/// `data` payload of the category query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesPayload {
    /// Categories, unordered by contract.
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<RawCategoryRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    // Lists first: a struct with all-default fields would also accept `[]`.
    Many(Vec<T>),
    One(T),
}

fn one_or_first<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<OneOrMany<T>>::deserialize(deserializer)?;
    Ok(match value {
        Some(OneOrMany::Many(items)) => items.into_iter().next(),
        Some(OneOrMany::One(item)) => Some(item),
        None => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_details_accepts_object_or_list() {
        let single: RawAppRecord = serde_json::from_str(
            r#"{"title":"A","appDetails":{"version":"2.0.0","size":"12"}}"#,
        )
        .expect("single object");
        assert_eq!(
            single.app_details.and_then(|d| d.version).as_deref(),
            Some("2.0.0")
        );

        let list: RawAppRecord = serde_json::from_str(
            r#"{"title":"A","appDetails":[{"version":"3.1.0"},{"version":"9.9.9"}]}"#,
        )
        .expect("list");
        assert_eq!(
            list.app_details.and_then(|d| d.version).as_deref(),
            Some("3.1.0")
        );

        let empty: RawAppRecord =
            serde_json::from_str(r#"{"title":"A","appDetails":[]}"#).expect("empty list");
        assert!(empty.app_details.is_none());
    }

    #[test]
    fn null_collections_deserialize_as_empty() {
        let record: RawAppRecord = serde_json::from_str(
            r#"{"title":"Bare","images":null,"keyFeatures":null,"languages":null,
                "appDetails":null,"backgroundColor":null}"#,
        )
        .expect("nulls");
        assert!(record.images.is_empty());
        assert!(record.key_features.is_empty());
        assert!(record.languages.is_empty());
        assert!(record.app_details.is_none());
        assert!(record.background_color.is_none());
    }

    #[test]
    fn half_filled_entries_still_deserialize() {
        let payload: MobileAppsPayload = serde_json::from_str(
            r#"{"mobileApps":[
                {"title":"TaskFlow"},
                {"title":null,"languages":[{"id":"l1","languages":null}],
                 "keyFeatures":[{"keyFeatures":null}],"images":[{"image":{"url":null}}]},
                {}
            ]}"#,
        )
        .expect("payload with gaps");
        assert_eq!(payload.mobile_apps.len(), 3);
        assert_eq!(payload.mobile_apps[0].title, "TaskFlow");
        assert_eq!(payload.mobile_apps[1].title, "");
        assert_eq!(payload.mobile_apps[1].languages[0].languages, "");
        assert_eq!(payload.mobile_apps[1].key_features[0].key_features, "");
        assert_eq!(payload.mobile_apps[1].images[0].url(), None);
        assert_eq!(payload.mobile_apps[2].title, "");

        let categories: CategoriesPayload = serde_json::from_str(
            r#"{"categories":[{"name":null,"slug":null,"id":null},{"name":"Finance","slug":"finance"}]}"#,
        )
        .expect("categories with gaps");
        assert_eq!(categories.categories.len(), 2);
        assert_eq!(categories.categories[0].slug, "");
        assert_eq!(categories.categories[1].slug, "finance");
    }

    #[test]
    fn image_url_skips_blank_assets() {
        let blank = RawImage {
            id: None,
            image: Some(RawAsset {
                url: "  ".to_string(),
            }),
        };
        assert_eq!(blank.url(), None);
        assert_eq!(RawImage::default().url(), None);
    }
}
