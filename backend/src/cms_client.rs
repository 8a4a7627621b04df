//! GraphQL client for the headless CMS.

use std::time::Duration;

use appnest_shared::cms::{
    CategoriesPayload, MobileAppsPayload, RawAppRecord, RawCategoryRecord,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

const APPS_QUERY_HEAD: &str = r#"query MobileApps {
  mobileApps {
    title
    about
    appDetails {
      ... on AppDetails { id lastUpdated requirements size stage version }
    }
    backgroundColor { css }
    dowlandApk
    githubUrl
    description { html }
    createdAt
    images {
      ... on Images { id image { url(transformation: {}) } }
    }
    keyFeatures {
      ... on KeyFeatures { id keyFeatures }
    }
    languages {
      ... on Languages { id languages }
    }
"#;

const CATEGORIES_QUERY: &str = r#"query Categories {
  categories { name slug id }
}"#;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("CMS request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("CMS responded with HTTP {0}")]
    Status(u16),
    #[error("CMS returned GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("CMS response carried no data")]
    MissingData,
    #[error("CMS response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Read-only access to the two CMS collections the site uses.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    endpoint: String,
    apps_query: String,
}

impl CmsClient {
    pub fn new(endpoint: &str, timeout: Duration, explicit_featured: bool) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            apps_query: apps_query(explicit_featured),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// All apps in the collection's natural order.
    pub async fn fetch_mobile_apps(&self) -> Result<Vec<RawAppRecord>, CmsError> {
        let payload: MobileAppsPayload = self.query(&self.apps_query).await?;
        tracing::info!(count = payload.mobile_apps.len(), "fetched mobile apps from CMS");
        Ok(payload.mobile_apps)
    }

    pub async fn fetch_categories(&self) -> Result<Vec<RawCategoryRecord>, CmsError> {
        let payload: CategoriesPayload = self.query(CATEGORIES_QUERY).await?;
        tracing::info!(count = payload.categories.len(), "fetched categories from CMS");
        Ok(payload.categories)
    }

    async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, CmsError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest {
                query,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: GraphQlResponse<T> = serde_json::from_str(&body)?;
        if !envelope.errors.is_empty() {
            return Err(CmsError::GraphQl(
                envelope.errors.into_iter().map(|err| err.message).collect(),
            ));
        }
        envelope.data.ok_or(CmsError::MissingData)
    }
}

fn apps_query(explicit_featured: bool) -> String {
    let mut query = APPS_QUERY_HEAD.to_string();
    if explicit_featured {
        query.push_str("    featured\n");
    }
    query.push_str("  }\n}");
    query
}
