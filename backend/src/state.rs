use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use appnest_shared::{
    enrichment::MockEnrichment, transform_apps, transform_categories, AppViewModel, Catalog,
    CategoryViewModel, FeaturedPolicy, RawAppRecord, RawCategoryRecord,
};

use crate::{
    cache::TtlCache,
    cms_client::{CmsClient, CmsError},
    config::ServerConfig,
};

#[derive(Clone)]
pub struct AppState {
    cms: CmsClient,
    /// Raw CMS responses; view models are rebuilt on every request.
    apps: Arc<TtlCache<Vec<RawAppRecord>>>,
    categories: Arc<TtlCache<Vec<RawCategoryRecord>>>,
    featured_policy: FeaturedPolicy,
    admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let cms = CmsClient::new(&config.cms_endpoint, config.cms_timeout, config.explicit_featured)
            .context("failed to build CMS client")?;
        Ok(Self::with_client(cms, config.cache_ttl, FeaturedPolicy {
            positional_count: config.featured_count,
        })
        .with_admin_token(config.admin_token.as_deref()))
    }

    pub fn with_client(cms: CmsClient, cache_ttl: Duration, featured_policy: FeaturedPolicy) -> Self {
        Self {
            cms,
            apps: Arc::new(TtlCache::new(cache_ttl)),
            categories: Arc::new(TtlCache::new(cache_ttl)),
            featured_policy,
            admin_token: None,
        }
    }

    /// Token that lets non-local callers use the maintenance endpoints.
    pub fn with_admin_token(mut self, token: Option<&str>) -> Self {
        self.admin_token = token.map(Arc::from);
        self
    }

    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }

    pub fn cms_endpoint(&self) -> &str {
        self.cms.endpoint()
    }

    pub async fn load_apps(&self) -> Result<Vec<AppViewModel>, CmsError> {
        let records = self.raw_apps().await?;
        Ok(self.build_apps(&records))
    }

    pub async fn load_categories(&self) -> Result<Vec<CategoryViewModel>, CmsError> {
        let records = self.raw_categories().await?;
        Ok(transform_categories(&records))
    }

    /// Both collections, queried concurrently. Either failure fails the
    /// whole load.
    pub async fn load_catalog(&self) -> Result<Catalog, CmsError> {
        let (apps, categories) = tokio::try_join!(self.raw_apps(), self.raw_categories())?;
        Ok(Catalog {
            apps: self.build_apps(&apps),
            categories: transform_categories(&categories),
        })
    }

    pub async fn invalidate_cache(&self) {
        self.apps.invalidate().await;
        self.categories.invalidate().await;
        tracing::info!("content cache invalidated");
    }

    async fn raw_apps(&self) -> Result<Vec<RawAppRecord>, CmsError> {
        self.apps
            .get_or_try_load(|| self.cms.fetch_mobile_apps())
            .await
    }

    async fn raw_categories(&self) -> Result<Vec<RawCategoryRecord>, CmsError> {
        self.categories
            .get_or_try_load(|| self.cms.fetch_categories())
            .await
    }

    // Kept synchronous: the thread-local RNG must not live across an await.
    fn build_apps(&self, records: &[RawAppRecord]) -> Vec<AppViewModel> {
        let mut enrichment = MockEnrichment::thread_local();
        transform_apps(records, &self.featured_policy, &mut enrichment)
    }
}
