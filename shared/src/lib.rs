//! Data model and view logic shared by the AppNest backend and frontend.
//!
//! Raw CMS records ([`cms`]) are turned into view models ([`models`]) by the
//! total [`transform`] pipeline, decorated with placeholder figures by
//! [`enrichment`], and narrowed down for display by [`filter`].

pub mod carousel;
pub mod cms;
pub mod contact;
pub mod counter;
pub mod enrichment;
pub mod filter;
pub mod models;
pub mod page_state;
pub mod transform;

pub use cms::{RawAppRecord, RawCategoryRecord};
pub use filter::{filter_apps, AppFilter, CategorySelection, FilteredApps, ALL_APPS_SLUG};
pub use models::{AppCategory, AppStats, AppViewModel, Catalog, CategoryViewModel, Gradient};
pub use page_state::{PageState, FETCH_FAILED_MESSAGE};
pub use transform::{transform_apps, transform_categories, FeaturedPolicy};
