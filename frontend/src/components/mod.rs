// Reusable components live here.

pub mod animated_counter;
pub mod app_card;
pub mod app_detail_modal;
pub mod error_banner;
pub mod footer;
pub mod header;
pub mod icons;
pub mod loading_spinner;
pub mod stats_card;
