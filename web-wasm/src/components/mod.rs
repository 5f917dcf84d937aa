//! UIコンポーネント

pub mod error_notice;
pub mod fallback_image;
pub mod nav_bar;
pub mod carousel;
pub mod loading_screen;
pub mod stat_grid;
pub mod item_groups;
pub mod progress_bar;
pub mod feature_accordion;
pub mod tab_bar;
pub mod header;
pub mod site_footer;
