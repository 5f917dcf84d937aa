//! LAS Portal Common Library
//!
//! Web(WASM)画面から使うコンテンツ型と、カルーセル・タブ・アコーディオン等の状態遷移

pub mod types;
pub mod error;
pub mod config;
pub mod content;
pub mod theme;
pub mod route;
pub mod selector;
pub mod accordion;
pub mod tabs;
pub mod menu;
pub mod loading;

pub use types::{Brand, Contact, Feature, FeatureIcon, Footer, FooterColumn, Hero, ItemGroup, Metric, NavLink, Slide, StatCard};
pub use error::{Error, Result};
pub use config::SiteConfig;
pub use content::{CallToAction, HomeContent, ResultsContent, SectionIntro};
pub use theme::Theme;
pub use route::Route;
pub use selector::{Carousel, Cycle, resolve_image_src, should_fall_back};
pub use accordion::Accordion;
pub use tabs::{ResultsTab, TabSelector};
pub use menu::MenuToggle;
pub use loading::{LoadingGate, DEFAULT_LOADING_DELAY};
