//! サイト設定
//!
//! 埋め込みJSON（content/site.json）を既定値とし、起動時の上書きを適用する。

use crate::error::Result;
use crate::loading::DEFAULT_LOADING_DELAY;
use crate::route::Route;
use crate::theme::Theme;
use crate::types::Brand;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub brand: Brand,
    #[serde(default)]
    pub default_theme: Theme,
    /// ルートのパスごとの既定テーマ
    #[serde(default)]
    pub route_themes: BTreeMap<String, Theme>,
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
}

fn default_loading_delay_ms() -> u64 {
    DEFAULT_LOADING_DELAY.as_millis() as u64
}

impl SiteConfig {
    /// 埋め込み設定を読み込む
    pub fn load() -> Result<Self> {
        Self::from_json_str(SITE_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// ルートの既定テーマ（個別指定がなければ `default_theme`）
    pub fn route_theme(&self, route: Route) -> Theme {
        self.route_themes
            .get(route.path())
            .copied()
            .unwrap_or(self.default_theme)
    }

    /// クエリの `theme=` を優先する。不正な値はエラー
    pub fn theme(&self, route: Route, query: Option<&str>) -> Result<Theme> {
        match query.and_then(Theme::from_query) {
            Some(theme) => theme,
            None => Ok(self.route_theme(route)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_load_embedded() {
        let config = SiteConfig::load().expect("設定読込失敗");
        assert_eq!(config.brand.name, "LAS");
        assert_eq!(config.loading_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_defaults_applied() {
        let json = r#"{
            "brand": {"name": "LAS", "logoUrl": "logo.png", "logoFallbackUrl": "fb.png"}
        }"#;
        let config = SiteConfig::from_json_str(json).expect("パース失敗");
        assert_eq!(config.default_theme, Theme::Light);
        assert!(config.route_themes.is_empty());
        assert_eq!(config.route_theme(Route::Results), Theme::Light);
        assert_eq!(config.loading_delay_ms, 800);
    }

    #[test]
    fn test_invalid_json() {
        let err = SiteConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    /// クエリ指定が既定テーマより優先
    #[test]
    fn test_theme_override() {
        let mut config = SiteConfig::load().expect("設定読込失敗");
        config.default_theme = Theme::Light;
        assert_eq!(config.theme(Route::Home, None).unwrap(), Theme::Light);
        assert_eq!(config.theme(Route::Home, Some("")).unwrap(), Theme::Light);
        assert_eq!(config.theme(Route::Home, Some("?theme=dark")).unwrap(), Theme::Dark);
        assert_eq!(config.theme(Route::Results, Some("?theme=light")).unwrap(), Theme::Light);
        assert!(matches!(config.theme(Route::Home, Some("?theme=x")), Err(Error::Config(_))));
    }

    /// 結果画面は既定でダーク、その他はライト
    #[test]
    fn test_route_themes_embedded() {
        let config = SiteConfig::load().expect("設定読込失敗");
        assert_eq!(config.theme(Route::Results, None).unwrap(), Theme::Dark);
        assert_eq!(config.theme(Route::Home, None).unwrap(), Theme::Light);
        assert_eq!(config.theme(Route::NotFound, Some("?utm=x")).unwrap(), Theme::Light);
    }
}
