//! 画面コンテンツの読み込みと検証
//!
//! content/*.json をコンパイル時に埋め込み、起動時に1回パースする。

use crate::error::{Error, Result};
use crate::types::{
    Contact, Feature, Footer, Hero, ItemGroup, Metric, NavLink, Slide, StatCard,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const HOME_JSON: &str = include_str!("../content/home.json");
const RESULTS_JSON: &str = include_str!("../content/results.json");

/// セクション見出し
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionIntro {
    pub heading: String,
    pub blurb: String,
    #[serde(default)]
    pub background_url: Option<String>,
}

/// ホーム画面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub nav_links: Vec<NavLink>,
    pub login: NavLink,
    pub donate: NavLink,
    pub hero: Hero,
    pub activities: SectionIntro,
    pub slides: Vec<Slide>,
    pub stats: Vec<StatCard>,
    pub contact: Contact,
    pub footer: Footer,
}

/// 結果画面の締めくくり
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub heading: String,
    pub blurb: String,
    pub primary: NavLink,
    pub secondary_label: String,
}

/// 結果画面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsContent {
    pub title: String,
    pub subtitle: String,
    pub header_actions: Vec<String>,
    pub summary: Vec<StatCard>,
    pub key_improvements: Vec<ItemGroup>,
    pub metrics: Vec<Metric>,
    pub metric_summary: Vec<StatCard>,
    pub features: Vec<Feature>,
    pub technical: Vec<ItemGroup>,
    pub cta: CallToAction,
    pub footer: String,
}

impl HomeContent {
    pub fn load() -> Result<Self> {
        Self::from_json_str(HOME_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// スライドの構造チェック
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(Error::Content("スライドがありません".into()));
        }
        let mut ids = HashSet::new();
        for slide in &self.slides {
            if !ids.insert(slide.id) {
                return Err(Error::Content(format!("スライドIDが重複: {}", slide.id)));
            }
            if slide.images.is_empty() {
                return Err(Error::Content(format!(
                    "スライド {} に画像がありません",
                    slide.id
                )));
            }
        }
        Ok(())
    }
}

impl ResultsContent {
    pub fn load() -> Result<Self> {
        Self::from_json_str(RESULTS_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// 指標の範囲と機能リストのチェック
    pub fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(Error::Content("機能項目がありません".into()));
        }
        for metric in &self.metrics {
            if metric.before > 100 || metric.after > 100 {
                return Err(Error::Content(format!(
                    "指標 {} が0-100の範囲外です",
                    metric.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_json_with_slides(slides: &str) -> String {
        let mut value: serde_json::Value =
            serde_json::from_str(HOME_JSON).expect("埋め込みJSONが不正");
        value["slides"] = serde_json::from_str(slides).expect("テスト用JSONが不正");
        value.to_string()
    }

    #[test]
    fn test_builtin_content() {
        let home = HomeContent::load().expect("コンテンツ読込失敗");
        assert_eq!(home.slides.len(), 5);
        assert_eq!(home.nav_links.len(), 6);
        assert_eq!(home.stats.len(), 4);

        let results = ResultsContent::load().expect("コンテンツ読込失敗");
        assert_eq!(results.features.len(), 4);
        assert_eq!(results.metrics.len(), 6);
    }

    #[test]
    fn test_home_rejects_no_slides() {
        let json = home_json_with_slides("[]");
        let err = HomeContent::from_json_str(&json).unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn test_home_rejects_duplicate_ids() {
        let json = home_json_with_slides(
            r#"[
                {"id": 1, "title": "a", "date": "", "description": "", "images": ["a.jpg"], "fallbackUrl": "fb"},
                {"id": 1, "title": "b", "date": "", "description": "", "images": ["b.jpg"], "fallbackUrl": "fb"}
            ]"#,
        );
        let err = HomeContent::from_json_str(&json).unwrap_err();
        assert!(format!("{}", err).contains("重複"));
    }

    #[test]
    fn test_home_rejects_slide_without_images() {
        let json = home_json_with_slides(
            r#"[{"id": 9, "title": "a", "date": "", "description": "", "images": [], "fallbackUrl": "fb"}]"#,
        );
        let err = HomeContent::from_json_str(&json).unwrap_err();
        assert!(format!("{}", err).contains("スライド 9"));
    }

    #[test]
    fn test_results_rejects_metric_out_of_range() {
        let mut value: serde_json::Value =
            serde_json::from_str(RESULTS_JSON).expect("埋め込みJSONが不正");
        value["metrics"][0]["after"] = serde_json::json!(101);
        let err = ResultsContent::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = ResultsContent::from_json_str("{\"title\": 1}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    /// 著者入力のimprovementを保持（after - before と一致しなくてもよい）
    #[test]
    fn test_metric_improvement_preserved() {
        let content = ResultsContent::load().expect("コンテンツ読込失敗");
        let polish = content
            .metrics
            .iter()
            .find(|m| m.label == "Professional Polish")
            .expect("指標が見つからない");
        assert_eq!((polish.before, polish.after, polish.improvement), (55, 90, 64));
    }
}
