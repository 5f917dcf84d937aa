//! サイトコンテンツの型定義
//!
//! ホーム画面と結果画面で共有される静的レコード:
//! - Slide: 活動カルーセルの1枚
//! - Feature: アコーディオンの1項目
//! - Metric: デザイン指標（before/after）

use serde::{Deserialize, Serialize};

/// リンク（ラベル + href）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// ロゴとサイト名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub logo_url: String,
    pub logo_fallback_url: String,
}

/// カルーセルのスライド
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u32,
    pub title: String,
    /// 表示用ラベル（パースしない）
    pub date: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(alias = "fallback")]
    pub fallback_url: String,
}

impl Slide {
    /// 画像の前後ボタンとインジケータを出すか
    pub fn has_gallery_controls(&self) -> bool {
        self.images.len() > 1
    }

    /// `index` の画像URL。範囲外または空文字なら fallback_url
    pub fn image_at(&self, index: usize) -> &str {
        match self.images.get(index) {
            Some(url) if !url.is_empty() => url,
            _ => &self.fallback_url,
        }
    }
}

/// 統計カード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    /// 著者が記入した値（"50+", "47%" など）
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// 見出し + 箇条書き
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// 機能アイコン（描画はWeb側）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Code,
    Palette,
    Zap,
    Eye,
}

/// アコーディオン項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: FeatureIcon,
    pub details: Vec<String>,
}

/// デザイン指標
///
/// `improvement` は著者入力値。`after - before` から計算しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub before: u8,
    pub after: u8,
    pub improvement: i32,
}

impl Metric {
    /// プログレスバー用の幅（0-100に丸める）
    pub fn before_width(&self) -> u8 {
        self.before.min(100)
    }

    pub fn after_width(&self) -> u8 {
        self.after.min(100)
    }

    /// バッジ表示（"+46%"）
    pub fn improvement_label(&self) -> String {
        format!("{:+}%", self.improvement)
    }
}

/// ヒーローセクション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub highlight: String,
    pub tagline: String,
    pub primary: NavLink,
    pub secondary: NavLink,
    pub background_url: String,
}

/// 問い合わせセクション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// フッターの列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

/// フッター
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub about: String,
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
    pub tagline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(images: &[&str]) -> Slide {
        Slide {
            id: 1,
            title: "Campus Astronomy Class".to_string(),
            date: "Ongoing".to_string(),
            description: String::new(),
            images: images.iter().map(|s| s.to_string()).collect(),
            fallback_url: "https://placehold.co/fallback".to_string(),
        }
    }

    #[test]
    fn test_slide_image_at() {
        let s = slide(&["a.jpg", "b.jpg"]);
        assert_eq!(s.image_at(0), "a.jpg");
        assert_eq!(s.image_at(1), "b.jpg");
    }

    /// 範囲外・空文字はfallback
    #[test]
    fn test_slide_image_at_fallback() {
        let s = slide(&["", "b.jpg"]);
        assert_eq!(s.image_at(0), "https://placehold.co/fallback");
        assert_eq!(s.image_at(9), "https://placehold.co/fallback");
    }

    #[test]
    fn test_slide_gallery_controls() {
        assert!(!slide(&["a.jpg"]).has_gallery_controls());
        assert!(slide(&["a.jpg", "b.jpg"]).has_gallery_controls());
    }

    #[test]
    fn test_slide_deserialize_fallback_alias() {
        let json = r#"{
            "id": 3,
            "title": "Astrophotography Projects",
            "date": "Oct 12, 2025",
            "description": "Nebulae",
            "images": ["m51.png"],
            "fallback": "https://placehold.co/astro"
        }"#;
        let s: Slide = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(s.id, 3);
        assert_eq!(s.fallback_url, "https://placehold.co/astro");
    }

    /// improvementは入力値をそのまま保持する
    #[test]
    fn test_metric_improvement_not_derived() {
        let m = Metric {
            label: "Professional Polish".to_string(),
            before: 55,
            after: 90,
            improvement: 64,
        };
        assert_eq!(m.improvement, 64);
        assert_eq!(m.improvement_label(), "+64%");
    }

    #[test]
    fn test_metric_width_clamped() {
        let m = Metric {
            label: "x".to_string(),
            before: 120,
            after: 90,
            improvement: 0,
        };
        assert_eq!(m.before_width(), 100);
        assert_eq!(m.after_width(), 90);
    }

    #[test]
    fn test_feature_icon_serde() {
        let icon: FeatureIcon = serde_json::from_str("\"palette\"").expect("パース失敗");
        assert_eq!(icon, FeatureIcon::Palette);
        assert_eq!(serde_json::to_string(&FeatureIcon::Eye).unwrap(), "\"eye\"");
    }

    #[test]
    fn test_contact_mailto() {
        let c = Contact {
            heading: "Get in Touch".to_string(),
            blurb: String::new(),
            email: "contact@las.org".to_string(),
        };
        assert_eq!(c.mailto(), "mailto:contact@las.org");
    }
}
