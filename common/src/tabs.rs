//! 結果画面のタブ

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// 3つの排他的なパネル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultsTab {
    #[default]
    Overview,
    Metrics,
    Features,
}

impl ResultsTab {
    /// 表示順
    pub const ALL: [ResultsTab; 3] = [ResultsTab::Overview, ResultsTab::Metrics, ResultsTab::Features];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultsTab::Overview => "overview",
            ResultsTab::Metrics => "metrics",
            ResultsTab::Features => "features",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultsTab::Overview => "Overview",
            ResultsTab::Metrics => "Metrics",
            ResultsTab::Features => "Features",
        }
    }
}

impl fmt::Display for ResultsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultsTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(ResultsTab::Overview),
            "metrics" => Ok(ResultsTab::Metrics),
            "features" => Ok(ResultsTab::Features),
            other => Err(Error::UnknownTab(other.to_string())),
        }
    }
}

/// 選択中のタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector {
    active: ResultsTab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ResultsTab {
        self.active
    }

    pub fn select(&mut self, tab: ResultsTab) {
        self.active = tab;
    }

    pub fn is_visible(&self, tab: ResultsTab) -> bool {
        self.active == tab
    }
}
