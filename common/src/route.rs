//! パスベースのルーティング

/// 表示画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Results,
    NotFound,
}

impl Route {
    /// `location.pathname` から画面を決める
    ///
    /// 末尾のスラッシュ1つは無視する。大文字小文字は区別しない（ASCIIのみ）。
    pub fn from_path(path: &str) -> Self {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        if path.is_empty() || path == "/" {
            Route::Home
        } else if path.eq_ignore_ascii_case(Route::Results.path()) {
            Route::Results
        } else {
            Route::NotFound
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Results => "/results",
            Route::NotFound => "/404",
        }
    }
}
