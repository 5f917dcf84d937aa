//! window.location の読み取り

/// 現在のパス。取得できなければ "/"
pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// クエリ文字列（"?theme=dark" など）。空なら None
pub fn search() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .filter(|s| !s.is_empty())
}
