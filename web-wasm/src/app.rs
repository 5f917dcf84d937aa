//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use las_portal_common::{HomeContent, ResultsContent, Route, SiteConfig, Theme};
use crate::browser;
use crate::components::error_notice::ErrorNotice;
use crate::pages::{home::HomePage, not_found::NotFoundPage, results::ResultsPage};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let route = Route::from_path(&browser::pathname());
    gloo::console::log!(format!("LAS Portal: {}", route.path()));

    view! {
        <ScreenErrorBoundary>
            {move || screen(route)}
        </ScreenErrorBoundary>
    }
}

/// 子要素のエラーを `ErrorNotice` に置き換える
#[component]
pub fn ScreenErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            let messages = Signal::derive(move || {
                errors.get().into_iter().map(|(_, e)| e.to_string()).collect::<Vec<_>>()
            });
            view! { <ErrorNotice messages=messages /> }
        }>
            {children()}
        </ErrorBoundary>
    }
}

/// 設定とコンテンツを読み込んで画面を組み立てる
fn screen(route: Route) -> las_portal_common::Result<AnyView> {
    let config = SiteConfig::load()
        .inspect_err(|e| gloo::console::error!(format!("設定読込失敗: {}", e)))?;
    let theme = select_theme(&config, route, browser::search().as_deref());

    let view = match route {
        Route::Home => {
            let content = HomeContent::load()
                .inspect_err(|e| gloo::console::error!(format!("コンテンツ読込失敗: {}", e)))?;
            view! { <HomePage config=config content=content theme=theme /> }.into_any()
        }
        Route::Results => {
            let content = ResultsContent::load()
                .inspect_err(|e| gloo::console::error!(format!("コンテンツ読込失敗: {}", e)))?;
            view! { <ResultsPage content=content theme=theme /> }.into_any()
        }
        Route::NotFound => view! { <NotFoundPage theme=theme /> }.into_any(),
    };
    Ok(view)
}

/// 不正な `?theme=` は警告してルートの既定テーマを使う
fn select_theme(config: &SiteConfig, route: Route, query: Option<&str>) -> Theme {
    config.theme(route, query).unwrap_or_else(|e| {
        gloo::console::warn!(format!("{} (既定テーマを使用)", e));
        config.route_theme(route)
    })
}
