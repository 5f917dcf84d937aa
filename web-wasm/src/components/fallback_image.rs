//! 読み込み失敗時に代替URLへ切り替える画像

use leptos::prelude::*;
use las_portal_common::{resolve_image_src, should_fall_back};

/// `src` が変わるたびに `<img>` を作り直し、失敗状態をリセットする
#[component]
pub fn FallbackImage(
    src: Signal<String>,
    fallback: Signal<String>,
    alt: Signal<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    move || {
        let requested = src.get();
        // このURLの読み込みに失敗したか
        let failed = RwSignal::new(None::<String>);

        let shown = requested.clone();
        let displayed = move || {
            let fallback = fallback.get();
            failed.with(|f| resolve_image_src(&shown, f.as_deref(), &fallback).to_string())
        };

        let on_error = {
            let requested = requested.clone();
            move || {
                if !should_fall_back(&requested, &fallback.get_untracked()) {
                    return;
                }
                if failed.with_untracked(|f| f.is_some()) {
                    // 代替画像も失敗
                    return;
                }
                gloo::console::warn!(format!("画像の読み込みに失敗: {}", requested));
                failed.set(Some(requested.clone()));
            }
        };

        view! {
            <img
                class=class.clone()
                src=displayed
                alt=move || alt.get()
                loading="lazy"
                on:error=move |_| on_error()
            />
        }
    }
}
