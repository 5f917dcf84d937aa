//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner" />
            <p class="loading-text">{message}</p>
        </div>
    }
}
