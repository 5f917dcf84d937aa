//! 結果画面ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    actions: Vec<String>,
) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <div>
                    <h1>{title}</h1>
                    <p class="text-muted">{subtitle}</p>
                </div>
                <div class="header-actions">
                    {actions
                        .into_iter()
                        .map(|label| view! { <button class="btn btn-ghost" type="button">{label}</button> })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}
