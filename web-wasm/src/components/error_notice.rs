//! エラー表示コンポーネント

use leptos::prelude::*;

/// 描画に失敗した部分の代わりに表示する
#[component]
pub fn ErrorNotice(messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="error-notice" role="alert">
            <h2>"Something went wrong"</h2>
            <p>"This section could not be displayed. Please reload the page."</p>
            <ul>
                {move || messages.get()
                    .into_iter()
                    .map(|message| view! { <li>{message}</li> })
                    .collect_view()
                }
            </ul>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
