//! 404画面

use leptos::prelude::*;
use las_portal_common::{Route, Theme};

#[component]
pub fn NotFoundPage(theme: Theme) -> impl IntoView {
    view! {
        <div class="screen not-found" data-theme=theme.as_str()>
            <div class="not-found-card">
                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p class="text-muted">"Sorry, the page you are looking for doesn't exist or has been moved."</p>
                <a class="btn btn-primary" href=Route::Home.path()>"Go Home"</a>
            </div>
        </div>
    }
}
