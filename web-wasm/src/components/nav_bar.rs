//! ナビゲーションバーコンポーネント

use leptos::prelude::*;
use las_portal_common::{Brand, MenuToggle, NavLink};
use super::fallback_image::FallbackImage;

#[component]
pub fn NavBar(
    brand: Brand,
    links: Vec<NavLink>,
    login: NavLink,
    donate: NavLink,
) -> impl IntoView {
    let menu = RwSignal::new(MenuToggle::new());
    let is_open = move || menu.with(MenuToggle::is_open);

    let desktop_links = links
        .iter()
        .map(|link| view! { <a class="nav-link" href=link.href.clone()>{link.label.clone()}</a> })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <FallbackImage
                        src=Signal::stored(brand.logo_url.clone())
                        fallback=Signal::stored(brand.logo_fallback_url.clone())
                        alt=Signal::stored(format!("{} Logo", brand.name))
                        class="nav-logo"
                    />
                    <span class="nav-brand-name">{brand.name.clone()}</span>
                </a>

                <div class="nav-links desktop-only">{desktop_links}</div>

                <div class="nav-cta desktop-only">
                    <a class="btn btn-outline" href=login.href.clone()>{login.label.clone()}</a>
                    <a class="btn btn-accent" href=donate.href.clone()>{donate.label.clone()}</a>
                </div>

                <button
                    class="nav-toggle mobile-only"
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| menu.update(MenuToggle::toggle)
                >
                    {move || toggle_glyph(is_open())}
                </button>
            </div>

            <Show when=is_open>
                <div class="nav-mobile mobile-only">
                    {links
                        .iter()
                        .map(|link| view! { <a class="nav-link" href=link.href.clone()>{link.label.clone()}</a> })
                        .collect_view()}
                    <div class="nav-mobile-cta">
                        <a class="btn btn-outline" href=login.href.clone()>"Login"</a>
                        <a class="btn btn-accent" href=donate.href.clone()>{donate.label.clone()}</a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// 開いていれば閉じるボタン、閉じていればハンバーガー
fn toggle_glyph(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}
