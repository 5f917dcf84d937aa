//! ホーム画面

use leptos::prelude::*;
use las_portal_common::{Carousel, HomeContent, LoadingGate, SiteConfig, Theme};
use std::sync::Arc;
use crate::components::{
    carousel::ActivityCarousel,
    loading_screen::LoadingScreen,
    nav_bar::NavBar,
    site_footer::SiteFooter,
    stat_grid::StatGrid,
};

#[component]
pub fn HomePage(config: SiteConfig, content: HomeContent, theme: Theme) -> impl IntoView {
    let gate = use_loading_gate(&config);
    let content = Arc::new(content);
    let brand = config.brand;

    view! {
        <div class="screen home" data-theme=theme.as_str()>
            <Show
                when=move || !gate.with(LoadingGate::is_loading)
                fallback=|| view! { <LoadingScreen message="Loading LAS Portal..." /> }
            >
                <NavBar
                    brand=brand.clone()
                    links=content.nav_links.clone()
                    login=content.login.clone()
                    donate=content.donate.clone()
                />
                <HomeSections content=content.clone() brand=brand.name.clone() />
            </Show>
        </div>
    }
}

/// マウント時にタイマーを開始し、アンマウント時に解除する
fn use_loading_gate(config: &SiteConfig) -> RwSignal<LoadingGate> {
    let delay = config.loading_delay();
    let gate = RwSignal::new(LoadingGate::mount(delay));

    match set_timeout_with_handle(
        move || {
            gate.try_update(|g| g.expire());
        },
        delay,
    ) {
        Ok(handle) => on_cleanup(move || {
            handle.clear();
            gate.try_update(|g| g.unmount());
        }),
        Err(e) => {
            gloo::console::warn!(format!("タイマー開始失敗: {:?}", e));
            gate.update(|g| {
                g.expire();
            });
        }
    }

    gate
}

#[component]
fn HomeSections(content: Arc<HomeContent>, #[prop(into)] brand: String) -> impl IntoView {
    let hero = &content.hero;
    let activities = &content.activities;

    let carousel = match Carousel::new(content.slides.clone()) {
        Ok(carousel) => Some(view! { <ActivityCarousel carousel=carousel /> }),
        Err(e) => {
            gloo::console::error!(format!("カルーセル作成失敗: {}", e));
            None
        }
    };

    view! {
        <section
            id="home"
            class="hero"
            style=format!("background-image: url('{}')", hero.background_url)
        >
            <div class="hero-overlay" />
            <div class="hero-inner">
                <span class="hero-badge">{hero.badge.clone()}</span>
                <h1>
                    {hero.title.clone()}
                    <br />
                    <span class="gradient-text">{hero.highlight.clone()}</span>
                </h1>
                <p class="hero-tagline">{hero.tagline.clone()}</p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href=hero.primary.href.clone()>{hero.primary.label.clone()}</a>
                    <a class="btn btn-outline-light" href=hero.secondary.href.clone()>{hero.secondary.label.clone()}</a>
                </div>
            </div>
        </section>

        <section
            id="activities"
            class="activities"
            style=activities
                .background_url
                .as_ref()
                .map(|url| format!("background-image: url('{}')", url))
                .unwrap_or_default()
        >
            <div class="activities-overlay" />
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{activities.heading.clone()}</h2>
                    <p class="text-muted">{activities.blurb.clone()}</p>
                </div>
                {carousel}
            </div>
        </section>

        <section class="stats">
            <StatGrid stats=content.stats.clone() class="stat-grid-4" />
        </section>

        <section id="contact" class="contact">
            <h2>{content.contact.heading.clone()}</h2>
            <p class="text-muted">{content.contact.blurb.clone()}</p>
            <a class="btn btn-primary" href=content.contact.mailto()>"Contact Us"</a>
        </section>

        <SiteFooter brand=brand footer=content.footer.clone() />
    }
}
