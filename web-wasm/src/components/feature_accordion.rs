//! 機能アコーディオンコンポーネント

use leptos::prelude::*;
use las_portal_common::{Accordion, Feature, FeatureIcon};

#[component]
pub fn FeatureAccordion(features: Vec<Feature>) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(features.len()));

    let toggle = move |idx: usize| {
        accordion.update(|a| {
            if let Err(e) = a.toggle(idx) {
                gloo::console::warn!(e.to_string());
            }
        });
    };

    view! {
        <div class="accordion">
            {features
                .into_iter()
                .enumerate()
                .map(|(idx, feature)| {
                    let is_expanded = move || accordion.with(|a| a.is_expanded(idx));
                    let details = feature.details;
                    view! {
                        <div class="accordion-item">
                            <button
                                class="accordion-header"
                                aria-expanded=move || is_expanded().to_string()
                                on:click=move |_| toggle(idx)
                            >
                                <span class="feature-icon">{icon_glyph(feature.icon)}</span>
                                <span class="accordion-title">
                                    <h3>{feature.title}</h3>
                                    <p class="text-muted">{feature.description}</p>
                                </span>
                                <span class=move || chevron_class(is_expanded())>"⌄"</span>
                            </button>
                            <Show when=is_expanded>
                                <ul class="accordion-body">
                                    {details
                                        .iter()
                                        .map(|detail| view! { <li>"→ "{detail.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// アイコンの表示文字
pub fn icon_glyph(icon: FeatureIcon) -> &'static str {
    match icon {
        FeatureIcon::Code => "</>",
        FeatureIcon::Palette => "🎨",
        FeatureIcon::Zap => "⚡",
        FeatureIcon::Eye => "👁",
    }
}

fn chevron_class(expanded: bool) -> &'static str {
    if expanded { "chevron rotated" } else { "chevron" }
}
