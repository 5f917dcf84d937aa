//! 統計カードコンポーネント

use leptos::prelude::*;
use las_portal_common::StatCard;

#[component]
pub fn StatGrid(
    stats: Vec<StatCard>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = format!("stat-grid {}", class).trim_end().to_string();

    view! {
        <div class=class>
            {stats
                .into_iter()
                .map(|stat| view! {
                    <div class="stat-card">
                        <p class="stat-label">{stat.label}</p>
                        <p class="stat-value">{stat.value}</p>
                        {stat.description.map(|d| view! { <p class="stat-description">{d}</p> })}
                    </div>
                })
                .collect_view()}
        </div>
    }
}
