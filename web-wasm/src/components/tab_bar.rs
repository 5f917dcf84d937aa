//! タブバーコンポーネント

use leptos::prelude::*;
use las_portal_common::{ResultsTab, TabSelector};

#[component]
pub fn TabBar(tabs: RwSignal<TabSelector>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {ResultsTab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        role="tab"
                        class=move || tab_class(tabs.with(|t| t.is_visible(tab)))
                        aria-selected=move || tabs.with(|t| t.is_visible(tab)).to_string()
                        on:click=move |_| tabs.update(|t| t.select(tab))
                    >
                        {tab.label()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab active" } else { "tab" }
}
