//! 見出し付き箇条書きグリッド

use leptos::prelude::*;
use las_portal_common::ItemGroup;

#[component]
pub fn ItemGroupGrid(groups: Vec<ItemGroup>, #[prop(into)] marker: String) -> impl IntoView {
    view! {
        <div class="group-grid">
            {groups
                .into_iter()
                .map(|group| {
                    let marker = marker.clone();
                    view! {
                        <div class="group-card">
                            <h4>{group.title}</h4>
                            <ul>
                                {group.items
                                    .into_iter()
                                    .map(|item| view! {
                                        <li>
                                            <span class="item-marker">{marker.clone()}</span>
                                            {item}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
