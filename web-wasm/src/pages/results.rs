//! 結果画面（タブ切替のダッシュボード）

use leptos::prelude::*;
use las_portal_common::{ResultsContent, ResultsTab, TabSelector, Theme};
use std::sync::Arc;
use crate::components::{
    feature_accordion::FeatureAccordion,
    header::Header,
    item_groups::ItemGroupGrid,
    progress_bar::MetricBar,
    stat_grid::StatGrid,
    tab_bar::TabBar,
};

#[component]
pub fn ResultsPage(content: ResultsContent, theme: Theme) -> impl IntoView {
    let tabs = RwSignal::new(TabSelector::new());
    let content = Arc::new(content);
    let visible = move |tab: ResultsTab| tabs.with(|t| t.is_visible(tab));

    let overview = content.clone();
    let metrics = content.clone();
    let features = content.clone();

    view! {
        <div class="screen results" data-theme=theme.as_str()>
            <Header
                title=content.title.clone()
                subtitle=content.subtitle.clone()
                actions=content.header_actions.clone()
            />
            <TabBar tabs=tabs />

            <main class="results-main">
                <Show when=move || visible(ResultsTab::Overview)>
                    <div class="panel">
                        <section>
                            <h2 class="gradient-text">"Executive Summary"</h2>
                            <StatGrid stats=overview.summary.clone() class="stat-grid-3" />
                        </section>
                        <section>
                            <h3>"Key Improvements"</h3>
                            <ItemGroupGrid groups=overview.key_improvements.clone() marker="✓" />
                        </section>
                    </div>
                </Show>

                <Show when=move || visible(ResultsTab::Metrics)>
                    <div class="panel">
                        <section>
                            <h2 class="gradient-text">"Design Metrics"</h2>
                            <div class="metric-list">
                                {metrics.metrics
                                    .iter()
                                    .map(|metric| view! { <MetricBar metric=metric.clone() /> })
                                    .collect_view()}
                            </div>
                            <StatGrid stats=metrics.metric_summary.clone() class="stat-grid-3" />
                        </section>
                    </div>
                </Show>

                <Show when=move || visible(ResultsTab::Features)>
                    <div class="panel">
                        <section>
                            <h2 class="gradient-text">"Design Features"</h2>
                            <FeatureAccordion features=features.features.clone() />
                        </section>
                        <section>
                            <h3>"Technical Implementation"</h3>
                            <ItemGroupGrid groups=features.technical.clone() marker="•" />
                        </section>
                    </div>
                </Show>
            </main>

            <section class="cta">
                <h2 class="gradient-text">{content.cta.heading.clone()}</h2>
                <p class="text-muted">{content.cta.blurb.clone()}</p>
                <div class="cta-actions">
                    <a class="btn btn-primary" href=content.cta.primary.href.clone()>
                        {content.cta.primary.label.clone()}
                    </a>
                    <button class="btn btn-outline" type="button">{content.cta.secondary_label.clone()}</button>
                </div>
            </section>

            <footer class="results-footer">
                <p>{content.footer.clone()}</p>
            </footer>
        </div>
    }
}
