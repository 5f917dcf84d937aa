//! 指標プログレスバーコンポーネント

use leptos::prelude::*;
use las_portal_common::Metric;

/// before / after の2本のバーと改善率バッジ
#[component]
pub fn MetricBar(metric: Metric) -> impl IntoView {
    view! {
        <div class="metric">
            <div class="metric-header">
                <span class="metric-label">{metric.label.clone()}</span>
                <span class="metric-improvement">{metric.improvement_label()}</span>
            </div>
            <div class="progress-row">
                <div class="progress-bar">
                    <div class="progress-fill before" style=width_style(metric.before_width()) />
                </div>
                <span class="progress-text">{format!("{}%", metric.before)}</span>
            </div>
            <div class="progress-row">
                <div class="progress-bar after">
                    <div class="progress-fill after" style=width_style(metric.after_width()) />
                </div>
                <span class="progress-text after">{format!("{}%", metric.after)}</span>
            </div>
        </div>
    }
}

fn width_style(percent: u8) -> String {
    format!("width: {}%", percent)
}
