//! KPI Card Component
//!
//! Displays a single key performance indicator with its trend arrow.

use leptos::*;

use crate::data::Kpi;

/// KPI card component
#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            // Header with title and trend indicator
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{kpi.title}</span>
                <span class=format!("text-sm {}", kpi.trend.color_class())>
                    {kpi.trend.arrow()}
                </span>
            </div>

            // Current value
            <div class="text-3xl font-bold mt-2">{kpi.value}</div>
        </div>
    }
}
