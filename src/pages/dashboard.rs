//! Dashboard Page
//!
//! Read-only operations overview: KPI cards, managed farms, active crops.

use leptos::*;

use crate::components::KpiCard;
use crate::data::{CROPS, FARMS, KPIS};

/// Dashboard page component
#[component]
pub fn Dashboard(
    /// Company name of the signed-in tenant
    #[prop(into)]
    company_name: Signal<String>,
    /// Invoked when the user logs out
    #[prop(into)]
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header with logout
            <header class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">
                    {move || format!("{} Dashboard", company_name.get())}
                </h1>
                <button
                    on:click=move |_| on_logout.call(())
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium
                           transition-colors"
                >
                    "Log Out"
                </button>
            </header>

            // KPI overview
            <section aria-labelledby="kpi-heading">
                <h2 id="kpi-heading" class="sr-only">"Key Performance Indicators"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {KPIS.into_iter().map(|kpi| view! { <KpiCard kpi=kpi /> }).collect_view()}
                </div>
            </section>

            // Two column layout for farms and crops
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6" aria-labelledby="farms-heading">
                    <h2 id="farms-heading" class="text-xl font-semibold mb-4">"My Farms"</h2>
                    <ul class="space-y-2">
                        {FARMS.into_iter().map(|farm| view! {
                            <li class="flex items-center justify-between py-2 border-b
                                       border-gray-700 last:border-0">
                                <strong>{farm.name}</strong>
                                <span class="text-gray-400 text-sm">{farm.location}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>

                <section class="bg-gray-800 rounded-xl p-6" aria-labelledby="crops-heading">
                    <h2 id="crops-heading" class="text-xl font-semibold mb-4">"Active Crops"</h2>
                    <ul class="space-y-2">
                        {CROPS.into_iter().map(|crop| view! {
                            <li class="flex items-center justify-between py-2 border-b
                                       border-gray-700 last:border-0">
                                <strong>{crop.name}</strong>
                                <span class="text-gray-400 text-sm">
                                    {format!("{} - {} Health", crop.status, crop.health)}
                                </span>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}
