//! Admin Dashboard
//!
//! Billing counters at a glance plus shortcuts to the management views.

use leptos::*;
use leptos_router::A;

use crate::api;
use crate::api::types::{format_amount, DashboardStats};
use crate::components::CardSkeleton;
use crate::state::global::GlobalState;

/// Admin dashboard page component
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (stats, set_stats) = create_signal(None::<DashboardStats>);

    let state_for_fetch = state;
    create_effect(move |_| {
        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(result) => set_stats.set(Some(result)),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Panel de administración"</h1>
                <p class="text-gray-400 mt-1">"Estado de la facturación del mes"</p>
            </div>

            // Counters
            {move || match stats.get() {
                Some(stats) => view! {
                    <div class="grid grid-cols-2 lg:grid-cols-3 gap-4">
                        <StatCard
                            label="Clientes activos"
                            value=stats.active_clients.to_string()
                            accent="text-white"
                        />
                        <StatCard
                            label="Recaudación del mes"
                            value=format_amount(stats.monthly_revenue)
                            accent="text-primary-400"
                        />
                        <StatCard
                            label="Facturas del mes"
                            value=stats.total.to_string()
                            accent="text-white"
                        />
                        <StatCard
                            label="Pendientes"
                            value=stats.pending.to_string()
                            accent="text-yellow-400"
                        />
                        <StatCard
                            label="Pagadas"
                            value=stats.paid.to_string()
                            accent="text-green-400"
                        />
                        <StatCard
                            label="Vencidas"
                            value=stats.overdue.to_string()
                            accent="text-red-400"
                        />
                    </div>
                }.into_view(),
                None => view! {
                    <div class="grid grid-cols-2 lg:grid-cols-3 gap-4">
                        {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                    </div>
                }.into_view(),
            }}

            // Shortcuts
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                <ShortcutCard href="/admin/clients" icon="👥" label="Clientes" />
                <ShortcutCard href="/admin/invoices" icon="🧾" label="Facturas" />
                <ShortcutCard href="/admin/payments" icon="💵" label="Pagos" />
                <ShortcutCard href="/admin/plans" icon="📶" label="Planes" />
            </div>
        </div>
    }
}

/// Single counter card
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: String,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4">
            <p class="text-sm text-gray-400">{label}</p>
            <p class=format!("text-2xl font-bold mt-2 {}", accent)>{value}</p>
        </div>
    }
}

#[component]
fn ShortcutCard(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center space-x-3 bg-gray-800 rounded-xl p-4 border border-gray-700
                   hover:border-primary-500 transition-colors"
        >
            <span class="text-2xl">{icon}</span>
            <span class="font-medium">{label}</span>
        </A>
    }
}
