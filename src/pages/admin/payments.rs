//! Payment Management
//!
//! Registered payments, paginated, with search, period and method filters.

use leptos::*;
use leptos_router::A;

use crate::api;
use crate::api::types::{format_amount, format_date, Payment, PaymentMethod, MONTHS};
use crate::components::{ListSkeleton, PageState, Pagination};
use crate::state::global::GlobalState;

const PAGE_SIZE: u32 = 10;

/// Admin payment list page component
#[component]
pub fn PaymentManagement() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let pager = PageState::new();
    let (payments, set_payments) = create_signal(Vec::<Payment>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (fetching, set_fetching) = create_signal(false);

    let (search, set_search) = create_signal(String::new());
    let (month, set_month) = create_signal(None::<u32>);
    let (year, set_year) = create_signal(None::<i32>);
    let (method, set_method) = create_signal(None::<PaymentMethod>);

    let state_for_fetch = state;
    create_effect(move |_| {
        let page = pager.page.get();
        let _ = pager.reload.get();
        let search = search.get();
        let month = month.get();
        let year = year.get();
        let method = method.get();

        let state = state_for_fetch.clone();
        set_fetching.set(true);
        spawn_local(async move {
            let filter = if search.trim().is_empty() {
                None
            } else {
                Some(search.trim().to_string())
            };
            match api::fetch_payments(page, PAGE_SIZE, filter.as_deref(), month, year, method).await
            {
                Ok(result) => {
                    pager.total_pages.set(result.total_pages.max(1));
                    set_payments.set(result.items);
                    set_loaded.set(true);
                }
                Err(e) => state.show_error(&e),
            }
            set_fetching.set(false);
        });
    });

    let on_search = move |ev: web_sys::Event| {
        set_search.set(event_target_value(&ev));
        pager.reset_for_filter();
    };
    let on_month = move |ev: web_sys::Event| {
        set_month.set(event_target_value(&ev).parse().ok());
        pager.reset_for_filter();
    };
    let on_year = move |ev: web_sys::Event| {
        set_year.set(event_target_value(&ev).parse().ok());
        pager.reset_for_filter();
    };
    let on_method = move |ev: web_sys::Event| {
        set_method.set(PaymentMethod::parse(&event_target_value(&ev)));
        pager.reset_for_filter();
    };
    let reset_filters = move |_| {
        set_search.set(String::new());
        set_month.set(None);
        set_year.set(None);
        set_method.set(None);
        pager.reset_for_filter();
    };

    let year_options = {
        use chrono::Datelike;
        let current = chrono::Local::now().year();
        (current - 4..=current).rev().collect::<Vec<_>>()
    };

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Pagos"</h1>
                    <p class="text-gray-400 mt-1">"Pagos registrados manualmente"</p>
                </div>

                <A
                    href="/admin/payments/new"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ Registrar pago"
                </A>
            </div>

            // Filters
            <div class="flex flex-wrap gap-3">
                <input
                    type="text"
                    placeholder="Buscar cliente..."
                    prop:value=move || search.get()
                    on:input=on_search
                    class="flex-1 min-w-48 max-w-sm bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                <select
                    on:change=on_month
                    prop:value=move || month.get().map(|m| m.to_string()).unwrap_or_default()
                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Todos los meses"</option>
                    {MONTHS.iter().enumerate().map(|(i, name)| view! {
                        <option value=(i + 1).to_string()>{*name}</option>
                    }).collect_view()}
                </select>

                <select
                    on:change=on_year
                    prop:value=move || year.get().map(|y| y.to_string()).unwrap_or_default()
                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Todos los años"</option>
                    {year_options.into_iter().map(|y| view! {
                        <option value=y.to_string()>{y}</option>
                    }).collect_view()}
                </select>

                <select
                    on:change=on_method
                    prop:value=move || method.get().map(|m| m.as_str().to_string()).unwrap_or_default()
                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Todos los medios"</option>
                    <option value="cash">"Efectivo"</option>
                    <option value="transfer">"Transferencia"</option>
                </select>

                <button
                    on:click=reset_filters
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "Limpiar filtros"
                </button>
            </div>

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count={PAGE_SIZE as usize} /> }.into_view();
                }

                let rows = payments.get();
                if rows.is_empty() {
                    return view! {
                        <div class="text-center py-12 text-gray-400">
                            "No hay pagos para los filtros elegidos"
                        </div>
                    }.into_view();
                }

                view! {
                    // Desktop table
                    <div class="hidden md:block bg-gray-800 rounded-xl overflow-hidden">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700/50 text-gray-400 text-left">
                                <tr>
                                    <th class="px-4 py-3">"Fecha"</th>
                                    <th class="px-4 py-3">"Cliente"</th>
                                    <th class="px-4 py-3">"Factura"</th>
                                    <th class="px-4 py-3">"Medio"</th>
                                    <th class="px-4 py-3 text-right">"Importe"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.clone().into_iter().map(|payment| {
                                    let client = payment
                                        .user
                                        .as_ref()
                                        .map(|user| user.full_name())
                                        .unwrap_or_default();
                                    view! {
                                        <tr class="border-t border-gray-700">
                                            <td class="px-4 py-3">{format_date(&payment.payment_date)}</td>
                                            <td class="px-4 py-3">{client}</td>
                                            <td class="px-4 py-3 text-gray-400">
                                                {format!("#{}", payment.invoice_id)}
                                            </td>
                                            <td class="px-4 py-3">{payment.payment_method.label()}</td>
                                            <td class="px-4 py-3 text-right font-medium">
                                                {format_amount(payment.amount)}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    // Mobile cards
                    <div class="md:hidden space-y-3">
                        {rows.into_iter().map(|payment| {
                            let client = payment
                                .user
                                .as_ref()
                                .map(|user| user.full_name())
                                .unwrap_or_default();
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 space-y-2">
                                    <div class="flex items-center justify-between">
                                        <span class="font-medium">{format_amount(payment.amount)}</span>
                                        <span class="text-sm text-gray-400">
                                            {payment.payment_method.label()}
                                        </span>
                                    </div>
                                    <div class="text-sm text-gray-400">
                                        {client}
                                        " · Factura #" {payment.invoice_id}
                                        " · " {format_date(&payment.payment_date)}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            <Pagination pager=pager busy=fetching />
        </div>
    }
}
