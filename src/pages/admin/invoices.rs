//! Invoice Management
//!
//! Every invoice in the system, paginated, with a status filter.

use leptos::*;
use leptos_router::A;

use crate::api;
use crate::api::types::{format_amount, format_date, Invoice, InvoiceStatus};
use crate::components::{ListSkeleton, PageState, Pagination, StatusBadge};
use crate::state::global::GlobalState;

const PAGE_SIZE: u32 = 10;

/// Admin invoice list page component
#[component]
pub fn InvoiceManagement() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let pager = PageState::new();
    let (invoices, set_invoices) = create_signal(Vec::<Invoice>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (fetching, set_fetching) = create_signal(false);
    let (status, set_status) = create_signal(None::<InvoiceStatus>);

    let state_for_fetch = state;
    create_effect(move |_| {
        let page = pager.page.get();
        let _ = pager.reload.get();
        let status = status.get();

        let state = state_for_fetch.clone();
        set_fetching.set(true);
        spawn_local(async move {
            match api::fetch_all_invoices(page, PAGE_SIZE, status).await {
                Ok(result) => {
                    pager.total_pages.set(result.total_pages.max(1));
                    set_invoices.set(result.items);
                    set_loaded.set(true);
                }
                Err(e) => state.show_error(&e),
            }
            set_fetching.set(false);
        });
    });

    let on_status = move |ev: web_sys::Event| {
        set_status.set(InvoiceStatus::parse(&event_target_value(&ev)));
        pager.reset_for_filter();
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Facturas"</h1>
                <p class="text-gray-400 mt-1">"Todas las facturas emitidas"</p>
            </div>

            // Status filter
            <select
                on:change=on_status
                class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                       focus:border-primary-500 focus:outline-none"
            >
                <option value="">"Todos los estados"</option>
                {InvoiceStatus::ALL.iter().map(|option| view! {
                    <option value=option.as_str()>{option.label()}</option>
                }).collect_view()}
            </select>

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count={PAGE_SIZE as usize} /> }.into_view();
                }

                let rows = invoices.get();
                if rows.is_empty() {
                    return view! {
                        <div class="text-center py-12 text-gray-400">
                            "No hay facturas con ese estado"
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="bg-gray-800 rounded-xl overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700/50 text-gray-400 text-left">
                                <tr>
                                    <th class="px-4 py-3">"#"</th>
                                    <th class="px-4 py-3">"Cliente"</th>
                                    <th class="px-4 py-3">"Emisión"</th>
                                    <th class="px-4 py-3">"Vencimiento"</th>
                                    <th class="px-4 py-3">"Total"</th>
                                    <th class="px-4 py-3">"Estado"</th>
                                    <th class="px-4 py-3 text-right"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|invoice| view! {
                                    <InvoiceRow invoice=invoice />
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view()
            }}

            <Pagination pager=pager busy=fetching />
        </div>
    }
}

#[component]
fn InvoiceRow(invoice: Invoice) -> impl IntoView {
    let client = invoice
        .user
        .as_ref()
        .map(|user| user.full_name())
        .unwrap_or_default();

    view! {
        <tr class="border-t border-gray-700">
            <td class="px-4 py-3 text-gray-400">{invoice.id}</td>
            <td class="px-4 py-3">{client}</td>
            <td class="px-4 py-3">{format_date(&invoice.issue_date)}</td>
            <td class="px-4 py-3">{format_date(&invoice.due_date)}</td>
            <td class="px-4 py-3 font-medium">{format_amount(invoice.total_amount)}</td>
            <td class="px-4 py-3"><StatusBadge status=invoice.status /></td>
            <td class="px-4 py-3 text-right">
                <A
                    href=format!("/admin/invoices/{}", invoice.id)
                    class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-xs font-medium transition-colors"
                >
                    "Ver"
                </A>
            </td>
        </tr>
    }
}
