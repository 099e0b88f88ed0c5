//! Admin Invoice Detail
//!
//! One invoice with its client, the amount breakdown, receipt links and the
//! status controls. A status change replaces the view with the backend's
//! updated record.

use leptos::*;
use leptos_router::use_params_map;

use crate::api;
use crate::api::types::{format_amount, format_date, Invoice, InvoiceStatus};
use crate::components::{Loading, StatusBadge};
use crate::state::global::GlobalState;

/// Admin invoice detail page component
#[component]
pub fn AdminInvoiceDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let (invoice, set_invoice) = create_signal(None::<Invoice>);
    let (loaded, set_loaded) = create_signal(false);

    let state_for_fetch = state;
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));
        let id = match id {
            Some(id) => id,
            None => {
                set_loaded.set(true);
                return;
            }
        };

        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_invoice(id).await {
                Ok(result) => set_invoice.set(Some(result)),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            {move || {
                if !loaded.get() {
                    return view! { <Loading /> }.into_view();
                }

                match invoice.get() {
                    Some(record) => view! {
                        <InvoiceView invoice=record set_invoice=set_invoice />
                    }.into_view(),
                    None => view! {
                        <div class="text-center py-12 text-gray-400">
                            "No encontramos esa factura"
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn InvoiceView(invoice: Invoice, set_invoice: WriteSignal<Option<Invoice>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let invoice_id = invoice.id;
    let status = invoice.status;
    let (busy, set_busy) = create_signal(false);

    let state_for_change = state;
    let change_status = move |status: InvoiceStatus| {
        set_busy.set(true);
        let state = state_for_change.clone();
        spawn_local(async move {
            match api::update_invoice_status(invoice_id, status).await {
                Ok(updated) => {
                    state.show_success("Factura actualizada");
                    set_invoice.set(Some(updated));
                }
                Err(e) => state.show_error(&e),
            }
            set_busy.set(false);
        });
    };

    let change_for_select = change_status.clone();
    let on_select = move |ev: web_sys::Event| {
        if let Some(status) = InvoiceStatus::parse(&event_target_value(&ev)) {
            change_for_select(status);
        }
    };

    let change_for_paid = change_status;
    let mark_paid = move |_| change_for_paid(InvoiceStatus::Paid);

    view! {
        // Header
        <div class="flex items-center justify-between">
            <div>
                <h1 class="text-3xl font-bold">{format!("Factura #{}", invoice.id)}</h1>
                <p class="text-gray-400 mt-1">
                    "Emitida " {format_date(&invoice.issue_date)}
                    " · Vence " {format_date(&invoice.due_date)}
                </p>
            </div>
            <StatusBadge status=status />
        </div>

        // Client
        {invoice.user.clone().map(|user| view! {
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-2">"Cliente"</h2>
                <p>{user.full_name()}</p>
                <p class="text-sm text-gray-400">
                    {format!("Usuario {} · DNI {}", user.username, user.dni)}
                </p>
            </section>
        })}

        // Amounts
        <section class="bg-gray-800 rounded-xl p-6 space-y-3">
            <div class="flex items-center justify-between text-sm">
                <span class="text-gray-400">"Abono"</span>
                <span>{format_amount(invoice.base_amount)}</span>
            </div>
            <div class="flex items-center justify-between text-sm">
                <span class="text-gray-400">"Recargo por mora"</span>
                <span>{format_amount(invoice.late_fee)}</span>
            </div>
            <div class="border-t border-gray-700 pt-3 flex items-center justify-between">
                <span class="font-semibold">"Total"</span>
                <span class="text-xl font-bold">{format_amount(invoice.total_amount)}</span>
            </div>
        </section>

        // Receipts
        <section class="bg-gray-800 rounded-xl p-6 space-y-3">
            <h2 class="text-lg font-semibold">"Comprobantes"</h2>
            <div class="flex flex-wrap gap-3">
                {invoice.receipt_pdf_url.clone().map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Factura PDF"
                    </a>
                })}
                {invoice.user_receipt_url.clone().map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Comprobante del cliente"
                    </a>
                })}
                {(invoice.receipt_pdf_url.is_none() && invoice.user_receipt_url.is_none())
                    .then(|| view! {
                        <p class="text-sm text-gray-400">"Sin comprobantes adjuntos"</p>
                    })}
            </div>
        </section>

        // Status controls
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">"Cambiar estado"</h2>
            <div class="flex flex-wrap gap-3">
                <select
                    on:change=on_select
                    disabled=move || busy.get()
                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    {InvoiceStatus::ALL.iter().map(|option| view! {
                        <option value=option.as_str() selected={*option == status}>
                            {option.label()}
                        </option>
                    }).collect_view()}
                </select>

                {(status != InvoiceStatus::Paid).then(|| view! {
                    <button
                        on:click=mark_paid
                        disabled=move || busy.get()
                        class="px-4 py-2 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Marcar pagada"
                    </button>
                })}
            </div>
        </section>
    }
}
