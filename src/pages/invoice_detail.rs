//! Customer Invoice Detail Page
//!
//! One invoice with its amount breakdown and the same actions as the list:
//! PDF download and receipt upload.

use leptos::*;
use leptos_router::use_params_map;

use crate::api;
use crate::api::types::{format_amount, format_date, Invoice};
use crate::components::{Loading, StatusBadge};
use crate::pages::invoices::{picked_file, save_file};
use crate::state::global::GlobalState;

/// Customer invoice detail page component
#[component]
pub fn InvoiceDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let (invoice, set_invoice) = create_signal(None::<Invoice>);
    let (loaded, set_loaded) = create_signal(false);

    let state_for_fetch = state.clone();
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
            match api::fetch_my_invoice(id).await {
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
                    Some(invoice) => view! {
                        <InvoiceView invoice=invoice set_invoice=set_invoice />
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
    let (uploading, set_uploading) = create_signal(false);

    let state_for_download = state.clone();
    let download = move |_| {
        let state = state_for_download.clone();
        spawn_local(async move {
            match api::download_invoice_pdf(invoice_id).await {
                Ok((bytes, filename)) => save_file(&bytes, &filename),
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_upload = state;
    let on_file = move |ev: web_sys::Event| {
        let file = match picked_file(&ev) {
            Some(file) => file,
            None => return,
        };

        set_uploading.set(true);
        let state = state_for_upload.clone();
        spawn_local(async move {
            match api::upload_receipt(invoice_id, &file).await {
                Ok(updated) => {
                    state.show_success("Comprobante enviado, tu pago está en revisión");
                    set_invoice.set(Some(updated));
                }
                Err(e) => state.show_error(&e),
            }
            set_uploading.set(false);
        });
    };

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
            <StatusBadge status=invoice.status />
        </div>

        // Amount breakdown
        <section class="bg-gray-800 rounded-xl p-6 space-y-3">
            <AmountLine label="Abono" amount=invoice.base_amount />
            <AmountLine label="Recargo por mora" amount=invoice.late_fee />
            <div class="border-t border-gray-700 pt-3 flex items-center justify-between">
                <span class="font-semibold">"Total"</span>
                <span class="text-xl font-bold">{format_amount(invoice.total_amount)}</span>
            </div>
        </section>

        // Actions
        <section class="bg-gray-800 rounded-xl p-6 space-y-3">
            <h2 class="text-lg font-semibold">"Acciones"</h2>
            <div class="flex flex-wrap gap-3">
                {invoice.receipt_pdf_url.is_some().then(|| view! {
                    <button
                        on:click=download
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Descargar PDF"
                    </button>
                })}

                {invoice.user_receipt_url.clone().map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Ver comprobante enviado"
                    </a>
                })}

                {invoice.can_upload_receipt().then(|| view! {
                    <label class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                  text-sm font-medium transition-colors cursor-pointer">
                        <input
                            type="file"
                            accept=".pdf,.jpg,.jpeg,.png"
                            class="hidden"
                            on:change=on_file
                            disabled=move || uploading.get()
                        />
                        {move || if uploading.get() { "Subiendo..." } else { "Subir comprobante" }}
                    </label>
                })}
            </div>
        </section>
    }
}

#[component]
fn AmountLine(label: &'static str, amount: f64) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between text-sm">
            <span class="text-gray-400">{label}</span>
            <span>{format_amount(amount)}</span>
        </div>
    }
}
