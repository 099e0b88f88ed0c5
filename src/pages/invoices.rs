//! Customer Invoices Page
//!
//! Paginated list of the signed-in customer's invoices with month/year
//! filters. Each row can download the invoice PDF and, while the invoice is
//! unpaid, attach a payment receipt that sends it to review.

use leptos::*;
use leptos_router::A;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::types::{format_amount, format_date, Invoice, MONTHS};
use crate::components::{ListSkeleton, PageState, Pagination, StatusBadge};
use crate::state::global::GlobalState;

const PAGE_SIZE: u32 = 5;

/// Hand the browser a file to save
pub(crate) fn save_file(bytes: &[u8], filename: &str) {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());

    let blob = match web_sys::Blob::new_with_u8_array_sequence(&parts) {
        Ok(blob) => blob,
        Err(_) => return,
    };
    let url = match web_sys::Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(_) => return,
    };

    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Ok(anchor) = document.create_element("a") {
            let _ = anchor.set_attribute("href", &url);
            let _ = anchor.set_attribute("download", filename);
            if let Some(element) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                element.click();
            }
        }
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}

/// File picked in a change event, if any
pub(crate) fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
    let file = input.files()?.get(0)?;
    // Allow re-selecting the same file later
    input.set_value("");
    Some(file)
}

/// Customer invoice list page component
#[component]
pub fn Invoices() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let pager = PageState::new();
    let (invoices, set_invoices) = create_signal(Vec::<Invoice>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (fetching, set_fetching) = create_signal(false);
    let (month, set_month) = create_signal(None::<u32>);
    let (year, set_year) = create_signal(None::<i32>);

    // Refetch whenever the page, a filter or the reload counter changes
    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let page = pager.page.get();
        let _ = pager.reload.get();
        let month = month.get();
        let year = year.get();

        let state = state_for_fetch.clone();
        set_fetching.set(true);
        spawn_local(async move {
            match api::fetch_my_invoices(page, PAGE_SIZE, month, year).await {
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

    let on_month = move |ev: web_sys::Event| {
        set_month.set(event_target_value(&ev).parse().ok());
        pager.reset_for_filter();
    };
    let on_year = move |ev: web_sys::Event| {
        set_year.set(event_target_value(&ev).parse().ok());
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
            <div>
                <h1 class="text-3xl font-bold">"Mis Facturas"</h1>
                <p class="text-gray-400 mt-1">"Historial de facturación de tu servicio"</p>
            </div>

            // Filters
            <div class="flex flex-wrap gap-3">
                <select
                    on:change=on_month
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
                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Todos los años"</option>
                    {year_options.into_iter().map(|y| view! {
                        <option value=y.to_string()>{y}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count={PAGE_SIZE as usize} /> }.into_view();
                }

                let rows = invoices.get();
                if rows.is_empty() {
                    return view! {
                        <div class="text-center py-12 text-gray-400">
                            "No hay facturas para el período seleccionado"
                        </div>
                    }.into_view();
                }

                view! {
                    // Desktop table
                    <div class="hidden md:block bg-gray-800 rounded-xl overflow-hidden">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700/50 text-gray-400 text-left">
                                <tr>
                                    <th class="px-4 py-3">"Emisión"</th>
                                    <th class="px-4 py-3">"Vencimiento"</th>
                                    <th class="px-4 py-3">"Total"</th>
                                    <th class="px-4 py-3">"Estado"</th>
                                    <th class="px-4 py-3 text-right">"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.clone().into_iter().map(|invoice| view! {
                                    <InvoiceRow invoice=invoice pager=pager />
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    // Mobile cards
                    <div class="md:hidden space-y-3">
                        {rows.into_iter().map(|invoice| view! {
                            <InvoiceCard invoice=invoice pager=pager />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            <Pagination pager=pager busy=fetching />
        </div>
    }
}

/// Table row for one invoice
#[component]
fn InvoiceRow(invoice: Invoice, pager: PageState) -> impl IntoView {
    view! {
        <tr class="border-t border-gray-700">
            <td class="px-4 py-3">{format_date(&invoice.issue_date)}</td>
            <td class="px-4 py-3">{format_date(&invoice.due_date)}</td>
            <td class="px-4 py-3 font-medium">{format_amount(invoice.total_amount)}</td>
            <td class="px-4 py-3"><StatusBadge status=invoice.status /></td>
            <td class="px-4 py-3">
                <div class="flex items-center justify-end gap-2">
                    <InvoiceActions invoice=invoice pager=pager />
                </div>
            </td>
        </tr>
    }
}

/// Stacked card for one invoice on small screens
#[component]
fn InvoiceCard(invoice: Invoice, pager: PageState) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 space-y-3">
            <div class="flex items-center justify-between">
                <span class="font-medium">{format_amount(invoice.total_amount)}</span>
                <StatusBadge status=invoice.status />
            </div>
            <div class="text-sm text-gray-400">
                "Emitida " {format_date(&invoice.issue_date)}
                " · Vence " {format_date(&invoice.due_date)}
            </div>
            <div class="flex flex-wrap gap-2">
                <InvoiceActions invoice=invoice pager=pager />
            </div>
        </div>
    }
}

/// Per-invoice actions: detail link, PDF download, receipt link and upload
#[component]
pub(crate) fn InvoiceActions(invoice: Invoice, pager: PageState) -> impl IntoView {
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
                Ok(_) => {
                    state.show_success("Comprobante enviado, tu pago está en revisión");
                    pager.refetch();
                }
                Err(e) => state.show_error(&e),
            }
            set_uploading.set(false);
        });
    };

    let action_class = "px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded-lg text-xs \
                        font-medium transition-colors";

    view! {
        <A href=format!("/dashboard/invoices/{}", invoice_id) class=action_class>
            "Ver"
        </A>

        {invoice.receipt_pdf_url.is_some().then(|| view! {
            <button on:click=download class=action_class>"PDF"</button>
        })}

        {invoice.user_receipt_url.clone().map(|url| view! {
            <a href=url target="_blank" class=action_class>"Comprobante"</a>
        })}

        {invoice.can_upload_receipt().then(|| view! {
            <label class=format!("{} cursor-pointer bg-primary-600 hover:bg-primary-700", action_class)>
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
    }
}
