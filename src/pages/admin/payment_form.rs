//! Register Payment
//!
//! Manual payment entry: find the client, pick one of their unpaid invoices
//! and record how it was paid. Transfers must come with the receipt file.

use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::types::{
    format_amount, format_date, Invoice, PaymentMethod, UserSummary,
};
use crate::state::global::GlobalState;

/// What must hold before the payment goes out
fn validate_payment(
    invoice: Option<u32>,
    date: &str,
    method: PaymentMethod,
    has_receipt: bool,
) -> Result<(), &'static str> {
    if invoice.is_none() {
        return Err("Elegí la factura a pagar");
    }
    if date.trim().is_empty() {
        return Err("Ingresá la fecha de pago");
    }
    if method == PaymentMethod::Transfer && !has_receipt {
        return Err("Adjuntá el comprobante de la transferencia");
    }
    Ok(())
}

/// Register payment page component
#[component]
pub fn RegisterPayment() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (search, set_search) = create_signal(String::new());
    let (matches, set_matches) = create_signal(Vec::<UserSummary>::new());
    let (client, set_client) = create_signal(None::<UserSummary>);
    let (pending, set_pending) = create_signal(Vec::<Invoice>::new());
    let (invoice_id, set_invoice_id) = create_signal(None::<u32>);
    let (date, set_date) = create_signal(chrono::Local::now().format("%Y-%m-%d").to_string());
    let (method, set_method) = create_signal(PaymentMethod::Cash);
    let (receipt, set_receipt) = create_signal(None::<web_sys::File>);
    let (saving, set_saving) = create_signal(false);

    // Amount is read-only: always the total of the chosen invoice
    let amount = create_memo(move |_| {
        let id = invoice_id.get()?;
        pending
            .get()
            .into_iter()
            .find(|invoice| invoice.id == id)
            .map(|invoice| invoice.total_amount)
    });

    // Client lookup while typing
    let state_for_search = state.clone();
    create_effect(move |_| {
        let term = search.get();
        if term.trim().is_empty() {
            set_matches.set(Vec::new());
            return;
        }

        let state = state_for_search.clone();
        spawn_local(async move {
            match api::fetch_users(1, 5, Some(term.trim())).await {
                Ok(result) => set_matches.set(result.items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let state_for_pick = state.clone();
    let pick_client = move |picked: UserSummary| {
        let user_id = picked.id;
        set_client.set(Some(picked));
        set_matches.set(Vec::new());
        set_search.set(String::new());
        set_invoice_id.set(None);
        set_pending.set(Vec::new());

        let state = state_for_pick.clone();
        spawn_local(async move {
            match api::fetch_pending_invoices(user_id).await {
                Ok(result) => set_pending.set(result),
                Err(e) => state.show_error(&e),
            }
        });
    };

    let on_file = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        set_receipt.set(file);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let selected = invoice_id.get();
        let payment_date = date.get();
        let payment_method = method.get();
        let file = receipt.get();

        if let Err(message) =
            validate_payment(selected, &payment_date, payment_method, file.is_some())
        {
            state.show_error(message);
            return;
        }
        let invoice = match selected.zip(amount.get()) {
            Some(pair) => pair,
            None => return,
        };

        set_saving.set(true);
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register_payment(
                invoice.0,
                invoice.1,
                &payment_date,
                payment_method,
                file.as_ref(),
            )
            .await;

            match result {
                Ok(_) => {
                    state.show_success("Pago registrado");
                    navigate("/admin/payments", Default::default());
                }
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Registrar pago"</h1>
                <p class="text-gray-400 mt-1">"Pago recibido en oficina o por transferencia"</p>
            </div>

            // Step 1: client
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-lg font-semibold">"Cliente"</h2>

                {move || match client.get() {
                    Some(picked) => view! {
                        <div class="flex items-center justify-between bg-gray-700 rounded-lg px-4 py-3">
                            <div>
                                <p class="font-medium">
                                    {format!("{} {}", picked.firstname, picked.lastname)}
                                </p>
                                <p class="text-sm text-gray-400">
                                    {format!("Usuario {} · DNI {}", picked.username, picked.dni)}
                                </p>
                            </div>
                            <button
                                type="button"
                                on:click=move |_| {
                                    set_client.set(None);
                                    set_pending.set(Vec::new());
                                    set_invoice_id.set(None);
                                }
                                class="text-sm text-gray-400 hover:text-white"
                            >
                                "Cambiar"
                            </button>
                        </div>
                    }.into_view(),
                    None => view! {
                        <input
                            type="text"
                            placeholder="Buscar por usuario..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />

                        {
                            let pick_client = pick_client.clone();
                            move || {
                                let pick_client = pick_client.clone();
                                matches.get().into_iter().map(move |found| {
                                    let pick_client = pick_client.clone();
                                    let label = format!(
                                        "{} {} · {}",
                                        found.firstname, found.lastname, found.username,
                                    );
                                    view! {
                                        <button
                                            type="button"
                                            on:click=move |_| pick_client(found.clone())
                                            class="block w-full text-left px-4 py-2 bg-gray-700
                                                   hover:bg-gray-600 rounded-lg text-sm transition-colors"
                                        >
                                            {label}
                                        </button>
                                    }
                                }).collect_view()
                            }
                        }
                    }.into_view(),
                }}
            </section>

            // Step 2: invoice and payment data
            {move || client.get().is_some().then(|| {
                let on_submit = on_submit.clone();
                view! {
                <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <h2 class="text-lg font-semibold">"Pago"</h2>

                    // Pending invoice picker
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Factura a pagar"</label>
                        {move || {
                            let invoices = pending.get();
                            if invoices.is_empty() {
                                return view! {
                                    <p class="text-sm text-gray-400">
                                        "El cliente no tiene facturas pendientes"
                                    </p>
                                }.into_view();
                            }

                            view! {
                                <select
                                    on:change=move |ev| {
                                        set_invoice_id.set(event_target_value(&ev).parse().ok())
                                    }
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                >
                                    <option value="">"Elegir factura..."</option>
                                    {invoices.into_iter().map(|invoice| view! {
                                        <option value=invoice.id.to_string()>
                                            {format!(
                                                "#{} · vence {} · {}",
                                                invoice.id,
                                                format_date(&invoice.due_date),
                                                format_amount(invoice.total_amount),
                                            )}
                                        </option>
                                    }).collect_view()}
                                </select>
                            }.into_view()
                        }}
                    </div>

                    // Amount, read-only from the invoice
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Importe"</label>
                        <input
                            type="text"
                            readonly=true
                            prop:value=move || {
                                amount.get().map(format_amount).unwrap_or_default()
                            }
                            class="w-full bg-gray-700/50 text-gray-300 rounded-lg px-4 py-3
                                   border border-gray-600"
                        />
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        // Date
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Fecha de pago"</label>
                            <input
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| set_date.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        // Method
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Medio de pago"</label>
                            <select
                                on:change=move |ev| {
                                    if let Some(parsed) =
                                        PaymentMethod::parse(&event_target_value(&ev))
                                    {
                                        set_method.set(parsed);
                                    }
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            >
                                <option value="cash">"Efectivo"</option>
                                <option value="transfer">"Transferencia"</option>
                            </select>
                        </div>
                    </div>

                    // Receipt, required for transfers
                    {move || (method.get() == PaymentMethod::Transfer).then(|| view! {
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">
                                "Comprobante de transferencia"
                            </label>
                            <label class="inline-block px-4 py-2 bg-gray-700 hover:bg-gray-600
                                          rounded-lg text-sm font-medium transition-colors cursor-pointer">
                                <input
                                    type="file"
                                    accept=".pdf,.jpg,.jpeg,.png"
                                    class="hidden"
                                    on:change=on_file
                                />
                                {move || {
                                    receipt
                                        .get()
                                        .map(|file| file.name())
                                        .unwrap_or_else(|| "Elegir archivo".to_string())
                                }}
                            </label>
                        </div>
                    })}

                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if saving.get() { "Registrando..." } else { "Registrar pago" }}
                    </button>
                </form>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_is_required() {
        let result = validate_payment(None, "2024-03-05", PaymentMethod::Cash, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_date_is_required() {
        let result = validate_payment(Some(7), "", PaymentMethod::Cash, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_transfer_requires_receipt() {
        assert!(validate_payment(Some(7), "2024-03-05", PaymentMethod::Transfer, false).is_err());
        assert!(validate_payment(Some(7), "2024-03-05", PaymentMethod::Transfer, true).is_ok());
    }

    #[test]
    fn test_cash_needs_no_receipt() {
        assert!(validate_payment(Some(7), "2024-03-05", PaymentMethod::Cash, false).is_ok());
    }
}
