//! Company Settings
//!
//! Billing configuration form: business identity, payment window, late fee
//! and automatic invoicing. Saved values replace the form state.

use leptos::*;

use crate::api;
use crate::api::types::CompanySettings;
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Assemble the settings payload; business fields are required and the
/// numeric fields must parse
fn parse_settings(
    business_name: &str,
    business_cuit: &str,
    business_address: &str,
    business_city: &str,
    business_phone: &str,
    payment_window_days: &str,
    late_fee_amount: &str,
    days_for_suspension: &str,
    auto_invoicing_enabled: bool,
) -> Result<CompanySettings, &'static str> {
    if business_name.trim().is_empty() || business_cuit.trim().is_empty() {
        return Err("Razón social y CUIT son obligatorios");
    }

    let payment_window_days: u32 = payment_window_days
        .trim()
        .parse()
        .map_err(|_| "La ventana de pago debe ser un número de días")?;
    let late_fee_amount: f64 = late_fee_amount
        .trim()
        .parse()
        .map_err(|_| "El recargo por mora debe ser un número")?;
    let days_for_suspension: u32 = days_for_suspension
        .trim()
        .parse()
        .map_err(|_| "Los días para suspensión deben ser un número")?;

    if late_fee_amount < 0.0 {
        return Err("El recargo por mora no puede ser negativo");
    }

    Ok(CompanySettings {
        business_name: business_name.trim().to_string(),
        business_cuit: business_cuit.trim().to_string(),
        business_address: business_address.trim().to_string(),
        business_city: business_city.trim().to_string(),
        business_phone: business_phone.trim().to_string(),
        payment_window_days,
        late_fee_amount,
        auto_invoicing_enabled,
        days_for_suspension,
    })
}

/// Admin settings page component
#[component]
pub fn AdminSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (settings, set_settings) = create_signal(None::<CompanySettings>);

    let state_for_fetch = state;
    create_effect(move |_| {
        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(result) => set_settings.set(Some(result)),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Configuración"</h1>
                <p class="text-gray-400 mt-1">"Datos de la empresa y reglas de facturación"</p>
            </div>

            {move || match settings.get() {
                Some(current) => view! {
                    <SettingsForm current=current set_settings=set_settings />
                }.into_view(),
                None => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

/// Settings form, prefilled from the stored configuration
#[component]
fn SettingsForm(
    current: CompanySettings,
    set_settings: WriteSignal<Option<CompanySettings>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (business_name, set_business_name) = create_signal(current.business_name);
    let (business_cuit, set_business_cuit) = create_signal(current.business_cuit);
    let (business_address, set_business_address) = create_signal(current.business_address);
    let (business_city, set_business_city) = create_signal(current.business_city);
    let (business_phone, set_business_phone) = create_signal(current.business_phone);
    let (payment_window, set_payment_window) =
        create_signal(current.payment_window_days.to_string());
    let (late_fee, set_late_fee) = create_signal(current.late_fee_amount.to_string());
    let (suspension_days, set_suspension_days) =
        create_signal(current.days_for_suspension.to_string());
    let (auto_invoicing, set_auto_invoicing) = create_signal(current.auto_invoicing_enabled);
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = match parse_settings(
            &business_name.get(),
            &business_cuit.get(),
            &business_address.get(),
            &business_city.get(),
            &business_phone.get(),
            &payment_window.get(),
            &late_fee.get(),
            &suspension_days.get(),
            auto_invoicing.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                state.show_error(message);
                return;
            }
        };

        set_saving.set(true);
        let state = state.clone();
        spawn_local(async move {
            match api::update_settings(&payload).await {
                Ok(stored) => {
                    state.show_success("Configuración guardada");
                    // The backend's view of the values wins
                    set_settings.set(Some(stored));
                }
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            // Business identity
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"Empresa"</h2>
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Razón social" value=business_name set_value=set_business_name />
                    <Field label="CUIT" value=business_cuit set_value=set_business_cuit />
                </div>
                <Field label="Dirección" value=business_address set_value=set_business_address />
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Ciudad" value=business_city set_value=set_business_city />
                    <Field label="Teléfono" value=business_phone set_value=set_business_phone />
                </div>
            </section>

            // Billing rules
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"Facturación"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    <NumberField
                        label="Ventana de pago (días)"
                        value=payment_window
                        set_value=set_payment_window
                    />
                    <NumberField
                        label="Recargo por mora"
                        value=late_fee
                        set_value=set_late_fee
                    />
                    <NumberField
                        label="Suspensión (días)"
                        value=suspension_days
                        set_value=set_suspension_days
                    />
                </div>

                <label class="flex items-center space-x-3 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || auto_invoicing.get()
                        on:change=move |ev| set_auto_invoicing.set(event_target_checked(&ev))
                        class="w-4 h-4 accent-primary-600"
                    />
                    <span class="text-sm">"Emitir facturas automáticamente cada mes"</span>
                </label>
            </section>

            <button
                type="submit"
                disabled=move || saving.get()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if saving.get() { "Guardando..." } else { "Guardar configuración" }}
            </button>
        </form>
    }
}

#[component]
fn Field(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="number"
                min="0"
                step="any"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok() -> Result<CompanySettings, &'static str> {
        parse_settings(
            "WISP del Sur",
            "30-71234567-8",
            "Av. San Martín 1200",
            "Villa María",
            "353-4000000",
            "10",
            "500",
            "15",
            true,
        )
    }

    #[test]
    fn test_complete_settings_parse() {
        let settings = parse_ok().unwrap();
        assert_eq!(settings.payment_window_days, 10);
        assert_eq!(settings.late_fee_amount, 500.0);
        assert_eq!(settings.days_for_suspension, 15);
        assert!(settings.auto_invoicing_enabled);
    }

    #[test]
    fn test_business_identity_is_required() {
        let result = parse_settings("", "30-1", "", "", "", "10", "500", "15", false);
        assert!(result.is_err());
        let result = parse_settings("WISP", " ", "", "", "", "10", "500", "15", false);
        assert!(result.is_err());
    }

    #[test]
    fn test_numeric_fields_must_parse() {
        let result = parse_settings("W", "1", "", "", "", "diez", "500", "15", false);
        assert!(result.is_err());
        let result = parse_settings("W", "1", "", "", "", "10", "caro", "15", false);
        assert!(result.is_err());
        let result = parse_settings("W", "1", "", "", "", "10", "500", "-3", false);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_late_fee_is_rejected() {
        let result = parse_settings("W", "1", "", "", "", "10", "-500", "15", false);
        assert!(result.is_err());
    }
}
