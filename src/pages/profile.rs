//! Profile Page
//!
//! The signed-in customer's contact data and password change, each its own
//! form section.

use leptos::*;

use crate::api;
use crate::api::types::{non_empty, UserDetail, UserUpdate};
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Contact form requirements
fn validate_contact(
    email: &str,
    firstname: &str,
    lastname: &str,
) -> Result<(), &'static str> {
    if email.trim().is_empty() || firstname.trim().is_empty() || lastname.trim().is_empty() {
        return Err("Email, nombre y apellido son obligatorios");
    }
    Ok(())
}

/// Password change requirements: everything filled and the repeat matching
fn validate_password_change(
    current: &str,
    new: &str,
    repeat: &str,
) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() || repeat.is_empty() {
        return Err("Completá los tres campos");
    }
    if new != repeat {
        return Err("Las contraseñas nuevas no coinciden");
    }
    Ok(())
}

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (profile, set_profile) = create_signal(None::<UserDetail>);

    let state_for_fetch = state;
    create_effect(move |_| {
        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(detail) => set_profile.set(Some(detail)),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Mi Perfil"</h1>
                <p class="text-gray-400 mt-1">"Tus datos de contacto y tu contraseña"</p>
            </div>

            {move || match profile.get() {
                Some(detail) => view! {
                    <ContactSection detail=detail />
                    <PasswordSection />
                }.into_view(),
                None => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

/// Contact data form, prefilled from the fetched profile
#[component]
fn ContactSection(detail: UserDetail) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(detail.email.clone());
    let (firstname, set_firstname) = create_signal(detail.firstname.clone());
    let (lastname, set_lastname) = create_signal(detail.lastname.clone());
    let (address, set_address) = create_signal(detail.address.clone().unwrap_or_default());
    let (barrio, set_barrio) = create_signal(detail.barrio.clone().unwrap_or_default());
    let (city, set_city) = create_signal(detail.city.clone().unwrap_or_default());
    let (phone, set_phone) = create_signal(detail.phone.clone().unwrap_or_default());
    let (phone2, set_phone2) = create_signal(detail.phone2.clone().unwrap_or_default());
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let update = UserUpdate {
            email: email.get(),
            firstname: firstname.get(),
            lastname: lastname.get(),
            address: non_empty(address.get()),
            barrio: non_empty(barrio.get()),
            city: non_empty(city.get()),
            phone: non_empty(phone.get()),
            phone2: non_empty(phone2.get()),
        };

        if let Err(message) =
            validate_contact(&update.email, &update.firstname, &update.lastname)
        {
            state.show_error(message);
            return;
        }

        set_saving.set(true);
        let state = state.clone();
        spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(_) => state.show_success("Datos actualizados"),
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"Datos de contacto"</h2>
            <p class="text-gray-400 text-sm mb-4">
                {format!("Usuario {} · DNI {}", detail.username, detail.dni)}
            </p>

            <form on:submit=on_submit class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Nombre" value=firstname set_value=set_firstname />
                    <Field label="Apellido" value=lastname set_value=set_lastname />
                </div>
                <Field label="Email" value=email set_value=set_email />
                <Field label="Dirección" value=address set_value=set_address />
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Barrio" value=barrio set_value=set_barrio />
                    <Field label="Ciudad" value=city set_value=set_city />
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Teléfono" value=phone set_value=set_phone />
                    <Field label="Teléfono alternativo" value=phone2 set_value=set_phone2 />
                </div>

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar cambios" }}
                </button>
            </form>
        </section>
    }
}

/// Password change form
#[component]
fn PasswordSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (current, set_current) = create_signal(String::new());
    let (new, set_new) = create_signal(String::new());
    let (repeat, set_repeat) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current_value = current.get();
        let new_value = new.get();

        if let Err(message) = validate_password_change(&current_value, &new_value, &repeat.get())
        {
            state.show_error(message);
            return;
        }

        set_saving.set(true);
        let state = state.clone();
        spawn_local(async move {
            match api::change_password(&current_value, &new_value).await {
                Ok(()) => {
                    state.show_success("Contraseña actualizada");
                    set_current.set(String::new());
                    set_new.set(String::new());
                    set_repeat.set(String::new());
                }
                // e.g. wrong current password detail from the backend
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Cambiar contraseña"</h2>

            <form on:submit=on_submit class="space-y-4">
                <PasswordField label="Contraseña actual" value=current set_value=set_current />
                <PasswordField label="Contraseña nueva" value=new set_value=set_new />
                <PasswordField label="Repetir contraseña nueva" value=repeat set_value=set_repeat />

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if saving.get() { "Guardando..." } else { "Cambiar contraseña" }}
                </button>
            </form>
        </section>
    }
}

/// Labeled text input bound to a signal pair
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
fn PasswordField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="password"
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

    #[test]
    fn test_contact_requires_identity_fields() {
        assert!(validate_contact("", "Juan", "Pérez").is_err());
        assert!(validate_contact("jp@example.com", " ", "Pérez").is_err());
        assert!(validate_contact("jp@example.com", "Juan", "").is_err());
        assert!(validate_contact("jp@example.com", "Juan", "Pérez").is_ok());
    }

    #[test]
    fn test_password_change_requires_all_fields() {
        assert!(validate_password_change("", "nueva", "nueva").is_err());
        assert!(validate_password_change("vieja", "", "").is_err());
        assert!(validate_password_change("vieja", "nueva", "").is_err());
    }

    #[test]
    fn test_password_repeat_must_match() {
        assert!(validate_password_change("vieja", "nueva", "otra").is_err());
        assert!(validate_password_change("vieja", "nueva", "nueva").is_ok());
    }
}
