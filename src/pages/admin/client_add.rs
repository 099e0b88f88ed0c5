//! Client Add
//!
//! Account creation form for a new customer. On success the list view is
//! shown again.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::api::types::{non_empty, NewUser};
use crate::state::global::GlobalState;

/// Account fields that must be present before the request goes out
fn validate_new_user(user: &NewUser) -> Result<(), &'static str> {
    let required = [
        user.username.as_str(),
        user.password.as_str(),
        user.email.as_str(),
        user.dni.as_str(),
        user.firstname.as_str(),
        user.lastname.as_str(),
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err("Usuario, contraseña, email, DNI, nombre y apellido son obligatorios");
    }
    Ok(())
}

/// Admin client creation page component
#[component]
pub fn ClientAdd() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (dni, set_dni) = create_signal(String::new());
    let (firstname, set_firstname) = create_signal(String::new());
    let (lastname, set_lastname) = create_signal(String::new());
    let (address, set_address) = create_signal(String::new());
    let (barrio, set_barrio) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (phone2, set_phone2) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = NewUser {
            username: username.get(),
            password: password.get(),
            email: email.get(),
            dni: dni.get(),
            firstname: firstname.get(),
            lastname: lastname.get(),
            address: non_empty(address.get()),
            barrio: non_empty(barrio.get()),
            city: non_empty(city.get()),
            phone: non_empty(phone.get()),
            phone2: non_empty(phone2.get()),
        };

        if let Err(message) = validate_new_user(&user) {
            state.show_error(message);
            return;
        }

        set_saving.set(true);
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_user(&user).await {
                Ok(_) => {
                    state.show_success("Cliente creado");
                    navigate("/admin/clients", Default::default());
                }
                // e.g. duplicate username or DNI detail from the backend
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Nuevo cliente"</h1>
                <p class="text-gray-400 mt-1">"Datos de la cuenta y de contacto"</p>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Usuario *" value=username set_value=set_username />
                    <Field label="Contraseña *" value=password set_value=set_password password=true />
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Nombre *" value=firstname set_value=set_firstname />
                    <Field label="Apellido *" value=lastname set_value=set_lastname />
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="DNI *" value=dni set_value=set_dni />
                    <Field label="Email *" value=email set_value=set_email />
                </div>
                <Field label="Dirección" value=address set_value=set_address />
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Barrio" value=barrio set_value=set_barrio />
                    <Field label="Ciudad" value=city set_value=set_city />
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Teléfono" value=phone set_value=set_phone />
                    <Field label="Teléfono alternativo" value=phone2 set_value=set_phone2 />
                </div>

                <div class="flex space-x-3 pt-2">
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if saving.get() { "Creando..." } else { "Crear cliente" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn Field(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = false)]
    password: bool,
) -> impl IntoView {
    let input_type = if password { "password" } else { "text" };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
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

    fn complete_user() -> NewUser {
        NewUser {
            username: "jperez".to_string(),
            password: "secreto".to_string(),
            email: "jp@example.com".to_string(),
            dni: "30123456".to_string(),
            firstname: "Juan".to_string(),
            lastname: "Pérez".to_string(),
            address: None,
            barrio: None,
            city: None,
            phone: None,
            phone2: None,
        }
    }

    #[test]
    fn test_complete_user_passes() {
        assert!(validate_new_user(&complete_user()).is_ok());
    }

    #[test]
    fn test_each_required_field_blocks_submit() {
        for field in 0..6 {
            let mut user = complete_user();
            match field {
                0 => user.username = String::new(),
                1 => user.password = String::new(),
                2 => user.email = "  ".to_string(),
                3 => user.dni = String::new(),
                4 => user.firstname = String::new(),
                _ => user.lastname = String::new(),
            }
            assert!(validate_new_user(&user).is_err(), "field {} should be required", field);
        }
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let user = complete_user();
        assert!(user.address.is_none());
        assert!(validate_new_user(&user).is_ok());
    }
}
