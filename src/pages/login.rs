//! Login Page
//!
//! Username/password form. A successful login persists the credential pair
//! and lands on the dashboard.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::global::GlobalState;

/// Both fields are required before anything goes on the wire
fn validate_login(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Ingresá usuario y contraseña");
    }
    Ok(())
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();

        if let Err(message) = validate_login(&user, &pass) {
            set_error.set(Some(message.to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok((token, session_user)) => {
                    state.login(&token, &session_user);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md">
                // Brand
                <div class="text-center mb-8">
                    <span class="text-4xl">"📡"</span>
                    <h1 class="text-2xl font-bold mt-2">"WISP Manager"</h1>
                    <p class="text-gray-400 text-sm mt-1">"Portal de facturación"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Username
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Usuario"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Password
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Contraseña"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Inline error, e.g. bad credentials detail from the backend
                    {move || {
                        error.get().map(|message| view! {
                            <div class="bg-red-500/10 border border-red-500/40 text-red-400
                                        text-sm rounded-lg px-4 py-3">
                                {message}
                            </div>
                        })
                    }}

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_block_submit() {
        assert!(validate_login("", "").is_err());
        assert!(validate_login("jperez", "").is_err());
        assert!(validate_login("", "secreto").is_err());
        assert!(validate_login("   ", "secreto").is_err());
    }

    #[test]
    fn test_complete_credentials_pass() {
        assert!(validate_login("jperez", "secreto").is_ok());
    }
}
