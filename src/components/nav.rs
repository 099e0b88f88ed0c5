//! Navigation Component
//!
//! Header bar with role-gated links, the signed-in user and logout. Nothing
//! renders while no one is signed in, so the login page stays bare.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    view! {
        {move || {
            let user = match state.user() {
                Some(user) => user,
                None => return view! {}.into_view(),
            };
            let is_admin = user.is_admin();

            let state_for_logout = state.clone();
            let navigate = navigate.clone();
            let logout = move |_| {
                state_for_logout.logout();
                navigate("/login", Default::default());
            };

            view! {
                <nav class="bg-gray-800 border-b border-gray-700">
                    <div class="container mx-auto px-4">
                        <div class="flex items-center justify-between h-16">
                            // Logo and brand
                            <A href="/dashboard" class="flex items-center space-x-3">
                                <span class="text-2xl">"📡"</span>
                                <span class="text-xl font-bold text-white">"WISP Manager"</span>
                            </A>

                            // Navigation links
                            <div class="flex items-center space-x-1">
                                {if is_admin {
                                    view! {
                                        <NavLink href="/admin/dashboard" label="Inicio" />
                                        <NavLink href="/admin/clients" label="Clientes" />
                                        <NavLink href="/admin/invoices" label="Facturas" />
                                        <NavLink href="/admin/payments" label="Pagos" />
                                        <NavLink href="/admin/plans" label="Planes" />
                                        <NavLink href="/admin/settings" label="Configuración" />
                                    }.into_view()
                                } else {
                                    view! {
                                        <NavLink href="/dashboard" label="Inicio" />
                                        <NavLink href="/dashboard/invoices" label="Mis Facturas" />
                                        <NavLink href="/dashboard/profile" label="Mi Perfil" />
                                    }.into_view()
                                }}
                            </div>

                            // User and logout
                            <div class="flex items-center space-x-3">
                                <span class="text-sm text-gray-300">{user.first_name.clone()}</span>
                                <button
                                    on:click=logout
                                    class="px-3 py-2 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Cerrar sesión"
                                </button>
                            </div>
                        </div>
                    </div>
                </nav>
            }.into_view()
        }}
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
