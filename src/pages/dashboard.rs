//! Customer Dashboard
//!
//! Landing page for signed-in customers: greeting and quick access to their
//! invoices and profile. Administrators land on the admin dashboard instead.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};

use crate::state::global::GlobalState;

/// Customer dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Administrators have their own dashboard
    let state_for_redirect = state.clone();
    let navigate = use_navigate();
    create_effect(move |_| {
        if state_for_redirect.is_admin() {
            navigate(
                "/admin/dashboard",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <div class="space-y-8">
            // Greeting
            <div>
                <h1 class="text-3xl font-bold">
                    {move || {
                        let name = state.user().map(|user| user.first_name).unwrap_or_default();
                        format!("Hola, {}", name)
                    }}
                </h1>
                <p class="text-gray-400 mt-1">"Bienvenido a tu portal de facturación"</p>
            </div>

            // Quick access
            <div class="grid md:grid-cols-2 gap-6">
                <QuickCard
                    href="/dashboard/invoices"
                    icon="🧾"
                    title="Mis Facturas"
                    description="Consultá tus facturas, descargá el PDF y subí tu comprobante de pago"
                />
                <QuickCard
                    href="/dashboard/profile"
                    icon="👤"
                    title="Mi Perfil"
                    description="Actualizá tus datos de contacto y tu contraseña"
                />
            </div>

            // Payment help
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-2">"¿Cómo pago mi factura?"</h2>
                <p class="text-gray-400 text-sm">
                    "Podés pagar en efectivo en nuestras oficinas o por transferencia bancaria. "
                    "Si pagás por transferencia, subí el comprobante desde la factura y la "
                    "marcamos como pagada al verificarlo."
                </p>
            </section>
        </div>
    }
}

/// Large navigation card
#[component]
fn QuickCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block bg-gray-800 rounded-xl p-6 border border-gray-700
                   hover:border-primary-500 transition-colors"
        >
            <span class="text-3xl">{icon}</span>
            <h2 class="text-xl font-semibold mt-3">{title}</h2>
            <p class="text-gray-400 text-sm mt-1">{description}</p>
        </A>
    }
}
