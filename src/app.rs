//! App Root Component
//!
//! Main application component with routing, session restore and the
//! role-based route guards.

use leptos::*;
use leptos_router::*;

use crate::components::{Loading, Nav, Toast};
use crate::pages::admin::{
    AdminDashboard, AdminInvoiceDetail, AdminSettings, ClientAdd, ClientEdit, ClientList,
    InvoiceManagement, PaymentManagement, PlanManagement, RegisterPayment,
};
use crate::pages::{Dashboard, InvoiceDetail, Invoices, Login, Profile};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::session::SessionState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Inspect stored credentials once the app is mounted
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let state_for_restore = state.clone();
    create_effect(move |_| {
        state_for_restore.restore();
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header, hidden while signed out
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <ReplaceRedirect path="/dashboard" /> } />
                        <Route path="/login" view=|| view! { <RedirectIfAuthed><Login /></RedirectIfAuthed> } />

                        // Customer area
                        <Route path="/dashboard" view=|| view! { <RequireAuth><Dashboard /></RequireAuth> } />
                        <Route path="/dashboard/invoices" view=|| view! { <RequireAuth><Invoices /></RequireAuth> } />
                        <Route path="/dashboard/invoices/:id" view=|| view! { <RequireAuth><InvoiceDetail /></RequireAuth> } />
                        <Route path="/dashboard/profile" view=|| view! { <RequireAuth><Profile /></RequireAuth> } />

                        // Admin area
                        <Route path="/admin/dashboard" view=|| view! { <RequireAdmin><AdminDashboard /></RequireAdmin> } />
                        <Route path="/admin/clients" view=|| view! { <RequireAdmin><ClientList /></RequireAdmin> } />
                        <Route path="/admin/clients/new" view=|| view! { <RequireAdmin><ClientAdd /></RequireAdmin> } />
                        <Route path="/admin/clients/:id/edit" view=|| view! { <RequireAdmin><ClientEdit /></RequireAdmin> } />
                        <Route path="/admin/invoices" view=|| view! { <RequireAdmin><InvoiceManagement /></RequireAdmin> } />
                        <Route path="/admin/invoices/:id" view=|| view! { <RequireAdmin><AdminInvoiceDetail /></RequireAdmin> } />
                        <Route path="/admin/payments" view=|| view! { <RequireAdmin><PaymentManagement /></RequireAdmin> } />
                        <Route path="/admin/payments/new" view=|| view! { <RequireAdmin><RegisterPayment /></RequireAdmin> } />
                        <Route path="/admin/plans" view=|| view! { <RequireAdmin><PlanManagement /></RequireAdmin> } />
                        <Route path="/admin/settings" view=|| view! { <RequireAdmin><AdminSettings /></RequireAdmin> } />

                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// What a route guard should do for a given session
#[derive(Clone, Debug, PartialEq)]
enum GateDecision {
    /// Session still being restored; render a spinner, never redirect
    Wait,
    Allow,
    ToLogin,
    ToDashboard,
}

fn auth_gate(session: &SessionState) -> GateDecision {
    match session {
        SessionState::Loading => GateDecision::Wait,
        SessionState::Anonymous => GateDecision::ToLogin,
        SessionState::Authenticated(_) => GateDecision::Allow,
    }
}

fn admin_gate(session: &SessionState) -> GateDecision {
    match session {
        SessionState::Loading => GateDecision::Wait,
        SessionState::Anonymous => GateDecision::ToLogin,
        SessionState::Authenticated(user) if user.is_admin() => GateDecision::Allow,
        SessionState::Authenticated(_) => GateDecision::ToDashboard,
    }
}

fn login_gate(session: &SessionState) -> GateDecision {
    match session {
        SessionState::Loading => GateDecision::Wait,
        SessionState::Anonymous => GateDecision::Allow,
        SessionState::Authenticated(_) => GateDecision::ToDashboard,
    }
}

/// Renders children for allowed sessions, a spinner while restoring, and
/// a replace-redirect otherwise
#[component]
fn Gate(decide: fn(&SessionState) -> GateDecision, children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || match decide(&state.session.get()) {
            GateDecision::Wait => view! { <Loading /> }.into_view(),
            GateDecision::Allow => children().into_view(),
            GateDecision::ToLogin => view! { <ReplaceRedirect path="/login" /> }.into_view(),
            GateDecision::ToDashboard => view! { <ReplaceRedirect path="/dashboard" /> }.into_view(),
        }}
    }
}

/// Route guard: any signed-in user
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <Gate decide=auth_gate children=children /> }
}

/// Route guard: administrators only
#[component]
fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! { <Gate decide=admin_gate children=children /> }
}

/// Login page guard: signed-in users go to their dashboard instead
#[component]
fn RedirectIfAuthed(children: ChildrenFn) -> impl IntoView {
    view! { <Gate decide=login_gate children=children /> }
}

/// Client-side redirect with replace semantics, so guarded URLs do not
/// pile up in the history
#[component]
fn ReplaceRedirect(path: &'static str) -> impl IntoView {
    let navigate = use_navigate();

    create_effect(move |_| {
        navigate(
            path,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <Loading /> }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Página no encontrada"</h1>
            <p class="text-gray-400 mb-6">"La página que buscás no existe."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Ir al inicio"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{SessionUser, ROLE_ADMIN, ROLE_CLIENT};

    fn signed_in(role: &str) -> SessionState {
        SessionState::Authenticated(SessionUser {
            username: "u".to_string(),
            first_name: "U".to_string(),
            role: role.to_string(),
        })
    }

    #[test]
    fn test_no_redirect_while_session_loading() {
        assert_eq!(auth_gate(&SessionState::Loading), GateDecision::Wait);
        assert_eq!(admin_gate(&SessionState::Loading), GateDecision::Wait);
        assert_eq!(login_gate(&SessionState::Loading), GateDecision::Wait);
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        assert_eq!(auth_gate(&SessionState::Anonymous), GateDecision::ToLogin);
        assert_eq!(admin_gate(&SessionState::Anonymous), GateDecision::ToLogin);
    }

    #[test]
    fn test_client_kept_out_of_admin_routes() {
        assert_eq!(admin_gate(&signed_in(ROLE_CLIENT)), GateDecision::ToDashboard);
        assert_eq!(auth_gate(&signed_in(ROLE_CLIENT)), GateDecision::Allow);
    }

    #[test]
    fn test_admin_allowed_in_both_areas() {
        assert_eq!(admin_gate(&signed_in(ROLE_ADMIN)), GateDecision::Allow);
        assert_eq!(auth_gate(&signed_in(ROLE_ADMIN)), GateDecision::Allow);
    }

    #[test]
    fn test_login_page_bounces_signed_in_users() {
        assert_eq!(login_gate(&signed_in(ROLE_CLIENT)), GateDecision::ToDashboard);
        assert_eq!(login_gate(&SessionState::Anonymous), GateDecision::Allow);
    }
}
