//! Global Application State
//!
//! Reactive session and notification state shared via Leptos context.

use leptos::*;

use crate::api::types::SessionUser;
use crate::state::session::{self, SessionState, StoredSession};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Who is signed in, if anyone
    pub session: RwSignal<SessionState>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(SessionState::Loading),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Decide the session from persisted credentials. Anything expired or
    /// corrupt is wiped before the session becomes anonymous.
    pub fn restore(&self) {
        let token = session::stored_token();
        let user_json = session::stored_user_json();
        let now = chrono::Utc::now().timestamp();

        match session::evaluate_stored_session(token.as_deref(), user_json.as_deref(), now) {
            StoredSession::Valid(user) => self.session.set(SessionState::Authenticated(user)),
            StoredSession::Missing => self.session.set(SessionState::Anonymous),
            StoredSession::Invalid => {
                session::clear_session();
                self.session.set(SessionState::Anonymous);
            }
        }
    }

    /// Persist credentials and mark the session authenticated
    pub fn login(&self, token: &str, user: &SessionUser) {
        session::write_session(token, user);
        self.session.set(SessionState::Authenticated(user.clone()));
    }

    /// Drop local credentials and mark the session anonymous
    pub fn logout(&self) {
        session::clear_session();
        self.session.set(SessionState::Anonymous);
    }

    /// Currently signed-in user, if any
    pub fn user(&self) -> Option<SessionUser> {
        match self.session.get() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().map(|user| user.is_admin()).unwrap_or(false)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
