//! Status Badge Component

use leptos::*;

use crate::api::types::InvoiceStatus;

/// Colored pill for an invoice status
#[component]
pub fn StatusBadge(status: InvoiceStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium {}",
            status.badge_class()
        )>
            {status.label()}
        </span>
    }
}
