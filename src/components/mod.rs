//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod nav;
pub mod toast;
pub mod loading;
pub mod pagination;
pub mod status_badge;
pub mod confirm_modal;

pub use nav::Nav;
pub use toast::Toast;
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use pagination::{PageState, Pagination};
pub use status_badge::StatusBadge;
pub use confirm_modal::ConfirmModal;
