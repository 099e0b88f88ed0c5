//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod dashboard;
pub mod invoice_detail;
pub mod invoices;
pub mod login;
pub mod profile;

pub use dashboard::Dashboard;
pub use invoice_detail::InvoiceDetail;
pub use invoices::Invoices;
pub use login::Login;
pub use profile::Profile;
