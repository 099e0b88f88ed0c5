//! Admin Pages
//!
//! Views reachable only with the administrator role.

pub mod client_add;
pub mod client_edit;
pub mod clients;
pub mod dashboard;
pub mod invoice_detail;
pub mod invoices;
pub mod payment_form;
pub mod payments;
pub mod plans;
pub mod settings;

pub use client_add::ClientAdd;
pub use client_edit::ClientEdit;
pub use clients::ClientList;
pub use dashboard::AdminDashboard;
pub use invoice_detail::AdminInvoiceDetail;
pub use invoices::InvoiceManagement;
pub use payment_form::RegisterPayment;
pub use payments::PaymentManagement;
pub use plans::PlanManagement;
pub use settings::AdminSettings;
