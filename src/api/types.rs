//! Wire Types
//!
//! Shared request/response types for the billing REST API. Every view reads
//! and writes these; there is exactly one definition per entity.

/// Role string for administrators
pub const ROLE_ADMIN: &str = "administrator";
/// Role string for regular customers
pub const ROLE_CLIENT: &str = "client";

/// Authenticated user as persisted alongside the access token
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SessionUser {
    pub username: String,
    pub first_name: String,
    pub role: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Row in the admin client list
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserSummary {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub dni: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Full client record for the edit form and the profile page
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserDetail {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub dni: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub barrio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone2: Option<String>,
}

/// Payload for creating a client
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub dni: String,
    pub firstname: String,
    pub lastname: String,
    pub address: Option<String>,
    pub barrio: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
}

/// Payload for updating contact data (own profile or admin edit)
#[derive(Clone, Debug, serde::Serialize)]
pub struct UserUpdate {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub address: Option<String>,
    pub barrio: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
}

/// Client info embedded in admin invoice and payment rows
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InvoiceUser {
    pub id: u32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub dni: String,
}

impl InvoiceUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Invoice lifecycle state as stored by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    InReview,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::InReview,
    ];

    /// Wire value, also used as select option value
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::InReview => "in_review",
        }
    }

    pub fn parse(value: &str) -> Option<InvoiceStatus> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            "overdue" => Some(InvoiceStatus::Overdue),
            "in_review" => Some(InvoiceStatus::InReview),
            _ => None,
        }
    }

    /// Display text shown to users
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pendiente",
            InvoiceStatus::Paid => "Pagada",
            InvoiceStatus::Overdue => "Vencida",
            InvoiceStatus::InReview => "En revisión",
        }
    }

    /// Badge pill classes per status
    pub fn badge_class(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "bg-yellow-500/20 text-yellow-400",
            InvoiceStatus::Paid => "bg-green-500/20 text-green-400",
            InvoiceStatus::Overdue => "bg-red-500/20 text-red-400",
            InvoiceStatus::InReview => "bg-cyan-500/20 text-cyan-400",
        }
    }
}

/// Invoice as returned by both the client and admin endpoints
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Invoice {
    pub id: u32,
    pub issue_date: String,
    pub due_date: String,
    pub base_amount: f64,
    pub late_fee: f64,
    pub total_amount: f64,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub receipt_pdf_url: Option<String>,
    #[serde(default)]
    pub user_receipt_url: Option<String>,
    #[serde(default)]
    pub user: Option<InvoiceUser>,
}

impl Invoice {
    /// A customer may attach a receipt while the invoice is unpaid and no
    /// receipt has been uploaded yet
    pub fn can_upload_receipt(&self) -> bool {
        matches!(self.status, InvoiceStatus::Pending | InvoiceStatus::Overdue)
            && self.user_receipt_url.is_none()
    }
}

/// How a manual payment was made
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
        }
    }

    pub fn parse(value: &str) -> Option<PaymentMethod> {
        match value {
            "cash" => Some(PaymentMethod::Cash),
            "transfer" => Some(PaymentMethod::Transfer),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Transfer => "Transferencia",
        }
    }
}

/// Registered payment row
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Payment {
    pub id: u32,
    pub payment_date: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub invoice_id: u32,
    #[serde(default)]
    pub user: Option<InvoiceUser>,
}

/// Service plan
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Plan {
    pub id: u32,
    pub name: String,
    pub speed_mbps: u32,
    pub price: f64,
}

/// Payload for creating or updating a plan
#[derive(Clone, Debug, serde::Serialize)]
pub struct PlanInput {
    pub name: String,
    pub speed_mbps: u32,
    pub price: f64,
}

/// Subscription lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Suspended,
    Cancelled,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 3] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Suspended,
        SubscriptionStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Suspended => "suspended",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<SubscriptionStatus> {
        match value {
            "active" => Some(SubscriptionStatus::Active),
            "suspended" => Some(SubscriptionStatus::Suspended),
            "cancelled" => Some(SubscriptionStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Activa",
            SubscriptionStatus::Suspended => "Suspendida",
            SubscriptionStatus::Cancelled => "Cancelada",
        }
    }
}

/// A client's subscription to a plan
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Subscription {
    pub id: u32,
    pub status: SubscriptionStatus,
    pub plan: Plan,
}

/// Company-wide billing configuration
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CompanySettings {
    pub business_name: String,
    pub business_cuit: String,
    pub business_address: String,
    pub business_city: String,
    pub business_phone: String,
    pub payment_window_days: u32,
    pub late_fee_amount: f64,
    pub auto_invoicing_enabled: bool,
    pub days_for_suspension: u32,
}

/// Counters shown on the admin dashboard
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DashboardStats {
    pub active_clients: u32,
    pub pending: u32,
    pub paid: u32,
    pub overdue: u32,
    pub total: u32,
    pub monthly_revenue: f64,
}

/// Paginated list envelope used by every list endpoint
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Paginated<T> {
    pub total_items: u32,
    pub total_pages: u32,
    pub current_page: u32,
    pub items: Vec<T>,
}

// ============ Display Helpers ============

/// Month names for the list filters, indexed by month number minus one
pub const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Render a backend `YYYY-MM-DD` date as `DD/MM/YYYY`; anything the backend
/// sends that does not parse is shown as-is
pub fn format_date(iso: &str) -> String {
    match chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Render a peso amount with dot thousands separators and comma decimals
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}${},{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Normalize an optional form field: whitespace-only input counts as unset
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_status_wire_values() {
        for status in InvoiceStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: InvoiceStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_invoice_status_parse() {
        assert_eq!(InvoiceStatus::parse("in_review"), Some(InvoiceStatus::InReview));
        assert_eq!(InvoiceStatus::parse("paid"), Some(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::parse("Pagada"), None);
        assert_eq!(InvoiceStatus::parse(""), None);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<InvoiceStatus, _> = serde_json::from_str("\"refunded\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Cash.label(), "Efectivo");
        assert_eq!(PaymentMethod::Transfer.label(), "Transferencia");
        assert_eq!(PaymentMethod::parse("transfer"), Some(PaymentMethod::Transfer));
        assert_eq!(PaymentMethod::parse("tarjeta"), None);
    }

    #[test]
    fn test_subscription_status_parse_matches_wire() {
        for status in SubscriptionStatus::ALL {
            assert_eq!(SubscriptionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SubscriptionStatus::parse("paused"), None);
    }

    #[test]
    fn test_is_admin_requires_exact_role() {
        let admin = SessionUser {
            username: "root".to_string(),
            first_name: "Ana".to_string(),
            role: ROLE_ADMIN.to_string(),
        };
        let client = SessionUser {
            username: "jperez".to_string(),
            first_name: "Juan".to_string(),
            role: ROLE_CLIENT.to_string(),
        };
        assert!(admin.is_admin());
        assert!(!client.is_admin());
    }

    #[test]
    fn test_invoice_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 12,
            "issue_date": "2024-03-01",
            "due_date": "2024-03-10",
            "base_amount": 15000.0,
            "late_fee": 0.0,
            "total_amount": 15000.0,
            "status": "pending"
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.id, 12);
        assert_eq!(invoice.status, InvoiceStatus::Pending);
        assert!(invoice.receipt_pdf_url.is_none());
        assert!(invoice.user.is_none());
    }

    #[test]
    fn test_can_upload_receipt() {
        let mut invoice = Invoice {
            id: 1,
            issue_date: "2024-03-01".to_string(),
            due_date: "2024-03-10".to_string(),
            base_amount: 100.0,
            late_fee: 0.0,
            total_amount: 100.0,
            status: InvoiceStatus::Pending,
            receipt_pdf_url: None,
            user_receipt_url: None,
            user: None,
        };
        assert!(invoice.can_upload_receipt());

        invoice.status = InvoiceStatus::Overdue;
        assert!(invoice.can_upload_receipt());

        invoice.user_receipt_url = Some("/uploads/receipt_1.pdf".to_string());
        assert!(!invoice.can_upload_receipt());

        invoice.user_receipt_url = None;
        invoice.status = InvoiceStatus::Paid;
        assert!(!invoice.can_upload_receipt());

        invoice.status = InvoiceStatus::InReview;
        assert!(!invoice.can_upload_receipt());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-01"), "01/03/2024");
        assert_eq!(format_date("2023-12-31"), "31/12/2023");
        // Unparseable input passes through untouched
        assert_eq!(format_date("mañana"), "mañana");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(15000.0), "$15.000,00");
        assert_eq!(format_amount(999.5), "$999,50");
        assert_eq!(format_amount(1_234_567.89), "$1.234.567,89");
        assert_eq!(format_amount(0.0), "$0,00");
        assert_eq!(format_amount(-250.75), "-$250,75");
    }

    #[test]
    fn test_non_empty_trims_whitespace_only() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("Av. Siempreviva 742".to_string()),
            Some("Av. Siempreviva 742".to_string()));
    }

    #[test]
    fn test_paginated_envelope() {
        let json = r#"{
            "total_items": 23,
            "total_pages": 3,
            "current_page": 2,
            "items": [{"id": 5, "name": "Fibra 100", "speed_mbps": 100, "price": 9500.0}]
        }"#;
        let page: Paginated<Plan> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Fibra 100");
    }
}
