//! HTTP API Client
//!
//! Functions for communicating with the billing REST API. Every call returns
//! `Result<T, String>` where the error is the message to surface in a toast;
//! failed responses are decoded into the backend's `detail` field.

use gloo_net::http::Request;

use crate::api::types::{
    CompanySettings, DashboardStats, Invoice, InvoiceStatus, NewUser, Paginated, Payment,
    PaymentMethod, Plan, PlanInput, SessionUser, Subscription, SubscriptionStatus, UserDetail,
    UserSummary, UserUpdate,
};
use crate::state::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("wisp_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub access_token: String,
    pub token_type: String,
    pub user: SessionUser,
}

// ============ Helpers ============

/// Bearer header value, or an error when no session token is stored
fn bearer_header() -> Result<String, String> {
    match session::stored_token() {
        Some(token) => Ok(format!("Bearer {}", token)),
        None => Err("Not authenticated".to_string()),
    }
}

/// Decode the backend's error body into its user-facing detail message
async fn error_detail(response: gloo_net::http::Response) -> String {
    let error: ApiError = response
        .json()
        .await
        .unwrap_or(ApiError { detail: "Unknown error".to_string() });
    error.detail
}

/// Percent-encode a query value
fn url_encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Build a query string from keys with optional values; unset keys are skipped
fn build_query(pairs: &[(&str, Option<String>)]) -> String {
    let mut query = String::new();
    for (key, value) in pairs {
        if let Some(value) = value {
            query.push(if query.is_empty() { '?' } else { '&' });
            query.push_str(key);
            query.push('=');
            query.push_str(&url_encode(value));
        }
    }
    query
}

/// Extract the filename from a Content-Disposition header
fn attachment_filename(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let name = rest.split(';').next()?.trim().trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

// ============ Auth ============

/// Log in and obtain an access token plus the session user
pub async fn login(username: &str, password: &str) -> Result<(String, SessionUser), String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/users/login", api_base))
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    let result: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok((result.access_token, result.user))
}

// ============ Own Account ============

/// Fetch the authenticated user's full record
pub async fn fetch_profile() -> Result<UserDetail, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!("{}/api/users/me", api_base))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update the authenticated user's contact data
pub async fn update_profile(update: &UserUpdate) -> Result<UserDetail, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::put(&format!("{}/api/users/me", api_base))
        .header("Authorization", &auth)
        .json(update)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Change the authenticated user's password
pub async fn change_password(current: &str, new: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct PasswordChangeRequest {
        current_password: String,
        new_password: String,
    }

    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::put(&format!("{}/api/users/me/password", api_base))
        .header("Authorization", &auth)
        .json(&PasswordChangeRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    Ok(())
}

// ============ Client Invoices ============

/// Fetch one page of the authenticated user's invoices
pub async fn fetch_my_invoices(
    page: u32,
    size: u32,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<Paginated<Invoice>, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let query = build_query(&[
        ("page", Some(page.to_string())),
        ("size", Some(size.to_string())),
        ("month", month.map(|m| m.to_string())),
        ("year", year.map(|y| y.to_string())),
    ]);

    let response = Request::get(&format!("{}/api/users/me/invoices{}", api_base, query))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one of the authenticated user's invoices
pub async fn fetch_my_invoice(invoice_id: u32) -> Result<Invoice, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!("{}/api/users/me/invoices/{}", api_base, invoice_id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Download the PDF for an invoice; returns the bytes and a filename taken
/// from the Content-Disposition header
pub async fn download_invoice_pdf(invoice_id: u32) -> Result<(Vec<u8>, String), String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!("{}/api/invoices/{}/download", api_base, invoice_id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    let filename = response
        .headers()
        .get("content-disposition")
        .and_then(|header| attachment_filename(&header))
        .unwrap_or_else(|| format!("factura_{}.pdf", invoice_id));

    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok((bytes, filename))
}

/// Attach a payment receipt to an invoice; the invoice moves to review
pub async fn upload_receipt(invoice_id: u32, file: &web_sys::File) -> Result<Invoice, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let form = web_sys::FormData::new().map_err(|_| "Could not build form data".to_string())?;
    let _ = form.append_with_blob("file", file);

    let response = Request::post(&format!(
        "{}/api/invoices/{}/upload-receipt",
        api_base, invoice_id
    ))
    .header("Authorization", &auth)
    .body(form)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Admin: Clients ============

/// Create a client account
pub async fn create_user(user: &NewUser) -> Result<UserDetail, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::post(&format!("{}/api/admin/users/add", api_base))
        .header("Authorization", &auth)
        .json(user)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one page of clients, optionally filtered by username prefix
pub async fn fetch_users(
    page: u32,
    size: u32,
    username: Option<&str>,
) -> Result<Paginated<UserSummary>, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let query = build_query(&[
        ("page", Some(page.to_string())),
        ("size", Some(size.to_string())),
        ("username", username.map(|u| u.to_string())),
    ]);

    let response = Request::get(&format!("{}/api/admin/users/all{}", api_base, query))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one client by id
pub async fn fetch_user(user_id: u32) -> Result<UserDetail, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!("{}/api/admin/users/id/{}", api_base, user_id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update a client's contact data
pub async fn update_user(user_id: u32, update: &UserUpdate) -> Result<UserDetail, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::put(&format!("{}/api/admin/users/{}/details", api_base, user_id))
        .header("Authorization", &auth)
        .json(update)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a client account
pub async fn delete_user(user_id: u32) -> Result<(), String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::delete(&format!("{}/api/admin/users/{}", api_base, user_id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    Ok(())
}

// ============ Admin: Subscriptions ============

/// Fetch a client's subscriptions
pub async fn fetch_user_subscriptions(user_id: u32) -> Result<Vec<Subscription>, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!(
        "{}/api/admin/users/{}/subscriptions",
        api_base, user_id
    ))
    .header("Authorization", &auth)
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Assign a plan to a client; fails while an active subscription exists
pub async fn assign_subscription(user_id: u32, plan_id: u32) -> Result<Subscription, String> {
    #[derive(serde::Serialize)]
    struct AssignRequest {
        user_id: u32,
        plan_id: u32,
    }

    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::post(&format!("{}/api/admin/subscriptions/assign", api_base))
        .header("Authorization", &auth)
        .json(&AssignRequest { user_id, plan_id })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Change a subscription's lifecycle state
pub async fn update_subscription_status(
    subscription_id: u32,
    status: SubscriptionStatus,
) -> Result<Subscription, String> {
    #[derive(serde::Serialize)]
    struct StatusRequest {
        status: SubscriptionStatus,
    }

    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::put(&format!(
        "{}/api/admin/subscriptions/{}/status",
        api_base, subscription_id
    ))
    .header("Authorization", &auth)
    .json(&StatusRequest { status })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Plans ============

/// Fetch one page of service plans
pub async fn fetch_plans(page: u32, size: u32) -> Result<Paginated<Plan>, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let query = build_query(&[
        ("page", Some(page.to_string())),
        ("size", Some(size.to_string())),
    ]);

    let response = Request::get(&format!("{}/api/plans/all{}", api_base, query))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a service plan
pub async fn create_plan(plan: &PlanInput) -> Result<Plan, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::post(&format!("{}/api/admin/plans/add", api_base))
        .header("Authorization", &auth)
        .json(plan)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update a service plan
pub async fn update_plan(plan_id: u32, plan: &PlanInput) -> Result<Plan, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::put(&format!("{}/api/admin/plans/update/{}", api_base, plan_id))
        .header("Authorization", &auth)
        .json(plan)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a service plan; fails while clients are subscribed to it
pub async fn delete_plan(plan_id: u32) -> Result<(), String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::delete(&format!("{}/api/admin/plans/delete/{}", api_base, plan_id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    Ok(())
}

// ============ Admin: Invoices ============

/// Fetch one page of all invoices, optionally filtered by status
pub async fn fetch_all_invoices(
    page: u32,
    size: u32,
    status: Option<InvoiceStatus>,
) -> Result<Paginated<Invoice>, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let query = build_query(&[
        ("page", Some(page.to_string())),
        ("size", Some(size.to_string())),
        ("status", status.map(|s| s.as_str().to_string())),
    ]);

    let response = Request::get(&format!("{}/api/admin/invoices/all{}", api_base, query))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one invoice with its client info
pub async fn fetch_invoice(invoice_id: u32) -> Result<Invoice, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!("{}/api/admin/invoices/{}", api_base, invoice_id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Change an invoice's status; returns the updated invoice
pub async fn update_invoice_status(
    invoice_id: u32,
    status: InvoiceStatus,
) -> Result<Invoice, String> {
    #[derive(serde::Serialize)]
    struct StatusRequest {
        status: InvoiceStatus,
    }

    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::put(&format!(
        "{}/api/admin/invoices/{}/status",
        api_base, invoice_id
    ))
    .header("Authorization", &auth)
    .json(&StatusRequest { status })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a client's unpaid invoices for payment registration
pub async fn fetch_pending_invoices(user_id: u32) -> Result<Vec<Invoice>, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let query = build_query(&[("user_id", Some(user_id.to_string()))]);

    let response = Request::get(&format!("{}/api/admin/invoices/pending{}", api_base, query))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Admin: Payments ============

/// Register a manual payment against an invoice; the receipt file is
/// attached when the payment came in by transfer
pub async fn register_payment(
    invoice_id: u32,
    amount: f64,
    payment_date: &str,
    method: PaymentMethod,
    receipt: Option<&web_sys::File>,
) -> Result<Payment, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let form = web_sys::FormData::new().map_err(|_| "Could not build form data".to_string())?;
    let _ = form.append_with_str("invoice_id", &invoice_id.to_string());
    let _ = form.append_with_str("amount", &amount.to_string());
    let _ = form.append_with_str("payment_date", payment_date);
    let _ = form.append_with_str("payment_method", method.as_str());
    if let Some(file) = receipt {
        let _ = form.append_with_blob("receipt_file", file);
    }

    let response = Request::post(&format!("{}/api/admin/payments/add", api_base))
        .header("Authorization", &auth)
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one page of payments with the list filters applied
pub async fn fetch_payments(
    page: u32,
    size: u32,
    search: Option<&str>,
    month: Option<u32>,
    year: Option<i32>,
    method: Option<PaymentMethod>,
) -> Result<Paginated<Payment>, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let query = build_query(&[
        ("page", Some(page.to_string())),
        ("size", Some(size.to_string())),
        ("search", search.map(|s| s.to_string())),
        ("month", month.map(|m| m.to_string())),
        ("year", year.map(|y| y.to_string())),
        ("payment_method", method.map(|m| m.as_str().to_string())),
    ]);

    let response = Request::get(&format!("{}/api/admin/payments/all{}", api_base, query))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Admin: Dashboard & Settings ============

/// Fetch the admin dashboard counters
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!("{}/api/admin/dashboard", api_base))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the company billing configuration
pub async fn fetch_settings() -> Result<CompanySettings, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::get(&format!("{}/api/admin/settings", api_base))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Save the company billing configuration; returns the stored values
pub async fn update_settings(settings: &CompanySettings) -> Result<CompanySettings, String> {
    let api_base = get_api_base();
    let auth = bearer_header()?;

    let response = Request::put(&format!("{}/api/admin/settings", api_base))
        .header("Authorization", &auth)
        .json(settings)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_skips_unset_params() {
        let query = build_query(&[
            ("page", Some("2".to_string())),
            ("size", Some("10".to_string())),
            ("status", None),
        ]);
        assert_eq!(query, "?page=2&size=10");
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&[("month", None), ("year", None)]), "");
    }

    #[test]
    fn test_build_query_encodes_values() {
        let query = build_query(&[("username", Some("juan perez".to_string()))]);
        assert_eq!(query, "?username=juan%20perez");
    }

    #[test]
    fn test_url_encode_keeps_unreserved() {
        assert_eq!(url_encode("abc-DEF_1.2~"), "abc-DEF_1.2~");
        assert_eq!(url_encode("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_attachment_filename() {
        assert_eq!(
            attachment_filename("attachment; filename=\"factura_0007.pdf\""),
            Some("factura_0007.pdf".to_string())
        );
        assert_eq!(
            attachment_filename("attachment; filename=informe.pdf; size=123"),
            Some("informe.pdf".to_string())
        );
        assert_eq!(attachment_filename("inline"), None);
        assert_eq!(attachment_filename("attachment; filename=\"\""), None);
    }
}
