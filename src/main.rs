//! WISP Portal
//!
//! Billing and subscription portal for a small ISP, built with Leptos (WASM).
//!
//! Customers sign in to review their invoices, download the invoice PDF and
//! upload payment receipts; administrators manage clients, service plans,
//! subscriptions, invoices and manually registered payments.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the billing REST API via HTTP, carrying
//! a bearer token on every authenticated call.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
