//! Storefront Core - Shared types library.
//!
//! This crate provides the types exchanged between the storefront cart client
//! and the store server:
//! - `client` - HTTP client, view abstraction and cart/checkout controllers
//! - `cli` - Command-line host for driving the client
//!
//! # Architecture
//!
//! The core crate contains only types and pure parsing - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, cart actions, payloads and session identity
//! - [`cookie`] - `Cookie` header parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cookie;
pub mod types;

pub use cookie::get_cookie;
pub use types::*;
