//! Admin Blocks
//!
//! Reusable Leptos blocks for admin dashboards: an applications card grid
//! and a basic CRUD list page. Blocks read store state through signals and
//! report user actions as [`intent::Intent`]s.

pub mod config;
pub mod error;
pub mod naming;
pub mod models;
pub mod format;
pub mod intent;
pub mod dialog;
pub mod form;
pub mod filter;
pub mod pagination;
pub mod focus;
pub mod context;
pub mod mock;
pub mod store;
pub mod components;
pub mod app;

pub use config::BlockConfig;
pub use error::{BlockError, FormError};
pub use intent::Intent;
