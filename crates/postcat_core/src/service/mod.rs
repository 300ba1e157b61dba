//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate join-record storage and entity lookup into use-case APIs.
//! - Keep callers decoupled from storage details.

pub mod post_category_service;
pub mod reconcile;
