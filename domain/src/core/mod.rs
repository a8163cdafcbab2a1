//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated, trimmed question to send to the backend
//! - [`theme::Theme`] — the light/dark rendering theme
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
pub mod theme;
