//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (files, network, terminals).
//!
//! # Structure
//!
//! - `identifier` - The random number draw and franchise name formatting
//! - `environment` - Environment variables (`Environment`, `EnvValue`)
//! - `template` - `{{variable}}` substitution
//! - `request` - Request templates, rendered requests, and responses
//! - `capture` - Response-to-environment capture rules
//! - `validation` - Franchise name rules

pub mod capture;
pub mod environment;
pub mod identifier;
pub mod request;
pub mod template;
pub mod validation;

pub use capture::{CaptureRule, CaptureRuleError};
pub use environment::{EnvEntry, EnvValue, Environment};
pub use identifier::{
    DEFAULT_MAX_NUMBER, DEFAULT_MIN_NUMBER, DEFAULT_PREFIX, GeneratedIdentifier,
    IdentifierGenerator, format_franchise_name,
};
pub use request::{Header, HttpMethod, RenderedRequest, RequestTemplate, ResponseSummary};
pub use template::{Rendered, TemplateError, render_template};
pub use validation::{MAX_NAME_LENGTH, ValidationError, dangerous_pattern, validate_franchise_name};
