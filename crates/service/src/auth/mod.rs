//! Credentials and bearer tokens: three-layer architecture (domain, repository, service)
//! plus the request-boundary identity resolver.

pub mod domain;
pub mod errors;
pub mod identity;
pub mod repository;
pub mod service;
pub mod token;
pub mod repo;

pub use identity::{CallerId, IdentityResolver};
pub use service::{AuthConfig, CredentialService};
