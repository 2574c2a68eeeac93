//! IdentityResolver implementations.

pub mod header;

pub use header::{AnonymousIdentityResolver, DEFAULT_IDENTITY_HEADER, HeaderIdentityResolver};
