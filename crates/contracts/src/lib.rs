//! Shared contracts for the vendor admin dashboard
//!
//! Typed domain models decoded from the admin REST API, the vendor query
//! thread normalizer and the client-side list utilities (pagination, search,
//! sort) that every screen of the dashboard consumes.

pub mod domain;
pub mod shared;
pub mod system;
