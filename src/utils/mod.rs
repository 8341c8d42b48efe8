//! Utility modules shared by the resolver and the generators.

pub mod hash;
pub mod mime;
pub mod route;
