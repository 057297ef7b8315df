//! Business logic composed by the HTTP handlers.

pub mod prediction;
