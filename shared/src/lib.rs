//! Shared types and decision logic for the LogiBot logistics assistant
//!
//! This crate contains the domain models and the pure classification logic
//! shared between the backend server and its tests: query classification,
//! shipment lookup, delay-risk estimation, and route ranking.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
