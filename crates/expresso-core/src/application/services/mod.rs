//! Application services.

pub mod destination_guard;
pub mod generate_service;

pub use generate_service::{GenerateReport, GenerateService};
