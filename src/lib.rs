//! ebookgen: Generate HR career e-books for a professional community.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::commands::generate::GenerationOutcome;
pub use domain::{AppError, Audience, EbookArtifact};
