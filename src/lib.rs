//! feature-encoders: categorical feature encoding for tabular ML pipelines.
//!
//! This crate provides small, reversible encoders that turn raw column
//! values into numeric features a downstream model can consume, and decode
//! model output back into the original values after inference.
//!
//! The design favors small, testable modules: a prepare-once builder learns
//! the mapping from priming data and yields a read-only encoder, so the
//! prepare/encode ordering is enforced by the type system rather than by
//! runtime checks.
pub mod codebook;
pub mod config;
pub mod encoders;
pub mod error;

pub use codebook::{Codebook, UNKNOWN_CODE};
pub use config::EncoderConfig;
pub use encoders::encoder_trait::{Encoder, EncoderBuilder};
pub use encoders::label::{LabelEncoder, LabelEncoderBuilder};
pub use error::EncoderError;
