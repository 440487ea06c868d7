// Core types - records, matrix transform, label humanizing

pub mod humanize;
pub mod matrix;
pub mod record;

pub use matrix::{Matrix, SchemaError};
pub use record::{Record, Value};
