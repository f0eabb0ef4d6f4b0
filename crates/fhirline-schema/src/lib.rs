//! Arrow schema inference for batches of FHIR R4 resources

mod error;
pub mod r4;
mod schema;
mod shape;

pub use error::SchemaError;
pub use schema::{arrow_schema_from_rows, primitive_type, record_batch_from_rows};
pub use shape::Shape;
