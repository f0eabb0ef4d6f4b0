use arrow::error::ArrowError;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Unknown FHIR resource type '{0}'")]
    UnknownResourceType(String),

    /// A definition names a type that is neither primitive nor defined.
    /// Always a bug in the tables, never bad input data.
    #[error("Unexpected type '{type_code}' for element '{element}'")]
    UnsupportedType { element: String, type_code: String },

    #[error("Could not convert rows: {0}")]
    Arrow(#[from] ArrowError),
}
