#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("invalid text: {0}")]
    Text(#[from] clinic_types::TextError),
    #[error("unknown booking scope '{0}' (expected 'per-clinic' or 'shared')")]
    UnknownSelectionScope(String),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
