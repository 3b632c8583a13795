use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("{}", .0)]
    Aci(#[from] aci_core::AciError),

    #[error("Json: {}", .0)]
    Json(#[from] serde_json::Error),
}
