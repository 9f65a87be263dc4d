use crate::agenda::AgendaError;
use crate::skin::SkinError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Skin(#[from] SkinError),
    #[error(transparent)]
    Agenda(#[from] AgendaError),
}
