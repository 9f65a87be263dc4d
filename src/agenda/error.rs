use super::list::TaskId;
use thiserror::Error;

pub type AgendaResult<T> = std::result::Result<T, AgendaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    #[error("no live task for {0:?}")]
    UnknownTask(TaskId),
}
