pub mod command;
pub mod error;
pub mod list;

pub use command::{TaskChange, TaskCommand};
pub use error::{AgendaError, AgendaResult};
pub use list::{Task, TaskId, TaskList};
