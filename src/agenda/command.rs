use super::error::{AgendaError, AgendaResult};
use super::list::{Task, TaskId, TaskList};

/// Action bound to one checklist row. Rows hold commands, not references to
/// each other, so commands can run in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCommand {
    SetDone { id: TaskId, done: bool },
    Toggle(TaskId),
    Remove(TaskId),
}

impl TaskCommand {
    pub const fn id(self) -> TaskId {
        match self {
            Self::SetDone { id, .. } | Self::Toggle(id) | Self::Remove(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    Updated { id: TaskId, done: bool },
    Removed { id: TaskId, task: Task },
}

impl TaskList {
    pub fn apply(&mut self, command: TaskCommand) -> AgendaResult<TaskChange> {
        tracing::debug!(?command, "apply task command");
        let id = command.id();
        let unknown = || {
            tracing::warn!(?id, "task command targets a missing entry");
            AgendaError::UnknownTask(id)
        };

        match command {
            TaskCommand::SetDone { id, done } => {
                let task = self.get_mut(id).ok_or_else(unknown)?;
                task.done = done;
                Ok(TaskChange::Updated { id, done })
            }
            TaskCommand::Toggle(id) => {
                let task = self.get_mut(id).ok_or_else(unknown)?;
                task.done = !task.done;
                Ok(TaskChange::Updated {
                    id,
                    done: task.done,
                })
            }
            TaskCommand::Remove(id) => {
                let task = self.remove(id).ok_or_else(unknown)?;
                Ok(TaskChange::Removed { id, task })
            }
        }
    }
}
