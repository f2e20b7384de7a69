use crate::domain::model::{Outcome, Task};
use crate::utils::error::Result;

/// Something that turns a task into an outcome.
pub trait Solver: Send + Sync {
    fn solve(&self, task: &Task) -> Result<Outcome>;
}

/// A named job as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub name: String,
    pub input: String,
    pub task: Task,
}

pub trait JobSource: Send + Sync {
    fn jobs(&self) -> Result<Vec<JobSpec>>;
    fn stop_on_error(&self) -> bool;
}
