pub mod digital_root;
pub mod engine;
pub mod first_unique;
pub mod permutations;
pub mod postfix;

pub use crate::domain::model::{JobReport, Outcome, Task, TaskKind};
pub use crate::domain::ports::{JobSource, JobSpec, Solver};
pub use crate::utils::error::Result;
