use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of work for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    FirstUnique { text: String },
    DigitalRoot { value: i128 },
    Postfix { expression: String },
    Permute { text: String, unique: bool },
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::FirstUnique { .. } => TaskKind::FirstUnique,
            Task::DigitalRoot { .. } => TaskKind::DigitalRoot,
            Task::Postfix { .. } => TaskKind::Postfix,
            Task::Permute { .. } => TaskKind::Permute,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    FirstUnique,
    DigitalRoot,
    Postfix,
    Permute,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::FirstUnique => "first_unique",
            TaskKind::DigitalRoot => "digital_root",
            TaskKind::Postfix => "postfix",
            TaskKind::Permute => "permute",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Char(Option<char>),
    Number(u64),
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Char(Some(c)) => write!(f, "{}", c),
            Outcome::Char(None) => f.write_str("none"),
            Outcome::Number(n) => write!(f, "{}", n),
            Outcome::Text(s) => f.write_str(s),
            Outcome::List(items) => f.write_str(&items.join(" ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Ok,
    Error,
}

/// One row of a batch report.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub name: String,
    pub kind: TaskKind,
    pub input: String,
    pub status: JobStatus,
    pub output: Option<Outcome>,
    pub error: Option<String>,
}

impl JobReport {
    pub fn is_ok(&self) -> bool {
        self.status == JobStatus::Ok
    }
}
