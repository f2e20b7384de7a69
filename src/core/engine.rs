use crate::core::{digital_root, first_unique, permutations, postfix};
use crate::core::{JobSource, Outcome, Solver, Task};
use crate::domain::model::{JobReport, JobStatus};
use crate::utils::error::{AlgoError, Result};
use crate::utils::validation;

pub const DEFAULT_MAX_PERMUTATION_LEN: usize = 8;
/// Hard cap on permutation input, 10! rows already.
pub const MAX_PERMUTATION_LEN_LIMIT: usize = 10;

/// Dispatches tasks to the algorithm modules.
#[derive(Debug, Clone)]
pub struct AlgorithmSolver {
    max_permutation_len: usize,
}

impl AlgorithmSolver {
    pub fn new(max_permutation_len: usize) -> Self {
        Self {
            max_permutation_len,
        }
    }
}

impl Default for AlgorithmSolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PERMUTATION_LEN)
    }
}

impl Solver for AlgorithmSolver {
    fn solve(&self, task: &Task) -> Result<Outcome> {
        match task {
            Task::FirstUnique { text } => {
                Ok(Outcome::Char(first_unique::first_non_repeating(text)))
            }
            Task::DigitalRoot { value } => {
                digital_root::try_digital_root(*value).map(Outcome::Number)
            }
            Task::Postfix { expression } => {
                postfix::infix_to_postfix(expression).map(Outcome::Text)
            }
            Task::Permute { text, unique } => {
                check_permutation_input(text, self.max_permutation_len)?;
                Ok(Outcome::List(permutations::permutations_of(text, *unique)))
            }
        }
    }
}

/// Rejects permutation input longer than `limit`, and any `limit` outside
/// `1..=MAX_PERMUTATION_LEN_LIMIT`.
pub fn check_permutation_input(text: &str, limit: usize) -> Result<()> {
    validation::validate_range("limit", limit, 1, MAX_PERMUTATION_LEN_LIMIT)?;

    let len = text.chars().count();
    if len > limit {
        return Err(AlgoError::Validation {
            field: "input".to_string(),
            value: text.to_string(),
            reason: format!(
                "permutation input has {} characters, limit is {}",
                len, limit
            ),
        });
    }
    Ok(())
}

pub struct BatchEngine<J: JobSource, S: Solver> {
    source: J,
    solver: S,
}

impl<J: JobSource> BatchEngine<J, AlgorithmSolver> {
    pub fn new(source: J, max_permutation_len: usize) -> Self {
        Self::with_solver(source, AlgorithmSolver::new(max_permutation_len))
    }
}

impl<J: JobSource, S: Solver> BatchEngine<J, S> {
    pub fn with_solver(source: J, solver: S) -> Self {
        Self { source, solver }
    }

    /// Runs every job in order and returns one report row per job.
    ///
    /// A failing job is recorded and the run continues, unless the source
    /// asks to stop on the first error.
    pub fn run(&self) -> Result<Vec<JobReport>> {
        let jobs = self.source.jobs()?;
        tracing::info!("🚀 Running {} job(s)", jobs.len());

        let mut reports = Vec::with_capacity(jobs.len());
        for job in jobs {
            tracing::debug!("Running job '{}' ({})", job.name, job.task.kind());

            match self.solver.solve(&job.task) {
                Ok(outcome) => {
                    tracing::info!("✅ {} -> {}", job.name, outcome);
                    reports.push(JobReport {
                        name: job.name,
                        kind: job.task.kind(),
                        input: job.input,
                        status: JobStatus::Ok,
                        output: Some(outcome),
                        error: None,
                    });
                }
                Err(e) => {
                    tracing::warn!("❌ {} failed: {}", job.name, e);
                    if self.source.stop_on_error() {
                        return Err(e);
                    }
                    reports.push(JobReport {
                        name: job.name,
                        kind: job.task.kind(),
                        input: job.input,
                        status: JobStatus::Error,
                        output: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        tracing::info!(
            "📊 Finished: {} succeeded, {} failed",
            reports.len() - failed,
            failed
        );
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::JobSpec;

    struct FixedJobs {
        jobs: Vec<JobSpec>,
        stop_on_error: bool,
    }

    impl JobSource for FixedJobs {
        fn jobs(&self) -> Result<Vec<JobSpec>> {
            Ok(self.jobs.clone())
        }

        fn stop_on_error(&self) -> bool {
            self.stop_on_error
        }
    }

    fn job(name: &str, input: &str, task: Task) -> JobSpec {
        JobSpec {
            name: name.to_string(),
            input: input.to_string(),
            task,
        }
    }

    fn sample_jobs() -> Vec<JobSpec> {
        vec![
            job("neg", "-3", Task::DigitalRoot { value: -3 }),
            job(
                "swiss",
                "swiss",
                Task::FirstUnique {
                    text: "swiss".to_string(),
                },
            ),
        ]
    }

    #[test]
    fn test_solver_dispatch() {
        let solver = AlgorithmSolver::default();
        assert_eq!(
            solver.solve(&Task::DigitalRoot { value: 942 }).unwrap(),
            Outcome::Number(6)
        );
        assert_eq!(
            solver
                .solve(&Task::Postfix {
                    expression: "a+b".to_string()
                })
                .unwrap(),
            Outcome::Text("ab+".to_string())
        );
        assert_eq!(
            solver
                .solve(&Task::FirstUnique {
                    text: "   ".to_string()
                })
                .unwrap(),
            Outcome::Char(None)
        );
    }

    #[test]
    fn test_permutation_limit() {
        let solver = AlgorithmSolver::new(3);
        let ok = solver.solve(&Task::Permute {
            text: "abc".to_string(),
            unique: true,
        });
        assert_eq!(ok.unwrap(), Outcome::List(permutations::permutations_of("abc", true)));

        let too_long = solver.solve(&Task::Permute {
            text: "abcd".to_string(),
            unique: false,
        });
        assert!(matches!(too_long, Err(AlgoError::Validation { .. })));
    }

    #[test]
    fn test_permutation_limit_is_capped() {
        assert!(check_permutation_input("abc", 10).is_ok());
        assert!(check_permutation_input("abc", 0).is_err());

        let err = check_permutation_input("abcdefghijklm", 13).unwrap_err();
        match err {
            AlgoError::Validation { field, .. } => assert_eq!(field, "limit"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_run_continues_after_error() {
        let engine = BatchEngine::new(
            FixedJobs {
                jobs: sample_jobs(),
                stop_on_error: false,
            },
            DEFAULT_MAX_PERMUTATION_LEN,
        );

        let reports = engine.run().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].status, JobStatus::Error);
        assert!(reports[0].error.as_deref().unwrap().contains("non-negative"));
        assert_eq!(reports[1].output, Some(Outcome::Char(Some('w'))));
    }

    #[test]
    fn test_run_stops_on_error() {
        let engine = BatchEngine::new(
            FixedJobs {
                jobs: sample_jobs(),
                stop_on_error: true,
            },
            DEFAULT_MAX_PERMUTATION_LEN,
        );

        assert!(matches!(
            engine.run(),
            Err(AlgoError::InvalidArgument { .. })
        ));
    }
}
