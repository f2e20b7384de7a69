use crate::core::engine::{DEFAULT_MAX_PERMUTATION_LEN, MAX_PERMUTATION_LEN_LIMIT};
use crate::core::{JobSource, JobSpec, Task, TaskKind};
use crate::utils::error::{AlgoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: &[&str] = &["text", "json", "csv"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
    pub output_format: Option<String>,
    pub stop_on_error: Option<bool>,
    pub max_permutation_len: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub kind: TaskKind,
    pub input: String,
    pub enabled: Option<bool>,
    pub unique: Option<bool>, // 只用於 permute
}

impl JobConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// 將設定轉成可執行的 Task
    pub fn to_task(&self) -> Result<Task> {
        let task = match self.kind {
            TaskKind::FirstUnique => Task::FirstUnique {
                text: self.input.clone(),
            },
            TaskKind::DigitalRoot => {
                let value = self.input.trim().parse::<i128>().map_err(|e| {
                    AlgoError::Validation {
                        field: format!("jobs.{}.input", self.name),
                        value: self.input.clone(),
                        reason: format!("not an integer: {}", e),
                    }
                })?;
                Task::DigitalRoot { value }
            }
            TaskKind::Postfix => Task::Postfix {
                expression: self.input.clone(),
            },
            TaskKind::Permute => Task::Permute {
                text: self.input.clone(),
                unique: self.unique.unwrap_or(false),
            },
        };
        Ok(task)
    }
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AlgoError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_TEXT})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AlgoError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> &str {
        self.batch.output_format.as_deref().unwrap_or("text")
    }

    pub fn max_permutation_len(&self) -> usize {
        self.batch
            .max_permutation_len
            .unwrap_or(DEFAULT_MAX_PERMUTATION_LEN)
    }

    pub fn enabled_jobs(&self) -> impl Iterator<Item = &JobConfig> {
        self.jobs.iter().filter(|j| j.is_enabled())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("batch.name", &self.batch.name)?;
        validation::validate_one_of("batch.output_format", self.output_format(), OUTPUT_FORMATS)?;
        validation::validate_range(
            "batch.max_permutation_len",
            self.max_permutation_len(),
            1,
            MAX_PERMUTATION_LEN_LIMIT,
        )?;

        validation::validate_unique_names("jobs.name", self.jobs.iter().map(|j| j.name.as_str()))?;

        for job in &self.jobs {
            validation::validate_non_empty_string("jobs.name", &job.name)?;
            if job.kind == TaskKind::Permute {
                validation::validate_range(
                    &format!("jobs.{}.input", job.name),
                    job.input.chars().count(),
                    0,
                    self.max_permutation_len(),
                )?;
            }
            // 整數格式在此先檢查，負數留給執行期回報
            job.to_task()?;
        }

        Ok(())
    }
}

impl JobSource for BatchConfig {
    fn jobs(&self) -> Result<Vec<JobSpec>> {
        self.enabled_jobs()
            .map(|job| {
                Ok(JobSpec {
                    name: job.name.clone(),
                    input: job.input.clone(),
                    task: job.to_task()?,
                })
            })
            .collect()
    }

    fn stop_on_error(&self) -> bool {
        self.batch.stop_on_error.unwrap_or(false)
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
