pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::BatchConfig;
pub use crate::core::digital_root::{digital_root, try_digital_root};
pub use crate::core::engine::{AlgorithmSolver, BatchEngine};
pub use crate::core::first_unique::first_non_repeating;
pub use crate::core::permutations::{
    permutations_of, recursive_permutations, unique_permutations, UniquePermutations,
};
pub use crate::core::postfix::infix_to_postfix;
pub use crate::utils::error::{AlgoError, Result};
