use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-algos")]
#[command(about = "Small text and number algorithms")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// First character that occurs exactly once (spaces ignored)
    FirstUnique {
        /// Text to scan; read one line from stdin when omitted
        text: Option<String>,
    },

    /// Digital root of a non-negative integer
    DigitalRoot {
        #[arg(allow_negative_numbers = true)]
        value: i128,
    },

    /// Translate an infix expression into postfix
    Postfix { expression: String },

    /// Print the permutations of a character sequence
    Permute {
        text: String,

        /// Only distinct permutations, in lexicographic order
        #[arg(short, long)]
        unique: bool,

        /// Maximum accepted input length
        #[arg(long, default_value = "8")]
        limit: usize,
    },

    /// Run the jobs listed in a TOML file
    Batch {
        #[arg(short, long, default_value = "jobs.toml")]
        config: String,

        /// Override the output format from the config (text, json, csv)
        #[arg(short, long)]
        format: Option<String>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}
