use clap::Parser;
use small_algos::core::engine::check_permutation_input;
use small_algos::utils::logger::{self, LogStyle};
use small_algos::utils::report::{self, ReportFormat};
use small_algos::utils::validation::Validate;
use small_algos::{AlgoError, BatchConfig, BatchEngine, CliConfig, Command};
use std::io::{BufRead, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let style = if config.log_json {
        LogStyle::Json
    } else {
        LogStyle::Compact
    };
    logger::init_logger(style, config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let exit_code = match run(config.command) {
        Ok(code) => code,
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            e.exit_code()
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn run(command: Command) -> Result<i32, AlgoError> {
    match command {
        Command::FirstUnique { text } => {
            let text = match text {
                Some(text) => text,
                None => read_line()?,
            };
            match small_algos::first_non_repeating(&text) {
                Some(c) => println!("{}", c),
                None => println!("none"),
            }
        }
        Command::DigitalRoot { value } => {
            println!("{}", small_algos::try_digital_root(value)?);
        }
        Command::Postfix { expression } => {
            println!("{}", small_algos::infix_to_postfix(&expression)?);
        }
        Command::Permute {
            text,
            unique,
            limit,
        } => {
            check_permutation_input(&text, limit)?;
            print_permutations(&text, unique)?;
        }
        Command::Batch {
            config,
            format,
            output,
        } => return run_batch(&config, format.as_deref(), output.as_deref()),
    }
    Ok(0)
}

fn run_batch(path: &str, format: Option<&str>, output: Option<&str>) -> Result<i32, AlgoError> {
    tracing::info!("📁 Loading jobs from: {}", path);
    let config = BatchConfig::from_file(path)?;

    // 驗證配置
    config.validate()?;
    tracing::info!("✅ Batch '{}' loaded and validated", config.batch.name);

    let format: ReportFormat = format.unwrap_or(config.output_format()).parse()?;
    let max_permutation_len = config.max_permutation_len();
    let engine = BatchEngine::new(config, max_permutation_len);

    let reports = engine.run()?;
    let rendered = report::render(&reports, format)?;

    match output {
        Some(path) => {
            write_report(path, &rendered)?;
            tracing::info!("📁 Report saved to: {}", path);
        }
        None => print!("{}", rendered),
    }

    // 部分工作失敗時以 2 結束
    Ok(if reports.iter().all(|r| r.is_ok()) { 0 } else { 2 })
}

/// 邊產生邊輸出，不先收集整個 n! 結果
fn print_permutations(text: &str, unique: bool) -> Result<(), AlgoError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    let mut failure: Option<std::io::Error> = None;

    let mut emit = |p: &[char]| {
        if failure.is_none() {
            let line: String = p.iter().collect();
            if let Err(e) = writeln!(out, "{}", line) {
                failure = Some(e);
            }
        }
    };
    if unique {
        small_algos::unique_permutations(&chars, &mut emit);
    } else {
        small_algos::recursive_permutations(&chars, &mut emit);
    }

    if let Some(e) = failure {
        return Err(e.into());
    }
    out.flush()?;
    Ok(())
}

fn read_line() -> Result<String, AlgoError> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn write_report(path: &str, content: &str) -> Result<(), AlgoError> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}
