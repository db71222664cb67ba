use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use lottopick::partition::{DEFAULT_MAX_VALUE, DEFAULT_PICK_COUNT};
use lottopick::{PartitionConfig, PartitionEngine, explain_all, pick_all};
use std::collections::HashSet;

const SEPARATOR: &str = "================================";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Lottopick - Read lottery numbers out of digit strings
#[derive(Parser, Debug)]
#[command(name = "lottopick")]
#[command(about = "Split digit strings into seven lottery numbers between 1 and 59")]
#[command(version)]
pub struct CliArgs {
    /// Digit strings to split
    pub digit_strings: Vec<String>,

    /// Print every split instead of the first one
    #[arg(short, long)]
    pub all: bool,

    /// Print why rejected strings have no split
    #[arg(short, long)]
    pub explain: bool,

    /// How many numbers each string is split into
    #[arg(long, default_value_t = DEFAULT_PICK_COUNT)]
    pub count: usize,

    /// Largest allowed number
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max: u32,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digit_strings: Vec<String>,
    pub show_all: bool,
    pub explain: bool,
    pub partition: PartitionConfig,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        let partition =
            PartitionConfig::new(args.count, args.max).context("Invalid partition settings")?;

        Ok(CliConfig {
            digit_strings: args.digit_strings,
            show_all: args.all,
            explain: args.explain,
            partition,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Build the report lines for every input string
pub fn render_report(config: &CliConfig, engine: &PartitionEngine) -> Vec<String> {
    let mut lines = vec![format!("Input : {}", config.digit_strings.join(","))];
    let inputs: Vec<Option<&str>> = config
        .digit_strings
        .iter()
        .map(|digits| Some(digits.as_str()))
        .collect();

    let mut seen = HashSet::new();
    if config.show_all {
        for digits in &config.digit_strings {
            if !seen.insert(digits.as_str()) {
                continue;
            }
            for picks in engine.partition(digits) {
                lines.push(format!("Key {} Value [{}]", digits, picks));
            }
        }
    } else {
        let picked = pick_all(&inputs, engine);
        for digits in &config.digit_strings {
            if let Some(picks) = picked.get(digits)
                && seen.insert(digits.as_str())
            {
                lines.push(format!("Key {} Value [{}]", digits, picks));
            }
        }
    }

    if config.explain {
        for (digits, outcome) in explain_all(&inputs, engine) {
            if let (Some(digits), Err(err)) = (digits, outcome) {
                lines.push(format!("Skip {} ({})", digits, err));
            }
        }
    }

    lines.push(SEPARATOR.to_string());
    lines
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let engine = PartitionEngine::new(config.partition);

    info!(
        "Splitting {} digit strings into {} numbers up to {}",
        config.digit_strings.len(),
        engine.config().pick_count(),
        engine.config().max_value()
    );

    let lines = render_report(&config, &engine);
    // Input line and separator only
    if lines.len() == 2 && !config.digit_strings.is_empty() {
        warn!("No digit string could be split");
    }

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(digit_strings: &[&str]) -> CliConfig {
        CliConfig {
            digit_strings: digit_strings.iter().map(|s| s.to_string()).collect(),
            show_all: false,
            explain: false,
            partition: PartitionConfig::default(),
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["lottopick", "-a", "1234567", "42"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.digit_strings, vec!["1234567", "42"]);
            assert!(args.all);
            assert!(!args.explain);
            assert_eq!(args.count, 7);
            assert_eq!(args.max, 59);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_config_rejects_bad_limits() {
        let args = CliArgs::try_parse_from(["lottopick", "--max", "120", "1234567"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(CliConfig::try_from(args).is_err());
        }
    }

    #[test]
    fn test_config_rejects_oversized_count() {
        let count = usize::MAX.to_string();
        let args = CliArgs::try_parse_from(["lottopick", "--count", count.as_str(), "1234567"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(CliConfig::try_from(args).is_err());
        }
    }

    #[test]
    fn test_render_report() {
        let engine = PartitionEngine::default();
        let lines = render_report(&config_for(&["42", "4938532894754", "1234567"]), &engine);
        assert_eq!(
            lines,
            vec![
                "Input : 42,4938532894754,1234567",
                "Key 4938532894754 Value [49, 38, 53, 28, 9, 47, 54]",
                "Key 1234567 Value [1, 2, 3, 4, 5, 6, 7]",
                SEPARATOR,
            ]
        );
    }

    #[test]
    fn test_render_report_empty_input() {
        let engine = PartitionEngine::default();
        let lines = render_report(&config_for(&[]), &engine);
        assert_eq!(lines, vec!["Input : ", SEPARATOR]);
    }

    #[test]
    fn test_render_report_all_splits() {
        let engine = PartitionEngine::default();
        let mut config = config_for(&["11111111", "11111111"]);
        config.show_all = true;
        let lines = render_report(&config, &engine);
        // input line, seven splits, separator
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_render_report_explain() {
        let engine = PartitionEngine::default();
        let mut config = config_for(&["01234567"]);
        config.explain = true;
        let lines = render_report(&config, &engine);
        assert_eq!(
            lines.get(1).map(String::as_str),
            Some("Skip 01234567 (A number cannot start with zero)")
        );
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
