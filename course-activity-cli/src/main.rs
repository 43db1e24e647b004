use clap::{Args, Parser, Subcommand};
use course_activity_cli::application::{
    convert_legacy, default_output, describe_activity, evaluate_submission, lesson_json,
    schema_json, validate_definition,
};
use course_activity_cli::infrastructure::{write_output, DefinitionFormat, DefinitionSource};
use course_activity_cli::{CliError, LogConfig, Result};
use course_activity_core::{ChoiceSelection, Submission};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "activity-cli")]
#[command(
    version,
    about = "Course activity tooling - validate, convert and try out activity definitions"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set (default: warn)
    #[arg(long, global = true)]
    log_level: Option<tracing::Level>,

    /// Debug logging with thread ids
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Do not log at all
    #[arg(long, global = true, conflicts_with_all = ["verbose", "quiet", "json_logs"])]
    no_logs: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a definition and report every authoring issue
    Validate {
        /// Definition file (.json or legacy .js)
        file: PathBuf,

        /// Override format detection
        #[arg(short = 'f', long, value_enum)]
        format: Option<DefinitionFormat>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a legacy activity script to interchange JSON
    Convert {
        /// Legacy script, e.g. activity-1.2.js
        file: PathBuf,

        /// Output file; `-` for stdout (defaults to the input name with .json)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Activity title stored in the document
        #[arg(short = 't', long)]
        title: Option<String>,
    },

    /// Write the bundled color filtering lesson as interchange JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Evaluate one submission against a question
    Evaluate {
        /// Definition file (.json or legacy .js)
        file: PathBuf,

        /// Override format detection
        #[arg(short = 'f', long, value_enum)]
        format: Option<DefinitionFormat>,

        /// Zero-based index of the question item
        #[arg(short = 'i', long)]
        item: usize,

        #[command(flatten)]
        answer: AnswerArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the items of a definition
    Show {
        /// Definition file (.json or legacy .js)
        file: PathBuf,

        /// Override format detection
        #[arg(short = 'f', long, value_enum)]
        format: Option<DefinitionFormat>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the JSON Schema of the interchange format
    Schema {
        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct AnswerArgs {
    /// Pick a multiple-choice option by label
    #[arg(long)]
    choice: Option<String>,

    /// Pick a multiple-choice option by zero-based position
    #[arg(long)]
    choice_index: Option<usize>,

    /// Free-text answer
    #[arg(long)]
    answer: Option<String>,

    /// Ask a free-text question for its help feedback
    #[arg(long)]
    help_text: bool,
}

impl AnswerArgs {
    fn into_submission(self) -> Result<Submission> {
        match (self.choice, self.choice_index, self.answer, self.help_text) {
            (Some(label), None, None, false) => {
                Ok(Submission::Choice(ChoiceSelection::label(label)))
            }
            (None, Some(index), None, false) => {
                Ok(Submission::Choice(ChoiceSelection::index(index)))
            }
            (None, None, Some(answer), false) => Ok(Submission::Text(answer)),
            (None, None, None, true) => Ok(Submission::Help),
            _ => Err(CliError::InvalidConfig(
                "Give exactly one of --choice, --choice-index, --answer or --help-text".to_string(),
            )),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = log_config(&cli).init() {
        eprintln!("{}", e);
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_config(cli: &Cli) -> LogConfig {
    let mut config = if cli.verbose {
        LogConfig::verbose()
    } else if cli.quiet {
        LogConfig::quiet()
    } else {
        LogConfig::default()
    };

    if let Some(level) = cli.log_level {
        config = config.with_level(level);
    }
    if cli.json_logs {
        config = config.with_json();
    }
    if cli.no_logs {
        config = config.without_logs();
    }
    config
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Validate { file, format, json } => {
            let report = validate_definition(&DefinitionSource::new(file, format)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            if !report.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Convert {
            file,
            output,
            title,
        } => {
            let source = DefinitionSource::new(&file, Some(DefinitionFormat::Legacy))?;
            let json = convert_legacy(&source.read_to_string()?, title)?;
            match output {
                Some(path) if path.as_os_str() == "-" => write_output(None, &json)?,
                Some(path) => write_output(Some(&path), &json)?,
                None => {
                    let path = default_output(&file);
                    write_output(Some(&path), &json)?;
                    println!("{}", path.display());
                }
            }
        }
        Commands::Export { output } => write_output(output.as_deref(), &lesson_json()?)?,
        Commands::Evaluate {
            file,
            format,
            item,
            answer,
            json,
        } => {
            let activity = DefinitionSource::new(file, format)?.load()?;
            let report = evaluate_submission(&activity, item, &answer.into_submission()?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Commands::Show { file, format, json } => {
            let source = DefinitionSource::new(file, format)?;
            let activity = source.load()?;
            let summary = describe_activity(&activity);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(ExitCode::SUCCESS);
            }
            if let Some(title) = activity.title() {
                println!("{}", title);
            }
            if let Some(reference) = source.reference() {
                println!("activity {}", reference);
            }
            for item in summary {
                println!("{}", item);
            }
        }
        Commands::Schema { output } => {
            let schema = schema_json()?;
            if let Some(dir) = output.as_deref().and_then(|path| path.parent()) {
                if !dir.as_os_str().is_empty() && !dir.is_dir() {
                    fs::create_dir_all(dir)?;
                }
            }
            write_output(output.as_deref(), &schema)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        log_config(&cli)
    }

    #[test]
    fn test_log_flags() {
        let default = config(&["activity-cli", "export"]);
        assert_eq!(default.default_level, tracing::Level::WARN);
        assert!(default.show_logs);

        let verbose = config(&["activity-cli", "-v", "export"]);
        assert_eq!(verbose.default_level, tracing::Level::DEBUG);
        assert!(verbose.show_thread_ids);

        let quiet = config(&["activity-cli", "export", "--quiet", "--json-logs"]);
        assert_eq!(quiet.default_level, tracing::Level::ERROR);
        assert!(quiet.json_format);

        let silent = config(&["activity-cli", "--no-logs", "schema"]);
        assert!(!silent.show_logs);
    }

    #[test]
    fn test_log_level_overrides_preset() {
        let config = config(&["activity-cli", "-q", "--log-level", "info", "export"]);
        assert_eq!(config.default_level, tracing::Level::INFO);
    }

    #[test]
    fn test_conflicting_log_flags() {
        assert!(Cli::try_parse_from(["activity-cli", "-v", "-q", "export"]).is_err());
        assert!(Cli::try_parse_from(["activity-cli", "--no-logs", "-v", "export"]).is_err());
    }

    #[test]
    fn test_evaluate_needs_exactly_one_answer() {
        let base = ["activity-cli", "evaluate", "lesson.json", "--item", "1"];
        assert!(Cli::try_parse_from(base).is_err());
        assert!(Cli::try_parse_from(base.iter().chain(&["--choice", "D"])).is_ok());
        assert!(Cli::try_parse_from(
            base.iter().chain(&["--choice", "D", "--answer", "white"])
        )
        .is_err());
    }
}
