use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use log::LevelFilter;

use spec_validator::{read_document, SpecValidator, ValidatorConfig};

#[derive(Parser)]
#[command(
    name = "spec-validator",
    about = "Check structure, clarity and completeness of SpecLang documents",
    version
)]
struct Cli {
    /// SpecLang document to analyze
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Exit with status 2 when any issue is reported
    #[arg(long)]
    strict: bool,

    /// Required section heading (repeatable, replaces the default set)
    #[arg(long = "require", value_name = "HEADING")]
    required: Vec<String>,

    /// Flag sentences with more words than this
    #[arg(long, value_name = "N")]
    max_sentence_words: Option<usize>,

    /// Flag sentences whose comparative sentiment exceeds this
    #[arg(long, value_name = "SCORE")]
    subjectivity_threshold: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ValidatorConfig {
        let mut config = ValidatorConfig::default();
        if !self.required.is_empty() {
            config = config.with_required_sections(self.required.iter().cloned());
        }
        if let Some(words) = self.max_sentence_words {
            config = config.with_max_sentence_words(words);
        }
        if let Some(threshold) = self.subjectivity_threshold {
            config = config.with_subjectivity_threshold(threshold);
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(path) = cli.file.as_ref() else {
        eprintln!("Please provide a file path to a SpecLang document.");
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    let text = match read_document(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("analyzing {} ({} bytes)", path.display(), text.len());

    let validator = match SpecValidator::new(text).with_config(cli.config()) {
        Ok(validator) => validator,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = validator.analyze();

    if cli.json {
        match result.to_json(true) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{result}");
    }

    if cli.strict && !result.is_clean() {
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
