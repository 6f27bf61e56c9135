use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info, LevelFilter};

use text_readability::report::{render_json, render_report, render_statistics};
use text_readability::{
    analyze, MetricSelector, OutputFormat, ReadabilityConfig, ReadabilityError, Result,
};

const PROMPT: &str = "Enter the score you want to calculate (ARI, FK, SMOG, CL, all): ";
const STDIN_PATH: &str = "<stdin>";

/// Estimate how hard a text is to read.
///
/// Prints word, sentence, character, syllable and polysyllable counts, then the
/// Automated Readability Index, Flesch–Kincaid, SMOG and Coleman–Liau scores
/// with the reader age each one maps to.
#[derive(Parser, Debug)]
#[command(name = "readability", version, about, long_about = None)]
struct CliArgs {
    /// Text file to analyse. Reads standard input when omitted or `-`
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Analyse this text instead of reading a file
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Score to report: ARI, FK, SMOG, CL or all. Prompts for it when omitted
    #[arg(short, long)]
    metric: Option<String>,

    /// Output format (default: text, or the config file's `format`)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Never prompt; use the configured default metric when --metric is missing
    #[arg(long, default_value_t = false)]
    no_prompt: bool,

    /// Verbose output
    ///
    /// Sets the log level to `info` and ignores `RUST_LOG`. When not given,
    /// `RUST_LOG` controls logging.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

enum InputSource {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl CliArgs {
    fn input_source(&self) -> InputSource {
        match (&self.text, &self.input) {
            (Some(text), _) => InputSource::Inline(text.clone()),
            (None, Some(path)) if path != Path::new("-") => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }
}

fn io_error(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> ReadabilityError {
    let path = path.into();
    move |source| ReadabilityError::Io { path, source }
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => {
            info!("Reading text from {}", path.display());
            std::fs::read_to_string(path).map_err(io_error(path.clone()))
        }
        InputSource::Stdin => {
            info!("Reading text from standard input");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(io_error(STDIN_PATH))?;
            Ok(text)
        }
        InputSource::Inline(text) => Ok(text.clone()),
    }
}

/// Prints the prompt and reads the first whitespace-delimited token from stdin.
fn prompt_for_selector() -> Result<MetricSelector> {
    print!("{}", PROMPT);
    io::stdout().flush().map_err(io_error("<stdout>"))?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(io_error(STDIN_PATH))?;
    let token = line.split_whitespace().next().unwrap_or("");
    debug!("Selector read from prompt: {:?}", token);
    token.parse()
}

fn run(args: CliArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            ReadabilityConfig::load(path)?
        }
        None => ReadabilityConfig::default(),
    };
    let format = args.format.unwrap_or(config.format);

    let source = args.input_source();
    let text = read_input(&source)?;
    let analysis = analyze(&text)?;
    info!(
        "Analysed {} characters, {} words, {} sentences",
        analysis.statistics.character_count,
        analysis.statistics.word_count,
        analysis.statistics.sentence_count
    );

    // The prompt needs stdin free and a human-readable transcript.
    let can_prompt = config.prompt
        && !args.no_prompt
        && format == OutputFormat::Text
        && !matches!(source, InputSource::Stdin);

    let mut counts_printed = false;
    let selector = match &args.metric {
        Some(metric) => metric.parse::<MetricSelector>()?,
        None if can_prompt => {
            print!("{}", render_statistics(&analysis.statistics));
            counts_printed = true;
            prompt_for_selector()?
        }
        None => config.default_selector()?,
    };
    info!("Reporting metric selection '{}'", selector);

    let report = analysis.report(selector);
    match format {
        OutputFormat::Text => {
            if !counts_printed {
                print!("{}", render_statistics(&analysis.statistics));
            }
            println!();
            print!("{}", render_report(&report));
        }
        OutputFormat::Json => println!("{}", render_json(&analysis.statistics, &report)?),
    }
    Ok(())
}

fn main() {
    let args = CliArgs::parse();

    if args.verbose {
        env_logger::builder().filter_level(LevelFilter::Info).init();
        info!("Verbose output enabled (ignoring RUST_LOG environment variable)");
    } else {
        env_logger::init();
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        let mut current_err: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(&e);
        while let Some(source) = current_err {
            eprintln!("Caused by: {}", source);
            current_err = source.source();
        }
        if let ReadabilityError::UnknownSelector(_) = e {
            eprintln!("Usage: choose one of ARI, FK, SMOG, CL or all (for example `--metric all`).");
        }
        std::process::exit(1);
    }
}
