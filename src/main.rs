//! # Etiquette CLI
//!
//! Command-line interface for price label printing.
//!
//! ## Usage
//!
//! ```bash
//! # EAN-13 from 12 digits (check digit is added)
//! etiquette "Python Book" 29.90 400638133393 "www.site.com"
//!
//! # Alphanumeric code, printed as Code 128
//! etiquette "Green Tea" 4.50 tea42
//!
//! # No code: a random internal code is generated
//! etiquette "Mystery Box" 10 ""
//!
//! # Save only, do not print
//! etiquette --no-print "Sample" 1.00
//! ```

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use etiquette::{
    CodeSelector, Dispatcher, LabelError, LabelLayout, LabelRenderer, PrinterConfig,
    render::label::parse_price,
    selector::{InternalStyle, RandomInternalCode},
};

/// Etiquette - price label printer utility
#[derive(Parser, Debug)]
#[command(name = "etiquette")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product name (wrapped to two lines)
    title: String,

    /// Price, a non-negative decimal
    #[arg(allow_hyphen_values = true)]
    price: String,

    /// 12 or 13 digits for EAN-13, letters/digits for Code 128; empty to generate
    barcode: Option<String>,

    /// Footer line, e.g. a website
    footer: Option<String>,

    /// Label width in dots
    #[arg(long, default_value_t = 696)]
    width: usize,

    /// Label height in dots
    #[arg(long, default_value_t = 300)]
    height: usize,

    /// Currency suffix after the price
    #[arg(long, default_value = "€")]
    currency: String,

    /// Kind of code generated when none is given
    #[arg(long, value_enum, default_value_t = Generate::Code128)]
    generate: Generate,

    /// Directory the label image is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// JSON printer configuration (defaults to Brother QL-800 over USB)
    #[arg(long, value_name = "FILE")]
    printer_config: Option<PathBuf>,

    /// Give up on the printer after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Save the label without printing
    #[arg(long)]
    no_print: bool,

    /// Debug logging (otherwise RUST_LOG, default warn)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Generate {
    Code128,
    Ean13,
}

impl From<Generate> for InternalStyle {
    fn from(g: Generate) -> Self {
        match g {
            Generate::Code128 => InternalStyle::Code128,
            Generate::Ean13 => InternalStyle::Ean13,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => {}
        Err(LabelError::PrintDispatch(msg)) => {
            eprintln!("✗ Print error: {}", msg);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), LabelError> {
    let price = parse_price(&cli.price)?;

    let mut selector = CodeSelector::new(RandomInternalCode::new(cli.generate.into()));
    let selection = selector.select(cli.barcode.as_deref())?;

    let layout = LabelLayout {
        width: cli.width,
        height: cli.height,
        currency: cli.currency,
        ..Default::default()
    };
    let label = LabelRenderer::new(layout).render(
        &cli.title,
        price,
        cli.footer.as_deref(),
        &selection,
    )?;
    let path = label.save(&cli.output_dir)?;

    if cli.no_print {
        println!("Saved {}", path.display());
        return Ok(());
    }

    let config = match &cli.printer_config {
        Some(file) => PrinterConfig::load(file)?,
        None => PrinterConfig::default(),
    };
    let mut dispatcher = Dispatcher::new(config);
    if let Some(secs) = cli.timeout {
        dispatcher = dispatcher.with_timeout(Duration::from_secs(secs));
    }

    // the label stays on disk whether or not printing works
    dispatcher.print(&path)?;
    println!("✓ Print successful");
    Ok(())
}
