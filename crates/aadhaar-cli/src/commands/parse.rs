//! Parse command - extract data from the two sides of a card.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use aadhaar_core::{
    native_pipeline, AadhaarConfig, AadhaarParser, AadhaarRecord, CardParser, ExtractionError,
    ExtractionResult,
};

use super::config::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Front side of the card (image, or OCR text with --text-input)
    #[arg(required = true)]
    front: PathBuf,

    /// Back side of the card (image, or OCR text with --text-input)
    #[arg(required = true)]
    back: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Treat inputs as already-recognized text files and skip OCR
    #[arg(long)]
    text_input: bool,

    /// Redact name, UID and address in the output
    #[arg(long)]
    mask: bool,

    /// Print the list of fields that could not be extracted
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(dir) = &args.model_dir {
        config.models.model_dir = dir.clone();
    }

    for input in [&args.front, &args.back] {
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
    }

    info!(
        "Processing card: front={} back={}",
        args.front.display(),
        args.back.display()
    );

    let outcome = if args.text_input {
        parse_text(&args, &config)?
    } else {
        parse_images(&args, &config).await?
    };

    let result = match outcome {
        Ok(result) => result,
        Err(e) => anyhow::bail!("[{}] {}", e.code(), e),
    };
    debug!("Extraction took {}ms", result.processing_time_ms);

    let output = format_record(&result.record, args.format, args.mask)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Parse two OCR text files directly.
fn parse_text(
    args: &ParseArgs,
    config: &AadhaarConfig,
) -> anyhow::Result<Result<ExtractionResult, ExtractionError>> {
    let front = fs::read_to_string(&args.front)?;
    let back = fs::read_to_string(&args.back)?;

    let parser = AadhaarParser::from_config(&config.extraction);
    Ok(parser.parse(&front, &back))
}

/// Run OCR on both images, then parse.
async fn parse_images(
    args: &ParseArgs,
    config: &AadhaarConfig,
) -> anyhow::Result<Result<ExtractionResult, ExtractionError>> {
    let front = fs::read(&args.front)?;
    let back = fs::read(&args.back)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Loading OCR models...");
    let pipeline = native_pipeline(config).map_err(|e| {
        anyhow::anyhow!(
            "{}\n\nPlace det/rec models and the dictionary in {} or pass --model-dir.",
            e,
            config.models.model_dir.display()
        )
    })?;

    pb.set_message("Recognizing front and back...");
    let result = pipeline.extract(front, back).await;

    pb.finish_and_clear();
    Ok(result)
}

fn format_record(record: &AadhaarRecord, format: OutputFormat, mask: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if mask {
                Ok(serde_json::to_string_pretty(&record.masked())?)
            } else {
                Ok(serde_json::to_string_pretty(record)?)
            }
        }
        OutputFormat::Csv => format_csv(record, mask),
        OutputFormat::Text => Ok(format_text(record, mask)),
    }
}

/// Flat (column, value) view of a record shared by CSV and text output.
fn record_fields(record: &AadhaarRecord, mask: bool) -> Vec<(&'static str, String)> {
    let masked = mask.then(|| record.masked());
    let (name, uid, address) = match &masked {
        Some(m) => (&m.name, &m.uid, &m.address),
        None => (&record.name, &record.uid, &record.address),
    };

    vec![
        ("name", name.clone()),
        ("dateOfBirth", record.date_of_birth.clone()),
        ("gender", record.gender.to_string()),
        ("uid", uid.clone()),
        ("address", address.clone()),
        ("pincode", record.pincode.clone()),
        ("mobileNumber", record.mobile_number.clone()),
        ("uidMatch", record.uid_match.to_string()),
        ("ageBand", record.age_band.clone()),
    ]
}

fn format_csv(record: &AadhaarRecord, mask: bool) -> anyhow::Result<String> {
    let fields = record_fields(record, mask);
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(fields.iter().map(|(column, _)| *column))?;
    wtr.write_record(fields.iter().map(|(_, value)| value.as_str()))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &AadhaarRecord, mask: bool) -> String {
    let mut output = String::new();

    for (column, value) in record_fields(record, mask) {
        let value = if value.is_empty() { "-".to_string() } else { value };
        output.push_str(&format!("{:<14} {}\n", format!("{}:", column), value));
    }

    output
}
