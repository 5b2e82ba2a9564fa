//! Age band command - bucket a date of birth.

use chrono::NaiveDate;
use clap::Args;

use aadhaar_core::card::{age_band, age_band_at};

/// Arguments for the age-band command.
#[derive(Args)]
pub struct AgeBandArgs {
    /// Date of birth (DD/MM/YYYY or YYYY-MM-DD)
    dob: String,

    /// Reference date instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

pub fn run(args: AgeBandArgs) -> anyhow::Result<()> {
    let band = match args.today {
        Some(today) => age_band_at(&args.dob, today),
        None => age_band(&args.dob),
    };

    println!("{}", band);

    Ok(())
}
