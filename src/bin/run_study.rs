//! Run a reserve study from a JSON input file
//!
//! Prints a summary block and optionally writes the year-by-year table as
//! CSV for spreadsheet comparison.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use reserve_study::{calculate, scenario, StudyInput, StudyResult};

#[derive(Parser, Debug)]
#[command(name = "run_study", about = "Reserve-fund projection runner")]
struct Args {
    /// Study input JSON (a single study, or an array with --batch)
    #[arg(short, long, env = "RESERVE_STUDY_INPUT")]
    input: PathBuf,

    /// Write the year-by-year table to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat the input file as an array of studies and run them in parallel
    #[arg(long)]
    batch: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    if args.batch {
        let inputs: Vec<StudyInput> =
            serde_json::from_str(&raw).context("parsing study array")?;
        info!("running {} scenarios", inputs.len());
        let results = scenario::run_batch(&inputs);
        for (i, result) in results.iter().enumerate() {
            println!("--- Scenario {} ---", i + 1);
            print_summary(result);
        }
    } else {
        let input: StudyInput = serde_json::from_str(&raw).context("parsing study input")?;
        let result = calculate(&input);
        print_summary(&result);
        if let Some(path) = &args.output {
            write_year_table(path, &result)?;
            println!("Year table written to {}", path.display());
        }
    }

    info!("total time: {:?}", start.elapsed());
    Ok(())
}

fn print_summary(result: &StudyResult) {
    if !result.success {
        println!("FAILED: {}", result.error.as_deref().unwrap_or("unknown error"));
        return;
    }
    for warning in &result.warnings {
        println!("{warning}");
    }

    println!("Years projected:      {}", result.years.len());
    println!("Percent funded:       {}%", result.percent_funded());
    println!("Funding status:       {:?}", result.funding_status());
    println!("Fully funded total:   ${}", result.fully_funded_total());
    println!("Total contributions:  ${}", result.total_contributions());
    println!("Total expenditures:   ${}", result.total_expenditures());
    if let Some((year, amount)) = result.peak_expenditure() {
        println!("Peak expenditure:     ${amount} in {year}");
    }

    let deficits = result.deficit_years();
    if deficits.is_empty() {
        println!("Deficit years:        none");
    } else {
        println!("Deficit years:        {deficits:?}");
        println!("Special assessment:   ${}", result.special_assessment_required());
    }

    println!("Category allocation:");
    for allocation in &result.allocations {
        println!(
            "  {:<24} ${:>14}  {:>6}%",
            allocation.category, allocation.total, allocation.percent
        );
    }
}

fn write_year_table(path: &Path, result: &StudyResult) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "Year",
        "CalendarYear",
        "Beginning",
        "Contribution",
        "Interest",
        "Expenditures",
        "Ending",
    ])?;
    for year in &result.years {
        writer.write_record([
            year.year_index.to_string(),
            year.calendar_year.to_string(),
            year.beginning_balance.to_string(),
            year.contribution.to_string(),
            year.interest_earned.to_string(),
            year.expenditures.to_string(),
            year.ending_balance.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
