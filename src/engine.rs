//! Orchestrator: validate the input, run the pipeline, assemble the result
//!
//! [`calculate`] is a single-shot pure transform. It never panics toward
//! the caller and never returns partial data: either every result field
//! is populated, or the result is a failure carrying only a message.

use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, warn};

use crate::analysis::{allocation, fully_funded};
use crate::error::EngineError;
use crate::input::{is_warning, StudyInput};
use crate::projection::{contributions, expenditure, plan};
use crate::result::StudyResult;

/// Run a full reserve study.
pub fn calculate(input: &StudyInput) -> StudyResult {
    let (warnings, errors): (Vec<String>, Vec<String>) = input
        .validate()
        .into_iter()
        .partition(|message| is_warning(message));

    if !errors.is_empty() {
        return StudyResult::failure(errors.join("; "));
    }
    for warning in &warnings {
        warn!("{warning}");
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_pipeline(input)));
    match outcome {
        Ok(Ok(mut result)) => {
            result.warnings = warnings;
            result
        }
        Ok(Err(err)) => StudyResult::failure(format!("Calculation error: {err}")),
        Err(payload) => {
            StudyResult::failure(format!("Calculation error: {}", panic_message(&payload)))
        }
    }
}

fn run_pipeline(input: &StudyInput) -> Result<StudyResult, EngineError> {
    info!(
        "running reserve study: {} components over {} years from {}",
        input.components.len(),
        input.years,
        input.start_year
    );

    let schedule = expenditure::generate(input);
    let contributions = contributions::build(input, &schedule.totals)?;
    let years = plan::build(input, &contributions, &schedule.totals)?;
    let allocations = allocation::allocations(input, &schedule);
    let graph = allocation::graph(&years);
    let component_summaries = fully_funded::summaries(input, &schedule);

    debug!(
        "pipeline complete: {} years, {} categories",
        years.len(),
        allocations.len()
    );

    Ok(StudyResult {
        success: true,
        error: None,
        warnings: Vec::new(),
        years,
        allocations,
        graph,
        schedule,
        component_summaries,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected fault in calculation pipeline".to_string()
    }
}
