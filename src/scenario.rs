//! Batch scenario runs
//!
//! Each study is independent, so a batch is a parallel map over the
//! inputs. No state is shared between runs.

use rayon::prelude::*;

use crate::engine::calculate;
use crate::input::StudyInput;
use crate::result::StudyResult;

/// Run several independent studies in parallel. Results come back in
/// input order.
pub fn run_batch(inputs: &[StudyInput]) -> Vec<StudyResult> {
    inputs.par_iter().map(calculate).collect()
}
