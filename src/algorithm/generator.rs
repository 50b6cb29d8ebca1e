//! Enumeration of every terrain subtile combination in generation order

use crate::algorithm::resolver::{Stage, resolve};
use crate::io::configuration::{BOTTOM_RIGHT_OFFSETS, TOP_LEFT_CANDIDATES};
use crate::io::error::Result;
use crate::spatial::subtile::Combination;

/// Every top-left candidate paired with every bottom-right offset
///
/// Candidates vary slowest, so the first five results share `(0, 2)`.
pub fn base_combinations() -> Vec<Combination> {
    TOP_LEFT_CANDIDATES
        .into_iter()
        .flat_map(|top_left| {
            BOTTOM_RIGHT_OFFSETS
                .into_iter()
                .map(move |bottom_right| Combination::from_subtiles(&[top_left, bottom_right]))
        })
        .collect()
}

/// Append the quadrant for `stage` to every partial combination
///
/// A '+' variant is placed directly after the combination it branches from.
///
/// # Errors
///
/// Returns an error if a partial combination is not ready for `stage`
pub fn expand_stage(partials: &[Combination], stage: Stage) -> Result<Vec<Combination>> {
    let mut expanded = Vec::with_capacity(partials.len() * 2);
    for partial in partials {
        let resolution = resolve(partial, stage)?;
        expanded.extend(resolution.variants().map(|subtile| partial.with(subtile)));
    }
    Ok(expanded)
}

/// Generate all terrain combinations
///
/// Uses the terrain coordinate space (wall content starts at row 2). The
/// result order is the source index used by the reorder table.
///
/// # Errors
///
/// Propagates resolver errors, which only occur if the stage order is broken
pub fn generate_combinations() -> Result<Vec<Combination>> {
    let bases = base_combinations();
    let with_top_right = expand_stage(&bases, Stage::TopRight)?;
    expand_stage(&with_top_right, Stage::BottomLeft)
}
