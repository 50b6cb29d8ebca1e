//! Reference lookup for the top-right and bottom-left quadrants
//!
//! A looked-up quadrant takes its column from one earlier quadrant and its
//! row from another. Subtiles from the 2x2 '+' block (rows 0-1) carry no
//! usable column/row information, so a fixed stand-in is referenced instead.
//! When the lookup lands on the full center subtile, the matching '+' subtile
//! is offered as a second variant.

use crate::io::configuration::{
    BOTTOM_LEFT_CENTER, BOTTOM_LEFT_COLUMN_FALLBACK, BOTTOM_LEFT_PLUS, BOTTOM_LEFT_ROW_FALLBACK,
    PLUS_BLOCK_MAX_ROW, TOP_RIGHT_CENTER, TOP_RIGHT_COLUMN_FALLBACK, TOP_RIGHT_PLUS,
    TOP_RIGHT_ROW_FALLBACK,
};
use crate::io::error::{AutotileError, Result};
use crate::spatial::subtile::{Combination, Quadrant, SubtileCoord};

/// Quadrants chosen by reference lookup, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Column of the bottom-right quadrant, row of the top-left quadrant
    TopRight,
    /// Column of the top-left quadrant, row of the bottom-right quadrant
    BottomLeft,
}

struct ReferenceRule {
    column_quadrant: Quadrant,
    column_fallback: SubtileCoord,
    row_quadrant: Quadrant,
    row_fallback: SubtileCoord,
    center: SubtileCoord,
    plus: SubtileCoord,
}

impl Stage {
    /// Quadrant this stage fills in
    pub const fn quadrant(self) -> Quadrant {
        match self {
            Self::TopRight => Quadrant::TopRight,
            Self::BottomLeft => Quadrant::BottomLeft,
        }
    }

    /// Human-readable stage name
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    const fn rule(self) -> ReferenceRule {
        match self {
            Self::TopRight => ReferenceRule {
                column_quadrant: Quadrant::BottomRight,
                column_fallback: TOP_RIGHT_COLUMN_FALLBACK,
                row_quadrant: Quadrant::TopLeft,
                row_fallback: TOP_RIGHT_ROW_FALLBACK,
                center: TOP_RIGHT_CENTER,
                plus: TOP_RIGHT_PLUS,
            },
            Self::BottomLeft => ReferenceRule {
                column_quadrant: Quadrant::TopLeft,
                column_fallback: BOTTOM_LEFT_COLUMN_FALLBACK,
                row_quadrant: Quadrant::BottomRight,
                row_fallback: BOTTOM_LEFT_ROW_FALLBACK,
                center: BOTTOM_LEFT_CENTER,
                plus: BOTTOM_LEFT_PLUS,
            },
        }
    }
}

/// Outcome of a lookup: the resolved subtile and an optional '+' variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Subtile found by reference lookup
    pub subtile: SubtileCoord,
    /// '+' alternative, present only when `subtile` is the center subtile
    pub alternative: Option<SubtileCoord>,
}

impl Resolution {
    /// Resolved subtile followed by the alternative, if any
    pub fn variants(&self) -> impl Iterator<Item = SubtileCoord> {
        std::iter::once(self.subtile).chain(self.alternative)
    }
}

/// Whether a subtile belongs to the 2x2 '+' block
pub const fn is_plus_block(subtile: SubtileCoord) -> bool {
    subtile.row <= PLUS_BLOCK_MAX_ROW
}

fn reference(subtile: SubtileCoord, fallback: SubtileCoord) -> SubtileCoord {
    if is_plus_block(subtile) {
        fallback
    } else {
        subtile
    }
}

/// Resolve the next quadrant of `partial` for `stage`
///
/// # Errors
///
/// Returns an error if `partial` does not hold exactly the quadrants that
/// precede `stage`
pub fn resolve(partial: &Combination, stage: Stage) -> Result<Resolution> {
    let expected = stage.quadrant().index();
    let incomplete = || AutotileError::IncompleteCombination {
        stage: stage.name(),
        expected,
        found: partial.len(),
    };
    if partial.len() != expected {
        return Err(incomplete());
    }

    let rule = stage.rule();
    let column_ref = partial
        .quadrant(rule.column_quadrant)
        .ok_or_else(incomplete)?;
    let row_ref = partial.quadrant(rule.row_quadrant).ok_or_else(incomplete)?;

    let subtile = SubtileCoord::new(
        reference(column_ref, rule.column_fallback).column,
        reference(row_ref, rule.row_fallback).row,
    );
    let alternative = (subtile == rule.center).then_some(rule.plus);

    Ok(Resolution {
        subtile,
        alternative,
    })
}
