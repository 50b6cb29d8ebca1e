//! Subtile coordinates and four-quadrant combinations
//!
//! A combination stores its quadrants in generation order (top-left,
//! bottom-right, top-right, bottom-left), which is also the order Tiled
//! tables list them in. Text output mirrors Python tuple notation so the
//! tables can be pasted straight into tileset tooling.

use std::fmt;

/// Half-tile cell within a source sheet, addressed as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubtileCoord {
    /// Column in subtile units
    pub column: u32,
    /// Row in subtile units
    pub row: u32,
}

impl SubtileCoord {
    /// Create a coordinate from a column and a row
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Move the coordinate `rows` rows up, or `None` if it would leave the sheet
    pub const fn shifted_up(self, rows: u32) -> Option<Self> {
        match self.row.checked_sub(rows) {
            Some(row) => Some(Self::new(self.column, row)),
            None => None,
        }
    }
}

impl From<(u32, u32)> for SubtileCoord {
    fn from((column, row): (u32, u32)) -> Self {
        Self::new(column, row)
    }
}

impl fmt::Display for SubtileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Quadrant slots of a combination, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-left quarter, chosen from the fixed candidates
    TopLeft,
    /// Lower-right quarter, chosen from the fixed offsets
    BottomRight,
    /// Upper-right quarter, resolved by reference lookup
    TopRight,
    /// Lower-left quarter, resolved by reference lookup
    BottomLeft,
}

impl Quadrant {
    /// All quadrants in storage order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::BottomRight,
        Self::TopRight,
        Self::BottomLeft,
    ];

    /// Position of the quadrant inside a combination
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::BottomRight => 1,
            Self::TopRight => 2,
            Self::BottomLeft => 3,
        }
    }

    /// Placement inside the output tile as `(x, y)` in subtile units
    pub const fn offset(self) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::BottomRight => (1, 1),
            Self::TopRight => (1, 0),
            Self::BottomLeft => (0, 1),
        }
    }
}

/// Assembly recipe for one output tile
///
/// Holds up to four subtiles while being built; a finished combination has
/// exactly four. The empty combination marks a padding cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Combination {
    subtiles: Vec<SubtileCoord>,
}

impl Combination {
    /// Padding placeholder without any subtiles
    pub const fn empty() -> Self {
        Self {
            subtiles: Vec::new(),
        }
    }

    /// Build a complete combination from its four quadrants in storage order
    pub fn from_quadrants(quadrants: [SubtileCoord; 4]) -> Self {
        Self {
            subtiles: quadrants.to_vec(),
        }
    }

    /// Build a partial combination from leading quadrants in storage order
    pub fn from_subtiles(subtiles: &[SubtileCoord]) -> Self {
        Self {
            subtiles: subtiles.to_vec(),
        }
    }

    /// New combination with `subtile` appended as the next quadrant
    pub fn with(&self, subtile: SubtileCoord) -> Self {
        let mut subtiles = Vec::with_capacity(self.subtiles.len() + 1);
        subtiles.extend_from_slice(&self.subtiles);
        subtiles.push(subtile);
        Self { subtiles }
    }

    /// Subtile stored for `quadrant`, if it has been chosen yet
    pub fn quadrant(&self, quadrant: Quadrant) -> Option<SubtileCoord> {
        self.subtiles.get(quadrant.index()).copied()
    }

    /// Quadrants paired with their subtiles, in storage order
    pub fn quadrants(&self) -> impl Iterator<Item = (Quadrant, SubtileCoord)> + '_ {
        Quadrant::ALL.into_iter().zip(self.subtiles.iter().copied())
    }

    /// Chosen subtiles in storage order
    pub fn subtiles(&self) -> &[SubtileCoord] {
        &self.subtiles
    }

    /// Number of quadrants chosen so far
    pub fn len(&self) -> usize {
        self.subtiles.len()
    }

    /// Whether this is a padding cell
    pub fn is_empty(&self) -> bool {
        self.subtiles.is_empty()
    }

    /// Whether all four quadrants are chosen
    pub fn is_complete(&self) -> bool {
        self.subtiles.len() == Quadrant::ALL.len()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, subtile) in self.subtiles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{subtile}")?;
        }
        // One-element tuples keep their trailing comma
        if self.subtiles.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
