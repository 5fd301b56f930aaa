//! Grid neighbour enumeration as a non-deterministic step.
//!
//! [`Gridworld::neighbours`] returns every tile reachable in one move.
//! Binding a [`Sequence`] of positions through it repeatedly is a
//! breadth-first flood fill that keeps duplicate paths.

use std::fmt;

use crate::control::{Maybe, Sequence};
use crate::typeclass::Functor;

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Free to walk on.
    Empty,
    /// Can never be entered.
    Blocked,
    /// Terminal tile with a reward.
    GoodEnd,
    /// Terminal tile with a penalty.
    BadEnd,
}

impl Tile {
    /// Parses the single-letter symbol used in layouts: `E`, `B`, `G` or `X`.
    pub const fn from_symbol(symbol: char) -> Maybe<Self> {
        match symbol {
            'E' => Maybe::Present(Self::Empty),
            'B' => Maybe::Present(Self::Blocked),
            'G' => Maybe::Present(Self::GoodEnd),
            'X' => Maybe::Present(Self::BadEnd),
            _ => Maybe::Absent,
        }
    }

    /// Returns the layout symbol for this tile.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => 'E',
            Self::Blocked => 'B',
            Self::GoodEnd => 'G',
            Self::BadEnd => 'X',
        }
    }

    /// Whether a move may end on this tile.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// A zero-based `(row, column)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub column: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.column)
    }
}

/// A rectangular grid of tiles.
///
/// # Examples
///
/// ```rust
/// use monadic::demo::gridworld::{Coordinate, Gridworld};
/// use monadic::sequence;
///
/// let grid = Gridworld::default();
/// let start = Coordinate::new(2, 0);
///
/// assert_eq!(
///     grid.neighbours(start),
///     sequence![Coordinate::new(1, 0), Coordinate::new(2, 1)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gridworld {
    rows: Vec<Vec<Tile>>,
}

impl Default for Gridworld {
    /// The 3×4 layout
    ///
    /// ```text
    /// E E E G
    /// E B E X
    /// E E E E
    /// ```
    fn default() -> Self {
        use Tile::{BadEnd, Blocked, Empty, GoodEnd};
        Self::new(vec![
            vec![Empty, Empty, Empty, GoodEnd],
            vec![Empty, Blocked, Empty, BadEnd],
            vec![Empty, Empty, Empty, Empty],
        ])
    }
}

impl Gridworld {
    /// The position the sequence demo starts from.
    pub const START: Coordinate = Coordinate::new(2, 0);

    /// Creates a grid from its rows, top row first.
    #[must_use]
    pub const fn new(rows: Vec<Vec<Tile>>) -> Self {
        Self { rows }
    }

    /// Parses a layout of whitespace-separated tile symbols, one row per
    /// line. Absent if any symbol is unknown.
    ///
    /// ```rust
    /// use monadic::demo::gridworld::Gridworld;
    ///
    /// let grid = Gridworld::parse("E E E G\nE B E X\nE E E E").into_option().unwrap();
    /// assert_eq!(grid, Gridworld::default());
    /// assert!(Gridworld::parse("E ?").is_absent());
    /// ```
    pub fn parse(layout: &str) -> Maybe<Self> {
        let rows: Option<Vec<Vec<Tile>>> = layout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|symbol| {
                        let mut characters = symbol.chars();
                        match (characters.next(), characters.next()) {
                            (Some(character), None) => Tile::from_symbol(character).into_option(),
                            _ => None,
                        }
                    })
                    .collect()
            })
            .collect();
        Maybe::from(rows).fmap(Self::new)
    }

    /// Returns the tile at `coordinate`, absent when it lies off the grid.
    pub fn tile_at(&self, coordinate: Coordinate) -> Maybe<Tile> {
        Maybe::from(
            self.rows
                .get(coordinate.row)
                .and_then(|row| row.get(coordinate.column))
                .copied(),
        )
    }

    fn is_open(&self, coordinate: Coordinate) -> bool {
        matches!(self.tile_at(coordinate), Maybe::Present(tile) if tile.is_walkable())
    }

    /// Returns the on-grid, non-blocked neighbours of `coordinate` in the
    /// order up, right, down, left.
    pub fn neighbours(&self, coordinate: Coordinate) -> Sequence<Coordinate> {
        let Coordinate { row, column } = coordinate;
        let candidates = [
            row.checked_sub(1).map(|up| Coordinate::new(up, column)),
            column.checked_add(1).map(|right| Coordinate::new(row, right)),
            row.checked_add(1).map(|down| Coordinate::new(down, column)),
            column.checked_sub(1).map(|left| Coordinate::new(row, left)),
        ];

        let neighbours: Sequence<Coordinate> = candidates
            .into_iter()
            .flatten()
            .filter(|candidate| self.is_open(*candidate))
            .collect();
        tracing::trace!(%coordinate, count = neighbours.len(), "expanded neighbours");
        neighbours
    }

    /// Advances every position by one move.
    pub fn expand(&self, positions: Sequence<Coordinate>) -> Sequence<Coordinate> {
        positions >> (|coordinate: Coordinate| self.neighbours(coordinate))
    }

    /// Positions reachable after exactly `turns` moves from `start`,
    /// one entry per path.
    pub fn after_turns(&self, start: Coordinate, turns: usize) -> Sequence<Coordinate> {
        (0..turns).fold(Sequence::singleton(start), |positions, _| self.expand(positions))
    }
}

impl fmt::Display for Gridworld {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            let symbols: Vec<String> = row.iter().map(|tile| tile.symbol().to_string()).collect();
            write!(formatter, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
