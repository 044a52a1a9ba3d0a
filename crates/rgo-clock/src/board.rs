//! Board occupancy as seen by the time manager
//!
//! The time manager never needs move generation or captures, only which
//! intersections hold a stone. Engines expose their own position type through
//! [`StoneGrid`]; [`Board`] is a minimal owned grid for tools and tests.

use std::fmt;

/// Contents of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Stone {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Stone {
    /// Whether a stone of either color sits here
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }

    #[inline]
    const fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    #[inline]
    const fn from_char(c: char) -> Option<Stone> {
        match c {
            '.' | '+' => Some(Stone::Empty),
            'X' | 'x' | 'B' | 'b' => Some(Stone::Black),
            'O' | 'o' | 'W' | 'w' => Some(Stone::White),
            _ => None,
        }
    }
}

/// Read-only view of a rectangular board
pub trait StoneGrid {
    fn x_size(&self) -> usize;
    fn y_size(&self) -> usize;

    /// Stone at `(x, y)`; callers only pass coordinates inside the board
    fn stone_at(&self, x: usize, y: usize) -> Stone;

    /// Number of intersections
    #[inline]
    fn area(&self) -> usize {
        self.x_size() * self.y_size()
    }

    /// Count occupied intersections by scanning every point of the grid
    fn count_stones(&self) -> usize {
        let mut count = 0;
        for y in 0..self.y_size() {
            for x in 0..self.x_size() {
                if self.stone_at(x, y).is_occupied() {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Owned board, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    x_size: usize,
    y_size: usize,
    stones: Vec<Stone>,
}

impl Board {
    /// Empty board of the given size
    pub fn new(x_size: usize, y_size: usize) -> Self {
        Self {
            x_size,
            y_size,
            stones: vec![Stone::Empty; x_size * y_size],
        }
    }

    /// Build a board from text rows (`.` empty, `X` black, `O` white).
    ///
    /// Returns `None` for ragged rows or unknown characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let y_size = rows.len();
        let x_size = rows.first().map_or(0, |row| row.chars().count());
        let mut stones = Vec::with_capacity(x_size * y_size);
        for row in rows {
            if row.chars().count() != x_size {
                return None;
            }
            for c in row.chars() {
                stones.push(Stone::from_char(c)?);
            }
        }
        Some(Self {
            x_size,
            y_size,
            stones,
        })
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.x_size && y < self.y_size, "({x}, {y}) is off the board");
        y * self.x_size + x
    }

    /// Place or remove a stone
    pub fn set_stone(&mut self, x: usize, y: usize, stone: Stone) {
        let idx = self.index(x, y);
        self.stones[idx] = stone;
    }
}

impl StoneGrid for Board {
    #[inline]
    fn x_size(&self) -> usize {
        self.x_size
    }

    #[inline]
    fn y_size(&self) -> usize {
        self.y_size
    }

    #[inline]
    fn stone_at(&self, x: usize, y: usize) -> Stone {
        self.stones[self.index(x, y)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.y_size {
            for x in 0..self.x_size {
                write!(f, "{}", self.stone_at(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
