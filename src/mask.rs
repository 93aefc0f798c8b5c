//! A runtime-sized cell mask.
//!
//! Cells of an `size×size` board are packed row-major into 64-bit words. The
//! mask has no notion of what a bit means; the board keeps one mask for the
//! setup-time busy cells and another for the cells targeted during play.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Clone, PartialEq, Eq)]
pub struct CellMask {
    size: usize,
    words: Vec<u64>,
}

impl CellMask {
    /// Create an empty mask for a `size×size` board.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            words: vec![0; cells.div_ceil(WORD_BITS)],
        }
    }

    /// Side length of the board this mask covers.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        let (x, y) = (usize::try_from(c.x).ok()?, usize::try_from(c.y).ok()?);
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(x * self.size + y)
    }

    /// Whether `c` is set. Out-of-range coordinates are never set.
    pub fn contains(&self, c: Coord) -> bool {
        match self.index(c) {
            Some(idx) => (self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1,
            None => false,
        }
    }

    /// Set `c`. Returns `true` if the bit was newly set, `false` if it was
    /// already set or `c` is outside the mask.
    pub fn insert(&mut self, c: Coord) -> bool {
        let Some(idx) = self.index(c) else {
            return false;
        };
        let word = &mut self.words[idx / WORD_BITS];
        let bit = 1u64 << (idx % WORD_BITS);
        let fresh = *word & bit == 0;
        *word |= bit;
        fresh
    }

    /// Clear every bit.
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Set cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size * size)
            .filter(move |idx| (self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1)
            .map(move |idx| Coord::new((idx / size) as i32, (idx % size) as i32))
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}> [", self.size)?;
        for x in 0..self.size {
            write!(f, "  ")?;
            for y in 0..self.size {
                let set = self.contains(Coord::new(x as i32, y as i32));
                write!(f, "{}", if set { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
