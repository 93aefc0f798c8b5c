//! Game board: grid, placed ships and shot resolution.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::common::{BoardError, Cell, ShotResult};
use crate::coord::Coord;
use crate::mask::CellMask;
use crate::ship::Ship;

/// Which cells a [`BoardView`] reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Intact ship cells are shown as water.
    Hidden,
    /// Everything the owner knows.
    Revealed,
    /// Revealed, plus margins reserved during placement.
    Placement,
}

/// Read-only snapshot of a board's cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    size: usize,
    cells: Vec<Cell>,
}

impl BoardView {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(x, y)`, `None` outside the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get(x * self.size + y).copied()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// True if `c` is on the board and has been neither shot at nor cleared.
    pub fn is_untried(&self, c: Coord) -> bool {
        match (usize::try_from(c.x), usize::try_from(c.y)) {
            (Ok(x), Ok(y)) => matches!(self.get(x, y), Some(cell) if !cell.is_resolved()),
            _ => false,
        }
    }

    /// Cells still worth a shot.
    pub fn untried_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_resolved()).count()
    }
}

pub struct Board {
    size: usize,
    hidden: bool,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    /// Ship cells and their margins; consulted only by `add_ship`.
    busy: CellMask,
    /// Cells shot at (or cleared around a sunk ship); consulted only by `shot`.
    targeted: CellMask,
    sunk: usize,
}

impl Board {
    /// Create an empty `size×size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            hidden: false,
            grid: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            busy: CellMask::new(size),
            targeted: CellMask::new(size),
            sunk: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether renderers should conceal this board's ships.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Number of ships with no intact segment left.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.sunk == self.ships.len()
    }

    /// True if `c` lies outside `[0, size)` on either axis.
    pub fn out(&self, c: Coord) -> bool {
        let n = self.size as i64;
        let (x, y) = (i64::from(c.x), i64::from(c.y));
        x < 0 || x >= n || y < 0 || y >= n
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        c.x as usize * self.size + c.y as usize
    }

    /// Cell state at `c`, `None` when out of bounds.
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        if self.out(c) {
            return None;
        }
        Some(self.grid[self.index(c)])
    }

    pub fn is_targeted(&self, c: Coord) -> bool {
        self.targeted.contains(c)
    }

    /// Cells that can still be shot at.
    pub fn untargeted_count(&self) -> usize {
        self.size * self.size - self.targeted.count()
    }

    /// In-bounds 8-neighbourhood of `ship`, excluding the ship's own cells.
    pub fn margin(&self, ship: &Ship) -> Vec<Coord> {
        let mut seen = CellMask::new(self.size);
        for c in ship.cells() {
            seen.insert(c);
        }
        let mut margin = Vec::new();
        for cell in ship.cells() {
            for n in cell.neighbours() {
                if !self.out(n) && seen.insert(n) {
                    margin.push(n);
                }
            }
        }
        margin
    }

    /// Place `ship`, keeping one cell of water between it and every other
    /// ship.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0 || ship.length() > self.size {
            return Err(BoardError::InvalidPlacement);
        }
        if ship.cells().any(|c| self.out(c) || self.busy.contains(c)) {
            return Err(BoardError::InvalidPlacement);
        }
        for c in ship.cells() {
            let idx = self.index(c);
            self.grid[idx] = Cell::Ship;
            self.busy.insert(c);
        }
        for c in self.margin(&ship) {
            self.busy.insert(c);
        }
        trace!(
            "placed ship len={} at {:?} {:?}",
            ship.length(),
            ship.anchor(),
            ship.orientation()
        );
        self.ships.push(ship);
        Ok(())
    }

    /// End of setup: forget any targeting so play starts from a clean slate.
    pub fn commit_setup(&mut self) {
        self.targeted.clear();
    }

    /// Fire at `c`.
    ///
    /// A rejected shot leaves the board untouched.
    pub fn shot(&mut self, c: Coord) -> Result<ShotResult, BoardError> {
        if self.out(c) {
            return Err(BoardError::OutOfBounds(c));
        }
        if !self.targeted.insert(c) {
            return Err(BoardError::AlreadyTargeted(c));
        }

        let idx = self.index(c);
        let Some(pos) = self.ships.iter().position(|s| s.contains(c)) else {
            self.grid[idx] = Cell::Miss;
            trace!("shot at {:?}: miss", c);
            return Ok(ShotResult::Miss);
        };

        self.grid[idx] = Cell::Hit;
        if !self.ships[pos].register_hit() {
            trace!("shot at {:?}: damaged ship {}", c, pos);
            return Ok(ShotResult::Damaged);
        }

        self.sunk += 1;
        let ship = self.ships[pos];
        for m in self.margin(&ship) {
            let midx = self.index(m);
            if self.grid[midx] == Cell::Empty {
                self.grid[midx] = Cell::Miss;
            }
            self.targeted.insert(m);
        }
        debug!(
            "shot at {:?}: sunk ship {} ({}/{} sunk)",
            c,
            pos,
            self.sunk,
            self.ships.len()
        );
        Ok(ShotResult::Sunk)
    }

    /// Snapshot of the grid for rendering.
    pub fn view(&self, mode: ViewMode) -> BoardView {
        let cells = self
            .grid
            .iter()
            .enumerate()
            .map(|(idx, &cell)| match (mode, cell) {
                (ViewMode::Hidden, Cell::Ship) => Cell::Empty,
                (ViewMode::Placement, Cell::Empty) => {
                    let c = Coord::new((idx / self.size) as i32, (idx % self.size) as i32);
                    if self.busy.contains(c) {
                        Cell::Margin
                    } else {
                        Cell::Empty
                    }
                }
                (_, cell) => cell,
            })
            .collect();
        BoardView {
            size: self.size,
            cells,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  sunk: {}/{},\n  ships: {:?},\n  targeted: {:?}\n}}",
            self.size,
            self.hidden,
            self.sunk,
            self.ships.len(),
            self.ships,
            self.targeted
        )
    }
}
