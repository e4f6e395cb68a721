/// One cell of the grid packed into a byte.
///
/// Bit 0 is the alive flag, bits 1..=4 hold the number of alive Moore neighbors.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    const ALIVE: u8 = 0x01;
    const NEIGHBOR: u8 = 0x02;
    pub const MAX_NEIGHBORS: u8 = 8;

    pub const DEAD: Self = Self(0);

    pub fn is_alive(self) -> bool {
        self.0 & Self::ALIVE != 0
    }

    pub fn live_neighbors(self) -> u8 {
        self.0 >> 1
    }

    pub(crate) fn revive(&mut self) {
        self.0 |= Self::ALIVE;
    }

    pub(crate) fn kill(&mut self) {
        self.0 &= !Self::ALIVE;
    }

    pub(crate) fn add_neighbor(&mut self) {
        debug_assert!(self.live_neighbors() < Self::MAX_NEIGHBORS);
        self.0 += Self::NEIGHBOR;
    }

    pub(crate) fn remove_neighbor(&mut self) {
        debug_assert!(self.live_neighbors() > 0);
        self.0 -= Self::NEIGHBOR;
    }
}
