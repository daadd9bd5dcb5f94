use crate::*;

/// In-bounds neighbors of a center cell, yielded in [`Direction::ALL`] order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            let next_item = apply_delta(self.center, dir.delta(), self.bounds);
            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
