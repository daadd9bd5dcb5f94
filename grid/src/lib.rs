//! Generic two-dimensional store with neighbor queries and directional run search.

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use direction::*;
pub use error::*;
pub use neighbors::*;
pub use types::*;

mod direction;
mod error;
mod neighbors;
mod types;

/// Fixed `width × height` store addressed by `(x, y)`.
///
/// `get` never panics on out-of-range coordinates, absence is reported as `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr<T>")]
pub struct Grid<T> {
    items: Array2<T>,
}

/// Wire shape of [`Grid`], checked before it becomes one.
#[derive(Deserialize)]
struct GridRepr<T> {
    items: Array2<T>,
}

impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(repr: GridRepr<T>) -> Result<Self> {
        let (x_len, y_len) = repr.items.dim();
        let (Ok(width), Ok(height)) = (Coord::try_from(x_len), Coord::try_from(y_len)) else {
            return Err(GridError::DimensionTooLarge {
                width: x_len,
                height: y_len,
            });
        };
        check_dimensions(width, height)?;
        Ok(Self { items: repr.items })
    }
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        Self::from_elem(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    pub fn from_elem(width: Coord, height: Coord, item: T) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            items: Array2::from_elem((width, height).to_nd_index(), item),
        })
    }
}

impl<T> Grid<T> {
    pub fn from_fn(width: Coord, height: Coord, mut f: impl FnMut(Coord2) -> T) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            items: Array2::from_shape_fn((width, height).to_nd_index(), |(x, y)| {
                f((x as Coord, y as Coord))
            }),
        })
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.items.dim();
        (x as Coord, y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    pub fn get(&self, coords: Coord2) -> Option<&T> {
        self.items.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut T> {
        self.items.get_mut(coords.to_nd_index())
    }

    pub fn set(&mut self, coords: Coord2, item: T) -> Result<()> {
        let slot = self.get_mut(coords).ok_or(GridError::OutOfBounds(coords))?;
        *slot = item;
        Ok(())
    }

    /// All positions with their items, `x` major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &T)> {
        self.items
            .indexed_iter()
            .map(|((x, y), item)| ((x as Coord, y as Coord), item))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Coord2, &mut T)> {
        self.items
            .indexed_iter_mut()
            .map(|((x, y), item)| ((x as Coord, y as Coord), item))
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<T> {
        let (width, height) = self.size();
        (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    pub fn neighbors_of(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn pos_in_direction(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        if !self.contains(coords) {
            return None;
        }
        apply_delta(coords, direction.delta(), self.size())
    }

    pub fn item_in_direction(&self, coords: Coord2, direction: Direction) -> Option<&T> {
        self.pos_in_direction(coords, direction)
            .and_then(|pos| self.get(pos))
    }

    /// Walks from `origin` while `equals(current, next)` holds, returning the positions passed.
    ///
    /// The origin itself is not part of the returned run.
    pub fn run_in_direction<F>(&self, origin: Coord2, direction: Direction, mut equals: F) -> Vec<Coord2>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut run = Vec::new();
        let mut current = origin;
        while let Some(next) = self.pos_in_direction(current, direction) {
            if !equals(&self[current], &self[next]) {
                break;
            }
            run.push(next);
            current = next;
        }
        run
    }

    /// Origin followed by the run in each of `directions`, or `None` when the total is shorter than `min_len`.
    pub fn find_run<F>(
        &self,
        origin: Coord2,
        directions: &[Direction],
        min_len: usize,
        mut equals: F,
    ) -> Option<Vec<Coord2>>
    where
        F: FnMut(&T, &T) -> bool,
    {
        if !self.contains(origin) {
            return None;
        }

        let mut run = vec![origin];
        for &direction in directions {
            run.extend(self.run_in_direction(origin, direction, &mut equals));
        }

        (run.len() >= min_len).then_some(run)
    }

    /// First of the four straight lines through `origin` holding a run of at least `min_len`.
    pub fn find_line<F>(&self, origin: Coord2, min_len: usize, mut equals: F) -> Option<Vec<Coord2>>
    where
        F: FnMut(&T, &T) -> bool,
    {
        Direction::AXES
            .iter()
            .find_map(|axis| self.find_run(origin, axis, min_len, &mut equals))
    }
}

impl<T: PartialEq> Grid<T> {
    pub fn find_run_eq(
        &self,
        origin: Coord2,
        directions: &[Direction],
        min_len: usize,
    ) -> Option<Vec<Coord2>> {
        self.find_run(origin, directions, min_len, |a, b| a == b)
    }
}

impl<T> Index<Coord2> for Grid<T> {
    type Output = T;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.items[coords.to_nd_index()]
    }
}

impl<T> IndexMut<Coord2> for Grid<T> {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.items[coords.to_nd_index()]
    }
}

fn check_dimensions(width: Coord, height: Coord) -> Result<()> {
    if width == 0 || height == 0 {
        Err(GridError::InvalidDimension { width, height })
    } else {
        Ok(())
    }
}
