use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Fixed-size grid stored row-major in a single vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        debug_assert!(rows.iter().all(|r| r.len() as i32 == width), "rows must share one width");
        BoundedGrid {
            bounds: BoundsOriginRoot::new(height, width),
            cells: rows.into_iter().flatten().collect(),
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        self.bounds.iter().zip(self.cells.iter())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.extent.j.max(1) as usize)
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}
