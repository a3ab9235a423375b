use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent.
/// `extent.i` counts rows, `extent.j` counts columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(rows: i32, cols: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { i: rows, j: cols },
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.extent.i && pos.j >= 0 && pos.j < self.extent.j
    }

    pub fn area(&self) -> i32 {
        self.extent.i * self.extent.j
    }

    /// All positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + use<> {
        let cols = self.extent.j;
        (0..self.area()).map(move |n| Vec2 { i: n / cols, j: n % cols })
    }
}
