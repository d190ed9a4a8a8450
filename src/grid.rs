use crate::error::GridError;
use glam::IVec2;
use serde::Serialize;
use std::collections::HashSet;

/// Width and height of the grid a rover gets when none is given.
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// The terrain a rover drives over.
///
/// A rectangle of `width` x `height` cells whose edges wrap around (a torus),
/// plus a set of cells the rover may never enter. Obstacles are stored as
/// given; they are not checked against the bounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    obstacles: HashSet<IVec2>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            obstacles: HashSet::new(),
        }
    }
}

impl Grid {
    /// Creates an obstacle-free grid.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_obstacles(width, height, std::iter::empty())
    }

    pub fn with_obstacles(
        width: u32,
        height: u32,
        obstacles: impl IntoIterator<Item = IVec2>,
    ) -> Result<Self, GridError> {
        let valid = |len: u32| len > 0 && i32::try_from(len).is_ok();
        if !valid(width) || !valid(height) {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            obstacles: obstacles.into_iter().collect(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` iff `coord` is exactly one of the registered obstacles.
    pub fn has_obstacle(&self, coord: IVec2) -> bool {
        self.obstacles.contains(&coord)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.obstacles.iter().copied()
    }

    /// Returns `true` if `coord` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, coord: IVec2) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    /// Maps any coordinate onto the torus, so that the result is always
    /// [`contains`](Self::contains)ed. Leaving one edge re-enters from the opposite one.
    pub fn wrap(&self, coord: IVec2) -> IVec2 {
        IVec2::new(
            wrap_axis(coord.x, self.width),
            wrap_axis(coord.y, self.height),
        )
    }
}

fn wrap_axis(val: i32, len: u32) -> i32 {
    val.rem_euclid(len as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_ten_by_ten_and_empty() {
        let grid = Grid::default();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.obstacles().count(), 0);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn obstacle_lookup_is_exact() {
        let grid = Grid::with_obstacles(5, 5, [IVec2::new(0, 2), IVec2::new(1, 3)]).unwrap();
        assert!(grid.has_obstacle(IVec2::new(0, 2)));
        assert!(grid.has_obstacle(IVec2::new(1, 3)));
        assert!(!grid.has_obstacle(IVec2::new(2, 0)));
        assert!(!grid.has_obstacle(IVec2::new(1, 2)));
    }

    #[test]
    fn out_of_bounds_obstacles_are_kept() {
        let grid = Grid::with_obstacles(3, 3, [IVec2::new(7, -1)]).unwrap();
        assert!(grid.has_obstacle(IVec2::new(7, -1)));
        assert!(!grid.contains(IVec2::new(7, -1)));
    }

    #[test]
    fn wrap_edges() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(grid.wrap(IVec2::new(5, 0)), IVec2::new(0, 0));
        assert_eq!(grid.wrap(IVec2::new(-1, 0)), IVec2::new(4, 0));
        assert_eq!(grid.wrap(IVec2::new(0, 4)), IVec2::new(0, 0));
        assert_eq!(grid.wrap(IVec2::new(0, -1)), IVec2::new(0, 3));
        assert_eq!(grid.wrap(IVec2::new(-11, 13)), IVec2::new(4, 1));
    }

    #[test]
    fn single_cell_wraps_to_itself() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(grid.wrap(IVec2::new(1, -1)), IVec2::ZERO);
    }

    proptest! {
        #[test]
        fn wrapped_coordinates_are_in_bounds(
            w in 1u32..50,
            h in 1u32..50,
            x in -1000i32..1000,
            y in -1000i32..1000,
        ) {
            let grid = Grid::new(w, h).unwrap();
            let wrapped = grid.wrap(IVec2::new(x, y));
            prop_assert!(grid.contains(wrapped));
            // Idempotent once inside.
            prop_assert_eq!(grid.wrap(wrapped), wrapped);
        }
    }
}
