//! A library for multi-resolution scene grid calculations
//!
//! ## Tiles of a point
//!
//! ```rust
//! use scene_grid::{GridSpace, Point2, Point3, TileIndex};
//!
//! let grid = GridSpace::new(Point2::new(0.0, 0.0), vec![16.0], Point3::default());
//! let index = grid.index_from_point(Point2::new(8.0, -8.0), 16.0);
//! assert_eq!(index, TileIndex::new(0, 0, 16.0));
//! assert_eq!(grid.centroid_from_index(&index), Point2::new(8.0, -8.0));
//! assert_eq!(index.to_key(), "0_0_16");
//! ```
//!
//! ## Quadtree traversal
//!
//! ```rust
//! use scene_grid::{GridSpace, Point2, Point3, TileIndex};
//!
//! let grid = GridSpace::new(Point2::new(0.0, 0.0), vec![32.0, 16.0, 8.0], Point3::default());
//! let mut leaves = Vec::new();
//! grid.traverse_if(
//!     TileIndex::new(0, 0, 32.0),
//!     |_| true,
//!     |index| grid.is_finest(index),
//!     |index| leaves.push(index),
//! );
//! assert_eq!(leaves.len(), 16);
//! ```
//!
//! ## Tiles crossed by a line
//!
//! ```rust
//! use scene_grid::{GridLine, GridSpace, TileIndex};
//!
//! let grid = GridSpace::default();
//! let line = GridLine::new(TileIndex::new(0, 0, 16.0), TileIndex::new(2, 0, 16.0)).unwrap();
//! assert_eq!(grid.tiles_from_grid_line(&line).len(), 6);
//!
//! let tiles = grid.tiles_from_line_intersection(&(8.0, -8.0), &(56.0, -8.0), 16.0);
//! assert_eq!(
//!     tiles,
//!     vec![
//!         TileIndex::new(0, 0, 16.0),
//!         TileIndex::new(1, 0, 16.0),
//!         TileIndex::new(2, 0, 16.0),
//!         TileIndex::new(3, 0, 16.0),
//!     ]
//! );
//! ```

#[macro_use]
extern crate log;

mod error;
mod events;
mod grid;
mod grid_line;
mod index;
mod quadtree;
#[cfg(test)]
mod grid_test;
#[cfg(test)]
mod quadtree_test;

pub use error::GridError;
pub use events::{EventDispatcher, EventTarget, GridEvent, Listener, ListenerId};
pub use grid::{BoundingBox, GridSpace, Point2, Point3, ToPoint2, ToPoint3};
pub use grid_line::{tiles_from_grid_line, GridLine};
pub use index::TileIndex;
pub use quadtree::{traverse_if, QuadtreeIter};
