//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile indices

use crate::error::GridError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A tile in the grid.
///
/// `x` counts tiles from west to east, `y` from south to north.
#[derive(Clone, Copy, Debug)]
pub struct TileIndex {
    pub x: i64,
    pub y: i64,
    /// Edge length of the tile in world units. One of the grid's tile sizes.
    pub tile_size: f64,
}

impl TileIndex {
    pub fn new(x: i64, y: i64, tile_size: f64) -> TileIndex {
        TileIndex { x, y, tile_size }
    }
    /// Serialized key `<x>_<y>_<tile_size>`
    pub fn to_key(&self) -> String {
        self.to_string()
    }
    pub fn from_key(key: &str) -> Result<TileIndex, GridError> {
        key.parse()
    }
    /// Whether the tile size is usable as a grid resolution
    pub fn is_valid(&self) -> bool {
        self.tile_size.is_finite() && self.tile_size > 0.0
    }
    pub fn child_nw(&self) -> TileIndex {
        TileIndex::new(self.x * 2, self.y * 2 + 1, self.tile_size * 0.5)
    }
    pub fn child_sw(&self) -> TileIndex {
        TileIndex::new(self.x * 2, self.y * 2, self.tile_size * 0.5)
    }
    pub fn child_ne(&self) -> TileIndex {
        TileIndex::new(self.x * 2 + 1, self.y * 2 + 1, self.tile_size * 0.5)
    }
    pub fn child_se(&self) -> TileIndex {
        TileIndex::new(self.x * 2 + 1, self.y * 2, self.tile_size * 0.5)
    }
    /// Children in traversal order NW, NE, SW, SE
    pub fn children(&self) -> [TileIndex; 4] {
        [
            self.child_nw(),
            self.child_ne(),
            self.child_sw(),
            self.child_se(),
        ]
    }
}

impl PartialEq for TileIndex {
    fn eq(&self, other: &TileIndex) -> bool {
        self.x == other.x && self.y == other.y && self.tile_size == other.tile_size
    }
}

// Tile sizes are never NaN in a valid grid.
impl Eq for TileIndex {}

impl Hash for TileIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        // +0.0 and -0.0 compare equal
        let size = if self.tile_size == 0.0 {
            0.0f64
        } else {
            self.tile_size
        };
        size.to_bits().hash(state);
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.x, self.y, self.tile_size)
    }
}

impl FromStr for TileIndex {
    type Err = GridError;

    fn from_str(key: &str) -> Result<TileIndex, GridError> {
        let invalid = || GridError::InvalidKey(key.to_string());
        let mut tokens = key.split('_');
        let (x, y, size) = match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(x), Some(y), Some(size), None) => (x, y, size),
            _ => return Err(invalid()),
        };
        Ok(TileIndex {
            x: x.parse().map_err(|_| invalid())?,
            y: y.parse().map_err(|_| invalid())?,
            tile_size: size.parse().map_err(|_| invalid())?,
        })
    }
}
