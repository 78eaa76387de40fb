//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::index::TileIndex;
use thiserror::Error;

/// Usage errors reported by grid operations
#[derive(Error, PartialEq, Clone, Debug)]
pub enum GridError {
    /// Line endpoints must share one resolution level
    #[error("start and end tiles have different tile sizes ({start} != {end})")]
    TileSizeMismatch { start: f64, end: f64 },
    #[error("invalid tile key '{0}'")]
    InvalidKey(String),
    /// Tile size is not a finite positive number
    #[error("invalid tile index {0}")]
    InvalidTileIndex(TileIndex),
}
