//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Scene grid with line coverage queries and a bounded tile payload cache

pub use scene_core::cache::{
    CacheLimits, Dispose, DisposeFlags, IndexSet, NoDispose, Rejected, TileCache, TilePayload,
};
pub use scene_core::core::config::{ApplicationCfg, CacheCfg, GridCfg, DEFAULT_CONFIG};
pub use scene_core::core::{parse_config, read_config, Config};
pub use scene_grid::*;

#[cfg(test)]
mod scene_test;
