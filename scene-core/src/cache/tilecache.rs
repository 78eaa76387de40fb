//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::cache::dispose::{Dispose, DisposeFlags, NoDispose, TilePayload};
use crate::cache::index_set::IndexSet;
use crate::core::config::CacheCfg;
use crate::core::Config;
use scene_grid::{GridError, TileIndex};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Size limit of a tile cache
#[derive(PartialEq, Clone, Debug)]
pub struct CacheLimits {
    /// `None` disables eviction
    pub max_length: Option<usize>,
}

impl<'a> Config<'a, CacheCfg> for CacheLimits {
    fn from_config(cfg: &CacheCfg) -> Result<Self, String> {
        Ok(CacheLimits {
            max_length: Some(cfg.max_length).filter(|len| *len > 0),
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[cache]
# Number of tiles kept before the oldest is evicted (0: unlimited)
max_length = 1
"#;
        toml.to_string()
    }
}

/// Insertion refused by the cache. Hands the payload back to the caller.
#[derive(Error)]
#[error("tile cache insertion rejected: {error}")]
pub struct Rejected<P> {
    #[source]
    pub error: GridError,
    pub payload: P,
}

impl<P> fmt::Debug for Rejected<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish()
    }
}

struct CachedTile<P> {
    payload: P,
    /// Insertion order, never refreshed on lookup
    age: u64,
}

/// Tile payloads by grid index.
///
/// When more than `max_length` tiles are stored, each insertion first evicts the tile
/// inserted earliest. The limit is checked once per insertion, so the cache holds up to
/// `max_length + 1` tiles.
pub struct TileCache<P, D = NoDispose> {
    max_length: Option<usize>,
    tiles: HashMap<TileIndex, CachedTile<P>>,
    index_set: IndexSet,
    age_counter: u64,
    disposer: D,
}

impl<P, D> fmt::Debug for TileCache<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileCache")
            .field("max_length", &self.max_length)
            .field("len", &self.tiles.len())
            .field("age_counter", &self.age_counter)
            .finish()
    }
}

impl<P: TilePayload, D: Dispose<P>> TileCache<P, D> {
    /// Cache with optional size limit (`Some(0)` means unlimited)
    pub fn new(max_length: Option<usize>, disposer: D) -> TileCache<P, D> {
        TileCache {
            max_length: max_length.filter(|len| *len > 0),
            tiles: HashMap::new(),
            index_set: IndexSet::new(),
            age_counter: 0,
            disposer,
        }
    }
    pub fn with_limits(limits: &CacheLimits, disposer: D) -> TileCache<P, D> {
        TileCache::new(limits.max_length, disposer)
    }
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }
    pub fn len(&self) -> usize {
        self.tiles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
    /// Indices of all stored tiles
    pub fn index_set(&self) -> &IndexSet {
        &self.index_set
    }
    pub fn disposer(&self) -> &D {
        &self.disposer
    }
    /// Store a payload, evicting the oldest tile if the cache is over its limit.
    ///
    /// A payload already stored under `index` is disposed and replaced.
    pub fn insert(&mut self, index: TileIndex, payload: P) -> Result<(), Rejected<P>> {
        if !index.is_valid() {
            warn!("TileCache: {} is not a valid tile index", index);
            return Err(Rejected {
                error: GridError::InvalidTileIndex(index),
                payload,
            });
        }
        if let Some(max_length) = self.max_length {
            if self.tiles.len() > max_length {
                self.evict_oldest();
            }
        }
        let age = self.age_counter;
        self.age_counter += 1;
        debug!("TileCache.insert {} (age {})", index, age);
        if let Some(previous) = self.tiles.insert(index, CachedTile { payload, age }) {
            debug!("TileCache: replacing tile {}", index);
            self.dispose(previous.payload);
        }
        self.index_set.add(index);
        Ok(())
    }
    pub fn get(&self, index: &TileIndex) -> Option<&P> {
        self.tiles.get(index).map(|tile| &tile.payload)
    }
    pub fn get_mut(&mut self, index: &TileIndex) -> Option<&mut P> {
        self.tiles.get_mut(index).map(|tile| &mut tile.payload)
    }
    pub fn contains(&self, index: &TileIndex) -> bool {
        self.tiles.contains_key(index)
    }
    /// Remove and dispose a tile. Returns false if the tile was not cached.
    pub fn remove(&mut self, index: &TileIndex) -> bool {
        match self.take(index) {
            Some(payload) => {
                self.dispose(payload);
                true
            }
            None => false,
        }
    }
    /// Remove a tile without disposing it
    pub fn take(&mut self, index: &TileIndex) -> Option<P> {
        let tile = self.tiles.remove(index)?;
        self.index_set.remove(&[*index]);
        Some(tile.payload)
    }
    /// Tile inserted earliest
    pub fn oldest(&self) -> Option<(&TileIndex, &P)> {
        self.tiles
            .iter()
            .min_by_key(|(_, tile)| tile.age)
            .map(|(index, tile)| (index, &tile.payload))
    }
    pub fn iter(&self) -> impl Iterator<Item = (&TileIndex, &P)> + '_ {
        self.tiles.iter().map(|(index, tile)| (index, &tile.payload))
    }
    /// Dispose all tiles, oldest first
    pub fn clear(&mut self) {
        let mut tiles: Vec<(TileIndex, CachedTile<P>)> = self.tiles.drain().collect();
        tiles.sort_by_key(|(_, tile)| tile.age);
        self.index_set = IndexSet::new();
        for (_, tile) in tiles {
            self.dispose(tile.payload);
        }
    }
    fn evict_oldest(&mut self) {
        let oldest = match self.oldest() {
            Some((index, _)) => *index,
            None => return,
        };
        debug!("TileCache: evicting oldest tile {}", oldest);
        if let Some(payload) = self.take(&oldest) {
            self.dispose(payload);
        }
    }
    fn dispose(&mut self, payload: P) {
        let flags = DisposeFlags::for_payload(&payload);
        self.disposer.dispose(payload, flags);
    }
}
