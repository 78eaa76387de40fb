//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use scene_grid::TileIndex;

/// Ordered collection of tile indices.
///
/// Adding an index twice stores it twice; removal drops all occurrences.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct IndexSet {
    indices: Vec<TileIndex>,
}

impl IndexSet {
    pub fn new() -> IndexSet {
        IndexSet::default()
    }
    pub fn add(&mut self, index: TileIndex) {
        self.indices.push(index);
    }
    pub fn add_all<I: IntoIterator<Item = TileIndex>>(&mut self, indices: I) {
        self.indices.extend(indices);
    }
    /// Remove every occurrence of the given indices. Returns false if nothing was removed.
    pub fn remove(&mut self, indices: &[TileIndex]) -> bool {
        let len = self.indices.len();
        self.indices.retain(|index| !indices.contains(index));
        len != self.indices.len()
    }
    pub fn contains(&self, index: &TileIndex) -> bool {
        self.indices.contains(index)
    }
    /// Number of occurrences of `index`
    pub fn count(&self, index: &TileIndex) -> usize {
        self.indices.iter().filter(|i| *i == index).count()
    }
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, TileIndex> {
        self.indices.iter()
    }
    /// Serialized keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.indices.iter().map(TileIndex::to_key).collect()
    }
}

impl Extend<TileIndex> for IndexSet {
    fn extend<I: IntoIterator<Item = TileIndex>>(&mut self, indices: I) {
        self.add_all(indices)
    }
}
