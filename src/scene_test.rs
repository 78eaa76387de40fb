//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::*;

struct Terrain {
    index: TileIndex,
}

impl TilePayload for Terrain {
    fn has_exclusive_material(&self) -> bool {
        true
    }
}

#[test]
fn test_stream_tiles_along_path() {
    let _ = env_logger::builder().is_test(true).try_init();

    let toml = r#"
        [grid]
        origin = [0.0, 0.0]
        tile_sizes = [32.0, 16.0]
        scene_offset = [160.0, -96.0, 12.0]

        [cache]
        max_length = 3
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = GridSpace::from_config(&config.grid).unwrap();
    let limits = CacheLimits::from_config(config.cache.as_ref().unwrap()).unwrap();
    let mut disposed = Vec::new();
    let mut cache = TileCache::with_limits(&limits, |tile: Terrain, _flags: DisposeFlags| {
        disposed.push(tile.index)
    });

    // tiles touched by a flight path, loaded in path order
    let tiles = grid.tiles_from_line_intersection(&(168.0, -104.0), &(232.0, -104.0), 16.0);
    assert_eq!(tiles.len(), 5);
    for index in tiles.iter() {
        if cache.get(index).is_none() {
            cache.insert(*index, Terrain { index: *index }).unwrap();
        }
    }
    assert_eq!(cache.len(), 4);
    assert!(cache.get(&TileIndex::new(10, 6, 16.0)).is_none());
    assert!(cache.get(&TileIndex::new(14, 6, 16.0)).is_some());
    drop(cache);
    assert_eq!(disposed, vec![TileIndex::new(10, 6, 16.0)]);

    // every cached tile lies inside its coarse parent
    for index in tiles.iter() {
        let parent = grid.index_from_point(grid.centroid_from_index(index), 32.0);
        assert!(grid.is_descendant_of(Some(index), Some(&parent)));
    }
}
