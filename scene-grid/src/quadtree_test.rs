//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{GridSpace, Point2, Point3};
use crate::index::TileIndex;
use crate::quadtree::{traverse_if, QuadtreeIter};

fn lod_grid() -> GridSpace {
    GridSpace::new(Point2::new(0.0, 0.0), vec![32.0, 16.0, 8.0], Point3::default())
}

#[test]
fn test_traverse_order() {
    let grid = lod_grid();
    let mut leaves = Vec::new();
    traverse_if(
        TileIndex::new(0, 0, 16.0),
        |_| true,
        |index| grid.is_finest(index),
        |index| leaves.push(index),
    );
    assert_eq!(
        leaves,
        vec![
            TileIndex::new(0, 1, 8.0),
            TileIndex::new(1, 1, 8.0),
            TileIndex::new(0, 0, 8.0),
            TileIndex::new(1, 0, 8.0),
        ]
    );
}

#[test]
fn test_traverse_pruned() {
    let grid = lod_grid();
    let mut visited = Vec::new();
    let mut leaves = Vec::new();
    // only descend into the north-western quadrants
    grid.traverse_if(
        TileIndex::new(0, 0, 32.0),
        |index| {
            visited.push(*index);
            index.tile_size == 32.0 || index.x % 2 == 0 && index.y % 2 == 1
        },
        |index| grid.is_finest(index),
        |index| leaves.push(index),
    );
    assert_eq!(leaves, vec![TileIndex::new(0, 3, 8.0)]);
    // root, its four children and the four children of the NW child
    assert_eq!(visited.len(), 9);
}

#[test]
fn test_traverse_rejected_root() {
    let mut leaves = Vec::new();
    traverse_if(
        TileIndex::new(0, 0, 32.0),
        |_| false,
        |_| true,
        |index| leaves.push(index),
    );
    assert!(leaves.is_empty());
}

#[test]
fn test_leaf_above_finest_level() {
    let mut leaves = Vec::new();
    traverse_if(
        TileIndex::new(2, 2, 32.0),
        |_| true,
        |index| index.tile_size <= 16.0,
        |index| leaves.push(index),
    );
    assert_eq!(leaves.len(), 4);
    assert!(leaves.iter().all(|index| index.tile_size == 16.0));
}

#[test]
fn test_iter_matches_traversal() {
    let grid = lod_grid();
    // tiles overlapping a box in scene space
    let overlaps = |index: &TileIndex| {
        let bbox = grid.bounding_box_from_index(index);
        bbox.right > 4.0 && bbox.left < 20.0 && bbox.bottom > -30.0 && bbox.top < -10.0
    };
    let mut leaves = Vec::new();
    grid.traverse_if(
        TileIndex::new(0, 0, 32.0),
        overlaps,
        |index| grid.is_finest(index),
        |index| leaves.push(index),
    );
    let iterated: Vec<TileIndex> = QuadtreeIter::new(
        TileIndex::new(0, 0, 32.0),
        overlaps,
        |index: &TileIndex| grid.is_finest(index),
    )
    .collect();
    assert_eq!(iterated, leaves);
    assert_eq!(
        grid.finest_tiles(TileIndex::new(0, 0, 32.0), overlaps)
            .collect::<Vec<_>>(),
        leaves
    );
    assert_eq!(leaves.len(), 9);
    assert!(leaves.iter().all(|index| index.tile_size == 8.0));
}
