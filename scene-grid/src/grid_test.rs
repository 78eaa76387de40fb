//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::events::{EventTarget, GridEvent};
use crate::grid::{BoundingBox, GridSpace, Point2, Point3};
use crate::index::TileIndex;
use std::sync::{Arc, Mutex};

fn lod_grid() -> GridSpace {
    GridSpace::new(
        Point2::new(0.0, 0.0),
        vec![64.0, 32.0, 16.0],
        Point3::default(),
    )
}

#[test]
fn test_defaults() {
    let grid = GridSpace::default();
    assert_eq!(grid.origin(), Point2::new(0.0, 0.0));
    assert_eq!(grid.tile_sizes(), &[16.0]);
    assert_eq!(grid.scene_offset(), Point3::new(0.0, 0.0, 0.0));
    assert_eq!(grid.effective_origin(), Point2::new(0.0, 0.0));
}

#[test]
fn test_effective_origin() {
    let grid = GridSpace::new((100.0, 50.0), vec![16.0], (30.0, 20.0, 5.0));
    assert_eq!(grid.effective_origin(), Point2::new(70.0, 30.0));
    assert_eq!(grid.to_scene(&(40.0, 25.0)), Point2::new(10.0, 5.0));
}

#[test]
fn test_index_from_point() {
    let grid = GridSpace::default();
    assert_eq!(
        grid.index_from_point(Point2::new(8.0, -8.0), 16.0),
        TileIndex::new(0, 0, 16.0)
    );
    // north of the first row
    assert_eq!(
        grid.index_from_point(Point2::new(8.0, -24.0), 16.0),
        TileIndex::new(0, 1, 16.0)
    );
    // south of the origin
    assert_eq!(
        grid.index_from_point(Point2::new(-8.0, 8.0), 16.0),
        TileIndex::new(-1, -1, 16.0)
    );
    // tile edges
    assert_eq!(
        grid.index_from_point(Point2::new(16.0, 0.0), 16.0),
        TileIndex::new(1, 0, 16.0)
    );
    assert_eq!(
        grid.index_from_point(Point2::new(0.0, -16.0), 16.0),
        TileIndex::new(0, 1, 16.0)
    );

    let grid = GridSpace::new((32.0, -64.0), vec![16.0], Point3::default());
    assert_eq!(
        grid.index_from_point(Point2::new(40.0, -72.0), 16.0),
        TileIndex::new(0, 0, 16.0)
    );
}

#[test]
fn test_index_from_coord() {
    let grid = GridSpace::new((0.0, 0.0), vec![16.0], (96.0, 48.0, 7.0));
    let plain = GridSpace::default();
    for coord in &[(8.0, -8.0), (250.0, -130.0), (-40.0, 77.0)] {
        assert_eq!(
            grid.index_from_coord(coord, 16.0),
            plain.index_from_coord(coord, 16.0)
        );
    }
    // scene points are relative to the shifted origin
    assert_eq!(
        grid.index_from_point(Point2::new(8.0, -8.0), 16.0),
        TileIndex::new(6, -3, 16.0)
    );
}

#[test]
fn test_centroid_roundtrip() {
    let grid = lod_grid();
    for &size in grid.tile_sizes() {
        for &(x, y) in &[(0, 0), (1, 0), (0, 1), (-3, 2), (5, -7), (-1, -1)] {
            let index = TileIndex::new(x, y, size);
            let centroid = grid.centroid_from_index(&index);
            assert_eq!(grid.index_from_point(centroid, size), index);
        }
    }
}

#[test]
fn test_grid_coord() {
    let grid = GridSpace::default();
    assert_eq!(
        grid.grid_coord_from_point(Point2::new(8.0, -8.0), 16.0),
        Point2::new(0.0, 0.0)
    );
    assert_eq!(
        grid.grid_coord_from_point(Point2::new(16.0, -16.0), 16.0),
        Point2::new(0.5, 0.5)
    );
    assert_eq!(
        grid.grid_coord_from_point(Point2::new(44.0, -36.0), 16.0),
        Point2::new(2.25, 1.75)
    );
    let centroid = grid.centroid_from_index(&TileIndex::new(3, 4, 16.0));
    assert_eq!(
        grid.grid_coord_from_point(centroid, 16.0),
        Point2::new(3.0, 4.0)
    );
}

#[test]
fn test_bbox() {
    let grid = GridSpace::new((100.0, 200.0), vec![16.0], Point3::default());
    let index = TileIndex::new(1, 2, 16.0);
    assert_eq!(grid.centroid_from_index(&index), Point2::new(124.0, 160.0));
    assert_eq!(
        grid.bounding_box_from_index(&index),
        BoundingBox {
            left: 116.0,
            right: 132.0,
            top: 152.0,
            bottom: 168.0,
        }
    );
    assert_eq!(
        grid.corner_coords_from_index(&index),
        [
            Point2::new(116.0, 168.0),
            Point2::new(132.0, 168.0),
            Point2::new(132.0, 152.0),
            Point2::new(116.0, 152.0),
        ]
    );
}

#[test]
fn test_descendants() {
    let grid = lod_grid();
    let parent = TileIndex::new(2, -3, 64.0);
    for child in parent.children().iter() {
        assert_eq!(child.tile_size, 32.0);
        assert!(grid.is_descendant_of(Some(child), Some(&parent)));
        for grandchild in child.children().iter() {
            assert_eq!(grandchild.tile_size, 16.0);
            assert!(grid.is_descendant_of(Some(grandchild), Some(&parent)));
        }
    }
    assert!(!grid.is_descendant_of(Some(&TileIndex::new(6, 0, 32.0)), Some(&parent)));
    // same level
    assert!(!grid.is_descendant_of(Some(&parent), Some(&parent)));
    // reversed
    assert!(!grid.is_descendant_of(Some(&parent), Some(&parent.child_ne())));
    assert!(!grid.is_descendant_of(None, Some(&parent)));
    assert!(!grid.is_descendant_of(Some(&parent), None));
}

#[test]
fn test_finest_level() {
    let grid = lod_grid();
    assert_eq!(grid.min_tile_size(), Some(16.0));
    assert!(grid.is_finest(&TileIndex::new(0, 0, 16.0)));
    assert!(grid.is_finest(&TileIndex::new(0, 0, 8.0)));
    assert!(!grid.is_finest(&TileIndex::new(0, 0, 32.0)));
}

#[test]
fn test_events() {
    let mut grid = GridSpace::default();
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let id = grid.add_event_listener(
        "tileadded",
        Box::new(move |event: &GridEvent| sink.lock().unwrap().push(event.clone())),
    );
    assert!(grid.has_event_listener("tileadded", id));
    assert!(!grid.has_event_listener("tileremoved", id));

    let event = GridEvent::for_tile("tileadded", TileIndex::new(1, 1, 16.0));
    grid.dispatch_event(&event);
    grid.dispatch_event(&GridEvent::new("tileremoved"));
    assert_eq!(*received.lock().unwrap(), vec![event.clone()]);

    assert!(grid.remove_event_listener("tileadded", id));
    assert!(!grid.remove_event_listener("tileadded", id));
    assert!(!grid.has_event_listener("tileadded", id));
    grid.dispatch_event(&event);
    assert_eq!(received.lock().unwrap().len(), 1);
}
