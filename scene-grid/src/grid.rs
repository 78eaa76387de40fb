//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Scene grids

use crate::events::{EventDispatcher, EventTarget, GridEvent, Listener, ListenerId};
use crate::index::TileIndex;

/// Point in the 2D grid plane
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Point or offset in scene space
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Point2 {
        Point2 { x, y }
    }
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { x, y, z }
    }
}

/// Conversion of coordinate objects into grid plane points
pub trait ToPoint2 {
    fn to_point2(&self) -> Point2;
}

/// Conversion of coordinate objects into scene points
pub trait ToPoint3 {
    fn to_point3(&self) -> Point3;
}

impl ToPoint2 for Point2 {
    fn to_point2(&self) -> Point2 {
        *self
    }
}

/// Projection onto the grid plane drops `z`.
impl ToPoint2 for Point3 {
    fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl ToPoint2 for (f64, f64) {
    fn to_point2(&self) -> Point2 {
        Point2::new(self.0, self.1)
    }
}

impl ToPoint2 for [f64; 2] {
    fn to_point2(&self) -> Point2 {
        Point2::new(self[0], self[1])
    }
}

impl ToPoint3 for Point3 {
    fn to_point3(&self) -> Point3 {
        *self
    }
}

impl ToPoint3 for (f64, f64, f64) {
    fn to_point3(&self) -> Point3 {
        Point3::new(self.0, self.1, self.2)
    }
}

impl ToPoint3 for [f64; 3] {
    fn to_point3(&self) -> Point3 {
        Point3::new(self[0], self[1], self[2])
    }
}

/// Tile bounds in grid plane coordinates.
///
/// The vertical axis grows southwards, so `top` is numerically smaller than `bottom`.
#[derive(PartialEq, Clone, Debug)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Multi-resolution tile grid over the scene plane
#[derive(Debug)]
pub struct GridSpace {
    origin: Point2,
    /// Valid tile sizes, one per resolution level.
    /// Descendant checks count levels by position in this list, so it is expected
    /// to be ordered from the coarsest to the finest level.
    tile_sizes: Vec<f64>,
    scene_offset: Point3,
    /// Origin in scene space (`origin` minus projected `scene_offset`)
    effective_origin: Point2,
    events: EventDispatcher,
}

impl Default for GridSpace {
    fn default() -> GridSpace {
        GridSpace::new(Point2::default(), vec![16.0], Point3::default())
    }
}

impl GridSpace {
    pub fn new<O: ToPoint2, S: ToPoint3>(origin: O, tile_sizes: Vec<f64>, scene_offset: S) -> GridSpace {
        let origin = origin.to_point2();
        let scene_offset = scene_offset.to_point3();
        let offset = scene_offset.to_point2();
        GridSpace {
            origin,
            tile_sizes,
            scene_offset,
            effective_origin: Point2::new(origin.x - offset.x, origin.y - offset.y),
            events: EventDispatcher::new(),
        }
    }
    pub fn origin(&self) -> Point2 {
        self.origin
    }
    pub fn scene_offset(&self) -> Point3 {
        self.scene_offset
    }
    pub fn effective_origin(&self) -> Point2 {
        self.effective_origin
    }
    pub fn tile_sizes(&self) -> &[f64] {
        &self.tile_sizes
    }
    /// Smallest configured tile size
    pub fn min_tile_size(&self) -> Option<f64> {
        self.tile_sizes.iter().cloned().fold(None, |min, size| match min {
            Some(m) if m <= size => Some(m),
            _ => Some(size),
        })
    }
    /// Whether the index lies on the finest configured level (or below)
    pub fn is_finest(&self, index: &TileIndex) -> bool {
        self.min_tile_size()
            .map_or(true, |size| index.tile_size <= size)
    }
    /// Scene point from a world coordinate (scene offset subtracted)
    pub fn to_scene<P: ToPoint2>(&self, coord: &P) -> Point2 {
        let p = coord.to_point2();
        let offset = self.scene_offset.to_point2();
        Point2::new(p.x - offset.x, p.y - offset.y)
    }
    /// Tile containing a scene point
    pub fn index_from_point(&self, point: Point2, tile_size: f64) -> TileIndex {
        let x = (point.x / tile_size).floor() - (self.effective_origin.x / tile_size).floor();
        // Rows count northwards while scene y grows to the south
        let y = -((point.y / tile_size).ceil() - (self.effective_origin.y / tile_size).floor());
        TileIndex::new(x as i64, y as i64, tile_size)
    }
    /// Tile containing a world coordinate
    pub fn index_from_coord<P: ToPoint2>(&self, coord: &P, tile_size: f64) -> TileIndex {
        self.index_from_point(self.to_scene(coord), tile_size)
    }
    /// Continuous grid coordinate of a scene point.
    /// Whole numbers are tile centers, `.5` fractions are tile edges.
    pub fn grid_coord_from_point(&self, point: Point2, tile_size: f64) -> Point2 {
        Point2::new(
            (point.x / tile_size) - (self.effective_origin.x / tile_size) - 0.5,
            -((point.y / tile_size) - (self.effective_origin.y / tile_size)) - 0.5,
        )
    }
    pub fn centroid_from_index(&self, index: &TileIndex) -> Point2 {
        let size = index.tile_size;
        Point2::new(
            index.x as f64 * size + self.effective_origin.x + size / 2.0,
            -(index.y as f64) * size + self.effective_origin.y - size / 2.0,
        )
    }
    pub fn bounding_box_from_index(&self, index: &TileIndex) -> BoundingBox {
        let centroid = self.centroid_from_index(index);
        let half_size = index.tile_size / 2.0;
        BoundingBox {
            left: centroid.x - half_size,
            right: centroid.x + half_size,
            top: centroid.y - half_size,
            bottom: centroid.y + half_size,
        }
    }
    /// Tile corners ordered SW, SE, NE, NW
    pub fn corner_coords_from_index(&self, index: &TileIndex) -> [Point2; 4] {
        let bbox = self.bounding_box_from_index(index);
        [
            Point2::new(bbox.left, bbox.bottom),
            Point2::new(bbox.right, bbox.bottom),
            Point2::new(bbox.right, bbox.top),
            Point2::new(bbox.left, bbox.top),
        ]
    }
    /// Resolution level of a tile size (-1 for sizes not in the grid)
    fn level(&self, tile_size: f64) -> i64 {
        self.tile_sizes
            .iter()
            .position(|size| *size == tile_size)
            .map_or(-1, |pos| pos as i64)
    }
    /// Whether `descendant` lies inside `ancestor` on a finer level.
    ///
    /// Both tile sizes have to be configured in the grid, otherwise the result is meaningless.
    pub fn is_descendant_of(
        &self,
        descendant: Option<&TileIndex>,
        ancestor: Option<&TileIndex>,
    ) -> bool {
        let (descendant, ancestor) = match (descendant, ancestor) {
            (Some(d), Some(a)) => (d, a),
            _ => return false,
        };
        let level_distance = self.level(descendant.tile_size) - self.level(ancestor.tile_size);
        let level_factor = (level_distance * 2) as f64;
        let x_ancestor_level = (descendant.x as f64 / level_factor).floor();
        let y_ancestor_level = (descendant.y as f64 / level_factor).floor();
        x_ancestor_level == ancestor.x as f64 && y_ancestor_level == ancestor.y as f64
    }
}

impl EventTarget for GridSpace {
    fn add_event_listener(&mut self, event_type: &str, listener: Listener) -> ListenerId {
        self.events.add_event_listener(event_type, listener)
    }
    fn has_event_listener(&self, event_type: &str, id: ListenerId) -> bool {
        self.events.has_event_listener(event_type, id)
    }
    fn remove_event_listener(&mut self, event_type: &str, id: ListenerId) -> bool {
        self.events.remove_event_listener(event_type, id)
    }
    fn dispatch_event(&mut self, event: &GridEvent) {
        self.events.dispatch_event(event)
    }
}
