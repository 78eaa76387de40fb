//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tiles covered by lines

use crate::error::GridError;
use crate::grid::{GridSpace, ToPoint2};
use crate::index::TileIndex;

/// Line between two tiles of the same size
#[derive(PartialEq, Clone, Debug)]
pub struct GridLine {
    pub start: TileIndex,
    pub end: TileIndex,
}

impl GridLine {
    pub fn new(start: TileIndex, end: TileIndex) -> Result<GridLine, GridError> {
        if start.tile_size != end.tile_size {
            warn!(
                "GridLine: start {} and end {} must have equal tile sizes",
                start, end
            );
            return Err(GridError::TileSizeMismatch {
                start: start.tile_size,
                end: end.tile_size,
            });
        }
        Ok(GridLine { start, end })
    }
}

/// Tolerance applied when checking for cell boundary crossings
const BOUNDARY_PRECISION: f64 = 10000.0;

/// Nearest integer, with halves rounded up
fn round(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Whether a grid coordinate lies on a cell edge (fraction `.5` up to the tolerance)
fn on_cell_edge(v: f64) -> bool {
    ((v.abs() % 1.0) * BOUNDARY_PRECISION).floor() / BOUNDARY_PRECISION == 0.5
}

fn tile(x: f64, y: f64, tile_size: f64) -> TileIndex {
    TileIndex::new(x as i64, y as i64, tile_size)
}

/// 4-connected path between the line ends, followed by the path back from the end.
///
/// Both walks include their first and last cell. A line of zero length yields its single cell.
pub fn tiles_from_grid_line(line: &GridLine) -> Vec<TileIndex> {
    let tile_size = line.start.tile_size;
    let (x1, y1) = (line.start.x, line.start.y);
    let (x2, y2) = (line.end.x, line.end.y);
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    if dx + dy == 0 {
        return vec![line.start];
    }
    let steps = dx + dy;
    let mut tiles = Vec::with_capacity(2 * (steps as usize + 1));
    walk_4_connected(&mut tiles, (x1, y1), (sx, sy), (dx, dy), steps, tile_size);
    walk_4_connected(&mut tiles, (x2, y2), (-sx, -sy), (dx, dy), steps, tile_size);
    tiles
}

fn walk_4_connected(
    tiles: &mut Vec<TileIndex>,
    (mut x, mut y): (i64, i64),
    (sx, sy): (i64, i64),
    (dx, dy): (i64, i64),
    steps: i64,
    tile_size: f64,
) {
    let mut e = 0;
    for _ in 0..steps {
        tiles.push(TileIndex::new(x, y, tile_size));
        let e1 = e + dy;
        let e2 = e - dx;
        if e1.abs() < e2.abs() {
            x += sx;
            e = e1;
        } else {
            y += sy;
            e = e2;
        }
    }
    tiles.push(TileIndex::new(x, y, tile_size));
}

impl GridSpace {
    /// Index-space line walk, see [`tiles_from_grid_line`]
    pub fn tiles_from_grid_line(&self, line: &GridLine) -> Vec<TileIndex> {
        tiles_from_grid_line(line)
    }

    /// Every tile touched by the line between two world coordinates (supercover).
    ///
    /// Lines running exactly along tile edges or through tile corners cover the tiles
    /// on both sides. The result is not deduplicated.
    pub fn tiles_from_line_intersection<P: ToPoint2, Q: ToPoint2>(
        &self,
        start: &P,
        end: &Q,
        tile_size: f64,
    ) -> Vec<TileIndex> {
        let start = self.grid_coord_from_point(self.to_scene(start), tile_size);
        let end = self.grid_coord_from_point(self.to_scene(end), tile_size);
        let mut tiles = Vec::new();

        let (x1o, y1o) = (start.x, start.y);
        let (x2o, y2o) = (end.x, end.y);

        let dxo = x2o - x1o;
        let dyo = y2o - y1o;
        let m = dyo / dxo;
        let horizontal = dyo == 0.0;
        let vertical = dxo == 0.0;

        let sx = if x1o < x2o { 1.0 } else { -1.0 };
        let sy = if y1o < y2o { 1.0 } else { -1.0 };
        let m_sx = m * sx;
        let m_sy = (1.0 / m) * sy;

        let x1o_round = round(x1o);
        let y1o_round = round(y1o);
        let x2o_round = round(x2o);
        let y2o_round = round(y2o);

        // number of steps along each axis
        let lx1 = (x2o_round - x1o_round).abs() as i64;
        let ly1 = (y2o_round - y1o_round).abs() as i64;

        // line position at the first whole grid coordinate
        let x_step = x1o - (y1o - y1o_round) * (1.0 / m);
        let y_step = y1o - (x1o - x1o_round) * m;

        if m.abs() <= 1.0 && !horizontal {
            for i in 0..lx1 {
                let i = i as f64;
                let x_round = round(x1o_round + i * sx);
                // first tile where the line starts, all others at the line's height mid-tile
                let y_round = if i != 0.0 {
                    round(y_step + i * m_sx)
                } else {
                    y1o_round
                };
                tiles.push(tile(x_round, y_round, tile_size));

                let change = if i as i64 == lx1 - 1 {
                    y2o_round - y_round
                } else {
                    round(y_step + (i + 1.0) * m_sx) - y_round
                };
                if change != 0.0 {
                    let y_cut_next = y_step + m_sx * (i + 0.5);
                    let before = round(y_cut_next) == y_round;
                    let both = on_cell_edge(y_cut_next);
                    if before || both {
                        tiles.push(tile(x_round + sx, y_round, tile_size));
                    }
                    if !before || both {
                        tiles.push(tile(x_round, y_round + sy, tile_size));
                    }
                    if change.abs() > 1.0 {
                        tiles.push(tile(x_round + sx, y_round + sy, tile_size));
                    }
                }
            }
            // Walks cover the start tile and head for the end tile in every direction,
            // including lines too short to take a step along their major axis.
            if lx1 == 0 && (x1o_round, y1o_round) != (x2o_round, y2o_round) {
                tiles.push(tile(x1o_round, y1o_round, tile_size));
            }
            tiles.push(tile(x2o_round, y2o_round, tile_size));
        }

        if m.abs() > 1.0 && !vertical {
            for i in 0..ly1 {
                let i = i as f64;
                let y_round = round(y1o_round + i * sy);
                let x_round = if i != 0.0 {
                    round(x_step + i * m_sy)
                } else {
                    x1o_round
                };
                tiles.push(tile(x_round, y_round, tile_size));

                let change = if i as i64 == ly1 - 1 {
                    x2o_round - x_round
                } else {
                    round(x_step + (i + 1.0) * m_sy) - x_round
                };
                if change != 0.0 {
                    let x_cut_next = x_step + m_sy * (i + 0.5);
                    let before = round(x_cut_next) == x_round;
                    let both = on_cell_edge(x_cut_next);
                    if !before || both {
                        tiles.push(tile(x_round + sx, y_round, tile_size));
                    }
                    if before || both {
                        tiles.push(tile(x_round, y_round + sy, tile_size));
                    }
                    if change.abs() > 1.0 {
                        tiles.push(tile(x_round + sx, y_round + sy, tile_size));
                    }
                }
            }
            if ly1 == 0 && (x1o_round, y1o_round) != (x2o_round, y2o_round) {
                tiles.push(tile(x1o_round, y1o_round, tile_size));
            }
            tiles.push(tile(x2o_round, y2o_round, tile_size));
        }

        // towards the end point, westward and downward lines included
        if vertical {
            let edge = on_cell_edge(x1o);
            for i in 0..=ly1 {
                let y = y1o_round + i as f64 * sy;
                tiles.push(tile(x1o_round, y, tile_size));
                if edge {
                    tiles.push(tile(x1o_round - 1.0, y, tile_size));
                }
            }
        }

        if horizontal {
            let edge = on_cell_edge(y1o);
            for i in 0..=lx1 {
                let x = x1o_round + i as f64 * sx;
                tiles.push(tile(x, y1o_round, tile_size));
                if edge {
                    tiles.push(tile(x, y1o_round - 1.0, tile_size));
                }
            }
        }

        tiles
    }
}
