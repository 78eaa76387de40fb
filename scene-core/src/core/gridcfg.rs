//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::Config;
use scene_grid::GridSpace;

impl<'a> Config<'a, GridCfg> for GridSpace {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, String> {
        if grid_cfg.tile_sizes.is_empty() {
            return Err("Grid needs at least one tile size".to_string());
        }
        if let Some(size) = grid_cfg
            .tile_sizes
            .iter()
            .find(|size| !size.is_finite() || **size <= 0.0)
        {
            return Err(format!("Invalid tile size '{}'", size));
        }
        let grid = GridSpace::new(
            grid_cfg.origin,
            grid_cfg.tile_sizes.clone(),
            grid_cfg.scene_offset,
        );
        info!(
            "Grid with origin {:?} and tile sizes {:?}",
            grid_cfg.origin, grid_cfg.tile_sizes
        );
        Ok(grid)
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
origin = [0.0, 0.0]
tile_sizes = [16.0]
scene_offset = [0.0, 0.0, 0.0]
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        let origin = self.origin();
        let offset = self.scene_offset();
        let sizes: Vec<String> = self.tile_sizes().iter().map(|s| format!("{:?}", s)).collect();
        format!(
            r#"
[grid]
origin = [{:?}, {:?}]
tile_sizes = [{}]
scene_offset = [{:?}, {:?}, {:?}]
"#,
            origin.x,
            origin.y,
            sizes.join(", "),
            offset.x,
            offset.y,
            offset.z
        )
    }
}
