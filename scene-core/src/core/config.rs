//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

/// Scene component built from its section `C` of the scene config
pub trait Config<'a, C: Deserialize<'a>>: Sized {
    /// Build from a parsed config section
    fn from_config(config: &C) -> Result<Self, String>;
    /// TOML template of the section with default values
    fn gen_config() -> String;
    /// TOML of the section describing `self`
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub grid: GridCfg,
    pub cache: Option<CacheCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    /// Grid origin in world units
    #[serde(default)]
    pub origin: (f64, f64),
    /// Tile sizes of all resolution levels, ordered from coarsest to finest
    #[serde(default = "default_tile_sizes")]
    pub tile_sizes: Vec<f64>,
    /// Offset subtracted from world coordinates to get scene coordinates
    #[serde(default)]
    pub scene_offset: (f64, f64, f64),
}

pub fn default_tile_sizes() -> Vec<f64> {
    vec![16.0]
}

#[derive(Deserialize, Clone, Debug)]
pub struct CacheCfg {
    /// Number of tiles kept before evicting (0: unlimited)
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

pub fn default_max_length() -> usize {
    1
}

pub const DEFAULT_CONFIG: &'static str = r#"
[grid]
origin = [0.0, 0.0]
tile_sizes = [64.0, 32.0, 16.0]
scene_offset = [0.0, 0.0, 0.0]

[cache]
max_length = 64
"#;

/// Load a scene config file and parse it into a config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file =
        File::open(path).map_err(|_| format!("Could not find scene config file '{}'", path))?;
    let mut config_toml = String::new();
    file.read_to_string(&mut config_toml)
        .map_err(|err| format!("Error while reading scene config '{}': {}", path, err))?;

    parse_config(config_toml, path)
}

/// Render environment variables into a scene config and parse it.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // ${VAR} is not expanded, only tera's {{env.VAR}}
    let legacy_var = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if let Some(var) = legacy_var.captures(&config_toml).and_then(|caps| caps.get(1)) {
        return Err(format!(
            "{}: use `{{{{env.{}}}}}` instead of ${{{}}} in scene config",
            path,
            var.as_str(),
            var.as_str()
        ));
    }

    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("{}: scene config template error: {}", path, e))?;
    let mut context = Context::new();
    context.insert("env", &env::vars().collect::<HashMap<String, String>>());
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("{}: scene config template error: {}", path, source),
        None => format!("{}: scene config template error: {}", path, e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
