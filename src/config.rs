use std::fs::File;
use std::io::Read;

use anyhow::{ensure, Context};
use clap::ValueEnum;
use serde::Deserialize;
use wgraph::FrontierOrder;

use crate::cli::ProgramArguments;

/// Vertex count of the graph before any BUILD command, as in the classic driver.
pub const DEFAULT_INITIAL_VERTICES: usize = 10;

/// Upper bound on the vertex count a BUILD may allocate.
pub const DEFAULT_MAX_VERTICES: usize = 1_000_000;

#[derive(Clone, Copy, ValueEnum, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierOrderSetting {
    Ascending,
    Descending,
}

impl From<FrontierOrderSetting> for FrontierOrder {
    fn from(setting: FrontierOrderSetting) -> Self {
        match setting {
            FrontierOrderSetting::Ascending => FrontierOrder::Ascending,
            FrontierOrderSetting::Descending => FrontierOrder::Descending,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub graph: GraphConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub initial_vertices: Option<usize>,
    pub max_vertices: Option<usize>,
    pub frontier_order: Option<FrontierOrderSetting>,
}

pub fn read_config(path: impl Into<String>) -> anyhow::Result<Config> {
    let path = path.into();
    let mut s = String::new();
    File::open(&path)
        .with_context(|| format!("cannot open config file {}", path))?
        .read_to_string(&mut s)?;
    parse_config(&s).with_context(|| format!("invalid config file {}", path))
}

pub fn parse_config(s: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(s)?)
}

/// Effective settings: command line over config file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub commands: String,
    pub output: String,
    pub initial_vertices: usize,
    pub max_vertices: usize,
    pub frontier_order: FrontierOrder,
}

impl Settings {
    pub fn resolve(args: &ProgramArguments) -> anyhow::Result<Self> {
        let config = match &args.config {
            Some(path) => read_config(path.as_str())?,
            None => Config::default(),
        };
        Self::merge(args, config)
    }

    fn merge(args: &ProgramArguments, config: Config) -> anyhow::Result<Self> {
        let initial_vertices = args
            .initial_vertices
            .or(config.graph.initial_vertices)
            .unwrap_or(DEFAULT_INITIAL_VERTICES);
        let max_vertices = args
            .max_vertices
            .or(config.graph.max_vertices)
            .unwrap_or(DEFAULT_MAX_VERTICES);
        ensure!(
            initial_vertices <= max_vertices,
            "initial vertex count {} exceeds the vertex limit {}",
            initial_vertices,
            max_vertices
        );
        let frontier_order = args
            .frontier_order
            .or(config.graph.frontier_order)
            .map(FrontierOrder::from)
            .unwrap_or_default();
        Ok(Self {
            commands: args.commands.clone(),
            output: args.output.clone(),
            initial_vertices,
            max_vertices,
            frontier_order,
        })
    }
}
