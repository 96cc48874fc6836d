// View and tile domain models
use super::build::{Build, BuildStatus};
use serde::Deserialize;

pub const DEFAULT_NUMBER_OF_COLUMNS: u32 = 6;

/// Reference to a tile as listed in the view metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRef {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tiles: Vec<TileRef>,
    #[serde(default)]
    pub number_of_columns: Option<u32>,
    /// 0 collapses every tile to its combined status
    #[serde(default)]
    pub default_number_of_branches_per_tile: u32,
}

impl View {
    /// Column count used for tile widths; unset or zero means the default of 6.
    pub fn columns(&self) -> u32 {
        match self.number_of_columns {
            Some(columns) if columns > 0 => columns,
            _ => DEFAULT_NUMBER_OF_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: String,
    pub label: String,
    pub combined_build_status: BuildStatus,
    #[serde(default)]
    pub builds: Vec<Build>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ViewData {
    #[serde(default)]
    pub tiles: Vec<Tile>,
}
