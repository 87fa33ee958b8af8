// src/models/config.rs
use super::FilterRule;
use serde::Deserialize;

/// Roots to walk and the ordered filter chain, as read from `config.toml`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(rename = "Paths", alias = "paths", default)]
    pub roots: Vec<String>,
    #[serde(rename = "Filters", alias = "filters", default)]
    pub filters: Vec<FilterRule>,
}
