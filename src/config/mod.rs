use serde::Deserialize;

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub plan: PlanConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of ancestors walked before a chain is considered
    /// malformed (default: 64)
    pub max_depth: Option<usize>,
}

impl ResolverConfig {
    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct PlanConfig {
    /// Whether the root `/` resource is part of the plan (default: false)
    pub include_root: Option<bool>,
}

impl PlanConfig {
    pub fn include_root(&self) -> bool {
        self.include_root.unwrap_or(false)
    }
}
