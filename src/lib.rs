mod config;
mod error;
mod plan;
mod resolver;
mod resource;
mod utils;

pub use config::{Config, DEFAULT_MAX_DEPTH, PlanConfig, ResolverConfig};
pub use error::PathError;
pub use plan::{GatewayPlan, GatewayResource};
pub use resolver::{PathResolver, ROOT_ELEMENT};
pub use resource::{Resource, ResourceEntry, ResourceId, ResourceRef, ResourceTree};
pub use utils::path;

/// Resolve every node of `tree` into the gateway resources it requires
pub fn build_gateway_plan(tree: &ResourceTree, config: &Config) -> Result<GatewayPlan, PathError> {
    let resolver = PathResolver::new(&config.resolver);
    GatewayPlan::build(tree, &resolver, &config.plan)
}
