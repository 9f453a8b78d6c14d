use crate::config::PlanConfig;
use crate::error::PathError;
use crate::resolver::PathResolver;
use crate::resource::ResourceTree;
use crate::utils::path::{extract_parameters_from_path, join_elements};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, trace};

/// One resource the gateway needs, identified by its full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayResource {
    pub path: String,
    /// `None` only for the root resource
    pub parent_path: Option<String>,
    pub path_part: String,
    pub parameters: Vec<String>,
}

/// Ordered set of gateway resources covering a whole resource tree.
///
/// Parents always come before their children and every path appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GatewayPlan {
    resources: Vec<GatewayResource>,
}

impl GatewayPlan {
    pub fn build(
        tree: &ResourceTree,
        resolver: &PathResolver,
        config: &PlanConfig,
    ) -> Result<Self, PathError> {
        let include_root = config.include_root();
        let mut resources = Vec::new();
        let mut seen = HashSet::new();

        for node in tree.iter() {
            let elements = resolver.path_elements(&node)?;

            for depth in 0..elements.len() {
                if depth == 0 && !include_root {
                    continue;
                }

                let path = join_elements(&elements[1..=depth]);
                if !seen.insert(path.clone()) {
                    trace!(path = %path, resource = %node.id(), "gateway path already planned");
                    continue;
                }

                let (parent_path, path_part) = if depth == 0 {
                    (None, String::new())
                } else {
                    (
                        Some(join_elements(&elements[1..depth])),
                        elements[depth].clone(),
                    )
                };
                let parameters = extract_parameters_from_path(&path);

                resources.push(GatewayResource {
                    path,
                    parent_path,
                    path_part,
                    parameters,
                });
            }
        }

        debug!(
            nodes = tree.len(),
            resources = resources.len(),
            "built gateway resource plan"
        );
        Ok(Self { resources })
    }

    pub fn get(&self, path: &str) -> Option<&GatewayResource> {
        self.resources.iter().find(|resource| resource.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GatewayResource> {
        self.resources.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|resource| resource.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
