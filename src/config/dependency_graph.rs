// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::errors::ValidationError;
use crate::features::{declared_features, FeatureId};

/// Dependency -> dependents adjacency list over the feature catalog
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph(pub HashMap<FeatureId, Vec<FeatureId>>);

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Graph of every feature declared for a tag-gram order
    pub fn from_catalog(tagram_order: usize) -> Self {
        let mut graph = Self::new();
        for feature in declared_features(tagram_order) {
            graph.0.entry(feature).or_default();
            for dependency in feature.dependencies() {
                graph.add_dependency(*dependency, feature);
            }
        }
        graph
    }

    /// Record that `dependent` reads `dependency`
    pub fn add_dependency(&mut self, dependency: FeatureId, dependent: FeatureId) {
        self.0.entry(dependent).or_default();
        let dependents = self.0.entry(dependency).or_default();
        if !dependents.contains(&dependent) {
            dependents.push(dependent);
        }
    }

    /// Get the features that read `feature`
    pub fn get_dependents(&self, feature: FeatureId) -> Option<&Vec<FeatureId>> {
        self.0.get(&feature)
    }

    /// Features `feature` reads directly
    pub fn dependencies_of(&self, feature: FeatureId) -> Vec<FeatureId> {
        let mut dependencies: Vec<FeatureId> = self
            .0
            .iter()
            .filter(|(_, dependents)| dependents.contains(&feature))
            .map(|(dependency, _)| *dependency)
            .collect();
        dependencies.sort();
        dependencies
    }

    /// Get all feature ids in the graph
    pub fn keys(&self) -> impl Iterator<Item = &FeatureId> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Everything `target` needs, in an order where each feature follows its
    /// dependencies, ending with `target`.
    ///
    /// Kahn's algorithm over the sub-graph reachable backwards from `target`.
    /// Ties are broken by declaration order so the result is stable.
    pub fn evaluation_order(&self, target: FeatureId) -> Result<Vec<FeatureId>, ValidationError> {
        let mut needed = HashSet::from([target]);
        let mut pending = vec![target];
        while let Some(feature) = pending.pop() {
            for dependency in self.dependencies_of(feature) {
                if needed.insert(dependency) {
                    pending.push(dependency);
                }
            }
        }

        let mut in_degree: HashMap<FeatureId, usize> = needed
            .iter()
            .map(|feature| (*feature, self.dependencies_of(*feature).len()))
            .collect();

        let mut ready: BTreeSet<FeatureId> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(feature, _)| *feature)
            .collect();

        let mut order = Vec::with_capacity(needed.len());
        while let Some(feature) = ready.pop_first() {
            order.push(feature);
            for dependent in self.get_dependents(feature).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(*dependent);
                    }
                }
            }
        }

        if order.len() != needed.len() {
            let mut cycle: Vec<String> = in_degree
                .iter()
                .filter(|(_, degree)| **degree > 0)
                .map(|(feature, _)| feature.name().into_owned())
                .collect();
            cycle.sort();
            return Err(ValidationError::CyclicDependency { cycle });
        }

        Ok(order)
    }
}

impl From<HashMap<FeatureId, Vec<FeatureId>>> for DependencyGraph {
    fn from(graph: HashMap<FeatureId, Vec<FeatureId>>) -> Self {
        Self(graph)
    }
}

impl From<DependencyGraph> for HashMap<FeatureId, Vec<FeatureId>> {
    fn from(graph: DependencyGraph) -> Self {
        graph.0
    }
}
