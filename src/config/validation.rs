// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation of the feature catalog and of run configuration.
//!
//! # Validation Pipeline
//!
//! Feature declarations go through three stages:
//!
//! 1. **Uniqueness Validation**: every feature id is declared once
//! 2. **Reference Validation**: every dependency names a declared feature
//! 3. **Cycle Detection**: DFS over dependency -> dependent edges
//!
//! Cycle detection needs a structurally valid graph, so it only runs when
//! the first two stages pass.
//!
//! A run configuration is additionally checked for a usable tag-gram order,
//! a known annotator and a selection of known, non-repeated feature names.
//!
//! # Examples
//!
//! ```rust
//! use the_lexigraph::config::validate_dependency_graph;
//! use the_lexigraph::errors::ValidationError;
//! use the_lexigraph::features::FeatureDeclaration;
//!
//! let declarations = vec![
//!     FeatureDeclaration { id: "a".to_string(), depends_on: vec!["b".to_string()] },
//!     FeatureDeclaration { id: "b".to_string(), depends_on: vec!["a".to_string()] },
//! ];
//!
//! let errors = validate_dependency_graph(&declarations).unwrap_err();
//! assert!(matches!(errors[0], ValidationError::CyclicDependency { .. }));
//! ```

use std::collections::{HashMap, HashSet};

use crate::backends::local::LocalAnnotatorFactory;
use crate::config::Config;
use crate::errors::ValidationError;
use crate::features::{declarations, FeatureDeclaration, FeatureId};
use crate::observability::messages::validation::{
    CyclicDependencyDetected, DuplicateFeature, UnknownFeatureRequested, UnresolvedDependency,
    ValidationCompleted, ValidationFailed, ValidationStarted,
};
use crate::observability::messages::StructuredLog;

/// Validates a set of feature declarations for structural integrity.
///
/// Duplicate ids and unresolved references are all reported; a cycle is
/// reported only when those pass.
pub fn validate_dependency_graph(
    declarations: &[FeatureDeclaration],
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(duplicate_errors) = validate_unique_feature_ids(declarations) {
        errors.extend(duplicate_errors);
    }

    if let Err(unresolved_errors) = validate_dependency_references(declarations) {
        errors.extend(unresolved_errors);
    }

    if errors.is_empty() {
        if let Err(cycle_errors) = validate_acyclic_graph(declarations) {
            errors.extend(cycle_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the built-in catalog for a tag-gram order.
pub fn validate_feature_catalog(tagram_order: usize) -> Result<(), Vec<ValidationError>> {
    validate_dependency_graph(&declarations(tagram_order))
}

/// Parses a feature selection, rejecting unknown and repeated names.
pub fn resolve_selection(names: &[String]) -> Result<Vec<FeatureId>, Vec<ValidationError>> {
    let mut seen = HashSet::new();
    let mut selection = Vec::with_capacity(names.len());
    let mut errors = Vec::new();

    for name in names {
        match FeatureId::from_name(name) {
            None => {
                UnknownFeatureRequested { name }.log();
                errors.push(ValidationError::UnknownFeature { name: name.clone() });
            }
            Some(feature) if !seen.insert(feature) => {
                DuplicateFeature { feature_id: name }.log();
                errors.push(ValidationError::DuplicateFeature { name: name.clone() });
            }
            Some(feature) => selection.push(feature),
        }
    }

    if errors.is_empty() {
        Ok(selection)
    } else {
        Err(errors)
    }
}

/// Validates everything a run needs from its configuration.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.tagram_order == 0 {
        errors.push(ValidationError::InvalidTagramOrder {
            order: config.tagram_order,
        });
    }

    if !LocalAnnotatorFactory::is_implementation_available(&config.annotator) {
        errors.push(ValidationError::UnknownAnnotator {
            name: config.annotator.clone(),
        });
    }

    if let Some(names) = &config.features {
        if let Err(selection_errors) = resolve_selection(names) {
            errors.extend(selection_errors);
        }
    }

    let catalog = declarations(config.tagram_order.max(1));
    ValidationStarted {
        feature_count: catalog.len(),
    }
    .log();
    if let Err(catalog_errors) = validate_dependency_graph(&catalog) {
        errors.extend(catalog_errors);
    }

    if errors.is_empty() {
        ValidationCompleted {
            feature_count: catalog.len(),
        }
        .log();
        Ok(())
    } else {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

fn validate_unique_feature_ids(
    declarations: &[FeatureDeclaration],
) -> Result<(), Vec<ValidationError>> {
    let mut seen_ids = HashSet::new();
    let mut errors = Vec::new();

    for declaration in declarations {
        if !seen_ids.insert(&declaration.id) {
            DuplicateFeature {
                feature_id: &declaration.id,
            }
            .log();
            errors.push(ValidationError::DuplicateFeature {
                name: declaration.id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_dependency_references(
    declarations: &[FeatureDeclaration],
) -> Result<(), Vec<ValidationError>> {
    let feature_ids: HashSet<&String> = declarations.iter().map(|d| &d.id).collect();
    let mut errors = Vec::new();

    for declaration in declarations {
        for dependency in &declaration.depends_on {
            if !feature_ids.contains(dependency) {
                UnresolvedDependency {
                    feature_id: &declaration.id,
                    missing_dependency: dependency,
                }
                .log();
                errors.push(ValidationError::UnresolvedDependency {
                    feature: declaration.id.clone(),
                    missing_dependency: dependency.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// DFS with a recursion stack over dependency -> dependent edges.
///
/// Declarations are visited in order, so the reported cycle is stable.
fn validate_acyclic_graph(
    declarations: &[FeatureDeclaration],
) -> Result<(), Vec<ValidationError>> {
    let mut graph: HashMap<&str, Vec<&str>> = declarations
        .iter()
        .map(|declaration| (declaration.id.as_str(), Vec::new()))
        .collect();

    for declaration in declarations {
        for dependency in &declaration.depends_on {
            if let Some(dependents) = graph.get_mut(dependency.as_str()) {
                dependents.push(&declaration.id);
            }
        }
    }

    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    for declaration in declarations {
        if !visited.contains(declaration.id.as_str()) {
            if let Some(cycle) = dfs_cycle_detection(
                &declaration.id,
                &graph,
                &mut visited,
                &mut rec_stack,
                &mut path,
            ) {
                let names: Vec<&str> = cycle.iter().map(String::as_str).collect();
                CyclicDependencyDetected { cycle: &names }.log();
                return Err(vec![ValidationError::CyclicDependency { cycle }]);
            }
        }
    }

    Ok(())
}

fn dfs_cycle_detection<'g>(
    node: &'g str,
    graph: &HashMap<&'g str, Vec<&'g str>>,
    visited: &mut HashSet<&'g str>,
    rec_stack: &mut HashSet<&'g str>,
    path: &mut Vec<&'g str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = graph.get(node) {
        for &neighbor in neighbors {
            if !visited.contains(neighbor) {
                if let Some(cycle) = dfs_cycle_detection(neighbor, graph, visited, rec_stack, path)
                {
                    return Some(cycle);
                }
            } else if rec_stack.contains(neighbor) {
                let cycle_start = path.iter().position(|&x| x == neighbor).unwrap_or(0);
                let mut cycle: Vec<String> =
                    path[cycle_start..].iter().map(|x| x.to_string()).collect();
                cycle.push(neighbor.to_string());
                return Some(cycle);
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(id: &str, depends_on: Vec<&str>) -> FeatureDeclaration {
        FeatureDeclaration {
            id: id.to_string(),
            depends_on: depends_on.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        for order in 1..=5 {
            assert!(validate_feature_catalog(order).is_ok());
        }
    }

    #[test]
    fn test_valid_empty_declarations() {
        assert!(validate_dependency_graph(&[]).is_ok());
    }

    #[test]
    fn test_valid_diamond_dependency() {
        let declarations = vec![
            declaration("word_count", vec![]),
            declaration("noun_count", vec!["word_count"]),
            declaration("sentence_count", vec!["word_count"]),
            declaration("density", vec!["noun_count", "sentence_count"]),
        ];
        assert!(validate_dependency_graph(&declarations).is_ok());
    }

    #[test]
    fn test_duplicate_feature_ids() {
        let declarations = vec![declaration("entropy", vec![]), declaration("entropy", vec![])];

        let errors = validate_dependency_graph(&declarations).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            ValidationError::DuplicateFeature {
                name: "entropy".to_string()
            }
        );
    }

    #[test]
    fn test_unresolved_dependency() {
        let declarations = vec![declaration("vowel_density", vec!["syllable_count"])];

        let errors = validate_dependency_graph(&declarations).unwrap_err();
        assert_eq!(
            errors[0],
            ValidationError::UnresolvedDependency {
                feature: "vowel_density".to_string(),
                missing_dependency: "syllable_count".to_string(),
            }
        );
    }

    #[test]
    fn test_simple_cycle() {
        let declarations = vec![
            declaration("polarity", vec!["sentiment"]),
            declaration("sentiment", vec!["polarity"]),
        ];

        let errors = validate_dependency_graph(&declarations).unwrap_err();
        match &errors[0] {
            ValidationError::CyclicDependency { cycle } => {
                assert_eq!(cycle.len(), 3);
                assert_eq!(cycle.first(), cycle.last());
            }
            other => panic!("Expected CyclicDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_self_dependency_cycle() {
        let declarations = vec![declaration("entropy", vec!["entropy"])];

        let errors = validate_dependency_graph(&declarations).unwrap_err();
        assert_eq!(
            errors[0],
            ValidationError::CyclicDependency {
                cycle: vec!["entropy".to_string(), "entropy".to_string()]
            }
        );
    }

    #[test]
    fn test_complex_cycle_reports_only_the_loop() {
        let declarations = vec![
            declaration("a", vec![]),
            declaration("b", vec!["a", "d"]),
            declaration("c", vec!["b"]),
            declaration("d", vec!["c"]),
        ];

        let errors = validate_dependency_graph(&declarations).unwrap_err();
        assert_eq!(
            errors[0],
            ValidationError::CyclicDependency {
                cycle: vec![
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                    "b".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_multiple_errors_skip_cycle_detection() {
        let declarations = vec![
            declaration("a", vec!["b", "missing"]),
            declaration("b", vec!["a"]),
            declaration("b", vec![]),
        ];

        let errors = validate_dependency_graph(&declarations).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| !matches!(e, ValidationError::CyclicDependency { .. })));
    }

    #[test]
    fn test_resolve_selection() {
        let names = vec!["entropy".to_string(), "tags_4gram".to_string()];
        assert_eq!(
            resolve_selection(&names).unwrap(),
            vec![FeatureId::Entropy, FeatureId::TagGrams(4)]
        );

        let names = vec![
            "unitags".to_string(),
            "bogus".to_string(),
            "unitags".to_string(),
        ];
        let errors = resolve_selection(&names).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownFeature {
                    name: "bogus".to_string()
                },
                ValidationError::DuplicateFeature {
                    name: "unitags".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
