//! Hierarchical ordering of a module's functions.
//!
//! Functions hanging off sub-objects (`Array.fast.map`) are listed before
//! top-level ones (`Array.map`); ties are alphabetical by object path and
//! then by function name.

use crate::model::{Hierarchy, Module};
use std::collections::BTreeMap;

/// Share of functions (in tenths) a prefix needs to become the primary object.
const PRIMARY_THRESHOLD_TENTHS: usize = 3;

/// Detect the primary object, fill every function's hierarchy and reorder.
pub fn sort(module: &mut Module) {
    let primary = primary_object(module.functions.iter().map(|f| f.name.as_str()));

    for func in &mut module.functions {
        func.hierarchy = parse_hierarchy(&func.name, primary.as_deref());
    }
    module
        .functions
        .sort_by(|a, b| a.hierarchy.sort_key().cmp(&b.hierarchy.sort_key()));

    tracing::debug!(module = %module.name, primary = ?primary, "sorted functions");
    module.primary_object = primary;
}

/// Most frequent first segment, if it covers at least 30% of the names.
pub fn primary_object<'a>(names: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut total = 0;
    for name in names {
        *counts.entry(first_segment(name)).or_default() += 1;
        total += 1;
    }

    // BTreeMap order + strict comparison: ties go to the smaller prefix
    let mut best: Option<(&str, usize)> = None;
    for (prefix, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((prefix, count));
        }
    }

    let (prefix, count) = best?;
    if count * 10 >= total * PRIMARY_THRESHOLD_TENTHS {
        Some(prefix.to_string())
    } else {
        None
    }
}

/// Split a qualified name into its hierarchy.
pub fn parse_hierarchy(name: &str, primary: Option<&str>) -> Hierarchy {
    let mut segments: Vec<&str> = name.split(['.', ':']).collect();
    let function_name = segments.pop().unwrap_or_default().to_string();
    let object_path = segments.join(".");

    let sub_path = primary.and_then(|p| {
        if object_path == p {
            Some(String::new())
        } else {
            object_path
                .strip_prefix(p)
                .and_then(|rest| rest.strip_prefix('.'))
                .map(str::to_string)
        }
    });

    Hierarchy {
        depth: segments.len(),
        object_path,
        sub_path,
        function_name,
    }
}

fn first_segment(name: &str) -> &str {
    name.split(['.', ':']).next().unwrap_or(name)
}
