//! Data model for parsed documentation — format-agnostic.

use serde::Serialize;
use std::cmp::Reverse;

/// All documented functions of one Lua module.
#[derive(Debug, Default, Serialize)]
pub struct Module {
    /// Module name, taken from the source file stem
    pub name: String,
    /// Dominant dotted prefix, set by the hierarchical sort
    pub primary_object: Option<String>,
    pub functions: Vec<FunctionRecord>,
}

/// A single documented function.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FunctionRecord {
    /// Fully qualified name as written, e.g. `Array.map` or `M:method`
    pub name: String,
    /// Last segment of `name`
    pub simple_name: String,
    /// Literal parameter text between the signature's parentheses
    pub params_raw: String,
    /// Trimmed parameter names from the signature
    pub signature_params: Vec<String>,
    /// @param entries, in annotation order
    pub params: Vec<Param>,
    /// @return entry
    pub returns: Return,
    /// @generic entries
    pub generics: Vec<Generic>,
    /// First description paragraph, one entry per source line
    pub description: Vec<String>,
    /// Later paragraphs, bullets and code examples
    pub notes: Vec<Note>,
    pub hierarchy: Hierarchy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Return {
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

impl Default for Return {
    fn default() -> Self {
        Self {
            ty: "any".to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generic {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Free-form content after the first description paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Note {
    Text(String),
    /// Fenced example, indentation preserved
    Code(String),
}

/// Position of a function within its module's object tree.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Hierarchy {
    /// Number of segments before the function name
    pub depth: usize,
    /// Segments before the function name, joined by `.`
    pub object_path: String,
    /// `object_path` relative to the module's primary object
    pub sub_path: Option<String>,
    pub function_name: String,
}

impl Hierarchy {
    /// Ordering key: deeper first, then object path, then name.
    pub fn sort_key(&self) -> (Reverse<usize>, &str, &str) {
        (
            Reverse(self.depth),
            self.object_path.as_str(),
            self.function_name.as_str(),
        )
    }
}
