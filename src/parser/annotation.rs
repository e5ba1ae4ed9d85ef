//! `@param` / `@return` / `@generic` annotation lines.
//!
//! Input is comment text with the `--` marker already removed. Lines that do
//! not match the expected shape yield `None` and are dropped by the caller.

use crate::model::{Generic, Param, Return};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@param\s+(\S+)\s+(\S.*)$").unwrap());

static RE_RETURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@return\s+(\S.*)$").unwrap());

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(?:param|return|generic)(?:\s|$)").unwrap());

static RE_GENERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@generic\s+([A-Za-z_][\w.]*)\s*:\s*(\S.*)$").unwrap());

#[derive(Debug, PartialEq, Eq)]
pub enum Annotation {
    Param(Param),
    Return(Return),
    Generic(Generic),
}

/// True if `text` starts with one of the annotations this module handles.
/// The tag must match exactly: `@returns` is a different tag.
pub fn is_annotation(text: &str) -> bool {
    RE_TAG.is_match(text)
}

/// Parse one annotation line.
pub fn parse(text: &str) -> Option<Annotation> {
    let text = text.trim();

    if let Some(caps) = RE_PARAM.captures(text) {
        let (ty, description) = split_type(&caps[2])?;
        let raw_name = &caps[1];
        let name = raw_name.trim_end_matches('?');
        let optional = ty.contains('?') || name.len() != raw_name.len();
        return Some(Annotation::Param(Param {
            name: name.to_string(),
            ty,
            description,
            optional,
        }));
    }

    if let Some(caps) = RE_RETURN.captures(text) {
        let (ty, description) = split_type(&caps[1])?;
        return Some(Annotation::Return(Return { ty, description }));
    }

    if let Some(caps) = RE_GENERIC.captures(text) {
        return Some(Annotation::Generic(Generic {
            name: caps[1].to_string(),
            ty: caps[2].trim().to_string(),
        }));
    }

    None
}

/// Split `<type> [# ]<description>`.
///
/// With a `#` everything before it is the type. Without one the type is the
/// first whitespace-delimited token.
fn split_type(rest: &str) -> Option<(String, String)> {
    let (ty, description) = match rest.split_once('#') {
        Some((ty, description)) => (ty.trim(), description.trim()),
        None => match rest.split_once(char::is_whitespace) {
            Some((ty, description)) => (ty, description.trim()),
            None => (rest.trim(), ""),
        },
    };
    if ty.is_empty() {
        return None;
    }
    Some((ty.to_string(), description.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(text: &str) -> Param {
        match parse(text) {
            Some(Annotation::Param(p)) => p,
            other => panic!("expected param, got {:?}", other),
        }
    }

    #[test]
    fn param_with_hash_delimiter() {
        let p = param("@param fn fun(x: T): U # Mapping function");
        assert_eq!(p.name, "fn");
        assert_eq!(p.ty, "fun(x: T): U");
        assert_eq!(p.description, "Mapping function");
        assert!(!p.optional);
    }

    #[test]
    fn param_without_hash_takes_first_token() {
        let p = param("@param x number");
        assert_eq!(p.ty, "number");
        assert_eq!(p.description, "");
    }

    #[test]
    fn param_without_hash_keeps_trailing_words_as_description() {
        let p = param("@param t table The input table");
        assert_eq!(p.ty, "table");
        assert_eq!(p.description, "The input table");
    }

    #[test]
    fn param_optional_from_type() {
        let p = param("@param start? number # Start index");
        assert_eq!(p.name, "start");
        assert!(p.optional);

        let p = param("@param start number? # Start index");
        assert_eq!(p.name, "start");
        assert_eq!(p.ty, "number?");
        assert!(p.optional);
    }

    #[test]
    fn param_missing_type_is_dropped() {
        assert_eq!(parse("@param x"), None);
        assert_eq!(parse("@param x # only a description"), None);
    }

    #[test]
    fn return_with_description() {
        assert_eq!(
            parse("@return boolean true when found"),
            Some(Annotation::Return(Return {
                ty: "boolean".to_string(),
                description: "true when found".to_string(),
            }))
        );
    }

    #[test]
    fn return_type_only() {
        assert_eq!(
            parse("@return number"),
            Some(Annotation::Return(Return {
                ty: "number".to_string(),
                description: String::new(),
            }))
        );
    }

    #[test]
    fn generic_is_colon_delimited() {
        assert_eq!(
            parse("@generic T: any"),
            Some(Annotation::Generic(Generic {
                name: "T".to_string(),
                ty: "any".to_string(),
            }))
        );
        assert_eq!(parse("@generic T"), None);
    }

    #[test]
    fn tags_match_exactly() {
        assert!(is_annotation("@param"));
        assert!(is_annotation("@return number"));
        assert!(!is_annotation("@returns number"));
        assert!(!is_annotation("@parameter x number"));
        assert!(!is_annotation("@generics T: any"));
    }

    #[test]
    fn unknown_annotation() {
        assert!(!is_annotation("@see Array.map"));
        assert_eq!(parse("@see Array.map"), None);
    }
}
