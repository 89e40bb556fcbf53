//! Helpers over the key sets of JSON objects and class-name lists.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::core::text::camel_to_kebab;

/// Copy of `object` with keys in ascending order.
pub fn sort_keys(object: &Map<String, Value>) -> Map<String, Value> {
    sort_keys_by(object, |a, b| a.cmp(b))
}

/// Copy of `object` with keys ordered by `compare`.
pub fn sort_keys_by<F>(object: &Map<String, Value>, mut compare: F) -> Map<String, Value>
where
    F: FnMut(&str, &str) -> Ordering,
{
    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort_by(|a, b| compare(a.as_str(), b.as_str()));
    keys.into_iter()
        .map(|key| (key.clone(), object[key.as_str()].clone()))
        .collect()
}

/// Predicate true for JSON objects that contain every key in `keys`.
pub fn has_props<'a>(keys: &'a [&'a str]) -> impl Fn(&Value) -> bool + 'a {
    move |value: &Value| keys.iter().all(|key| value.get(key).is_some())
}

/// One argument to [`class_names`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassArg<'a> {
    /// Class names taken verbatim (may hold several space-separated names).
    Name(&'a str),
    /// Class names included only when their flag is set.
    Flags(Vec<(&'a str, bool)>),
    /// A missing argument; contributes nothing.
    Nil,
}

impl<'a> From<&'a str> for ClassArg<'a> {
    fn from(name: &'a str) -> Self {
        ClassArg::Name(name)
    }
}

impl<'a> From<Option<&'a str>> for ClassArg<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(ClassArg::Nil, ClassArg::Name)
    }
}

impl<'a, const N: usize> From<[(&'a str, bool); N]> for ClassArg<'a> {
    fn from(flags: [(&'a str, bool); N]) -> Self {
        ClassArg::Flags(flags.to_vec())
    }
}

/// Join class names into a single space-separated string.
///
/// Returns `None` when no argument contributes a name.
pub fn class_names(args: &[ClassArg<'_>]) -> Option<String> {
    join_classes(args, str::to_string)
}

/// Like [`class_names`], but every name is converted to kebab case.
pub fn cls_nms(args: &[ClassArg<'_>]) -> Option<String> {
    join_classes(args, camel_to_kebab)
}

fn join_classes(args: &[ClassArg<'_>], render: impl Fn(&str) -> String) -> Option<String> {
    let mut names = Vec::new();
    for arg in args {
        match arg {
            ClassArg::Name(name) if !name.is_empty() => names.push(render(name)),
            ClassArg::Name(_) | ClassArg::Nil => {}
            ClassArg::Flags(flags) => names.extend(
                flags
                    .iter()
                    .filter(|(_, enabled)| *enabled)
                    .map(|(name, _)| render(name)),
            ),
        }
    }
    if names.is_empty() {
        None
    } else {
        Some(names.join(" "))
    }
}
