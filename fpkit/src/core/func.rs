//! Small function combinators.

use std::fmt::Debug;

use serde_json::Value;
use tracing::debug;

/// Apply functions to a value left to right: `go!(x, f, g)` is `g(f(x))`.
///
/// ```
/// let result = fpkit::go!(1, |n: i32| n + 5, |n: i32| n * 2);
/// assert_eq!(result, 12);
/// ```
#[macro_export]
macro_rules! go {
    ($value:expr $(,)?) => { $value };
    ($value:expr, $func:expr $(, $rest:expr)* $(,)?) => {
        $crate::go!(($func)($value) $(, $rest)*)
    };
}

/// Compose same-typed steps into one function applied left to right.
pub fn pipe<T>(steps: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |value: T| steps.iter().fold(value, |acc, step| step(acc))
}

/// Function that ignores its call and returns a clone of `value`.
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Does nothing.
pub fn noop() {}

/// Identity function that logs the passing value at debug level.
///
/// Useful for inspecting intermediate values inside a pipeline.
pub fn peek<T: Debug>(label: &str) -> impl Fn(T) -> T + '_ {
    move |value: T| {
        debug!(label, value = ?value, "peek");
        value
    }
}

/// Render `args` as one log line and emit it at debug level.
///
/// Strings are written bare, objects and arrays are pretty-printed, and other
/// scalars use their JSON form. Returns the rendered line.
pub fn flat_log(args: &[Value]) -> String {
    let line = args
        .iter()
        .map(|arg| match arg {
            Value::String(text) => text.clone(),
            Value::Array(_) | Value::Object(_) => format!("{arg:#}"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    debug!(args = args.len(), "{line}");
    line
}

/// Map `items` with a function that also receives each element's index.
pub fn index_map<T, U, F>(mut func: F, items: &[T]) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| func(item, index))
        .collect()
}

/// Wrap `func` so that only the first call runs it.
///
/// The first call returns `Some(result)`; later calls return `None`.
pub fn only_one_invoke<F, R>(func: F) -> impl FnMut() -> Option<R>
where
    F: FnOnce() -> R,
{
    let mut pending = Some(func);
    move || pending.take().map(|func| func())
}

/// Value paired with the first `true` condition.
pub fn one_of<T, I>(cases: I) -> Option<T>
where
    I: IntoIterator<Item = (bool, T)>,
{
    cases
        .into_iter()
        .find_map(|(condition, value)| condition.then_some(value))
}

/// Lazy form of [`one_of`]: conditions are evaluated in order until one
/// holds, and only that case's value is computed.
pub fn one_of_with<C, V, T, I>(cases: I) -> Option<T>
where
    I: IntoIterator<Item = (C, V)>,
    C: FnOnce() -> bool,
    V: FnOnce() -> T,
{
    cases
        .into_iter()
        .find_map(|(condition, value)| condition().then(value))
}
