//! Combinators over unary predicates.
//!
//! A predicate is any `Fn(&T) -> bool`. Predicates are assumed to be free of
//! side effects, so the combinators are free to short-circuit.

use serde_json::Value;

/// Predicate true when either `first` or `second` holds.
pub fn or<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| first(value) || second(value)
}

/// Predicate true when both `first` and `second` hold.
pub fn and<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| first(value) && second(value)
}

/// Logical negation of `pred`.
pub fn complement<T, P>(pred: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value: &T| !pred(value)
}

/// Build a filter keeping the elements for which `pred` is false.
///
/// Order and multiplicity of the kept elements are preserved; the input slice
/// is left untouched.
pub fn exclude<T, P>(pred: P) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let keep = complement(pred);
    move |items: &[T]| items.iter().filter(|&item| keep(item)).cloned().collect()
}

/// Values that can represent "nothing".
///
/// `None` and JSON `null` are nil. A missing JSON field, looked up as
/// `Option<&Value>`, is nil as well, so absent and null collapse to one
/// concept. Zero, empty strings and `NaN` are ordinary values.
pub trait Nil {
    fn is_nil(&self) -> bool;
}

impl<T: Nil> Nil for Option<T> {
    fn is_nil(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_nil(),
        }
    }
}

impl<T: Nil + ?Sized> Nil for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl Nil for Value {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T> Nil for Vec<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nil for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

/// True iff `value` is nil.
pub fn is_nil<T: Nil + ?Sized>(value: &T) -> bool {
    value.is_nil()
}

/// True iff `value` is not nil.
pub fn is_not_nil<T: Nil + ?Sized>(value: &T) -> bool {
    !value.is_nil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_positive(num: &i32) -> bool {
        *num > 0
    }

    fn is_zero(num: &i32) -> bool {
        *num == 0
    }

    fn is_even(num: &i32) -> bool {
        num % 2 == 0
    }

    #[test]
    fn or_holds_when_either_predicate_holds() {
        let is_zero_or_positive = or(is_positive, is_zero);
        assert!(is_zero_or_positive(&1));
        assert!(is_zero_or_positive(&0));
        assert!(!is_zero_or_positive(&-1));
    }

    #[test]
    fn and_holds_only_when_both_predicates_hold() {
        let is_even_and_positive = and(is_positive, is_even);
        assert!(is_even_and_positive(&2));
        assert!(!is_even_and_positive(&0));
        assert!(!is_even_and_positive(&-1));
        assert!(!is_even_and_positive(&3));
    }

    /// Combinators agree with the boolean operators over a range of inputs.
    #[test]
    fn combinators_match_boolean_operators() {
        let either = or(is_positive, is_even);
        let both = and(is_positive, is_even);
        for x in -6..=6 {
            assert_eq!(either(&x), is_positive(&x) || is_even(&x), "or at {x}");
            assert_eq!(both(&x), is_positive(&x) && is_even(&x), "and at {x}");
        }
    }

    #[test]
    fn combinators_accept_unsized_inputs() {
        let short_or_upper = or(|s: &str| s.len() < 3, |s: &str| s.starts_with('A'));
        assert!(short_or_upper("ab"));
        assert!(short_or_upper("Alpha"));
        assert!(!short_or_upper("beta"));
    }

    #[test]
    fn exclude_drops_matching_elements_in_order() {
        let arr = [1, 2, 3, 4, 5, 6];
        assert_eq!(exclude(is_even)(&arr), vec![1, 3, 5]);
    }

    #[test]
    fn exclude_keeps_duplicates_and_leaves_input_untouched() {
        let arr = vec![3, 2, 3, 4, 3];
        let odds = exclude(is_even)(&arr);
        assert_eq!(odds, vec![3, 3, 3]);
        assert_eq!(arr, vec![3, 2, 3, 4, 3]);
        assert!(exclude(is_even)(&[]).is_empty());
    }

    #[test]
    fn is_not_nil_treats_only_absence_and_null_as_nil() {
        assert!(!is_not_nil(&None::<i32>));
        assert!(!is_not_nil(&Value::Null));
        assert!(is_not_nil(&0));
        assert!(is_not_nil(""));
        assert!(is_not_nil(&f64::NAN));
        assert!(is_not_nil(&Some(0)));
        assert!(is_not_nil(&json!(0)));
        assert!(is_not_nil(&json!("")));
    }

    #[test]
    fn missing_and_null_json_fields_are_both_nil() {
        let record = json!({"present": 1, "null": null});
        assert!(is_nil(&record.get("missing")));
        assert!(is_nil(&record.get("null")));
        assert!(is_not_nil(&record.get("present")));
    }
}
