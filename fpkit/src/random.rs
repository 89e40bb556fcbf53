//! Random identifier strings.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Random string of exactly `length` characters drawn from `[A-Za-z0-9]`.
pub fn create_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_string_has_requested_length_and_charset() {
        let text = create_random_string(10);
        assert_eq!(text.len(), 10);
        assert!(text.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }

    #[test]
    fn random_string_of_zero_length_is_empty() {
        assert!(create_random_string(0).is_empty());
    }
}
