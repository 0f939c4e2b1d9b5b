// crates/roster-core/src/greeting.rs
//
// Greeting text composition. The exact output format is part of the
// service's observable contract, so it lives in the leaf crate where
// both transports and the tests can reach it.

use crate::user::UserRecord;

/// Upper-case the first letter of every whitespace-delimited word,
/// preserving the original whitespace.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Compose the greeting line for a user.
///
/// `greet("hello", alice/engineer)` yields
/// `"Hello, alice! You are a great engineer!"`.
pub fn greet(greeting: &str, user: &UserRecord) -> String {
    format!(
        "{}, {}! You are a great {}!",
        title_case(greeting),
        user.username,
        user.role
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("hello"), "Hello");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("good morning"), "Good Morning");
    }

    #[test]
    fn test_title_case_preserves_whitespace() {
        assert_eq!(title_case("  well   met "), "  Well   Met ");
    }

    #[test]
    fn test_title_case_already_capitalized() {
        assert_eq!(title_case("Hello There"), "Hello There");
    }

    #[test]
    fn test_greet_format() {
        let user = UserRecord::new("alice", "engineer");
        assert_eq!(
            greet("hello", &user),
            "Hello, alice! You are a great engineer!"
        );
    }
}
