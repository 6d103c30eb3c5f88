//! Test helpers for generating unique test data
//!
//! ULID suffixes keep room and player names distinct across tests that share
//! one service.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("room");
/// let b = unique_str("room");
/// assert_ne!(a, b);
/// assert!(a.starts_with("room-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Four distinct player names sharing a prefix.
pub fn seat_names(prefix: &str) -> [String; 4] {
    let tag = Ulid::new();
    [0, 1, 2, 3].map(|i| format!("{prefix}-{i}-{tag}"))
}
