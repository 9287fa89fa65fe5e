//! Selector scoping helpers.
//!
//! Player styles are qualified with the player element's id so that two
//! players on the same page never pick up each other's colors.

/// Prepend `prefix` to every selector.
pub fn prefix<S: AsRef<str>>(selectors: &[S], prefix: &str) -> Vec<String> {
    selectors
        .iter()
        .map(|s| format!("{prefix}{}", s.as_ref()))
        .collect()
}

/// Prefix that scopes a selector to descendants of the player root:
/// `#player .sel-1 .sel-2`.
pub fn descendant_prefix(player_id: &str) -> String {
    format!("#{player_id} ")
}

/// Prefix that binds the first compound selector to the player root
/// itself: `#player.sel-1 .sel-2`.
pub fn extend_prefix(player_id: &str) -> String {
    format!("#{player_id}")
}
