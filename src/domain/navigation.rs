//! Wraparound index stepping for keyboard navigation.
//!
//! These functions are stateless and operate on the length of the current
//! candidate list. An empty list leaves the index untouched; there is
//! nothing to highlight or commit.

/// Steps the highlight one row down with wraparound.
///
/// With no current highlight the first row is highlighted; from the last
/// row the highlight wraps to the first.
///
/// # Arguments
/// * `current` - Current highlight index, if any
/// * `candidate_count` - Length of the filtered candidate list
pub fn next_index(current: Option<usize>, candidate_count: usize) -> Option<usize> {
    if candidate_count == 0 {
        return current;
    }
    match current {
        Some(index) if index + 1 < candidate_count => Some(index + 1),
        Some(_) => Some(0),
        None => Some(0),
    }
}

/// Steps the highlight one row up with wraparound.
///
/// With no current highlight the last row is highlighted; from the first
/// row the highlight wraps to the last.
///
/// # Arguments
/// * `current` - Current highlight index, if any
/// * `candidate_count` - Length of the filtered candidate list
pub fn previous_index(current: Option<usize>, candidate_count: usize) -> Option<usize> {
    if candidate_count == 0 {
        return current;
    }
    match current {
        Some(index) if index > 0 => Some(index - 1),
        _ => Some(candidate_count - 1),
    }
}
