//! Candidate list derivation.
//!
//! The filter engine is a pure function of the current query and selection:
//! an option is a candidate when its label contains the query as a
//! case-insensitive substring, and (in multi-select mode) it is not already
//! selected. Recomputed on every state change; the option set is assumed
//! small, so no caching.

use crate::options::OptionList;
use crate::state::SelectionState;

/// Computes the ordered candidate list for the current state.
///
/// # Arguments
/// * `options` - The static option source
/// * `query` - Current filter text (empty matches everything)
/// * `selection` - Currently chosen options
/// * `multi_select` - Whether already-selected options are excluded
///
/// # Returns
/// Indices into `options`, in source order.
pub fn filter_candidates(
    options: &OptionList,
    query: &str,
    selection: &SelectionState,
    multi_select: bool,
) -> Vec<usize> {
    let needle = query.to_lowercase();

    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.label.to_lowercase().contains(&needle))
        .filter(|(_, option)| !multi_select || !selection.contains_value(&option.value))
        .map(|(index, _)| index)
        .collect()
}
