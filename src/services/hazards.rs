use crate::domain::constants::{HazardCode, ALL_FLAGS, CMR_CODES, OTHER_CODES};
use crate::domain::models::Classification;
use indexmap::IndexSet;

/// Collects every flagged code that occurs anywhere in the pages.
///
/// Pages are visited in order and each code is kept at its first appearance;
/// codes first seen on the same page follow [`ALL_FLAGS`] order. Matching is plain
/// substring containment, so `H360FD` on a page also flags `H360` and `H360F`.
pub fn scan_hazard_codes<S: AsRef<str>>(pages: &[S]) -> IndexSet<HazardCode> {
    let mut found = IndexSet::new();
    for page in pages {
        let text = page.as_ref();
        for &code in ALL_FLAGS {
            if text.contains(code) {
                found.insert(code);
            }
        }
    }
    found
}

pub fn classify(found: &IndexSet<HazardCode>) -> Classification {
    Classification {
        cmr: filter_codes(found, CMR_CODES),
        other: filter_codes(found, OTHER_CODES),
    }
}

fn filter_codes(found: &IndexSet<HazardCode>, category: &[HazardCode]) -> Vec<HazardCode> {
    found
        .iter()
        .filter(|code| category.contains(*code))
        .copied()
        .collect()
}
