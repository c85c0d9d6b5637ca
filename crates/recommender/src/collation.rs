//! Locale-aware string ordering for the tie-break.
//!
//! Uses the Unicode root collation (the order `localeCompare` uses with no
//! locale): base letters first, then accents, then case, with punctuation
//! ahead of digits and digits ahead of letters. Strings the collator ranks
//! equal fall back to code point order so the result is a total order.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compare two identifiers the way a user would sort them alphabetically.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
