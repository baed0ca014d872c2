//! Name ordering for venue lists.
//!
//! Venue names are mostly Portuguese, so plain byte ordering would push
//! "Árvore" after "Zé". Names are compared on a case- and accent-folded key
//! first; the raw strings only break ties, keeping the order total.

use std::cmp::Ordering;

fn fold(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        other => other,
    }
}

fn sort_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase).map(fold)
}

/// Compare two display names the way a Portuguese reader would expect.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(sort_key(b)).then_with(|| a.cmp(b))
}
