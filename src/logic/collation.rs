use std::cmp::Ordering;

/// Compare strings the way a default-locale collator orders display text.
///
/// Primary: case-folded characters. Secondary: at the first case-only
/// difference, lowercase sorts first. Final: raw code points, so the order
/// is total and distinct strings never compare equal.
///
/// Diacritics are not folded: accented letters order by code point, after
/// the whole ASCII alphabet ("é" sorts after "z"). Catalog names are ASCII
/// in practice.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a
        .cmp(folded_b)
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .unwrap_or(Ordering::Equal)
}
