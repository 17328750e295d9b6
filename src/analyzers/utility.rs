use std::collections::HashMap;
use std::hash::Hash;

/// Counts each distinct value, most frequent first.
///
/// Values with equal counts keep the order in which they first appeared.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // Stable sort, so ties stay in first-appearance order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The most frequent value; ties go to the value seen first. `None` for
/// empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}
