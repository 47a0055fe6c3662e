use std::collections::HashSet;
use std::hash::Hash;

/// Returns the elements of `a` that do not appear in `b` (`a \ b`),
/// keeping the order of `a`.
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let seen: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| !seen.contains(x)).cloned().collect()
}
