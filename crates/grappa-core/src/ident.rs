//! Shortest-free-substring id allocation

/// Find the shortest substring of `full_hash` for which `taken` is false.
///
/// Candidates are enumerated in increasing length starting at 2, and
/// left to right within a length. The full hash itself is never a
/// candidate, and no candidate includes the final character. Returns
/// `None` when every candidate is already taken.
pub fn shortest_free_id<F>(full_hash: &str, taken: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    for size in 2..full_hash.len() {
        for pos in 0..full_hash.len() - size {
            let candidate = &full_hash[pos..pos + size];
            if !taken(candidate) {
                return Some(candidate.to_string());
            }
        }
    }
    None
}
