// src/utils.rs

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}
