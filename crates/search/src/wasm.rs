//! WASM bindings for the search engine.

use wasm_bindgen::prelude::*;

/// Search a JSON array of targets and return the result set as JSON.
///
/// # Arguments
/// * `phrase` - Search phrase
/// * `targets_json` - JSON array of strings or `{token, relatedDocument}` objects
/// * `sort` - Sort by descending score
/// * `normalize` - Strip diacritics before matching
/// * `limit` - Maximum results (0 or negative for all)
///
/// # Returns
/// JSON object with `results` and `bestScore`, or `null` for an empty phrase
/// or an unparsable payload
#[wasm_bindgen]
pub fn fuzzy_search(phrase: &str, targets_json: &str, sort: bool, normalize: bool, limit: i32) -> String {
    let options = crate::Options::new()
        .with_sort(sort)
        .with_normalize(normalize)
        .with_limit(i64::from(limit));

    match crate::search_json(phrase, targets_json, &options) {
        Ok(Some(found)) => serde_json::to_string(&found).unwrap_or_else(|_| "null".to_string()),
        Ok(None) | Err(_) => "null".to_string(),
    }
}

/// Normalize a string the way targets and phrases are normalized.
#[wasm_bindgen]
pub fn normalize_text(text: &str, normalize: bool) -> String {
    let options = crate::Options::new().with_normalize(normalize);
    crate::normalize(text, &options).into_iter().collect()
}
