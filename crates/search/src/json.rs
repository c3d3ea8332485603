//! JSON boundary for callers that exchange targets and results as text.

use crate::cache::Target;
use crate::error::Result;
use crate::search::{search_once, SearchResultSet};
use crate::Options;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum TargetPayload {
    Plain(String),
    Document(Target),
}

impl From<TargetPayload> for Target {
    fn from(payload: TargetPayload) -> Self {
        match payload {
            TargetPayload::Plain(token) => Target::new(token),
            TargetPayload::Document(target) => target,
        }
    }
}

/// Parse a JSON array of targets.
///
/// Items may be plain strings or `{"token": ..., "relatedDocument": ...}`
/// objects, mixed freely.
///
/// # Example
/// ```
/// let targets = sffuzzy::parse_targets_json(
///     r#"["Lyon", {"token": "Nice", "relatedDocument": "06"}]"#,
/// ).unwrap();
/// assert_eq!(targets[1].related_document.as_deref(), Some("06"));
/// ```
pub fn parse_targets_json(json: &str) -> Result<Vec<Target>> {
    let payload: Vec<TargetPayload> = serde_json::from_str(json)?;
    Ok(payload.into_iter().map(Target::from).collect())
}

/// Parse `targets_json` and search it once.
///
/// `Ok(None)` is the empty-phrase signal of [`search`](crate::search).
pub fn search_json(
    phrase: &str,
    targets_json: &str,
    options: &Options,
) -> Result<Option<SearchResultSet>> {
    let targets = parse_targets_json(targets_json)?;
    Ok(search_once(phrase, targets, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchError;

    #[test]
    fn test_parse_plain_strings() {
        let targets = parse_targets_json(r#"["super man", "super du"]"#).unwrap();
        assert_eq!(targets, vec![Target::new("super man"), Target::new("super du")]);
    }

    #[test]
    fn test_parse_documents() {
        let targets =
            parse_targets_json(r#"[{"token": "super du", "relatedDocument": "C"}]"#).unwrap();
        assert_eq!(targets, vec![Target::new("super du").with_document("C")]);
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_targets_json(r#"{"token": "not an array"}"#).unwrap_err();
        assert!(matches!(err, SearchError::InvalidTargets(_)));
        assert!(err.to_string().starts_with("Invalid targets payload"));
    }

    #[test]
    fn test_search_json() {
        let found = search_json("perdu", r#"["super man", "super du"]"#, &Options::new())
            .unwrap()
            .unwrap();
        assert_eq!(found.results[0].target, "super du");
    }

    #[test]
    fn test_search_json_empty_phrase() {
        let found = search_json("", r#"["super du"]"#, &Options::new()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_results_serialize_camel_case() {
        let found = search_json("paris", r#"["Paris"]"#, &Options::new())
            .unwrap()
            .unwrap();
        let value = serde_json::to_value(&found).unwrap();
        assert_eq!(value["bestScore"], 9);
        assert_eq!(value["results"][0]["matchCount"], 5);
        assert!(value["results"][0].get("relatedDocument").is_none());
    }
}
