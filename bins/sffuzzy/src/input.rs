//! Reading candidate targets from stdin or a file.

use anyhow::{Context, Result};
use clap::ValueEnum;
use sffuzzy::Target;
use std::io::Read;
use std::path::Path;

/// Shape of the candidate input
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One target per line
    Lines,
    /// JSON array of strings or {token, relatedDocument} objects
    Json,
}

/// Read the whole input, from `path` or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file {}", p.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read targets from stdin")?;
            Ok(content)
        }
    }
}

/// Parse raw input into targets.
///
/// Line input is trimmed as a whole, so a trailing newline does not add an
/// empty target. With a delimiter, each line is split once into token and
/// related document.
pub fn parse_targets(content: &str, format: InputFormat, delimiter: Option<&str>) -> Result<Vec<Target>> {
    match format {
        InputFormat::Json => {
            sffuzzy::parse_targets_json(content).context("Failed to parse JSON targets")
        }
        InputFormat::Lines => Ok(content
            .trim()
            .lines()
            .map(|line| split_line(line, delimiter))
            .collect()),
    }
}

fn split_line(line: &str, delimiter: Option<&str>) -> Target {
    match delimiter.and_then(|d| line.split_once(d)) {
        Some((token, document)) => Target::new(token).with_document(document),
        None => Target::new(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let targets = parse_targets("Paris;France\nLyon;France\n", InputFormat::Lines, None).unwrap();
        assert_eq!(targets, vec![Target::new("Paris;France"), Target::new("Lyon;France")]);
    }

    #[test]
    fn test_parse_lines_crlf() {
        let targets = parse_targets("a\r\nb\r\n", InputFormat::Lines, None).unwrap();
        assert_eq!(targets, vec![Target::new("a"), Target::new("b")]);
    }

    #[test]
    fn test_parse_lines_keeps_inner_blank_lines() {
        let targets = parse_targets("a\n\nb", InputFormat::Lines, None).unwrap();
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[1], Target::new(""));
    }

    #[test]
    fn test_parse_empty_input() {
        let targets = parse_targets("  \n", InputFormat::Lines, None).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_parse_lines_with_delimiter() {
        let targets = parse_targets("super du\tC\nsuper man", InputFormat::Lines, Some("\t")).unwrap();
        assert_eq!(targets[0], Target::new("super du").with_document("C"));
        assert_eq!(targets[1], Target::new("super man"));
    }

    #[test]
    fn test_parse_json() {
        let targets = parse_targets(r#"["a", {"token": "b", "relatedDocument": "2"}]"#, InputFormat::Json, None).unwrap();
        assert_eq!(targets[1], Target::new("b").with_document("2"));
    }

    #[test]
    fn test_parse_json_invalid() {
        let err = parse_targets("not json", InputFormat::Json, None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON targets"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/targets.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
