//! Front-matter parsing
//!
//! Album files start with a YAML block fenced by `---` lines. Nothing in it
//! is validated: a value of the wrong shape is read as absent instead of
//! failing the build.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// Read any scalar as a string; other shapes become `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

/// Read an integer, accepting numeric strings and whole floats
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Handle both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Sequence(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        other => scalar_to_string(other).into_iter().collect(),
    })
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Front-matter data of an album file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Written by the editor; the file name stays authoritative
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i64>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, body). Exactly one line break after the
    /// closing fence is consumed; the rest of the body is kept verbatim.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some((yaml, body)) = split_fences(content) else {
            return (FrontMatter::default(), content);
        };

        if yaml.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    /// Render as a fenced YAML block followed by `body`
    pub fn to_document(&self, body: &str) -> anyhow::Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("---\n{}---\n{}", yaml, body))
    }
}

/// Split `---\n<yaml>\n---\n<body>`; `None` when there is no fenced block
fn split_fences(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_album_frontmatter() {
        let content = r#"---
slug: kind-of-blue
title: Kind of Blue
artist: Miles Davis
year: 1959
ranking: 1
cover: /images/kind-of-blue.jpg
tags:
  - jazz
  - modal
---

Five tracks, one afternoon.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Kind of Blue"));
        assert_eq!(fm.artist.as_deref(), Some("Miles Davis"));
        assert_eq!(fm.year, Some(1959));
        assert_eq!(fm.ranking, Some(1));
        assert_eq!(fm.cover.as_deref(), Some("/images/kind-of-blue.jpg"));
        assert_eq!(fm.tags, vec!["jazz", "modal"]);
        assert_eq!(body, "\nFive tracks, one afternoon.\n");
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let content = "---\ntitle: Untagged\n---\nBody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Untagged"));
        assert_eq!(fm.artist, None);
        assert_eq!(fm.ranking, None);
        assert!(fm.tags.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_single_string_tag() {
        let (fm, _) = FrontMatter::parse("---\ntags: rock\n---\n");
        assert_eq!(fm.tags, vec!["rock"]);
    }

    #[test]
    fn test_wrong_shapes_read_as_absent() {
        let content = "---\ntitle: [a, b]\nyear: soon\nranking: \"3\"\ntags:\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(fm.year, None);
        assert_eq!(fm.ranking, Some(3));
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_numeric_title_becomes_string() {
        let (fm, _) = FrontMatter::parse("---\ntitle: 1989\n---\n");
        assert_eq!(fm.title.as_deref(), Some("1989"));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a comment.\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let content = "---\ntitle: Oops\nno closing fence";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_yaml_falls_back_to_content() {
        let content = "---\ntitle: [unterminated\n---\nBody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_crlf_fences() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_to_document_skips_absent_fields() {
        let fm = FrontMatter {
            title: Some("Blue".to_string()),
            ranking: Some(4),
            ..Default::default()
        };
        let doc = fm.to_document("Notes\n").unwrap();
        assert!(doc.starts_with("---\n"));
        assert!(doc.contains("title: Blue\n"));
        assert!(!doc.contains("artist"));

        let (parsed, body) = FrontMatter::parse(&doc);
        assert_eq!(parsed, fm);
        assert_eq!(body, "Notes\n");
    }
}
