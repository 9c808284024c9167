use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// One contract-like text record plus its dataset annotations.
///
/// Optional fields are defaulted here, at deserialization time, so the
/// engine never has to re-check them at use sites.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default = "default_document_id")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub annotation_sets: Vec<AnnotationSet>,
}

fn default_document_id() -> String {
    "unknown".to_string()
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            annotation_sets: Vec::new(),
        }
    }
}

/// A group of annotations keyed by annotation name.
///
/// Entry order matches the source file, not any map ordering, since
/// finding order downstream depends on it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnnotationSet {
    #[serde(default, deserialize_with = "ordered_annotations")]
    pub annotations: Vec<(String, Annotation)>,
}

/// A single dataset judgment on a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Annotation {
    #[serde(default, deserialize_with = "lenient_choice")]
    pub choice: AnnotationChoice,
}

/// Dataset judgment kinds. Anything the dataset authors did not label
/// with one of the three known choices is `Unrecognized` and emits no
/// finding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnnotationChoice {
    Contradiction,
    Entailment,
    Neutral,
    #[default]
    Unrecognized,
}

impl From<&str> for AnnotationChoice {
    fn from(raw: &str) -> Self {
        match raw {
            "Contradiction" => AnnotationChoice::Contradiction,
            "Entailment" => AnnotationChoice::Entailment,
            "Neutral" => AnnotationChoice::Neutral,
            _ => AnnotationChoice::Unrecognized,
        }
    }
}

/// Deserialize a `choice` value without ever failing: a missing,
/// non-string, or unknown value is `Unrecognized`, matching the "skip
/// silently" contract rather than poisoning the whole document.
fn lenient_choice<'de, D>(deserializer: D) -> Result<AnnotationChoice, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(raw) => AnnotationChoice::from(raw.as_str()),
        _ => AnnotationChoice::Unrecognized,
    })
}

/// Deserialize an annotations map into a key/annotation list, keeping
/// the entries in the order they appear in the source file.
fn ordered_annotations<'de, D>(deserializer: D) -> Result<Vec<(String, Annotation)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedMap;

    impl<'de> Visitor<'de> for OrderedMap {
        type Value = Vec<(String, Annotation)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of annotation name to annotation")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, Annotation>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedMap)
}

/// One item in a risk-analysis result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    DatasetRisk,
    DatasetSafe,
    DatasetNeutral,
    KeywordRisk,
    KeywordSafe,
    NoRisk,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_get_defaults() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.id, "unknown");
        assert_eq!(doc.text, "");
        assert!(doc.annotation_sets.is_empty());
    }

    #[test]
    fn test_annotation_order_follows_source_file() {
        let raw = r#"{
            "annotations": {
                "zeta": {"choice": "Entailment"},
                "alpha": {"choice": "Contradiction"},
                "mid": {"choice": "Neutral"}
            }
        }"#;
        let set: AnnotationSet = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = set.annotations.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_annotation_order_survives_value_roundtrip() {
        // The loader goes through serde_json::Value for shape detection,
        // so order has to survive that path too.
        let raw = r#"{"annotations": {"b": {"choice": "Neutral"}, "a": {"choice": "Neutral"}}}"#;
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        let set: AnnotationSet = serde_json::from_value(value).unwrap();
        let keys: Vec<&str> = set.annotations.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_unknown_choice_is_unrecognized() {
        let ann: Annotation = serde_json::from_str(r#"{"choice": "NotAChoice"}"#).unwrap();
        assert_eq!(ann.choice, AnnotationChoice::Unrecognized);
    }

    #[test]
    fn test_non_string_choice_is_unrecognized() {
        let ann: Annotation = serde_json::from_str(r#"{"choice": 42}"#).unwrap();
        assert_eq!(ann.choice, AnnotationChoice::Unrecognized);

        let ann: Annotation = serde_json::from_str("{}").unwrap();
        assert_eq!(ann.choice, AnnotationChoice::Unrecognized);
    }

    #[test]
    fn test_known_choices_parse() {
        for (raw, expected) in [
            ("Contradiction", AnnotationChoice::Contradiction),
            ("Entailment", AnnotationChoice::Entailment),
            ("Neutral", AnnotationChoice::Neutral),
        ] {
            let ann: Annotation =
                serde_json::from_str(&format!(r#"{{"choice": "{raw}"}}"#)).unwrap();
            assert_eq!(ann.choice, expected);
        }
    }
}
