use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Highest numbered `research_question_N` field scanned on a record.
pub const MAX_RESEARCH_QUESTIONS: u8 = 15;

/// One summarized academic paper, as produced by the extraction pipeline.
///
/// Every field is optional on the wire. Missing or `null` values become empty,
/// a list field given a single string becomes a one-element list, and scalars
/// in text positions keep their JSON text. Keys that are not modelled here
/// (notably `research_question_1` .. `research_question_15`) land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paper {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub publication_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub authors: Vec<String>,
    #[serde(default, rename = "abstract", deserialize_with = "lenient_text")]
    pub abstract_text: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub challenges_and_gaps: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub novelties: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub main_findings: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub contributions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub limitations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub future_work: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub conclusion: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub filename: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A numbered research question pulled out of a [`Paper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchQuestion {
    pub number: u8,
    pub text: String,
}

impl Paper {
    /// Collect `research_question_1` through `research_question_15` in
    /// ascending order, skipping fields that are absent or `null`.
    pub fn research_questions(&self) -> Vec<ResearchQuestion> {
        (1..=MAX_RESEARCH_QUESTIONS)
            .filter_map(|number| {
                let value = self.extra.get(&format!("research_question_{number}"))?;
                if value.is_null() {
                    return None;
                }
                Some(ResearchQuestion {
                    number,
                    text: value_to_text(value),
                })
            })
            .collect()
    }

    pub fn has_research_questions(&self) -> bool {
        (1..=MAX_RESEARCH_QUESTIONS).any(|number| {
            self.extra
                .get(&format!("research_question_{number}"))
                .is_some_and(|v| !v.is_null())
        })
    }

    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }

    /// Title for headers and logs; falls back to the filename.
    pub fn display_title(&self) -> &str {
        if !self.title.trim().is_empty() {
            &self.title
        } else if !self.filename.trim().is_empty() {
            &self.filename
        } else {
            "(untitled)"
        }
    }
}

/// Render a JSON scalar as display text. Strings are used verbatim.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_text).unwrap_or_default())
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(value_to_text)
            .collect(),
        Some(other) => vec![value_to_text(&other)],
    })
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
