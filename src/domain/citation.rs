//! Citation records as returned by the citations web service.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::{CITATION_TYPE_THESIS, NO_ABSTRACT_AVAILABLE};

/// Top-level response body of `colleges/{id}/citations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitationsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Citation {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// The service sends `"true"`/`"false"` strings; booleans are accepted too.
    #[serde(default, deserialize_with = "published_flag")]
    pub is_published: bool,
    /// Pre-formatted (IEEE style) citation markup
    #[serde(default)]
    pub formatted: Option<String>,
    #[serde(default)]
    pub published: Option<Published>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub membership: Option<Authorship>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Published {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorship {
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Author>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn published_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => flag,
        Some(Value::String(s)) => s == "true",
        _ => false,
    })
}

impl Author {
    /// IEEE-style short name, e.g. `J. Doe`. `None` without a first name.
    pub fn ieee_name(&self) -> Option<String> {
        let initial = self.first_name.as_deref()?.chars().next()?;
        let last_name = self.last_name.as_deref().unwrap_or_default();
        Some(format!("{}. {}", initial, last_name))
    }
}

impl Citation {
    /// Formatted text, empty when absent
    pub fn formatted_text(&self) -> &str {
        self.formatted.as_deref().unwrap_or_default()
    }

    /// Published, already formatted, non-thesis citations are listed.
    pub fn is_listable(&self) -> bool {
        self.kind != CITATION_TYPE_THESIS && self.is_published && !self.formatted_text().is_empty()
    }

    /// Year component of the publication date (`2019-04-01` → `2019`)
    pub fn year(&self) -> String {
        self.published
            .as_ref()
            .and_then(|p| p.date.as_deref())
            .and_then(|date| date.split('-').next())
            .unwrap_or_default()
            .to_string()
    }

    /// Abstract, or the placeholder text when none is available
    pub fn abstract_or_placeholder(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.abstract_text.as_deref())
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_ABSTRACT_AVAILABLE)
    }

    pub fn authors(&self) -> &[Author] {
        self.membership
            .as_ref()
            .map(|m| m.members.as_slice())
            .unwrap_or_default()
    }
}

/// Citations published in one year
#[derive(Debug, Clone)]
pub struct YearGroup {
    pub year: String,
    pub citations: Vec<Citation>,
}

/// Keep listable citations and group them by year, newest year first.
///
/// Citations inside a year keep their source order.
pub fn group_by_year(citations: Vec<Citation>) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();

    for citation in citations.into_iter().filter(Citation::is_listable) {
        let year = citation.year();
        match groups.iter().position(|g| g.year == year) {
            Some(idx) => groups[idx].citations.push(citation),
            None => groups.push(YearGroup {
                year,
                citations: vec![citation],
            }),
        }
    }

    groups.sort_by(|a, b| year_key(&b.year).cmp(&year_key(&a.year)));
    groups
}

/// Numeric years order numerically and above any non-numeric year, which
/// fall back to text order.
fn year_key(year: &str) -> (Option<i64>, &str) {
    (year.parse().ok(), year)
}
