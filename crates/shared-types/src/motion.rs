use serde::{Deserialize, Deserializer, Serialize};

/// Decode a nullable string as an empty string.
pub(crate) fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept numeric or string identifiers; the backend stores them as integers.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for id, got {other}"
        ))),
    }
}

fn parties_or_null<'de, D>(deserializer: D) -> Result<Vec<Party>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Party>>::deserialize(deserializer)?.unwrap_or_default())
}

fn attorneys_or_null<'de, D>(deserializer: D) -> Result<Vec<Attorney>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Attorney>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A denied motion as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Motion {
    #[serde(default, deserialize_with = "id_from_number_or_string")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub case_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub court: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub docket_number: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub judge: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub motion_type: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub order_date: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub document_number: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub summary: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub order_description: String,
    #[serde(default, deserialize_with = "parties_or_null")]
    pub parties: Vec<Party>,
}

/// A party to the case and the attorneys representing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Party {
    #[serde(default, deserialize_with = "string_or_null")]
    pub party_type: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub party_name: String,
    #[serde(default, deserialize_with = "attorneys_or_null")]
    pub attorneys: Vec<Attorney>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Attorney {
    #[serde(default, deserialize_with = "string_or_null")]
    pub attorney_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub law_firm: String,
}

/// Number of characters of the summary shown on dashboard cards.
pub const SUMMARY_PREVIEW_CHARS: usize = 150;

impl Motion {
    pub fn has_parties(&self) -> bool {
        !self.parties.is_empty()
    }

    /// The summary, or `None` when the backend sent nothing to show.
    pub fn summary_text(&self) -> Option<&str> {
        non_empty(&self.summary)
    }

    pub fn order_description_text(&self) -> Option<&str> {
        non_empty(&self.order_description)
    }

    /// First `max_chars` characters of the summary followed by an ellipsis.
    pub fn summary_preview(&self, max_chars: usize) -> String {
        let head: String = self.summary.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

impl Party {
    pub fn has_attorneys(&self) -> bool {
        !self.attorneys.is_empty()
    }

    /// Heading shown for the party, e.g. "Plaintiff: Acme Corp".
    pub fn heading(&self) -> String {
        format!("{}: {}", self.party_type, self.party_name)
    }
}

impl Attorney {
    /// "Jane Roe (Roe & Partners LLP)".
    pub fn display(&self) -> String {
        format!("{} ({})", self.attorney_name, self.law_firm)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_full_motion() {
        let json = r#"{
            "id": 42,
            "case_name": "Acme Corp v. Widget Inc",
            "court": "S.D.N.Y.",
            "docket_number": "1:24-cv-01234",
            "judge": "Hon. Jane Smith",
            "motion_type": "motion to dismiss denied",
            "order_date": "2025-03-14",
            "document_number": "57",
            "summary": "The court denied the motion.",
            "order_description": "ORDER denying 31 Motion to Dismiss.",
            "parties": [
                {
                    "party_type": "Plaintiff",
                    "party_name": "Acme Corp",
                    "attorneys": [{"attorney_name": "Jane Roe", "law_firm": "Roe LLP"}]
                }
            ]
        }"#;
        let motion: Motion = serde_json::from_str(json).unwrap();
        assert_eq!(motion.id, "42");
        assert_eq!(motion.parties.len(), 1);
        assert_eq!(motion.parties[0].heading(), "Plaintiff: Acme Corp");
        assert_eq!(motion.parties[0].attorneys[0].display(), "Jane Roe (Roe LLP)");
    }

    #[test]
    fn nulls_and_missing_fields_decode_as_empty() {
        let json = r#"{"id": "7", "case_name": null, "summary": null, "parties": null}"#;
        let motion: Motion = serde_json::from_str(json).unwrap();
        assert_eq!(motion.id, "7");
        assert_eq!(motion.case_name, "");
        assert!(motion.summary_text().is_none());
        assert!(motion.order_description_text().is_none());
        assert!(!motion.has_parties());
    }

    #[test]
    fn party_without_attorneys() {
        let party: Party =
            serde_json::from_str(r#"{"party_type": "Defendant", "party_name": "Widget Inc"}"#)
                .unwrap();
        assert!(!party.has_attorneys());
    }

    #[test]
    fn summary_preview_truncates_on_char_boundary() {
        let motion = Motion {
            summary: "é".repeat(200),
            ..Motion::default()
        };
        let preview = motion.summary_preview(SUMMARY_PREVIEW_CHARS);
        assert_eq!(preview.chars().count(), SUMMARY_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn summary_preview_short_summary_still_gets_ellipsis() {
        let motion = Motion {
            summary: "Denied.".into(),
            ..Motion::default()
        };
        assert_eq!(motion.summary_preview(SUMMARY_PREVIEW_CHARS), "Denied....");
    }
}
