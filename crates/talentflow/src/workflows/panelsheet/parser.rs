use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::normalizer::normalize_interviewer;

#[derive(Debug)]
pub(crate) struct PanelRecord {
    pub(crate) interviewer: String,
    pub(crate) technical: u8,
    pub(crate) behavioral: u8,
    pub(crate) culture: u8,
    pub(crate) technical_comments: String,
    pub(crate) behavioral_comments: String,
    pub(crate) culture_comments: String,
    pub(crate) submitted_at: Option<NaiveDateTime>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<PanelRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<PanelRow>() {
        let row = record?;
        let interviewer = normalize_interviewer(&row.interviewer);
        let submitted_at = row.submitted_at.as_deref().and_then(parse_datetime);

        records.push(PanelRecord {
            interviewer,
            technical: row.technical,
            behavioral: row.behavioral,
            culture: row.culture,
            technical_comments: row.technical_comments.unwrap_or_default(),
            behavioral_comments: row.behavioral_comments.unwrap_or_default(),
            culture_comments: row.culture_comments.unwrap_or_default(),
            submitted_at,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct PanelRow {
    #[serde(rename = "Interviewer")]
    interviewer: String,
    #[serde(rename = "Technical")]
    technical: u8,
    #[serde(rename = "Behavioral")]
    behavioral: u8,
    #[serde(rename = "Culture")]
    culture: u8,
    #[serde(
        rename = "Technical Comments",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    technical_comments: Option<String>,
    #[serde(
        rename = "Behavioral Comments",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    behavioral_comments: Option<String>,
    #[serde(
        rename = "Culture Comments",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    culture_comments: Option<String>,
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    submitted_at: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
