use crate::{
    errors::{ApiError, ApiResult},
    providers::http::backend::decode,
    shapes::{r#match::MatchEntry, team::TeamEntry},
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

/// A match exactly as the backend sends it.
#[derive(Debug, Deserialize)]
pub struct RawMatch {
    pub id: u64,
    #[serde(rename = "data")]
    pub date: Value,
    #[serde(rename = "id_time_casa")]
    pub home_team_id: u64,
    #[serde(rename = "gols_time_casa")]
    pub home_goals: u32,
    #[serde(rename = "id_time_visitante")]
    pub away_team_id: u64,
    #[serde(rename = "gols_time_visitante")]
    pub away_goals: u32,
    #[serde(rename = "estadio", default)]
    pub venue: Option<String>,
    #[serde(rename = "time_casa", alias = "timeCasa", default)]
    pub home_team: Option<TeamEntry>,
    #[serde(rename = "time_visitante", alias = "timeVisitante", default)]
    pub away_team: Option<TeamEntry>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TryFrom<RawMatch> for MatchEntry {
    type Error = ApiError;

    fn try_from(raw: RawMatch) -> Result<Self, Self::Error> {
        Ok(MatchEntry {
            id: Some(raw.id),
            date: parse_date(&raw.date)?,
            home_team_id: raw.home_team_id,
            home_goals: raw.home_goals,
            away_team_id: raw.away_team_id,
            away_goals: raw.away_goals,
            venue: raw.venue.unwrap_or_default(),
            home_team: raw.home_team,
            away_team: raw.away_team,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

/// Reads the calendar date out of an ISO-8601 value, ignoring any time part.
/// Only four-digit years are accepted.
pub fn parse_date(value: &Value) -> ApiResult<NaiveDate> {
    let text = value
        .as_str()
        .ok_or_else(|| ApiError::Construction(format!("date is not a string: {}", value)))?;
    let date_part = text.split(['T', ' ']).next().unwrap_or_default();
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| ApiError::Construction(format!("invalid date '{}': {}", text, e)))?;
    if !(0..=9999).contains(&date.year()) {
        return Err(ApiError::Construction(format!("date out of range: '{}'", text)));
    }
    Ok(date)
}

pub fn decode_match(body: &str) -> ApiResult<MatchEntry> {
    decode::<RawMatch>(body)?.try_into()
}

pub fn decode_matches(body: &str) -> ApiResult<Vec<MatchEntry>> {
    decode::<Vec<RawMatch>>(body)?
        .into_iter()
        .map(MatchEntry::try_from)
        .collect()
}
