use crate::shapes::team::TeamEntry;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub id: Option<u64>,
    pub date: NaiveDate,
    pub home_team_id: u64,
    pub home_goals: u32,
    pub away_team_id: u64,
    pub away_goals: u32,
    pub venue: String,
    pub home_team: Option<TeamEntry>,
    pub away_team: Option<TeamEntry>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Request body for match writes; the date travels as `YYYY-MM-DD`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MatchPayload<'a> {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "id_time_casa")]
    pub home_team_id: u64,
    #[serde(rename = "gols_time_casa")]
    pub home_goals: u32,
    #[serde(rename = "id_time_visitante")]
    pub away_team_id: u64,
    #[serde(rename = "gols_time_visitante")]
    pub away_goals: u32,
    #[serde(rename = "estadio")]
    pub venue: &'a str,
}

/// Which matches a list request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFilter {
    #[default]
    All,
    /// Matches where the team plays home or away.
    Team(u64),
    /// Matches dated within the calendar year.
    Season(i32),
}

impl MatchFilter {
    /// First and last day covered by a season filter.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            MatchFilter::Season(year) => Some((
                NaiveDate::from_ymd_opt(*year, 1, 1)?,
                NaiveDate::from_ymd_opt(*year, 12, 31)?,
            )),
            _ => None,
        }
    }
}

impl MatchEntry {
    pub fn new_empty() -> Self {
        Self {
            id: None,
            date: Local::now().date_naive(),
            home_team_id: 0,
            home_goals: 0,
            away_team_id: 0,
            away_goals: 0,
            venue: String::new(),
            home_team: None,
            away_team: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn payload(&self) -> MatchPayload<'_> {
        MatchPayload {
            date: self.date.format("%Y-%m-%d").to_string(),
            home_team_id: self.home_team_id,
            home_goals: self.home_goals,
            away_team_id: self.away_team_id,
            away_goals: self.away_goals,
            venue: &self.venue,
        }
    }

    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// `"<home> 2 x 1 <away>"`; falls back to the given placeholders when the
    /// backend did not embed the teams.
    pub fn score_display(&self, home_placeholder: &str, away_placeholder: &str) -> String {
        let home = self
            .home_team
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or(home_placeholder);
        let away = self
            .away_team
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or(away_placeholder);
        format!(
            "{} {} x {} {}",
            home, self.home_goals, self.away_goals, away
        )
    }
}
