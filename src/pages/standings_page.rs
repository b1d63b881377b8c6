use crate::{
    constants::FIRST_SEASON,
    errors::Settle,
    localization::{fill, Labels},
    pages::page::Page,
    providers::standings_api::StandingsApi,
    shapes::{
        banner::Banner,
        standings::{StandingsRow, StandingsTable},
    },
};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::sync::Arc;

/// Controller behind the standings table: read-only, reloaded whenever the
/// season or the reference date changes.
pub struct StandingsPage<S: StandingsApi + Send + Sync> {
    api: Arc<S>,
    labels: &'static Labels,
    page: Page<StandingsRow>,
    year: i32,
    date: NaiveDate,
    reference_date: Option<String>,
    updated_at: Option<String>,
}

impl<S: StandingsApi + Send + Sync> StandingsPage<S> {
    pub fn new(api: Arc<S>, labels: &'static Labels) -> Self {
        let today = Local::now().date_naive();
        Self::starting_at(api, labels, today.year(), today)
    }

    pub fn starting_at(api: Arc<S>, labels: &'static Labels, year: i32, date: NaiveDate) -> Self {
        Self {
            api,
            labels,
            page: Page::new(),
            year: clamp_year(year),
            date,
            reference_date: None,
            updated_at: None,
        }
    }

    pub fn page(&self) -> &Page<StandingsRow> {
        &self.page
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    pub fn reference_date(&self) -> Option<&str> {
        self.reference_date.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.page.clear_banner();
    }

    pub async fn load(&mut self) {
        let labels = self.labels;
        let year = self.year;
        self.page.start_loading(Banner::info(labels.loading_standings));
        self.reference_date = None;
        self.updated_at = None;
        let result = self
            .api
            .get(year, self.date)
            .await
            .settle_or(StandingsTable::default(), "could not load standings")
            .map(|table| {
                self.reference_date = table.reference_date;
                self.updated_at = table.updated_at;
                table.rows
            });
        self.page.finish_loading(
            result,
            |_| Banner::success(fill(labels.standings_of_year, year)),
            Banner::info(labels.no_standings_found),
            |e| Banner::danger(fill(labels.could_not_load_standings, e)),
        );
    }

    pub async fn set_year(&mut self, year: i32) {
        self.year = clamp_year(year);
        self.load().await;
    }

    pub async fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.load().await;
    }

    pub async fn shift_date(&mut self, days: i64) {
        let date = self.date + Duration::days(days);
        self.set_date(date).await;
    }

    /// Table cells in display order, positions numbered from 1.
    pub fn table_rows(&self) -> Vec<[String; 10]> {
        self.page
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                [
                    (i + 1).to_string(),
                    row.team_name.clone(),
                    row.points.to_string(),
                    row.games_played.to_string(),
                    row.wins.to_string(),
                    row.draws.to_string(),
                    row.losses.to_string(),
                    row.goals_for.to_string(),
                    row.goals_against.to_string(),
                    row.goal_difference.to_string(),
                ]
            })
            .collect()
    }
}

/// Keeps a season between the first one on record and the current year.
pub fn clamp_year(year: i32) -> i32 {
    year.clamp(FIRST_SEASON, Local::now().year().max(FIRST_SEASON))
}
