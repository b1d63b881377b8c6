use crate::{
    errors::Settle,
    localization::{fill, Labels},
    logging::logger::log_warning,
    pages::{
        dialog::{DialogOutcome, EditDialog},
        page::Page,
        standings_page::clamp_year,
    },
    providers::{match_api::MatchApi, team_api::TeamApi},
    shapes::{
        banner::Banner,
        r#match::{MatchEntry, MatchFilter},
        team::TeamEntry,
    },
};
use chrono::{Datelike, Local};
use std::sync::Arc;

/// Controller behind the match list. Besides the matches it keeps the team
/// list, which feeds the team filter and the dialog's team selectors.
pub struct MatchPage<M: MatchApi + Send + Sync, T: TeamApi + Send + Sync> {
    api: Arc<M>,
    team_api: Arc<T>,
    labels: &'static Labels,
    page: Page<MatchEntry>,
    teams: Arc<[TeamEntry]>,
    filter: MatchFilter,
}

impl<M: MatchApi + Send + Sync, T: TeamApi + Send + Sync> MatchPage<M, T> {
    pub fn new(api: Arc<M>, team_api: Arc<T>, labels: &'static Labels) -> Self {
        Self {
            api,
            team_api,
            labels,
            page: Page::new(),
            teams: Arc::from(Vec::new()),
            filter: MatchFilter::All,
        }
    }

    pub fn page(&self) -> &Page<MatchEntry> {
        &self.page
    }

    pub fn matches(&self) -> &[MatchEntry] {
        self.page.rows()
    }

    pub fn teams(&self) -> Arc<[TeamEntry]> {
        self.teams.clone()
    }

    #[cfg(test)]
    pub fn filter(&self) -> MatchFilter {
        self.filter
    }

    pub fn dismiss_banner(&mut self) {
        self.page.clear_banner();
    }

    pub async fn enter(&mut self) {
        let labels = self.labels;
        self.page.start_loading(Banner::info(labels.loading_matches));
        let matches = self
            .api
            .list(self.filter)
            .await
            .settle_or(vec![], "could not load matches");
        let teams = self
            .team_api
            .list()
            .await
            .settle_or(vec![], "could not load teams");
        let result = match (matches, teams) {
            (Ok(matches), Ok(teams)) => {
                self.teams = Arc::from(teams);
                Ok(matches)
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        self.page.finish_loading(
            result,
            |n| Banner::success(fill(labels.matches_loaded, n)),
            Banner::info(labels.no_matches_found),
            |e| Banner::danger(fill(labels.could_not_load_matches, e)),
        );
    }

    /// Re-lists the matches for `filter`. The banner is left alone unless the
    /// response cannot be read.
    pub async fn set_filter(&mut self, filter: MatchFilter) {
        let filter = match filter {
            MatchFilter::Team(id) if !self.teams.iter().any(|t| t.id == Some(id)) => {
                MatchFilter::All
            }
            MatchFilter::Season(year) => MatchFilter::Season(clamp_year(year)),
            other => other,
        };
        self.filter = filter;
        match self
            .api
            .list(filter)
            .await
            .settle_or(vec![], "could not filter matches")
        {
            Ok(matches) => self.page.replace_rows(matches),
            Err(e) => self
                .page
                .set_banner(Banner::danger(fill(self.labels.could_not_load_matches, e))),
        }
    }

    /// Moves the filter one step through "all" followed by every known team.
    pub async fn cycle_filter(&mut self) {
        let next = match self.filter {
            MatchFilter::All => self.teams.first().and_then(|t| t.id),
            MatchFilter::Team(current) => self
                .teams
                .iter()
                .skip_while(|t| t.id != Some(current))
                .nth(1)
                .and_then(|t| t.id),
            MatchFilter::Season(_) => None,
        };
        self.set_filter(next.map(MatchFilter::Team).unwrap_or(MatchFilter::All))
            .await;
    }

    /// Steps the season filter by `delta` years. Any other filter starts
    /// from the current season.
    pub async fn shift_season(&mut self, delta: i32) {
        let year = match self.filter {
            MatchFilter::Season(year) => year + delta,
            _ => Local::now().year(),
        };
        self.set_filter(MatchFilter::Season(year)).await;
    }

    pub fn filter_label(&self) -> String {
        match self.filter {
            MatchFilter::All => self.labels.all_teams.to_string(),
            MatchFilter::Team(id) => self
                .teams
                .iter()
                .find(|t| t.id == Some(id))
                .map(|t| t.name.clone())
                .unwrap_or_else(|| id.to_string()),
            MatchFilter::Season(year) => fill(self.labels.season, year),
        }
    }

    pub async fn delete(&mut self, index: usize) {
        let labels = self.labels;
        let Some(id) = self.page.rows().get(index).and_then(|m| m.id) else {
            self.page.set_banner(Banner::danger(labels.could_not_delete_match));
            return;
        };
        let previous = self.page.begin_mutation();
        let deleted = self
            .api
            .delete(id)
            .await
            .map(|_| true)
            .settle_or(false, "could not delete match")
            .unwrap_or(false);
        self.page.finish_delete(
            previous,
            index,
            deleted,
            Banner::danger(labels.match_deleted),
            Banner::danger(labels.could_not_delete_match),
        );
    }

    pub async fn create<D: EditDialog<MatchEntry> + Send>(&mut self, dialog: &mut D) {
        let labels = self.labels;
        let draft = MatchEntry::new_empty();
        let candidate = match dialog.edit(&draft, true).await {
            DialogOutcome::Cancelled => {
                self.page.set_banner(Banner::danger(labels.match_not_added));
                return;
            }
            DialogOutcome::Committed(candidate) => candidate,
        };
        let previous = self.page.begin_mutation();
        let result = self
            .api
            .create(&candidate)
            .await
            .map(Some)
            .settle_or(None, "could not create match");
        self.page.finish_create(
            previous,
            result,
            Banner::success(labels.match_added),
            Banner::danger(labels.could_not_add_match),
        );
    }

    pub async fn update<D: EditDialog<MatchEntry> + Send>(&mut self, index: usize, dialog: &mut D) {
        let labels = self.labels;
        let Some(selected) = self.page.rows().get(index).cloned() else {
            return;
        };
        let Some(selected) = self.refreshed(selected).await else {
            self.page.set_banner(Banner::danger(labels.could_not_update_match));
            return;
        };
        let candidate = match dialog.edit(&selected, false).await {
            DialogOutcome::Cancelled => {
                self.page.set_banner(Banner::danger(labels.match_not_updated));
                return;
            }
            DialogOutcome::Committed(candidate) => candidate,
        };
        let previous = self.page.begin_mutation();
        let result = self
            .api
            .update(&candidate)
            .await
            .settle_or(None, "could not update match");
        self.page.finish_update(
            previous,
            index,
            result,
            Banner::info(labels.match_updated),
            Banner::danger(labels.could_not_update_match),
        );
    }

    /// The backend's current version of `selected`, so the dialog never opens
    /// on stale values. `None` when the record was deleted meanwhile; any
    /// other failure falls back to the row as listed.
    async fn refreshed(&self, selected: MatchEntry) -> Option<MatchEntry> {
        let Some(id) = selected.id else {
            return Some(selected);
        };
        match self.api.get(id).await {
            Ok(current) => current,
            Err(e) => {
                log_warning(&format!("could not refresh match {}: {}", id, e));
                Some(selected)
            }
        }
    }
}
