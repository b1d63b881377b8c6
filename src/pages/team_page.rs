use crate::{
    errors::Settle,
    localization::{fill, Labels},
    logging::logger::log_warning,
    pages::{
        dialog::{DialogOutcome, EditDialog},
        page::Page,
    },
    providers::team_api::TeamApi,
    shapes::{banner::Banner, team::TeamEntry},
};
use std::sync::Arc;

/// Controller behind the team list: loads teams and runs the add, edit and
/// delete flows against the backend.
pub struct TeamPage<A: TeamApi + Send + Sync> {
    api: Arc<A>,
    labels: &'static Labels,
    page: Page<TeamEntry>,
}

impl<A: TeamApi + Send + Sync> TeamPage<A> {
    pub fn new(api: Arc<A>, labels: &'static Labels) -> Self {
        Self {
            api,
            labels,
            page: Page::new(),
        }
    }

    pub fn page(&self) -> &Page<TeamEntry> {
        &self.page
    }

    pub fn teams(&self) -> &[TeamEntry] {
        self.page.rows()
    }

    pub fn dismiss_banner(&mut self) {
        self.page.clear_banner();
    }

    pub async fn enter(&mut self) {
        let labels = self.labels;
        self.page.start_loading(Banner::info(labels.loading_teams));
        let result = self.api.list().await.settle_or(vec![], "could not load teams");
        self.page.finish_loading(
            result,
            |n| Banner::success(fill(labels.teams_loaded, n)),
            Banner::info(labels.no_teams_found),
            |e| Banner::danger(fill(labels.could_not_load_teams, e)),
        );
    }

    pub async fn delete(&mut self, index: usize) {
        let labels = self.labels;
        let Some(id) = self.page.rows().get(index).and_then(|t| t.id) else {
            self.page.set_banner(Banner::danger(labels.could_not_delete_team));
            return;
        };
        let previous = self.page.begin_mutation();
        let deleted = self
            .api
            .delete(id)
            .await
            .map(|_| true)
            .settle_or(false, "could not delete team")
            .unwrap_or(false);
        self.page.finish_delete(
            previous,
            index,
            deleted,
            Banner::danger(labels.team_deleted),
            Banner::danger(labels.could_not_delete_team),
        );
    }

    pub async fn create<D: EditDialog<TeamEntry> + Send>(&mut self, dialog: &mut D) {
        let labels = self.labels;
        let draft = TeamEntry::new_empty();
        let candidate = match dialog.edit(&draft, true).await {
            DialogOutcome::Cancelled => {
                self.page.set_banner(Banner::danger(labels.team_not_added));
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
            .settle_or(None, "could not create team");
        self.page.finish_create(
            previous,
            result,
            Banner::success(labels.team_added),
            Banner::danger(labels.could_not_add_team),
        );
    }

    pub async fn update<D: EditDialog<TeamEntry> + Send>(&mut self, index: usize, dialog: &mut D) {
        let labels = self.labels;
        let Some(selected) = self.page.rows().get(index).cloned() else {
            return;
        };
        let Some(selected) = self.refreshed(selected).await else {
            self.page.set_banner(Banner::danger(labels.could_not_update_team));
            return;
        };
        let candidate = match dialog.edit(&selected, false).await {
            DialogOutcome::Cancelled => {
                self.page.set_banner(Banner::danger(labels.team_not_updated));
                return;
            }
            DialogOutcome::Committed(candidate) => candidate,
        };
        let previous = self.page.begin_mutation();
        let result = self
            .api
            .update(&candidate)
            .await
            .settle_or(None, "could not update team");
        self.page.finish_update(
            previous,
            index,
            result,
            Banner::info(labels.team_updated),
            Banner::danger(labels.could_not_update_team),
        );
    }

    /// Re-reads the row before editing; `None` when the backend no longer
    /// knows it.
    async fn refreshed(&self, selected: TeamEntry) -> Option<TeamEntry> {
        let Some(id) = selected.id else {
            return Some(selected);
        };
        match self.api.get(id).await {
            Ok(current) => current,
            Err(e) => {
                log_warning(&format!("could not refresh team {}: {}", id, e));
                Some(selected)
            }
        }
    }
}
