use crate::{
    localization::Labels,
    screens::{
        components::{date_picker::DatePicker, select::Select, text_box::TextBox},
        forms::EntityForm,
    },
    shapes::{r#match::MatchEntry, team::TeamEntry},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::{fmt, sync::Arc};

/// A team as offered by the home/away selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOption {
    pub id: u64,
    pub name: String,
}

impl fmt::Display for TeamOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const DATE: usize = 0;
const HOME_TEAM: usize = 1;
const HOME_GOALS: usize = 2;
const AWAY_TEAM: usize = 3;
const AWAY_GOALS: usize = 4;
const VENUE: usize = 5;

#[derive(Debug)]
pub struct MatchForm {
    labels: &'static Labels,
    teams: Arc<[TeamEntry]>,
    field: usize,
    date: DatePicker,
    home_team: Select<TeamOption>,
    home_goals: TextBox,
    away_team: Select<TeamOption>,
    away_goals: TextBox,
    venue: TextBox,
}

impl MatchForm {
    pub fn new(labels: &'static Labels, teams: Arc<[TeamEntry]>) -> Self {
        let options: Vec<TeamOption> = teams
            .iter()
            .filter_map(|t| {
                t.id.map(|id| TeamOption {
                    id,
                    name: t.name.clone(),
                })
            })
            .collect();
        Self {
            labels,
            teams,
            field: DATE,
            date: DatePicker::new(labels.date),
            home_team: Select::new(labels.home_team, options.clone()),
            home_goals: TextBox::numeric(labels.home_goals),
            away_team: Select::new(labels.away_team, options),
            away_goals: TextBox::numeric(labels.away_goals),
            venue: TextBox::new(labels.venue),
        }
    }

    fn team(&self, id: u64) -> Option<TeamEntry> {
        self.teams.iter().find(|t| t.id == Some(id)).cloned()
    }
}

impl EntityForm<MatchEntry> for MatchForm {
    fn title(&self, new_entry: bool) -> &'static str {
        if new_entry {
            self.labels.new_match
        } else {
            self.labels.edit_match
        }
    }

    fn load(&mut self, entry: &MatchEntry) {
        self.date.set_value(entry.date);
        self.home_team.select_by(|t| t.id == entry.home_team_id);
        self.away_team.select_by(|t| t.id == entry.away_team_id);
        self.home_goals.set_value(&entry.home_goals.to_string());
        self.away_goals.set_value(&entry.away_goals.to_string());
        self.venue.set_value(&entry.venue);
    }

    fn field_count(&self) -> usize {
        6
    }

    fn focus(&mut self, field: usize) {
        if self.field == DATE && field != DATE {
            self.date.handle_tab();
        }
        self.field = field;
        self.date.writing_mode = field == DATE;
        self.home_team.writing_mode = field == HOME_TEAM;
        self.home_goals.writing_mode = field == HOME_GOALS;
        self.away_team.writing_mode = field == AWAY_TEAM;
        self.away_goals.writing_mode = field == AWAY_GOALS;
        self.venue.writing_mode = field == VENUE;
    }

    fn handle_char(&mut self, c: char) {
        self.date.handle_char(c);
        self.home_goals.handle_char(c);
        self.away_goals.handle_char(c);
        self.venue.handle_char(c);
    }

    fn handle_backspace(&mut self) {
        self.date.handle_backspace();
        self.home_goals.handle_backspace();
        self.away_goals.handle_backspace();
        self.venue.handle_backspace();
    }

    fn handle_up(&mut self) {
        self.home_team.handle_up();
        self.away_team.handle_up();
    }

    fn handle_down(&mut self) {
        self.home_team.handle_down();
        self.away_team.handle_down();
    }

    fn write(&self, entry: &mut MatchEntry) {
        if let Some(date) = self.date.get_selected_value() {
            entry.date = date;
        }
        if let Some(home) = self.home_team.get_selected_value() {
            entry.home_team_id = home.id;
            entry.home_team = self.team(home.id);
        }
        if let Some(away) = self.away_team.get_selected_value() {
            entry.away_team_id = away.id;
            entry.away_team = self.team(away.id);
        }
        entry.home_goals = self.home_goals.numeric_value();
        entry.away_goals = self.away_goals.numeric_value();
        entry.venue = self.venue.value().trim().to_string();
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // date
                Constraint::Min(3),    // teams
                Constraint::Length(3), // goals
                Constraint::Length(3), // venue
            ])
            .split(area);
        let teams = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        let goals = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        self.date.render(f, rows[0]);
        self.home_team.render(f, teams[0]);
        self.away_team.render(f, teams[1]);
        self.home_goals.render(f, goals[0]);
        self.away_goals.render(f, goals[1]);
        self.venue.render(f, rows[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::EN;
    use chrono::NaiveDate;

    fn teams() -> Arc<[TeamEntry]> {
        Arc::from(vec![
            TeamEntry {
                id: Some(1),
                name: "Flamengo".into(),
                ..Default::default()
            },
            TeamEntry {
                id: Some(2),
                name: "Vasco".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn writes_selected_teams_and_goals() {
        let mut form = MatchForm::new(&EN, teams());
        let mut entry = MatchEntry::new_empty();
        entry.date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        form.load(&entry);

        form.focus(AWAY_TEAM);
        form.handle_down();
        form.focus(HOME_GOALS);
        form.handle_backspace();
        form.handle_char('2');
        form.focus(AWAY_GOALS);
        form.handle_backspace();
        form.handle_char('1');
        form.focus(VENUE);
        "Maracanã".chars().for_each(|c| form.handle_char(c));

        form.write(&mut entry);
        assert_eq!(entry.home_team_id, 1);
        assert_eq!(entry.away_team_id, 2);
        assert_eq!(entry.away_team.as_ref().map(|t| t.name.as_str()), Some("Vasco"));
        assert_eq!((entry.home_goals, entry.away_goals), (2, 1));
        assert_eq!(entry.venue, "Maracanã");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn existing_match_preselects_its_teams() {
        let mut form = MatchForm::new(&EN, teams());
        let mut entry = MatchEntry::new_empty();
        entry.home_team_id = 2;
        entry.away_team_id = 1;
        form.load(&entry);
        let mut written = entry.clone();
        form.write(&mut written);
        assert_eq!((written.home_team_id, written.away_team_id), (2, 1));
    }
}
