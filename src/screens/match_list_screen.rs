use std::sync::Arc;

use crate::{
    localization::Labels,
    pages::{match_page::MatchPage, page::PageState},
    providers::{match_api::MatchApi, team_api::TeamApi},
    screens::{
        components::{navigation_footer::NavigationFooter, notify_banner::NotifyBanner},
        edit_dialog::TerminalDialog,
        forms::match_form::MatchForm,
        screen::{
            clamp_selection, move_selection, render_placeholder, AppAction, Renderable,
            ScreenAsync, Tui,
        },
    },
    shapes::{
        enums::ScreenActionEnum, keybinding::KeyBindings, r#match::MatchEntry, settings::Settings,
    },
};
use async_trait::async_trait;
use crokey::{crossterm::event::KeyEvent, Combiner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const ACTIONS: [ScreenActionEnum; 11] = [
    ScreenActionEnum::Previous,
    ScreenActionEnum::Next,
    ScreenActionEnum::New,
    ScreenActionEnum::Edit,
    ScreenActionEnum::Delete,
    ScreenActionEnum::Filter,
    ScreenActionEnum::YearUp,
    ScreenActionEnum::YearDown,
    ScreenActionEnum::Reload,
    ScreenActionEnum::Back,
    ScreenActionEnum::Quit,
];

pub struct MatchListScreen<M: MatchApi + Send + Sync, T: TeamApi + Send + Sync> {
    page: MatchPage<M, T>,
    labels: &'static Labels,
    keybindings: KeyBindings,
    screen_key_bindings: KeyBindings,
    combiner: Combiner,
    list_state: ListState,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
}

impl<M: MatchApi + Send + Sync, T: TeamApi + Send + Sync> MatchListScreen<M, T> {
    pub fn new(settings: &Settings, api: Arc<M>, team_api: Arc<T>) -> Self {
        let labels = settings.labels();
        MatchListScreen {
            page: MatchPage::new(api, team_api, labels),
            labels,
            keybindings: settings.keybindings.clone(),
            screen_key_bindings: settings.keybindings.slice(&ACTIONS),
            combiner: Combiner::default(),
            list_state: ListState::default(),
            notify_message: NotifyBanner::new(labels),
            footer: NavigationFooter::new(&settings.keybindings, &ACTIONS),
        }
    }

    fn form(&self) -> MatchForm {
        MatchForm::new(self.labels, self.page.teams())
    }

    async fn add_match(&mut self, tui: &mut Tui) {
        let form = self.form();
        let mut dialog: TerminalDialog<MatchEntry, _> =
            TerminalDialog::new(tui, self.labels, &self.keybindings, form);
        self.page.create(&mut dialog).await;
        let len = self.page.matches().len();
        self.list_state.select(len.checked_sub(1));
    }

    async fn edit_match(&mut self, tui: &mut Tui) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let form = self.form();
        let mut dialog: TerminalDialog<MatchEntry, _> =
            TerminalDialog::new(tui, self.labels, &self.keybindings, form);
        self.page.update(index, &mut dialog).await;
    }

    fn render_filter(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", self.labels.filter),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.page.filter_label(), Style::default().fg(Color::Cyan)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}

#[async_trait]
impl<M: MatchApi + Send + Sync, T: TeamApi + Send + Sync> ScreenAsync for MatchListScreen<M, T> {
    async fn handle_key(&mut self, key: KeyEvent, tui: &mut Tui) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        let action = self.screen_key_bindings.get(key_combination).copied();
        if action.is_some() {
            self.page.dismiss_banner();
        }
        let len = self.page.matches().len();
        match action {
            Some(ScreenActionEnum::Next) => move_selection(&mut self.list_state, len, true),
            Some(ScreenActionEnum::Previous) => move_selection(&mut self.list_state, len, false),
            Some(ScreenActionEnum::New) => self.add_match(tui).await,
            Some(ScreenActionEnum::Edit) => self.edit_match(tui).await,
            Some(ScreenActionEnum::Delete) => {
                if let Some(index) = self.list_state.selected() {
                    self.page.delete(index).await;
                }
            }
            Some(ScreenActionEnum::Filter) => {
                self.page.cycle_filter().await;
                self.list_state.select(Some(0));
            }
            Some(ScreenActionEnum::YearUp) => {
                self.page.shift_season(1).await;
                self.list_state.select(Some(0));
            }
            Some(ScreenActionEnum::YearDown) => {
                self.page.shift_season(-1).await;
                self.list_state.select(Some(0));
            }
            Some(ScreenActionEnum::Reload) => self.refresh_data().await,
            Some(ScreenActionEnum::Back) => return AppAction::Back(true),
            Some(ScreenActionEnum::Quit) => return AppAction::Quit(Ok(())),
            _ => {}
        }
        clamp_selection(&mut self.list_state, self.page.matches().len());
        AppAction::None
    }

    async fn refresh_data(&mut self) {
        self.page.enter().await;
        clamp_selection(&mut self.list_state, self.page.matches().len());
    }
}

impl<M: MatchApi + Send + Sync, T: TeamApi + Send + Sync> Renderable for MatchListScreen<M, T> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.notify_message
            .render(f, footer_right, self.page.page().banner());
        self.footer.render(f, footer_left);
        let area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(body);
        self.render_filter(f, area[0]);
        if let PageState::LoadError(message) = self.page.page().state() {
            render_placeholder(f, area[1], message);
            return;
        }
        let matches = self.page.matches();
        if matches.is_empty() {
            render_placeholder(f, area[1], self.labels.no_matches_yet);
            return;
        }
        let items: Vec<ListItem> = matches
            .iter()
            .map(|m| {
                let score =
                    m.score_display(self.labels.home_placeholder, self.labels.away_placeholder);
                match m.venue.as_str() {
                    "" => ListItem::new(format!("{}  {}", m.formatted_date(), score)),
                    venue => ListItem::new(format!("{}  {}  ({})", m.formatted_date(), score, venue)),
                }
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.labels.matches),
            )
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area[1], &mut self.list_state);
    }
}
