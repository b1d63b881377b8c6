use std::sync::Arc;

use crate::{
    localization::Labels,
    providers::{match_api::MatchApi, standings_api::StandingsApi, team_api::TeamApi},
    screens::{
        components::navigation_footer::NavigationFooter,
        match_list_screen::MatchListScreen,
        screen::{move_selection, AppAction, Renderable, ScreenAsync, Tui},
        standings_screen::StandingsScreen,
        team_list_screen::TeamListScreen,
    },
    shapes::{enums::ScreenActionEnum, keybinding::KeyBindings, settings::Settings},
};
use async_trait::async_trait;
use crokey::{crossterm::event::KeyEvent, Combiner};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

const ACTIONS: [ScreenActionEnum; 4] = [
    ScreenActionEnum::Previous,
    ScreenActionEnum::Next,
    ScreenActionEnum::Select,
    ScreenActionEnum::Quit,
];

/// Entry menu; each item opens one of the management screens.
pub struct HomeScreen<T, M, S>
where
    T: TeamApi + Send + Sync + 'static,
    M: MatchApi + Send + Sync + 'static,
    S: StandingsApi + Send + Sync + 'static,
{
    settings: Settings,
    labels: &'static Labels,
    team_api: Arc<T>,
    match_api: Arc<M>,
    standings_api: Arc<S>,
    screen_key_bindings: KeyBindings,
    combiner: Combiner,
    list_state: ListState,
    footer: NavigationFooter,
}

impl<T, M, S> HomeScreen<T, M, S>
where
    T: TeamApi + Send + Sync + 'static,
    M: MatchApi + Send + Sync + 'static,
    S: StandingsApi + Send + Sync + 'static,
{
    pub fn new(settings: Settings, team_api: Arc<T>, match_api: Arc<M>, standings_api: Arc<S>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        HomeScreen {
            labels: settings.labels(),
            screen_key_bindings: settings.keybindings.slice(&ACTIONS),
            footer: NavigationFooter::new(&settings.keybindings, &ACTIONS),
            combiner: Combiner::default(),
            list_state,
            settings,
            team_api,
            match_api,
            standings_api,
        }
    }

    fn entries(&self) -> [&'static str; 3] {
        [self.labels.manage_teams, self.labels.manage_matches, self.labels.view_table]
    }

    fn open_selected(&self) -> AppAction {
        match self.list_state.selected() {
            Some(0) => AppAction::SwitchScreen(Box::new(TeamListScreen::new(
                &self.settings,
                self.team_api.clone(),
            ))),
            Some(1) => AppAction::SwitchScreen(Box::new(MatchListScreen::new(
                &self.settings,
                self.match_api.clone(),
                self.team_api.clone(),
            ))),
            Some(2) => AppAction::SwitchScreen(Box::new(StandingsScreen::new(
                &self.settings,
                self.standings_api.clone(),
            ))),
            _ => AppAction::None,
        }
    }
}

#[async_trait]
impl<T, M, S> ScreenAsync for HomeScreen<T, M, S>
where
    T: TeamApi + Send + Sync + 'static,
    M: MatchApi + Send + Sync + 'static,
    S: StandingsApi + Send + Sync + 'static,
{
    async fn handle_key(&mut self, key: KeyEvent, _tui: &mut Tui) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        let len = self.entries().len();
        match self.screen_key_bindings.get(key_combination).copied() {
            Some(ScreenActionEnum::Next) => {
                move_selection(&mut self.list_state, len, true);
                AppAction::None
            }
            Some(ScreenActionEnum::Previous) => {
                move_selection(&mut self.list_state, len, false);
                AppAction::None
            }
            Some(ScreenActionEnum::Select) => self.open_selected(),
            Some(ScreenActionEnum::Quit) => AppAction::Quit(Ok(())),
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {}
}

impl<T, M, S> Renderable for HomeScreen<T, M, S>
where
    T: TeamApi + Send + Sync + 'static,
    M: MatchApi + Send + Sync + 'static,
    S: StandingsApi + Send + Sync + 'static,
{
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, _footer_right: Rect) {
        let items: Vec<ListItem> = self.entries().into_iter().map(ListItem::new).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(self.labels.app_title))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, body, &mut self.list_state);
        self.footer.render(f, footer_left);
    }
}
