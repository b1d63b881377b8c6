use std::sync::Arc;

use crate::{
    localization::Labels,
    pages::{page::PageState, team_page::TeamPage},
    providers::team_api::TeamApi,
    screens::{
        components::{navigation_footer::NavigationFooter, notify_banner::NotifyBanner},
        edit_dialog::TerminalDialog,
        forms::team_form::TeamForm,
        screen::{
            clamp_selection, move_selection, render_placeholder, AppAction, Renderable,
            ScreenAsync, Tui,
        },
    },
    shapes::{
        enums::ScreenActionEnum, keybinding::KeyBindings, settings::Settings, team::TeamEntry,
    },
};
use async_trait::async_trait;
use crokey::{crossterm::event::KeyEvent, Combiner};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

const ACTIONS: [ScreenActionEnum; 8] = [
    ScreenActionEnum::Previous,
    ScreenActionEnum::Next,
    ScreenActionEnum::New,
    ScreenActionEnum::Edit,
    ScreenActionEnum::Delete,
    ScreenActionEnum::Reload,
    ScreenActionEnum::Back,
    ScreenActionEnum::Quit,
];

pub struct TeamListScreen<A: TeamApi + Send + Sync> {
    page: TeamPage<A>,
    labels: &'static Labels,
    keybindings: KeyBindings,
    screen_key_bindings: KeyBindings,
    combiner: Combiner,
    list_state: ListState,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
}

impl<A: TeamApi + Send + Sync> TeamListScreen<A> {
    pub fn new(settings: &Settings, api: Arc<A>) -> Self {
        let labels = settings.labels();
        TeamListScreen {
            page: TeamPage::new(api, labels),
            labels,
            keybindings: settings.keybindings.clone(),
            screen_key_bindings: settings.keybindings.slice(&ACTIONS),
            combiner: Combiner::default(),
            list_state: ListState::default(),
            notify_message: NotifyBanner::new(labels),
            footer: NavigationFooter::new(&settings.keybindings, &ACTIONS),
        }
    }

    async fn add_team(&mut self, tui: &mut Tui) {
        let form = TeamForm::new(self.labels);
        let mut dialog: TerminalDialog<TeamEntry, _> =
            TerminalDialog::new(tui, self.labels, &self.keybindings, form);
        self.page.create(&mut dialog).await;
        let len = self.page.teams().len();
        self.list_state.select(len.checked_sub(1));
    }

    async fn edit_team(&mut self, tui: &mut Tui) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let form = TeamForm::new(self.labels);
        let mut dialog: TerminalDialog<TeamEntry, _> =
            TerminalDialog::new(tui, self.labels, &self.keybindings, form);
        self.page.update(index, &mut dialog).await;
    }
}

#[async_trait]
impl<A: TeamApi + Send + Sync> ScreenAsync for TeamListScreen<A> {
    async fn handle_key(&mut self, key: KeyEvent, tui: &mut Tui) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        let action = self.screen_key_bindings.get(key_combination).copied();
        if action.is_some() {
            self.page.dismiss_banner();
        }
        let len = self.page.teams().len();
        match action {
            Some(ScreenActionEnum::Next) => move_selection(&mut self.list_state, len, true),
            Some(ScreenActionEnum::Previous) => move_selection(&mut self.list_state, len, false),
            Some(ScreenActionEnum::New) => self.add_team(tui).await,
            Some(ScreenActionEnum::Edit) => self.edit_team(tui).await,
            Some(ScreenActionEnum::Delete) => {
                if let Some(index) = self.list_state.selected() {
                    self.page.delete(index).await;
                }
            }
            Some(ScreenActionEnum::Reload) => self.refresh_data().await,
            Some(ScreenActionEnum::Back) => return AppAction::Back(true),
            Some(ScreenActionEnum::Quit) => return AppAction::Quit(Ok(())),
            _ => {}
        }
        clamp_selection(&mut self.list_state, self.page.teams().len());
        AppAction::None
    }

    async fn refresh_data(&mut self) {
        self.page.enter().await;
        clamp_selection(&mut self.list_state, self.page.teams().len());
    }
}

impl<A: TeamApi + Send + Sync> Renderable for TeamListScreen<A> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.notify_message.render(f, footer_right, self.page.page().banner());
        self.footer.render(f, footer_left);
        if let PageState::LoadError(message) = self.page.page().state() {
            render_placeholder(f, body, message);
            return;
        }
        let teams = self.page.teams();
        if teams.is_empty() {
            render_placeholder(f, body, self.labels.no_teams_yet);
            return;
        }
        let items: Vec<ListItem> = teams
            .iter()
            .map(|t| match t.location() {
                location if location.is_empty() => ListItem::new(t.name.clone()),
                location => ListItem::new(format!("{} ({})", t.name, location)),
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.labels.teams),
            )
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, body, &mut self.list_state);
    }
}
