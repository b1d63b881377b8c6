use std::sync::Arc;

use crate::{
    localization::Labels,
    pages::{page::PageState, standings_page::StandingsPage},
    providers::standings_api::StandingsApi,
    screens::{
        components::{navigation_footer::NavigationFooter, notify_banner::NotifyBanner},
        screen::{render_placeholder, AppAction, Renderable, ScreenAsync, Tui},
    },
    shapes::{enums::ScreenActionEnum, keybinding::KeyBindings, settings::Settings},
};
use async_trait::async_trait;
use crokey::{crossterm::event::KeyEvent, Combiner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const ACTIONS: [ScreenActionEnum; 9] = [
    ScreenActionEnum::Previous,
    ScreenActionEnum::Next,
    ScreenActionEnum::YearDown,
    ScreenActionEnum::YearUp,
    ScreenActionEnum::DayBackward,
    ScreenActionEnum::DayForward,
    ScreenActionEnum::Reload,
    ScreenActionEnum::Back,
    ScreenActionEnum::Quit,
];

pub struct StandingsScreen<S: StandingsApi + Send + Sync> {
    page: StandingsPage<S>,
    labels: &'static Labels,
    screen_key_bindings: KeyBindings,
    combiner: Combiner,
    table_state: TableState,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
}

impl<S: StandingsApi + Send + Sync> StandingsScreen<S> {
    pub fn new(settings: &Settings, api: Arc<S>) -> Self {
        let labels = settings.labels();
        StandingsScreen {
            page: StandingsPage::new(api, labels),
            labels,
            screen_key_bindings: settings.keybindings.slice(&ACTIONS),
            combiner: Combiner::default(),
            table_state: TableState::default(),
            notify_message: NotifyBanner::new(labels),
            footer: NavigationFooter::new(&settings.keybindings, &ACTIONS),
        }
    }

    fn scroll(&mut self, forward: bool) {
        let len = self.page.page().rows().len();
        if len == 0 {
            return;
        }
        let selected = self.table_state.selected().unwrap_or(0);
        let next = if forward {
            (selected + 1).min(len - 1)
        } else {
            selected.saturating_sub(1)
        };
        self.table_state.select(Some(next));
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!("{}: ", self.labels.year),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.page.year().to_string(), Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled(
                format!("{}: ", self.labels.date),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.page.date().format("%d/%m/%Y").to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ];
        if let Some(reference_date) = self.page.reference_date() {
            spans.push(Span::raw(format!(
                "   {}: {}",
                self.labels.reference_date, reference_date
            )));
        }
        if let Some(updated_at) = self.page.updated_at() {
            spans.push(Span::raw(format!("   ({})", updated_at)));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[async_trait]
impl<S: StandingsApi + Send + Sync> ScreenAsync for StandingsScreen<S> {
    async fn handle_key(&mut self, key: KeyEvent, _tui: &mut Tui) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        let action = self.screen_key_bindings.get(key_combination).copied();
        if action.is_some() {
            self.page.dismiss_banner();
        }
        match action {
            Some(ScreenActionEnum::Next) => self.scroll(true),
            Some(ScreenActionEnum::Previous) => self.scroll(false),
            Some(ScreenActionEnum::YearUp) => {
                let year = self.page.year() + 1;
                self.page.set_year(year).await;
            }
            Some(ScreenActionEnum::YearDown) => {
                let year = self.page.year() - 1;
                self.page.set_year(year).await;
            }
            Some(ScreenActionEnum::DayForward) => self.page.shift_date(1).await,
            Some(ScreenActionEnum::DayBackward) => self.page.shift_date(-1).await,
            Some(ScreenActionEnum::Reload) => self.page.load().await,
            Some(ScreenActionEnum::Back) => return AppAction::Back(true),
            Some(ScreenActionEnum::Quit) => return AppAction::Quit(Ok(())),
            _ => {}
        }
        AppAction::None
    }

    async fn refresh_data(&mut self) {
        self.page.load().await;
        self.table_state.select(None);
    }
}

impl<S: StandingsApi + Send + Sync> Renderable for StandingsScreen<S> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.notify_message
            .render(f, footer_right, self.page.page().banner());
        self.footer.render(f, footer_left);
        let area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(body);
        self.render_header(f, area[0]);
        if let PageState::LoadError(message) = self.page.page().state() {
            render_placeholder(f, area[1], message);
            return;
        }
        let rows = self.page.table_rows();
        if rows.is_empty() {
            render_placeholder(f, area[1], self.labels.no_standings_found);
            return;
        }
        let header = Row::new(self.labels.standings_columns.map(Cell::from))
            .style(Style::default().add_modifier(Modifier::BOLD));
        let body_rows = rows.into_iter().map(|cells| Row::new(cells.map(Cell::from)));
        let mut widths = [Constraint::Length(5); 10];
        widths[1] = Constraint::Min(20);
        let table = Table::new(body_rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.labels.standings),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(table, area[1], &mut self.table_state);
    }
}
