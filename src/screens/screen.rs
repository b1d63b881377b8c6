use crate::shapes::{enums::ScreenActionEnum, keybinding::KeyBindings};
use async_trait::async_trait;
use crokey::{crossterm::event::KeyEvent, KeyCombinationFormat};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame, Terminal,
};
use std::io::Stdout;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub enum AppAction {
    None,
    SwitchScreen(Box<dyn ScreenAsync>),
    Back(bool), // the boolean value indicates if the previous screen needs to be refreshed
    Quit(std::io::Result<()>),
}

pub trait Renderable {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect);
}

/// A screen on the app stack. Key handlers get the terminal so they can run a
/// modal dialog to completion before returning.
#[async_trait]
pub trait ScreenAsync: Renderable + Send {
    async fn handle_key(&mut self, key: KeyEvent, tui: &mut Tui) -> AppAction;
    async fn refresh_data(&mut self);
}

/// Footer entries (key, description) for the given actions.
pub fn get_keybinding_actions(
    kb: &KeyBindings,
    actions: &[ScreenActionEnum],
) -> Vec<(String, String)> {
    let fmt = KeyCombinationFormat::default();
    actions
        .iter()
        .flat_map(|action| kb.shortest_key_for(action))
        .map(|(ck, desc)| (fmt.to_string(ck), desc))
        .collect()
}

/// Keeps the highlighted row inside a list of `len` rows.
pub fn clamp_selection(state: &mut ListState, len: usize) {
    match (state.selected(), len) {
        (_, 0) => state.select(None),
        (None, _) => state.select(Some(0)),
        (Some(selected), _) if selected >= len => state.select(Some(len - 1)),
        _ => {}
    }
}

pub fn move_selection(state: &mut ListState, len: usize, forward: bool) {
    if let Some(selected) = state.selected() {
        let new_selected = if forward {
            (selected + 1).min(len.saturating_sub(1))
        } else {
            selected.saturating_sub(1)
        };
        state.select(Some(new_selected));
    }
}

/// Centered one-line message for screens with nothing to list.
pub fn render_placeholder(f: &mut Frame, area: Rect, text: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Percentage(40),
        ])
        .split(area);
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[1]);
}
