use crate::{
    screens::screen::get_keybinding_actions,
    shapes::{enums::ScreenActionEnum, keybinding::KeyBindings},
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Key hints for the actions a screen currently accepts, wrapped to the
/// footer width.
#[derive(Debug, Clone)]
pub struct NavigationFooter {
    entries: Vec<(String, String)>,
}

impl NavigationFooter {
    pub fn new(kb: &KeyBindings, actions: &[ScreenActionEnum]) -> Self {
        Self {
            entries: get_keybinding_actions(kb, actions),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let max_width = area.width as usize;
        let mut lines: Vec<Line> = Vec::new();
        let mut current: Vec<Span> = Vec::new();
        let mut width = 0;
        for (key, desc) in &self.entries {
            let span_len = key.len() + desc.len() + 6; // " = " plus the gap
            if width + span_len > max_width && !current.is_empty() {
                lines.push(Line::from(std::mem::take(&mut current)));
                width = 0;
            }
            current.push(Span::styled(key.clone(), Style::default().fg(Color::Cyan)));
            current.push(Span::raw(" = "));
            current.push(Span::styled(desc.clone(), Style::default().fg(Color::White)));
            current.push(Span::raw("   "));
            width += span_len;
        }
        if !current.is_empty() {
            lines.push(Line::from(current));
        }
        let paragraph = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .padding(Padding::new(1, 0, 0, 0)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
