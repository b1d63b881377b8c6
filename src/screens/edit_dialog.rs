use crate::{
    localization::Labels,
    logging::logger::{log_error, log_info},
    pages::dialog::{DialogOutcome, EditDialog, WorkingCopy},
    screens::{
        components::navigation_footer::NavigationFooter, forms::EntityForm, screen::Tui,
    },
    shapes::{enums::ScreenActionEnum, keybinding::KeyBindings},
};
use async_trait::async_trait;
use crokey::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    Combiner,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::{marker::PhantomData, time::Duration};

const DIALOG_ACTIONS: [ScreenActionEnum; 4] = [
    ScreenActionEnum::NextField,
    ScreenActionEnum::PreviousField,
    ScreenActionEnum::Confirm,
    ScreenActionEnum::Cancel,
];

/// Modal edit dialog drawn over the whole terminal. It owns the event loop
/// until the user saves or cancels.
pub struct TerminalDialog<'a, T, F: EntityForm<T>> {
    tui: &'a mut Tui,
    labels: &'static Labels,
    form: F,
    field: usize,
    footer: NavigationFooter,
    key_bindings: KeyBindings,
    combiner: Combiner,
    entity: PhantomData<fn() -> T>,
}

impl<'a, T, F: EntityForm<T>> TerminalDialog<'a, T, F> {
    pub fn new(tui: &'a mut Tui, labels: &'static Labels, kb: &KeyBindings, form: F) -> Self {
        Self {
            tui,
            labels,
            form,
            field: 0,
            footer: NavigationFooter::new(kb, &DIALOG_ACTIONS),
            key_bindings: kb.slice(&DIALOG_ACTIONS),
            combiner: Combiner::default(),
            entity: PhantomData,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.form.field_count();
        self.field = if forward {
            (self.field + 1) % count
        } else {
            (self.field + count - 1) % count
        };
        self.form.focus(self.field);
    }

    fn draw(&mut self, title: &'static str) -> std::io::Result<()> {
        let app_title = self.labels.app_title;
        let form = &mut self.form;
        let footer = &self.footer;
        self.tui
            .draw(|f| render_dialog::<T, F>(f, app_title, title, form, footer))
            .map(|_| ())
    }
}

fn render_dialog<T, F: EntityForm<T>>(
    f: &mut Frame,
    app_title: &str,
    title: &str,
    form: &mut F,
    footer: &NavigationFooter,
) {
    let container = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(f.area());
    f.render_widget(Clear, f.area());
    let header = Paragraph::new(app_title).style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(header, container[0]);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner: Rect = block.inner(container[1]);
    f.render_widget(block, container[1]);
    form.render(f, inner);
    footer.render(f, container[2]);
}

#[async_trait]
impl<T, F> EditDialog<T> for TerminalDialog<'_, T, F>
where
    T: Clone + PartialEq + Send + Sync,
    F: EntityForm<T>,
{
    async fn edit(&mut self, original: &T, new_entry: bool) -> DialogOutcome<T> {
        let mut copy = WorkingCopy::open(original);
        let title = self.form.title(new_entry);
        self.form.load(original);
        self.field = 0;
        self.form.focus(0);
        loop {
            if let Err(e) = self.draw(title) {
                log_error(&format!("could not draw dialog: {}", e));
                return copy.cancel();
            }
            let key = match event::poll(Duration::from_millis(200)) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
                    Ok(_) => continue,
                    Err(e) => {
                        log_error(&format!("could not read terminal event: {}", e));
                        return copy.cancel();
                    }
                },
                Err(e) => {
                    log_error(&format!("could not poll terminal events: {}", e));
                    return copy.cancel();
                }
            };
            let Some(combination) = self.combiner.transform(key) else {
                continue;
            };
            match (self.key_bindings.get(combination).copied(), key.code) {
                (Some(ScreenActionEnum::Confirm), _) => {
                    copy.edit(|entry| self.form.write(entry));
                    if !copy.is_modified() {
                        log_info("dialog saved without changes");
                    }
                    return copy.save();
                }
                (Some(ScreenActionEnum::Cancel), _) => return copy.cancel(),
                (Some(ScreenActionEnum::NextField), _) => self.move_focus(true),
                (Some(ScreenActionEnum::PreviousField), _) => self.move_focus(false),
                (_, KeyCode::Char(c)) => self.form.handle_char(c),
                (_, KeyCode::Backspace) => self.form.handle_backspace(),
                (_, KeyCode::Up) => self.form.handle_up(),
                (_, KeyCode::Down) => self.form.handle_down(),
                _ => {}
            }
        }
    }
}
