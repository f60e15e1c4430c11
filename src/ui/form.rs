use std::io::Stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};

use crate::forms::field::parse_bool;
use crate::forms::{FieldKind, FormField};
use crate::utils::slug::generate_slug;

/// How the editor was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Save(Vec<FormField>),
    /// Auto Generate SEO was requested; the caller reopens the form afterwards.
    GenerateSeo(Vec<FormField>),
    Cancel,
}

pub struct FormApp {
    /// Heading shown above the fields
    heading: String,
    pub fields: Vec<FormField>,
    /// Index of the field being edited
    pub selected: usize,
    /// Cursor position in characters within the selected value
    pub cursor: usize,
    /// Whether Ctrl+G is offered
    allow_seo: bool,
    pub message: Option<(String, Color)>,
}

impl FormApp {
    pub fn new(heading: impl Into<String>, fields: Vec<FormField>, allow_seo: bool) -> Self {
        let cursor = fields.first().map_or(0, |f| f.value.chars().count());
        Self {
            heading: heading.into(),
            fields,
            selected: 0,
            cursor,
            allow_seo,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>, color: Color) -> Self {
        self.message = Some((message.into(), color));
        self
    }

    pub fn run(&mut self) -> Result<FormOutcome> {
        let mut terminal = setup_terminal()?;
        let result = self.run_app(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<FormOutcome> {
        loop {
            terminal.draw(|f| self.ui(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(outcome) = self.handle_key(key) {
                    return Ok(outcome);
                }
            }
        }
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.value.as_str())
    }

    /// Applies one key press. Returns `Some` when the form should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormOutcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => {
                self.leave_field();
                return Some(FormOutcome::Save(self.fields.clone()));
            }
            KeyCode::Char('g') if ctrl => {
                if self.allow_seo {
                    self.leave_field();
                    return Some(FormOutcome::GenerateSeo(self.fields.clone()));
                }
                self.message = Some(("Auto Generate SEO is not available here".to_string(), Color::Yellow));
            }
            KeyCode::Char('r') if ctrl => {
                self.regenerate_slug();
            }
            KeyCode::Char('c') if ctrl => return Some(FormOutcome::Cancel),
            KeyCode::Esc => return Some(FormOutcome::Cancel),
            KeyCode::Down | KeyCode::Tab => self.select(self.selected + 1),
            KeyCode::Up | KeyCode::BackTab => {
                if self.selected > 0 {
                    self.select(self.selected - 1);
                }
            }
            _ => self.edit(key.code),
        }
        None
    }

    fn edit(&mut self, code: KeyCode) {
        let Some(kind) = self.fields.get(self.selected).map(|f| f.kind.clone()) else {
            return;
        };
        if code == KeyCode::Enter && matches!(kind, FieldKind::Line | FieldKind::Number | FieldKind::Signed) {
            self.select(self.selected + 1);
            return;
        }

        let field = &mut self.fields[self.selected];
        match (kind, code) {
            (FieldKind::Toggle, KeyCode::Char(' ') | KeyCode::Enter) => {
                let on = parse_bool(&field.value);
                field.value = (!on).to_string();
            }
            (FieldKind::Toggle, _) => {}
            (FieldKind::Choice(options), KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                if options.is_empty() {
                    return;
                }
                let current = options.iter().position(|o| *o == field.value);
                let next = match (current, code) {
                    (Some(i), KeyCode::Left) => (i + options.len() - 1) % options.len(),
                    (Some(i), _) => (i + 1) % options.len(),
                    (None, _) => 0,
                };
                field.value = options[next].clone();
            }
            (FieldKind::Choice(_), _) => {}
            (FieldKind::Number, KeyCode::Char(c)) if !c.is_ascii_digit() => {}
            (FieldKind::Signed, KeyCode::Char(c))
                if !(c.is_ascii_digit() || (c == '-' && self.cursor == 0 && !field.value.starts_with('-'))) => {}
            (_, KeyCode::Enter) => {
                insert_char(&mut field.value, self.cursor, '\n');
                self.cursor += 1;
            }
            (_, KeyCode::Char(c)) => {
                insert_char(&mut field.value, self.cursor, c);
                self.cursor += 1;
            }
            (_, KeyCode::Backspace) => {
                if self.cursor > 0 {
                    remove_char(&mut field.value, self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            (_, KeyCode::Delete) => {
                if self.cursor < field.value.chars().count() {
                    remove_char(&mut field.value, self.cursor);
                }
            }
            (_, KeyCode::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            (_, KeyCode::Right) => {
                if self.cursor < field.value.chars().count() {
                    self.cursor += 1;
                }
            }
            (_, KeyCode::Home) => self.cursor = 0,
            (_, KeyCode::End) => self.cursor = field.value.chars().count(),
            _ => {}
        }
    }

    fn select(&mut self, index: usize) {
        if index >= self.fields.len() || index == self.selected {
            return;
        }
        self.leave_field();
        self.selected = index;
        self.cursor = self.fields[index].value.chars().count();
    }

    /// Title blur fills an empty slug.
    fn leave_field(&mut self) {
        if self.fields.get(self.selected).map(|f| f.key) != Some("title") {
            return;
        }
        let title = self.fields[self.selected].value.clone();
        if let Some(slug) = self.fields.iter_mut().find(|f| f.key == "slug") {
            if slug.value.trim().is_empty() {
                slug.value = generate_slug(&title);
            }
        }
    }

    fn regenerate_slug(&mut self) {
        let Some(title) = self.value("title").map(generate_slug) else {
            return;
        };
        if let Some(slug) = self.fields.iter_mut().find(|f| f.key == "slug") {
            slug.value = title;
            self.message = Some(("Slug regenerated from title".to_string(), Color::Green));
        }
    }

    fn ui(&self, f: &mut ratatui::Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Min(5),    // Fields + editor
                Constraint::Length(3), // Help / message
            ])
            .split(f.size());

        let heading = Paragraph::new(self.heading.as_str())
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(heading, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(chunks[1]);

        let items: Vec<ListItem> = self
            .fields
            .iter()
            .map(|field| {
                let preview: String = field.value.lines().next().unwrap_or("").chars().take(40).collect();
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}: ", field.label), Style::default().fg(Color::Blue)),
                    Span::raw(preview),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Fields"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(self.selected));
        f.render_stateful_widget(list, body[0], &mut state);

        if let Some(field) = self.fields.get(self.selected) {
            let mut value = field.value.clone();
            if matches!(field.kind, FieldKind::Line | FieldKind::Text | FieldKind::Number | FieldKind::Signed) {
                insert_char(&mut value, self.cursor, '│');
            }
            let hint = match &field.kind {
                FieldKind::Toggle => " (Space to toggle)",
                FieldKind::Choice(_) => " (←/→ to choose)",
                FieldKind::Text => " (Enter for new line)",
                _ => "",
            };
            let editor = Paragraph::new(value)
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("{}{}", field.label, hint)),
                );
            f.render_widget(editor, body[1]);
        }

        let (text, color) = match &self.message {
            Some((message, color)) => (message.clone(), *color),
            None => {
                let mut help = "↑/↓ move · Ctrl+S save · Ctrl+R slug from title".to_string();
                if self.allow_seo {
                    help.push_str(" · Ctrl+G auto SEO");
                }
                help.push_str(" · Esc cancel");
                (help, Color::Gray)
            }
        };
        let help = Paragraph::new(text)
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices().nth(char_index).map_or(s.len(), |(i, _)| i)
}

fn insert_char(s: &mut String, char_index: usize, c: char) {
    let at = byte_index(s, char_index);
    s.insert(at, c);
}

fn remove_char(s: &mut String, char_index: usize) {
    let at = byte_index(s, char_index);
    if at < s.len() {
        s.remove(at);
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
