//! Demo application hosting a single tag input.
//!
//! The app owns the authoritative tag list and suggestion pool. The widget
//! reports requested changes; the app applies them and hands both lists back
//! before the next frame, following The Elm Architecture (update / view).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info, trace};

use crate::events::Event;
use crate::tags::{Suggestion, Tag};
use crate::tasks::{LookupMessage, SuggestionSource, TaskSpawner};
use crate::ui::{TagInput, TagInputAction, TagInputConfig};

/// Background lookup wiring, present when suggestions are fetched per query.
struct Lookup {
    source: SuggestionSource,
    spawner: TaskSpawner,
    /// Query of the most recent request; older results are stale.
    pending: Option<String>,
}

/// The demo application state.
pub struct App {
    /// Committed tags, in order.
    tags: Vec<Tag>,
    /// Suggestions currently offered to the widget, before marking.
    pool: Vec<Suggestion>,
    input: TagInput,
    lookup: Option<Lookup>,
    should_quit: bool,
}

impl App {
    /// Create an app that hands the whole catalogue to the widget.
    pub fn new(config: TagInputConfig, catalogue: Vec<Suggestion>, tags: Vec<Tag>) -> Self {
        let mut app = Self {
            tags,
            pool: catalogue,
            input: TagInput::new(config),
            lookup: None,
            should_quit: false,
        };
        app.sync_widget();
        app
    }

    /// Create an app that looks suggestions up in the background as the
    /// query changes.
    pub fn with_lookup(
        config: TagInputConfig,
        source: SuggestionSource,
        spawner: TaskSpawner,
        tags: Vec<Tag>,
    ) -> Self {
        let mut app = Self {
            tags,
            pool: Vec::new(),
            input: TagInput::new(config),
            lookup: Some(Lookup {
                source,
                spawner,
                pending: None,
            }),
            should_quit: false,
        };
        app.sync_widget();
        app
    }

    /// The committed tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The hosted tag input.
    pub fn input(&self) -> &TagInput {
        &self.input
    }

    /// Whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Update state in response to an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                let outcome = self.input.handle_mouse(mouse);
                if let Some(action) = outcome.action {
                    self.apply(action);
                }
            }
            Event::Paste(text) => {
                if self.input.is_focused() {
                    let query = format!("{}{}", self.input.query(), text.replace(['\r', '\n'], " "));
                    let action = self.input.set_query(query);
                    self.apply(action);
                }
            }
            Event::Tick => self.input.tick(),
            Event::Resize(width, height) => trace!(width, height, "Terminal resized"),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if !self.input.is_focused() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Enter | KeyCode::Char('i') => self.input.focus(),
                _ => {}
            }
            return;
        }

        let outcome = self.input.handle_input(key);
        if let Some(action) = outcome.action {
            self.apply(action);
        }
        if !outcome.consumed && matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            debug!("Focus left the tag input");
            self.input.blur();
        }
    }

    /// Apply a change requested by the widget.
    fn apply(&mut self, action: TagInputAction) {
        match action {
            TagInputAction::Add(tag) => {
                if self.has_tag(&tag.name) {
                    debug!(tag = %tag.name, "Tag already present");
                    return;
                }
                info!(tag = %tag.name, "Adding tag");
                self.tags.push(tag);
                self.after_tags_changed();
            }
            TagInputAction::Delete(index) => {
                if index < self.tags.len() {
                    let removed = self.tags.remove(index);
                    info!(tag = %removed.name, index, "Removing tag");
                    self.after_tags_changed();
                }
            }
            TagInputAction::QueryChanged(query) => self.request_suggestions(query),
        }
    }

    fn after_tags_changed(&mut self) {
        // Lookup results belong to the query the widget just cleared.
        if let Some(lookup) = &mut self.lookup {
            lookup.pending = None;
            self.pool.clear();
            self.input.set_busy(false);
        }
        self.sync_widget();
    }

    fn request_suggestions(&mut self, query: String) {
        let meets_minimum = self.input.query_meets_minimum();
        let Some(lookup) = &mut self.lookup else {
            return;
        };

        if meets_minimum {
            debug!(query = %query, "Looking up suggestions");
            lookup.spawner.spawn_lookup(&lookup.source, query.clone());
            lookup.pending = Some(query);
            self.input.set_busy(true);
        } else {
            lookup.pending = None;
            self.pool.clear();
            self.input.set_busy(false);
            self.sync_widget();
        }
    }

    /// Handle the result of a background lookup.
    pub fn handle_lookup(&mut self, message: LookupMessage) {
        let LookupMessage::SuggestionsFetched { query, suggestions } = message;
        let Some(lookup) = &mut self.lookup else {
            return;
        };

        if lookup.pending.as_deref() != Some(query.as_str()) {
            trace!(query = %query, "Discarding stale lookup result");
            return;
        }

        lookup.pending = None;
        self.pool = suggestions;
        self.input.set_busy(false);
        self.sync_widget();
    }

    fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Hand the current tags and pool to the widget, disabling suggestions
    /// that are already tags.
    fn sync_widget(&mut self) {
        let pool = self
            .pool
            .iter()
            .map(|s| Suggestion {
                name: s.name.clone(),
                disabled: s.disabled || self.has_tag(&s.name),
            })
            .collect();
        self.input.set_tags(self.tags.clone());
        self.input.set_suggestions(pool);
    }

    /// Render the application.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let input_height = self.input.desired_height(area.width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(input_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("tagbox", Style::default().fg(Color::Cyan)),
            Span::raw(format!("  {} tag(s)", self.tags.len())),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);
        frame.render_widget(Paragraph::new(self.help_line()), chunks[3]);

        // Last, so the suggestion popup draws over the rest.
        self.input.render(frame, chunks[1]);
    }

    fn help_line(&self) -> Line<'static> {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
        if self.input.is_focused() {
            Line::from(vec![
                key("↑/↓"),
                Span::raw(": select  "),
                key("Enter"),
                Span::raw(": add  "),
                key("Backspace"),
                Span::raw(": remove last  "),
                key("Esc"),
                Span::raw(": hide  "),
                key("Ctrl+C"),
                Span::raw(": quit"),
            ])
        } else {
            Line::from(vec![
                key("Tab/i"),
                Span::raw(": edit tags  "),
                key("q"),
                Span::raw(": quit"),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::create_task_channel;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    fn catalogue() -> Vec<Suggestion> {
        ["rust", "ruby", "python"]
            .into_iter()
            .map(Suggestion::new)
            .collect()
    }

    fn names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_add_via_keyboard() {
        let mut app = App::new(TagInputConfig::default(), catalogue(), Vec::new());
        type_text(&mut app, "ru");
        app.update(key(KeyCode::Down));
        app.update(key(KeyCode::Down));
        app.update(key(KeyCode::Enter));

        assert_eq!(names(app.tags()), vec!["ruby"]);
        assert_eq!(names(app.input().tags()), vec!["ruby"]);
        assert_eq!(app.input().query(), "");
    }

    #[test]
    fn test_existing_tags_are_offered_disabled() {
        let app = App::new(
            TagInputConfig::default(),
            catalogue(),
            vec![Tag::new("rust")],
        );
        let rust = app
            .input()
            .suggestions()
            .iter()
            .find(|s| s.name == "rust")
            .unwrap();
        assert!(rust.disabled);
    }

    #[test]
    fn test_backspace_removes_last() {
        let mut app = App::new(
            TagInputConfig::default(),
            catalogue(),
            vec![Tag::new("a"), Tag::new("b")],
        );
        app.update(key(KeyCode::Backspace));
        assert_eq!(names(app.tags()), vec!["a"]);
    }

    #[test]
    fn test_tab_on_empty_query_moves_focus_out_and_back() {
        let mut app = App::new(TagInputConfig::default(), catalogue(), Vec::new());
        app.update(key(KeyCode::Tab));
        assert!(!app.input().is_focused());

        app.update(key(KeyCode::Tab));
        assert!(app.input().is_focused());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(TagInputConfig::default(), catalogue(), Vec::new());
        // 'q' is text while the input has focus
        app.update(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.input().query(), "q");

        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_paste_appends_to_query() {
        let mut app = App::new(TagInputConfig::default(), catalogue(), Vec::new());
        type_text(&mut app, "p");
        app.update(Event::Paste("yth\n".to_string()));
        assert_eq!(app.input().query(), "pyth ");
        assert_eq!(app.input().suggestions().len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_results_reach_widget() {
        let (mut rx, spawner) = create_task_channel();
        let source = SuggestionSource::new(catalogue(), Duration::ZERO);
        let mut app = App::with_lookup(TagInputConfig::default(), source, spawner, Vec::new());

        type_text(&mut app, "r");
        assert!(!app.input().is_busy());
        assert!(app.input().suggestions().is_empty());

        type_text(&mut app, "u");
        assert!(app.input().is_busy());

        let message = rx.recv().await.unwrap();
        app.handle_lookup(message);
        assert!(!app.input().is_busy());
        assert_eq!(app.input().suggestions().len(), 2);
    }

    #[tokio::test]
    async fn test_stale_lookup_is_discarded() {
        let (mut rx, spawner) = create_task_channel();
        let source = SuggestionSource::new(catalogue(), Duration::ZERO);
        let mut app = App::with_lookup(TagInputConfig::default(), source, spawner, Vec::new());

        type_text(&mut app, "ru");
        let first = rx.recv().await.unwrap();
        type_text(&mut app, "s");
        let second = rx.recv().await.unwrap();

        app.handle_lookup(first);
        assert!(app.input().is_busy());
        assert!(app.input().suggestions().is_empty());

        app.handle_lookup(second);
        assert_eq!(app.input().suggestions(), &[Suggestion::new("rust")]);
    }

    #[test]
    fn test_view_renders() {
        let mut app = App::new(
            TagInputConfig::default(),
            catalogue(),
            vec![Tag::new("rust")],
        );
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..60).map(|x| buffer[(x, 2)].symbol().to_string()).collect();
        assert!(row.contains("rust"));
    }
}
