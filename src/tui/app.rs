use crate::lookup::CookieQuery;
use crate::parser::CookieRecord;
use crate::CookieFinderError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Submit(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading(String),
    Failed(String),
}

/// Table area measured by the last draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableViewport {
    /// Text lines available for rows below the header
    pub page_rows: usize,
    /// Largest offset that still fills the viewport down to the last row
    pub max_offset: usize,
}

/// Screen state. Only the input text outlives a lookup.
pub struct AppState {
    pub input: String,
    /// Cursor position in chars, not bytes
    pub cursor: usize,
    pub record: Option<CookieRecord>,
    pub status: Status,
    pub table_offset: usize,
    table_height: usize,
    viewport: Option<TableViewport>,
}

impl AppState {
    pub fn new(table_height: u16) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            record: None,
            status: Status::Idle,
            table_offset: 0,
            table_height: usize::from(table_height.max(1)),
            viewport: None,
        }
    }

    /// Upper bound on table rows from the config
    pub fn table_height(&self) -> usize {
        self.table_height
    }

    /// Record what the table can actually show and pull the offset back in range
    pub fn set_table_viewport(&mut self, viewport: TableViewport) {
        self.table_offset = self.table_offset.min(viewport.max_offset);
        self.viewport = Some(viewport);
    }

    fn page_rows(&self) -> usize {
        self.viewport
            .map(|v| v.page_rows)
            .unwrap_or(self.table_height)
            .max(1)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                Action::None
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input_len());
                Action::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = self.input_len();
                Action::None
            }
            KeyCode::Up => {
                self.scroll_up(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll_down(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_up(self.page_rows());
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_down(self.page_rows());
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Blank input is ignored so no request is made
    fn submit(&self) -> Action {
        match CookieQuery::new(&self.input) {
            Some(query) => Action::Submit(query.name().to_string()),
            None => Action::None,
        }
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.input.insert(idx, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.input.remove(idx);
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.input_len() {
            let idx = self.byte_index(self.cursor);
            self.input.remove(idx);
        }
    }

    /// Before the first draw any row may be the top one; the view clamps it
    fn max_offset(&self) -> usize {
        match self.viewport {
            Some(viewport) => viewport.max_offset,
            None => self
                .record
                .as_ref()
                .map(|r| r.attributes.len().saturating_sub(1))
                .unwrap_or(0),
        }
    }

    fn scroll_up(&mut self, rows: usize) {
        self.table_offset = self.table_offset.saturating_sub(rows);
    }

    fn scroll_down(&mut self, rows: usize) {
        self.table_offset = (self.table_offset + rows).min(self.max_offset());
    }

    pub fn begin_lookup(&mut self, query: &str) {
        self.status = Status::Loading(query.to_string());
    }

    /// Replace the previous result with the outcome of the latest lookup
    pub fn finish_lookup(&mut self, result: Result<Option<CookieRecord>, CookieFinderError>) {
        match result {
            Ok(Some(record)) => {
                self.record = Some(record);
                self.table_offset = 0;
                self.viewport = None;
                self.status = Status::Idle;
            }
            Ok(None) => self.status = Status::Idle,
            Err(e) => {
                self.record = None;
                self.table_offset = 0;
                self.viewport = None;
                self.status = Status::Failed(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_response;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut state = AppState::new(20);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Action::None);

        type_text(&mut state, "   ");
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Action::None);
        assert_eq!(state.status, Status::Idle);
        assert!(state.record.is_none());
    }

    #[test]
    fn test_submit_trims_input() {
        let mut state = AppState::new(20);
        type_text(&mut state, "  _ga ");
        assert_eq!(
            state.handle_key(key(KeyCode::Enter)),
            Action::Submit("_ga".to_string())
        );
        // Input box keeps its value
        assert_eq!(state.input, "  _ga ");
    }

    #[test]
    fn test_cursor_editing_with_multibyte_chars() {
        let mut state = AppState::new(20);
        type_text(&mut state, "cookié");
        state.handle_key(key(KeyCode::Left));
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.input, "cooké");

        state.handle_key(key(KeyCode::Home));
        state.handle_key(key(KeyCode::Delete));
        assert_eq!(state.input, "ooké");

        state.handle_key(key(KeyCode::End));
        type_text(&mut state, "s");
        assert_eq!(state.input, "ookés");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new(20);
        assert_eq!(state.handle_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut state = AppState::new(20);
        let reply = "A: 1\nB: 2\nC: 3\nD: 4\nE: 5";
        state.finish_lookup(Ok(Some(parse_response(reply))));
        state.set_table_viewport(TableViewport {
            page_rows: 2,
            max_offset: 3,
        });

        state.handle_key(key(KeyCode::PageDown));
        state.handle_key(key(KeyCode::PageDown));
        assert_eq!(state.table_offset, 3);

        state.handle_key(key(KeyCode::Up));
        assert_eq!(state.table_offset, 2);

        state.handle_key(key(KeyCode::PageUp));
        state.handle_key(key(KeyCode::PageUp));
        assert_eq!(state.table_offset, 0);
    }

    #[test]
    fn test_scroll_before_first_draw_stops_at_last_row() {
        let mut state = AppState::new(20);
        state.finish_lookup(Ok(Some(parse_response("A: 1\nB: 2\nC: 3"))));

        state.handle_key(key(KeyCode::PageDown));
        assert_eq!(state.table_offset, 2);
    }

    #[test]
    fn test_smaller_viewport_clamps_offset() {
        let mut state = AppState::new(20);
        state.finish_lookup(Ok(Some(parse_response("A: 1\nB: 2\nC: 3\nD: 4"))));
        state.handle_key(key(KeyCode::PageDown));
        assert_eq!(state.table_offset, 3);

        state.set_table_viewport(TableViewport {
            page_rows: 3,
            max_offset: 1,
        });
        assert_eq!(state.table_offset, 1);

        // A new result forgets the old measurements
        state.finish_lookup(Ok(Some(parse_response("A: 1"))));
        assert_eq!(state.table_offset, 0);
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.table_offset, 0);
    }

    #[test]
    fn test_failure_clears_previous_result() {
        let mut state = AppState::new(20);
        state.finish_lookup(Ok(Some(parse_response("Vendor: Google"))));
        assert!(state.record.is_some());

        state.begin_lookup("_ga");
        assert_eq!(state.status, Status::Loading("_ga".to_string()));

        state.finish_lookup(Err(CookieFinderError::Llm("quota exceeded".to_string())));
        assert!(state.record.is_none());
        assert_eq!(state.status, Status::Failed("LLM error: quota exceeded".to_string()));
    }
}
