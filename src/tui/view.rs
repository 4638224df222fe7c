use crate::parser::CookieRecord;
use crate::tui::app::{AppState, Status, TableViewport};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

const TITLE_HEIGHT: u16 = 2;
const DESCRIPTION_HEIGHT: u16 = 7;
const INPUT_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
/// Two borders plus the header row
const TABLE_CHROME: u16 = 3;
const INDEX_WIDTH: u16 = 4;
const COLUMN_SPACING: u16 = 1;

pub fn draw(f: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = f.area();
    let fixed = TITLE_HEIGHT + DESCRIPTION_HEIGHT + INPUT_HEIGHT + FOOTER_HEIGHT;
    let configured = to_u16(state.table_height()).saturating_add(TABLE_CHROME);
    let table_height = configured.min(area.height.saturating_sub(2 + fixed));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(DESCRIPTION_HEIGHT),
            Constraint::Length(table_height),
            Constraint::Min(0),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Cookie Information Finder",
        theme.title,
    )));
    f.render_widget(title, chunks[0]);

    let table = match (&state.status, &state.record) {
        (Status::Failed(message), _) => {
            draw_error(f, message, theme, chunks[1]);
            None
        }
        (_, Some(record)) => {
            draw_description(f, record, theme, chunks[1]);
            Some(build_table(record, theme, chunks[2]))
        }
        (_, None) => {
            let hint = Paragraph::new("Enter a cookie name below to get details.")
                .style(theme.placeholder)
                .wrap(Wrap { trim: true });
            f.render_widget(hint, chunks[1]);
            None
        }
    };

    if let Some((table, viewport)) = table {
        state.set_table_viewport(viewport);
        let mut table_state = TableState::default().with_offset(state.table_offset);
        f.render_stateful_widget(table, chunks[2], &mut table_state);
    }

    draw_input(f, state, theme, chunks[4]);

    let footer = match &state.status {
        Status::Loading(query) => Paragraph::new(format!("Looking up {} ...", query)).style(theme.status),
        _ => Paragraph::new("Enter: get cookie details | ↑/↓ PgUp/PgDn: scroll table | Esc: quit")
            .style(theme.help),
    };
    f.render_widget(footer, chunks[5]);
}

fn draw_description(f: &mut Frame, record: &CookieRecord, theme: &Theme, area: Rect) {
    let description = Paragraph::new(record.description.as_str())
        .style(theme.description)
        .block(Block::default().title("Cookie Description").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(description, area);
}

/// Column widths for the index, attribute and value columns
fn column_widths(inner_width: u16) -> [u16; 3] {
    let available = inner_width.saturating_sub(INDEX_WIDTH + 2 * COLUMN_SPACING);
    let attribute = available * 3 / 10;
    [INDEX_WIDTH, attribute, available - attribute]
}

fn centered_text(lines: Vec<String>) -> Text<'static> {
    Text::from(
        lines
            .into_iter()
            .map(|line| Line::from(line).centered())
            .collect::<Vec<_>>(),
    )
}

/// Rows grow to fit wrapped attribute and value text
fn build_table(record: &CookieRecord, theme: &Theme, area: Rect) -> (Table<'static>, TableViewport) {
    let widths = column_widths(area.width.saturating_sub(2));

    let header = Row::new(
        ["#", "Attribute", "Value"]
            .into_iter()
            .map(|h| Cell::from(Line::from(h).centered())),
    )
    .style(theme.table_header);

    let mut heights = Vec::with_capacity(record.attributes.len());
    let rows: Vec<Row<'static>> = record
        .attributes
        .iter()
        .enumerate()
        .map(|(i, (attribute, value))| {
            let attribute_lines = wrap_text(attribute, usize::from(widths[1]));
            let value_lines = wrap_text(value, usize::from(widths[2]));
            let height = attribute_lines.len().max(value_lines.len()).max(1);
            heights.push(height);

            Row::new(vec![
                Cell::from(Line::from((i + 1).to_string()).centered()),
                Cell::from(centered_text(attribute_lines)),
                Cell::from(centered_text(value_lines)),
            ])
            .height(to_u16(height))
            .style(theme.table_cell)
        })
        .collect();

    let page_rows = usize::from(area.height.saturating_sub(TABLE_CHROME));
    let viewport = TableViewport {
        page_rows,
        max_offset: last_page_offset(&heights, page_rows),
    };

    let table = Table::new(rows, widths.map(Constraint::Length))
        .column_spacing(COLUMN_SPACING)
        .header(header)
        .block(Block::default().title("Cookie Information").borders(Borders::ALL));

    (table, viewport)
}

/// Smallest offset whose rows, down to the last one, fit in `capacity` lines
fn last_page_offset(heights: &[usize], capacity: usize) -> usize {
    let mut used = 0;
    for (i, height) in heights.iter().enumerate().rev() {
        used += height;
        if used > capacity {
            return (i + 1).min(heights.len() - 1);
        }
    }
    0
}

fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Greedy word wrap by display width; words wider than a line are split
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        let mut buf = [0u8; 4];
        for c in word.chars() {
            let char_width = display_width(c.encode_utf8(&mut buf));
            if current_width > 0 && current_width + char_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += char_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn draw_error(f: &mut Frame, message: &str, theme: &Theme, area: Rect) {
    let error = Paragraph::new(message)
        .style(theme.error)
        .block(Block::default().title("Error").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(error, area);
}

/// Horizontal scroll and cursor column that keep the cursor inside `width` columns
fn input_window(input: &str, cursor: usize, width: u16) -> (u16, u16) {
    let before: String = input.chars().take(cursor).collect();
    let cursor_col = display_width(&before);
    let scroll = (cursor_col + 1).saturating_sub(usize::from(width.max(1)));
    (to_u16(scroll), to_u16(cursor_col - scroll))
}

fn draw_input(f: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let inner_width = area.width.saturating_sub(2);
    let (scroll, cursor_col) = input_window(&state.input, state.cursor, inner_width);

    let input = Paragraph::new(state.input.as_str())
        .style(theme.input)
        .scroll((0, scroll))
        .block(
            Block::default()
                .title("Enter a cookie name")
                .borders(Borders::ALL),
        );
    f.render_widget(input, area);

    if inner_width > 0 && area.height > 2 {
        f.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
