use ratatui::style::{Color, Modifier, Style};

const HEADER_NAVY: Color = Color::Rgb(0x0e, 0x3d, 0x66);
const PANEL_GRAY: Color = Color::Rgb(0xf0, 0xf0, 0xf0);

pub struct Theme {
    pub title: Style,
    pub description: Style,
    pub table_header: Style,
    pub table_cell: Style,
    pub input: Style,
    pub placeholder: Style,
    pub status: Style,
    pub error: Style,
    pub help: Style,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        if name == "dark" {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn light() -> Self {
        Self {
            title: Style::default()
                .fg(HEADER_NAVY)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Black).bg(PANEL_GRAY),
            table_header: Style::default()
                .fg(Color::White)
                .bg(HEADER_NAVY)
                .add_modifier(Modifier::BOLD),
            table_cell: Style::default().fg(Color::Black),
            input: Style::default().fg(Color::Black),
            placeholder: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::Blue),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            help: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::White).bg(Color::DarkGray),
            table_header: Style::default()
                .fg(Color::White)
                .bg(HEADER_NAVY)
                .add_modifier(Modifier::BOLD),
            table_cell: Style::default().fg(Color::White),
            input: Style::default().fg(Color::White),
            placeholder: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::Yellow),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            help: Style::default().fg(Color::DarkGray),
        }
    }
}
