//! UI rendering
//!
//! Render functions draw state into a frame and never change it. The only
//! stateful widget is the active platform's editor, owned by the event loop
//! and passed in by reference.

pub mod media;
pub mod preview;
pub mod shell;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::shell::Theme;
use crate::app::{AppState, Page};

/// Colors for the current theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_state(state: &AppState) -> Self {
        if !state.config.colors_enabled {
            return Self {
                fg: Color::Reset,
                bg: Color::Reset,
                accent: Color::Reset,
                muted: Color::Reset,
                highlight: Color::Reset,
            };
        }

        match state.shell.theme {
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Reset,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                highlight: Color::Yellow,
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::Gray,
                highlight: Color::Magenta,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

/// Render the application UI
///
/// `editor` is the active platform's text area on the composer page.
pub fn render(frame: &mut Frame, state: &AppState, editor: Option<&TextArea>) {
    let area = frame.area();
    let palette = Palette::for_state(state);

    frame.render_widget(Block::default().style(palette.base()), area);

    let content = if state.shell.is_mobile() {
        shell::render_mobile_chrome(frame, area, state, &palette)
    } else {
        shell::render_desktop_chrome(frame, area, state, &palette)
    };

    render_page(frame, content, state, editor, &palette);

    if state.shell.is_mobile() && state.shell.is_menu_open() {
        shell::render_mobile_menu(frame, area, state, &palette);
    }

    if state.shell.notifications.panel_open {
        shell::render_notifications_panel(frame, area, state, &palette);
    }

    if state.help_visible {
        render_help_overlay(frame, area, &palette);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

fn render_page(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    editor: Option<&TextArea>,
    palette: &Palette,
) {
    match state.shell.current_page {
        Page::ComposerLibrary => {
            preview::render_preview(
                frame,
                area,
                &state.composer.preview,
                &state.composer.drafts,
                editor,
                palette,
            );

            if let Some(ref picker) = state.composer.picker {
                let popup = centered_rect(80, 80, area);
                frame.render_widget(Clear, popup);
                media::render_library(
                    frame,
                    popup,
                    picker,
                    &state.catalog,
                    " Select Media ",
                    state.shell.is_mobile(),
                    palette,
                );
            }
        }
        Page::ImageLibrary => media::render_library(
            frame,
            area,
            &state.library,
            &state.catalog,
            " Image Library ",
            state.shell.is_mobile(),
            palette,
        ),
        Page::Approvals => preview::render_preview(
            frame,
            area,
            &state.approvals_preview,
            &state.composer.drafts,
            None,
            palette,
        ),
        other => render_placeholder(frame, area, other.title(), "Coming soon", palette),
    }
}

/// Render placeholder screen for pages that are navigation targets only
fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str, palette: &Palette) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(palette.highlight))),
        Line::from(""),
        Line::from("F3/F4 to switch pages, F1 for help"),
    ])
    .block(block)
    .style(palette.base())
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(70, 80, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+Q    - Quit"),
        Line::from("  F1        - Toggle help"),
        Line::from("  F2        - Toggle menu (mobile layout)"),
        Line::from("  F3 / F4   - Previous / next page"),
        Line::from("  F7        - Toggle theme"),
        Line::from("  F8        - Notifications"),
        Line::from("  Esc       - Close overlay, picker, or menu"),
        Line::from(""),
        Line::from("Composer:"),
        Line::from("  Alt+1..4  - Twitter / LinkedIn / Threads / Mastodon"),
        Line::from("  Ctrl+O    - Attach image from library"),
        Line::from("  Ctrl+X    - Remove image"),
        Line::from(""),
        Line::from("Media library:"),
        Line::from("  type      - Search by name"),
        Line::from("  Tab       - Cycle All / Images / Videos"),
        Line::from("  arrows    - Move between cards"),
        Line::from("  Enter     - Select card"),
        Line::from("  Ctrl+U    - Upload a file"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(palette.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
