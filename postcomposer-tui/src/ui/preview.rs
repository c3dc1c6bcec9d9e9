//! Platform preview card rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use super::Palette;
use crate::app::preview::{
    author_placeholder, body_placeholder, limit_label, PlatformDrafts, PreviewTabs,
};
use libpostcomposer::Platform;

/// Tabs across the top, the active platform's card below
pub fn render_preview(
    frame: &mut Frame,
    area: Rect,
    preview: &PreviewTabs,
    drafts: &PlatformDrafts,
    editor: Option<&TextArea>,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<String> = Platform::ALL
        .iter()
        .enumerate()
        .map(|(i, platform)| format!("{} {}", i + 1, platform.display_name()))
        .collect();
    let active = Platform::ALL
        .iter()
        .position(|platform| *platform == preview.active_tab())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(if preview.is_read_only() {
            " Preview (read-only) "
        } else {
            " Preview "
        }))
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD))
        .select(active);
    frame.render_widget(tabs, chunks[0]);

    render_card(frame, chunks[1], preview, drafts, editor, palette);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    preview: &PreviewTabs,
    drafts: &PlatformDrafts,
    editor: Option<&TextArea>,
    palette: &Palette,
) {
    let platform = preview.active_tab();
    let post = drafts.get(platform);

    let card = Block::default()
        .title(format!(" {} ", platform.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let show_image = preview.shows_image_region(platform, drafts);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(if show_image { 3 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(inner);

    let author = author_placeholder(platform);
    let mut author_lines = vec![Line::from(Span::styled(
        author.name,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(line) = author.handle.or(author.subtitle) {
        author_lines.push(Line::from(Span::styled(line, Style::default().fg(palette.muted))));
    }
    frame.render_widget(Paragraph::new(author_lines), chunks[0]);

    match editor {
        Some(textarea) if preview.is_editable(platform) => {
            frame.render_widget(textarea, chunks[1]);
        }
        _ => {
            let body = if post.content.is_empty() {
                Paragraph::new(Span::styled(
                    body_placeholder(platform),
                    Style::default().fg(palette.muted),
                ))
            } else {
                Paragraph::new(post.content.as_str())
            };
            frame.render_widget(body.wrap(Wrap { trim: false }), chunks[1]);
        }
    }

    if show_image {
        let (text, style) = match post.image {
            Some(ref image) => (image.describe(), Style::default().fg(palette.fg)),
            None => (
                "No image - Ctrl+O to attach from the library".to_string(),
                Style::default().fg(palette.muted),
            ),
        };
        let title = if post.image.is_some() && preview.has_image_handler(platform) {
            " Image (Ctrl+X to remove) "
        } else {
            " Image "
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, style))
                .block(Block::default().borders(Borders::ALL).title(title)),
            chunks[2],
        );
    }

    let count = post.content.chars().count();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(limit_label(platform), Style::default().fg(palette.muted)),
            Span::raw(format!("  ({} typed)", count)),
        ])),
        chunks[3],
    );
}
