//! Media library rendering: search, filter tabs, uploader, card grid

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::Palette;
use crate::app::media_library::{grid_columns, MediaLibraryView};
use libpostcomposer::service::media::{format_file_size, MediaCatalog, EMPTY_PLACEHOLDER};
use libpostcomposer::{MediaFilter, MediaItem, MediaType};

const CARD_HEIGHT: u16 = 4;

pub fn render_library(
    frame: &mut Frame,
    area: Rect,
    view: &MediaLibraryView,
    catalog: &MediaCatalog,
    title: &str,
    is_mobile: bool,
    palette: &Palette,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let search = if view.query.is_empty() {
        Span::styled("Search media...", Style::default().fg(palette.muted))
    } else {
        Span::raw(view.query.clone())
    };
    frame.render_widget(
        Paragraph::new(search).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let filter_index = MediaFilter::ALL
        .iter()
        .position(|f| *f == view.filter)
        .unwrap_or(0);
    let tabs = Tabs::new(MediaFilter::ALL.iter().map(|f| f.label()).collect::<Vec<_>>())
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD))
        .select(filter_index);
    frame.render_widget(tabs, chunks[1]);

    let uploader = match view.upload_prompt {
        Some(ref path) => Paragraph::new(Line::from(vec![
            Span::styled("Path: ", Style::default().fg(palette.accent)),
            Span::raw(format!("{}_", path)),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Upload (Enter to import) ")),
        None => Paragraph::new(Span::styled(
            "Ctrl+U: upload an image or video",
            Style::default().fg(palette.muted),
        ))
        .block(Block::default().borders(Borders::ALL)),
    };
    frame.render_widget(uploader, chunks[2]);

    render_grid(frame, chunks[3], view, catalog, is_mobile, palette);
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    view: &MediaLibraryView,
    catalog: &MediaCatalog,
    is_mobile: bool,
    palette: &Palette,
) {
    let items = view.displayed(catalog);
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_PLACEHOLDER, Style::default().fg(palette.muted)))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let columns = grid_columns(is_mobile);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let cursor_row = view.cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= items.len() {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = start + col;
            if let Some(item) = items.get(index) {
                let highlighted = index == view.cursor;
                let selected = catalog.selected_id() == Some(item.id.as_str());
                render_card(frame, *cell, item, highlighted, selected, palette);
            }
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    item: &MediaItem,
    highlighted: bool,
    selected: bool,
    palette: &Palette,
) {
    let border = if highlighted {
        Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let marker = match item.media_type {
        MediaType::Video => "▶ ",
        MediaType::Image => "",
    };
    let title = if selected {
        format!(" ✓ {}{} ", marker, item.name)
    } else {
        format!(" {}{} ", marker, item.name)
    };

    let body = vec![
        Line::from(format_file_size(item.size)),
        Line::from(Span::styled(
            item.media_type.as_str(),
            Style::default().fg(palette.muted),
        )),
    ];

    frame.render_widget(
        Paragraph::new(body).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        ),
        area,
    );
}
