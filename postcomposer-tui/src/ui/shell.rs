//! Shell chrome: sidebar, header, bottom navigation, identity badge

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::Palette;
use crate::app::shell::{nav_links, IdentityBadge, BOTTOM_NAV};
use crate::app::AppState;

const SIDEBAR_WIDTH: u16 = 28;

/// Sidebar, top-right controls and status line; returns the content area
pub fn render_desktop_chrome(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_sidebar(frame, columns[0], state, palette, false);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    frame.render_widget(
        Paragraph::new(controls_line(state, palette)).alignment(ratatui::layout::Alignment::Right),
        rows[0],
    );
    render_status_line(frame, rows[2], state, palette);

    rows[1]
}

/// Header, status line and bottom navigation; returns the content area
pub fn render_mobile_chrome(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let toggle = match (state.shell.is_menu_open(), state.config.unicode_enabled) {
        (true, true) => "✕",
        (false, true) => "☰",
        (true, false) => "x",
        (false, false) => "=",
    };
    let mut header = vec![
        Span::styled(format!("[F2] {} ", toggle), Style::default().fg(palette.accent)),
        Span::styled("PostComposer", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
    ];
    header.extend(controls_line(state, palette).spans);

    frame.render_widget(
        Paragraph::new(Line::from(header)).block(Block::default().borders(Borders::ALL)),
        rows[0],
    );

    render_status_line(frame, rows[2], state, palette);
    render_bottom_nav(frame, rows[3], state, palette);

    rows[1]
}

/// Overlay plus slide-in sidebar while the mobile menu is open
pub fn render_mobile_menu(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.muted)),
        area,
    );

    let width = SIDEBAR_WIDTH.min(area.width);
    let drawer = Rect { width, ..area };
    frame.render_widget(Clear, drawer);
    render_sidebar(frame, drawer, state, palette, true);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette, numbered: bool) {
    let block = Block::default()
        .title(Span::styled(
            " PostComposer ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(inner);

    let links: Vec<Line> = nav_links(&state.session)
        .into_iter()
        .enumerate()
        .map(|(i, page)| {
            let label = if numbered {
                format!(" {} {}", i + 1, page.title())
            } else {
                format!(" {}", page.title())
            };
            if page == state.shell.current_page {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(palette.highlight)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ))
            } else {
                Line::from(label)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(links), parts[0]);
    render_identity_badge(frame, parts[1], state, palette);
}

/// Identity badge: placeholders while loading, then name and plan
pub fn render_identity_badge(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let lines = match IdentityBadge::from_session(&state.session) {
        IdentityBadge::Loading => {
            let pulse = if (state.tick / 5) % 2 == 0 { "░" } else { "▒" };
            vec![
                Line::from(Span::styled(pulse.repeat(14), Style::default().fg(palette.muted))),
                Line::from(Span::styled(pulse.repeat(8), Style::default().fg(palette.muted))),
            ]
        }
        IdentityBadge::SignedOut => vec![Line::from(Span::styled(
            "Not signed in",
            Style::default().fg(palette.muted),
        ))],
        IdentityBadge::SignedIn {
            display_name,
            initial,
            plan_label,
        } => vec![
            Line::from(vec![
                Span::styled(
                    format!("({}) ", initial.unwrap_or('?')),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(display_name, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(plan_label, Style::default().fg(palette.muted))),
            Line::from(Span::styled("[account]", Style::default().fg(palette.accent))),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn controls_line(state: &AppState, palette: &Palette) -> Line<'static> {
    let bell = if state.config.unicode_enabled { "🔔" } else { "N" };
    let unread = state.shell.notifications.unread_count();

    Line::from(vec![
        Span::styled(
            format!("[F7] {} ", state.shell.theme.label()),
            Style::default().fg(palette.accent),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[F8] {} {} ", bell, unread),
            if unread > 0 {
                Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.accent)
            },
        ),
    ])
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let text = match state.status.message {
        Some(ref message) => Span::raw(message.clone()),
        None => Span::styled(
            format!(
                "{} | F1: Help | Ctrl+Q: Quit",
                state.shell.current_page.route()
            ),
            Style::default().fg(palette.muted),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

fn render_bottom_nav(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let titles: Vec<&str> = BOTTOM_NAV.iter().map(|page| page.title()).collect();
    let selected = BOTTOM_NAV
        .iter()
        .position(|page| *page == state.shell.current_page);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD))
        .select(selected.unwrap_or(usize::MAX));

    frame.render_widget(tabs, area);
}

/// Notification panel anchored top-right
pub fn render_notifications_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
) {
    let width = 40u16.min(area.width);
    let height = 10u16.min(area.height);
    let panel = Rect {
        x: area.x + area.width - width,
        y: area.y + 1u16.min(area.height - height),
        width,
        height,
    };

    let items = state.shell.notifications.items();
    let lines: Vec<Line> = if items.is_empty() {
        vec![Line::from(Span::styled(
            "No notifications",
            Style::default().fg(palette.muted),
        ))]
    } else {
        items
            .iter()
            .rev()
            .map(|n| Line::from(format!("• {}", n.message)))
            .collect()
    };

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Notifications ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            )
            .style(palette.base()),
        panel,
    );
}
