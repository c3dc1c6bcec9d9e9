//! Test the mobile menu's hold on the document overflow
//!
//! Whatever path closes the menu, the overflow in effect before it opened
//! must come back.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use postcomposer_tui::app::shell::{Document, Overflow};
use postcomposer_tui::app::{reduce, Action, AppState, Page};

fn mobile_state(document: &Document) -> AppState {
    let state = AppState::with_document(document.clone(), 768);
    // 80 columns * 8 px = 640 px
    reduce(state, Action::Resize(80, 24))
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[test]
fn test_resize_switches_layout_mode() {
    let document = Document::new();
    let state = mobile_state(&document);
    assert!(state.shell.is_mobile());

    let state = reduce(state, Action::Resize(96, 24));
    assert!(!state.shell.is_mobile());

    let state = reduce(state, Action::Resize(95, 24));
    assert!(state.shell.is_mobile());
}

#[test]
fn test_custom_breakpoint() {
    let state = AppState::with_document(Document::new(), 1024);
    let state = reduce(state, Action::Resize(100, 24));
    assert!(state.shell.is_mobile());
}

#[test]
fn test_toggle_open_then_closed_restores_overflow() {
    let document = Document::new();
    document.set_overflow(Overflow::Scroll);
    let state = mobile_state(&document);

    let state = press(state, KeyCode::F(2));
    assert!(state.shell.is_menu_open());
    assert_eq!(document.overflow(), Overflow::Hidden);

    let state = press(state, KeyCode::F(2));
    assert!(!state.shell.is_menu_open());
    assert_eq!(document.overflow(), Overflow::Scroll);
}

#[test]
fn test_esc_closes_menu_and_restores_overflow() {
    let document = Document::new();
    let state = press(mobile_state(&document), KeyCode::F(2));
    assert!(document.is_scroll_locked());

    let state = press(state, KeyCode::Esc);
    assert!(!state.shell.is_menu_open());
    assert_eq!(document.overflow(), Overflow::Auto);
}

#[test]
fn test_selecting_menu_link_navigates_and_unlocks() {
    let document = Document::new();
    document.set_overflow(Overflow::Visible);
    let state = press(mobile_state(&document), KeyCode::F(2));

    // Fourth visible link is the image library
    let state = press(state, KeyCode::Char('4'));

    assert_eq!(state.shell.current_page, Page::ImageLibrary);
    assert!(!state.shell.is_menu_open());
    assert_eq!(document.overflow(), Overflow::Visible);
}

#[test]
fn test_page_switch_closes_menu() {
    let document = Document::new();
    let state = press(mobile_state(&document), KeyCode::F(2));

    let state = press(state, KeyCode::F(4));

    assert_eq!(state.shell.current_page, Page::Workspace);
    assert_eq!(document.overflow(), Overflow::Auto);
}

#[test]
fn test_dropping_state_with_open_menu_restores_overflow() {
    let document = Document::new();
    document.set_overflow(Overflow::Scroll);

    {
        let state = press(mobile_state(&document), KeyCode::F(2));
        assert!(state.shell.is_menu_open());
        assert_eq!(document.overflow(), Overflow::Hidden);
    }

    assert_eq!(document.overflow(), Overflow::Scroll);
}

#[test]
fn test_menu_stays_open_across_desktop_resize() {
    let document = Document::new();
    let state = press(mobile_state(&document), KeyCode::F(2));

    let state = reduce(state, Action::Resize(160, 40));
    assert!(state.shell.is_menu_open());

    // F2 still closes it so the lock can always be released
    let state = press(state, KeyCode::F(2));
    assert!(!state.shell.is_menu_open());
    assert_eq!(document.overflow(), Overflow::Auto);
}
