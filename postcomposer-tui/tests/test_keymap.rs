//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is mapped to the right state changes
//! through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libpostcomposer::identity::{Session, SessionUser};
use libpostcomposer::service::media::MediaCatalog;
use libpostcomposer::types::Role;
use libpostcomposer::{MediaFilter, MediaItem, MediaType, Platform};
use postcomposer_tui::app::{reduce, Action, AppState, Page};

fn key(code: KeyCode, modifiers: KeyModifiers) -> Action {
    Action::Key(KeyEvent::new(code, modifiers))
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, key(code, KeyModifiers::NONE))
}

fn owner_session() -> Session {
    Session::signed_in(SessionUser {
        full_name: Some("Owner".to_string()),
        username: None,
        primary_email: Some("owner@example.com".to_string()),
        role: Role::Owner,
        plan: "Team".to_string(),
        external_id: None,
    })
}

fn media(id: &str, name: &str, media_type: MediaType) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        name: name.to_string(),
        media_type,
        size: 512,
        url: format!("https://cdn.example.com/{}", name),
        thumbnail_url: String::new(),
        created_at: 0,
    }
}

#[test]
fn test_ctrl_q_quits_application() {
    let state = reduce(AppState::new(), key(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(state.should_quit);
}

#[test]
fn test_plain_q_does_not_quit() {
    let state = press(AppState::new(), KeyCode::Char('q'));
    assert!(!state.should_quit);
}

#[test]
fn test_f1_toggles_help() {
    let state = press(AppState::new(), KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_esc_dismisses_error_before_help() {
    let state = reduce(AppState::new(), Action::ShowHelp);
    let state = reduce(state, Action::ShowError("boom".to_string()));

    let state = press(state, KeyCode::Esc);
    assert!(state.error.is_none());
    assert!(state.help_visible);

    let state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
}

#[test]
fn test_f4_cycles_visible_pages() {
    let state = press(AppState::new(), KeyCode::F(4));
    assert_eq!(state.shell.current_page, Page::Workspace);

    let state = press(state, KeyCode::F(3));
    let state = press(state, KeyCode::F(3));
    assert_eq!(state.shell.current_page, Page::Documentation);
}

#[test]
fn test_page_cycle_skips_approvals_without_permission() {
    let mut state = reduce(AppState::new(), Action::NavigateTo(Page::ImageLibrary));
    state = press(state, KeyCode::F(4));
    assert_eq!(state.shell.current_page, Page::Schedule);

    let mut state = reduce(AppState::new(), Action::SessionLoaded(owner_session()));
    state = reduce(state, Action::NavigateTo(Page::ImageLibrary));
    state = press(state, KeyCode::F(4));
    assert_eq!(state.shell.current_page, Page::Approvals);
}

#[test]
fn test_alt_digits_select_platform_tabs() {
    let state = reduce(AppState::new(), key(KeyCode::Char('2'), KeyModifiers::ALT));
    assert_eq!(state.composer.preview.active_tab(), Platform::LinkedIn);

    let state = reduce(state, key(KeyCode::Char('4'), KeyModifiers::ALT));
    assert_eq!(state.composer.preview.active_tab(), Platform::Mastodon);
}

#[test]
fn test_alt_digits_on_approvals_leave_composer_tab() {
    let state = reduce(AppState::new(), Action::SessionLoaded(owner_session()));
    let state = reduce(state, Action::NavigateTo(Page::Approvals));
    let state = reduce(state, key(KeyCode::Char('3'), KeyModifiers::ALT));

    assert_eq!(state.approvals_preview.active_tab(), Platform::Threads);
    assert_eq!(state.composer.preview.active_tab(), Platform::Twitter);
}

#[test]
fn test_f2_ignored_on_desktop() {
    let state = reduce(AppState::new(), Action::Resize(160, 40));
    let state = press(state, KeyCode::F(2));
    assert!(!state.shell.is_menu_open());
}

#[test]
fn test_media_page_typing_searches() {
    let state = reduce(
        AppState::new(),
        Action::CatalogLoaded(MediaCatalog::new(vec![
            media("1", "Logo.png", MediaType::Image),
            media("2", "launch.mp4", MediaType::Video),
            media("3", "logo-animated.mp4", MediaType::Video),
        ])),
    );
    let mut state = reduce(state, Action::NavigateTo(Page::ImageLibrary));

    for c in "LOGO".chars() {
        state = press(state, KeyCode::Char(c));
    }
    assert_eq!(state.library.query, "LOGO");
    assert_eq!(state.library.displayed(&state.catalog).len(), 2);

    let state = press(state, KeyCode::Tab);
    let state = press(state, KeyCode::Tab);
    assert_eq!(state.library.filter, MediaFilter::Video);
    let displayed: Vec<&str> = state
        .library
        .displayed(&state.catalog)
        .into_iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(displayed, vec!["3"]);

    let state = press(state, KeyCode::Enter);
    assert_eq!(state.catalog.selected_id(), Some("3"));
}

#[test]
fn test_ctrl_o_opens_picker_and_esc_closes_it() {
    let state = reduce(AppState::new(), key(KeyCode::Char('o'), KeyModifiers::CONTROL));
    assert!(state.composer.picker.is_some());
    assert!(!state.composer_accepts_text());

    let state = press(state, KeyCode::Esc);
    assert!(state.composer.picker.is_none());
}

#[test]
fn test_upload_prompt_captures_typing() {
    let state = reduce(AppState::new(), Action::NavigateTo(Page::ImageLibrary));
    let mut state = reduce(state, key(KeyCode::Char('u'), KeyModifiers::CONTROL));
    for c in "a.png".chars() {
        state = press(state, KeyCode::Char(c));
    }

    assert_eq!(state.library.upload_prompt.as_deref(), Some("a.png"));
    assert!(state.library.query.is_empty());

    let state = press(state, KeyCode::Esc);
    assert!(state.library.upload_prompt.is_none());
}

#[test]
fn test_overlay_swallows_page_keys() {
    let state = reduce(AppState::new(), Action::NavigateTo(Page::ImageLibrary));
    let state = reduce(state, Action::ShowHelp);
    let state = press(state, KeyCode::Char('x'));

    assert!(state.library.query.is_empty());
}
