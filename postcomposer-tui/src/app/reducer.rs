//! Reducer for state transitions
//!
//! `(State, Action) -> State`. The reducer performs no I/O: database and
//! identity work is requested through [`Effect`]s and comes back as actions.
//! The one shared signal it touches is the document overflow, through the
//! shell's scroll lock.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libpostcomposer::types::ImageAttachment;
use libpostcomposer::{MediaItem, Platform};

use super::actions::{Action, Effect};
use super::media_library::{grid_columns, MediaLibraryView};
use super::shell::{nav_links, Page};
use super::state::{AppState, StatusBarState};

/// Apply an action to the state
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Mouse(_) => state,
        Action::Tick => AppState {
            tick: state.tick.wrapping_add(1),
            ..state
        },
        Action::Resize(columns, _rows) => {
            let mut state = state;
            state.shell.resize_columns(columns);
            state
        }

        // === Shell ===
        Action::NavigateTo(page) => navigate(state, page),

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::ToggleMobileMenu => {
            let mut state = state;
            state.shell.toggle_mobile_menu();
            state
        }

        Action::ToggleTheme => {
            let mut state = state;
            state.shell.toggle_theme();
            state
        }

        Action::ToggleNotifications => {
            let mut state = state;
            state.shell.notifications.toggle_panel();
            state
        }

        // === Service results ===
        Action::SessionLoaded(session) => {
            let mut state = AppState { session, ..state };
            if !state.shell.current_page.is_visible(&state.session) {
                state.shell.navigate(Page::ComposerLibrary);
            }
            state
        }

        Action::UserEnsured { email } => set_status(state, format!("Signed in as {}", email)),

        Action::CatalogLoaded(catalog) => {
            let mut state = AppState { catalog, ..state };
            state.library.cursor = 0;
            state
        }

        Action::MediaImported(item) => {
            let mut state = state;
            let message = format!("Imported {}", item.name);
            state.catalog.insert(item);
            state.shell.notifications.push(message.clone());
            set_status(state, message)
        }

        // === Composer ===
        Action::SelectPlatformTab(platform) => select_tab(state, platform),

        Action::PreviewContentEdited(content) => {
            let mut state = state;
            if let Some(event) = state.composer.preview.edit_content(content) {
                state.composer.drafts.apply(event);
            }
            state
        }

        Action::RemoveImage => change_image(state, None),

        Action::OpenMediaPicker => {
            let mut state = state;
            if state.shell.current_page == Page::ComposerLibrary {
                state.composer.picker = Some(MediaLibraryView::new());
            }
            state
        }

        Action::CloseMediaPicker => {
            let mut state = state;
            state.composer.picker = None;
            state
        }

        // === Media library ===
        Action::MediaSearchInput(c) => with_media_view(state, |view, _| view.push_query(c)),
        Action::MediaSearchBackspace => with_media_view(state, |view, _| view.pop_query()),
        Action::MediaCycleFilter => with_media_view(state, |view, _| view.cycle_filter()),
        Action::MediaMoveCursor(delta) => {
            with_media_view(state, |view, catalog| view.move_cursor(delta, catalog))
        }
        Action::MediaActivate => activate_highlighted(state),

        Action::OpenUploadPrompt => {
            with_media_view(state, |view, _| view.upload_prompt = Some(String::new()))
        }
        Action::UploadPromptInput(c) => with_media_view(state, |view, _| {
            if let Some(prompt) = view.upload_prompt.as_mut() {
                prompt.push(c);
            }
        }),
        Action::UploadPromptBackspace => with_media_view(state, |view, _| {
            if let Some(prompt) = view.upload_prompt.as_mut() {
                prompt.pop();
            }
        }),
        Action::CancelUpload => with_media_view(state, |view, _| view.upload_prompt = None),
        Action::SubmitUpload => submit_upload(state),

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => set_status(state, message),

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

fn set_status(state: AppState, message: String) -> AppState {
    AppState {
        status: StatusBarState {
            message: Some(message),
        },
        ..state
    }
}

fn navigate(state: AppState, page: Page) -> AppState {
    if !page.is_visible(&state.session) {
        return set_status(state, format!("{} is not available for this account", page.title()));
    }

    let mut state = state;
    if state.shell.is_menu_open() {
        state.shell.select_mobile_link(page);
    } else {
        state.shell.navigate(page);
    }
    state
}

/// Step through the visible navigation links
fn cycle_page(state: AppState, forward: bool) -> AppState {
    let links = nav_links(&state.session);
    if links.is_empty() {
        return state;
    }

    let current = links
        .iter()
        .position(|page| *page == state.shell.current_page)
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % links.len()
    } else {
        (current + links.len() - 1) % links.len()
    };

    navigate(state, links[next])
}

fn select_tab(state: AppState, platform: Platform) -> AppState {
    let mut state = state;
    match state.shell.current_page {
        Page::Approvals => state.approvals_preview.select_tab(platform),
        _ => state.composer.preview.select_tab(platform),
    }
    state
}

fn change_image(state: AppState, image: Option<ImageAttachment>) -> AppState {
    let mut state = state;
    if let Some(event) = state.composer.preview.change_image(image) {
        state.composer.drafts.apply(event);
    }
    state
}

/// Run `f` on the media view that has focus, if any
fn with_media_view<F>(state: AppState, f: F) -> AppState
where
    F: FnOnce(&mut MediaLibraryView, &libpostcomposer::service::media::MediaCatalog),
{
    let mut state = state;
    let AppState {
        shell,
        catalog,
        library,
        composer,
        ..
    } = &mut state;

    match shell.current_page {
        Page::ImageLibrary => f(library, catalog),
        Page::ComposerLibrary => {
            if let Some(picker) = composer.picker.as_mut() {
                f(picker, catalog);
            }
        }
        _ => {}
    }
    state
}

fn activate_highlighted(state: AppState) -> AppState {
    let id = state
        .focused_media_view()
        .and_then(|view| view.highlighted(&state.catalog))
        .map(|item| item.id.clone());
    let Some(id) = id else {
        return state;
    };

    let mut state = state;
    if state.composer.picker.is_some() && state.shell.current_page == Page::ComposerLibrary {
        // Picker: the page callback attaches the item, the shared selection stays
        let mut picked: Option<(String, String)> = None;
        let mut on_select = |item: &MediaItem| picked = Some((item.name.clone(), item.url.clone()));

        if let Err(e) = state.catalog.activate(&id, Some(&mut on_select)) {
            return reduce(state, Action::ShowError(e.to_string()));
        }

        if let Some((name, url)) = picked {
            let platform = state.composer.preview.active_tab();
            state = change_image(state, Some(ImageAttachment::Url(url)));
            state.composer.picker = None;
            state = set_status(
                state,
                format!("Attached {} to {}", name, platform.display_name()),
            );
        }
        return state;
    }

    match state.catalog.activate(&id, None) {
        Ok(()) => {
            let name = state
                .catalog
                .selected()
                .map(|item| item.name.clone())
                .unwrap_or_default();
            set_status(state, format!("Selected {}", name))
        }
        Err(e) => reduce(state, Action::ShowError(e.to_string())),
    }
}

fn submit_upload(state: AppState) -> AppState {
    let mut path = None;
    let mut state = with_media_view(state, |view, _| {
        path = view.upload_prompt.take();
    });

    match path.map(|p| p.trim().to_string()) {
        Some(p) if !p.is_empty() => {
            let resolved = PathBuf::from(shellexpand::tilde(&p).to_string());
            state.effects.push(Effect::ImportMedia(resolved));
            set_status(state, format!("Importing {}...", p))
        }
        _ => state,
    }
}

/// Map keyboard input to actions
///
/// This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) => return handle_escape(state),

        _ => {}
    }

    // Overlays swallow everything else
    if state.has_overlay() {
        return state;
    }

    match (key.code, key.modifiers) {
        (KeyCode::F(2), _) if state.shell.is_mobile() || state.shell.is_menu_open() => {
            return reduce(state, Action::ToggleMobileMenu);
        }
        (KeyCode::F(3), _) => return cycle_page(state, false),
        (KeyCode::F(4), _) => return cycle_page(state, true),
        (KeyCode::F(7), _) => return reduce(state, Action::ToggleTheme),
        (KeyCode::F(8), _) => return reduce(state, Action::ToggleNotifications),
        _ => {}
    }

    if state.shell.is_menu_open() {
        return handle_menu_key(state, key);
    }

    // Page-specific keybindings
    match state.shell.current_page {
        Page::ComposerLibrary => handle_composer_key(state, key),
        Page::ImageLibrary => handle_media_key(state, key),
        Page::Approvals => match platform_shortcut(key) {
            Some(platform) => reduce(state, Action::SelectPlatformTab(platform)),
            None => state,
        },
        _ => state,
    }
}

/// Esc closes the innermost open thing
fn handle_escape(state: AppState) -> AppState {
    if state.error.is_some() {
        return reduce(state, Action::DismissError);
    }
    if state.help_visible {
        return reduce(state, Action::HideHelp);
    }
    if state.shell.notifications.panel_open {
        return reduce(state, Action::ToggleNotifications);
    }
    if state.focused_media_view().is_some_and(|view| view.is_uploading()) {
        return reduce(state, Action::CancelUpload);
    }
    if state.composer.picker.is_some() && state.shell.current_page == Page::ComposerLibrary {
        return reduce(state, Action::CloseMediaPicker);
    }
    if state.shell.is_menu_open() {
        return reduce(state, Action::ToggleMobileMenu);
    }
    state
}

/// Digits pick a link from the open mobile menu
fn handle_menu_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let index = (c as usize) - ('1' as usize);
            let links = nav_links(&state.session);
            match links.get(index) {
                Some(page) => reduce(state, Action::NavigateTo(*page)),
                None => state,
            }
        }
        _ => state,
    }
}

/// Alt+1..4 select a platform tab
fn platform_shortcut(key: KeyEvent) -> Option<Platform> {
    if !key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c @ '1'..='4') => Platform::ALL.get((c as usize) - ('1' as usize)).copied(),
        _ => None,
    }
}

fn handle_composer_key(state: AppState, key: KeyEvent) -> AppState {
    if state.composer.picker.is_some() {
        return handle_media_key(state, key);
    }

    if let Some(platform) = platform_shortcut(key) {
        return reduce(state, Action::SelectPlatformTab(platform));
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => reduce(state, Action::OpenMediaPicker),
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => reduce(state, Action::RemoveImage),
        _ => state,
    }
}

fn handle_media_key(state: AppState, key: KeyEvent) -> AppState {
    let uploading = state
        .focused_media_view()
        .is_some_and(|view| view.is_uploading());

    if uploading {
        return match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => reduce(state, Action::SubmitUpload),
            (KeyCode::Backspace, _) => reduce(state, Action::UploadPromptBackspace),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                reduce(state, Action::UploadPromptInput(c))
            }
            _ => state,
        };
    }

    let columns = grid_columns(state.shell.is_mobile()) as isize;
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => reduce(state, Action::OpenUploadPrompt),
        (KeyCode::Tab, _) => reduce(state, Action::MediaCycleFilter),
        (KeyCode::Left, _) => reduce(state, Action::MediaMoveCursor(-1)),
        (KeyCode::Right, _) => reduce(state, Action::MediaMoveCursor(1)),
        (KeyCode::Up, _) => reduce(state, Action::MediaMoveCursor(-columns)),
        (KeyCode::Down, _) => reduce(state, Action::MediaMoveCursor(columns)),
        (KeyCode::Enter, _) => reduce(state, Action::MediaActivate),
        (KeyCode::Backspace, _) => reduce(state, Action::MediaSearchBackspace),
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            reduce(state, Action::MediaSearchInput(c))
        }
        _ => state,
    }
}
