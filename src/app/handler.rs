use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Status messages last until the next key press
    state.status_message = None;

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::Char('f') => {
            state.toggle_flag();
            return vec![];
        }
        KeyCode::Char('r') => {
            state.toggle_reveal();
            return vec![];
        }
        KeyCode::Char('n') | KeyCode::Right => {
            state.next_question();
            return vec![];
        }
        KeyCode::Char('p') | KeyCode::Left => {
            state.previous_question();
            return vec![];
        }
        KeyCode::Char('[') => {
            state.browse_part(false);
            return vec![];
        }
        KeyCode::Char(']') => {
            state.browse_part(true);
            return vec![];
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            state.select_option(index);
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Question => handle_question_key(state, key),
        FocusPanel::Navigator => handle_navigator_key(state, key),
    }
}

fn handle_question_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => state.choose_highlighted(),
        _ => {}
    }
    vec![]
}

fn handle_navigator_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.previous_question(),
        KeyCode::Down | KeyCode::Char('j') => state.next_question(),
        KeyCode::Enter => {
            state.enter_current_part();
            state.focus = FocusPanel::Question;
        }
        _ => {}
    }
    vec![]
}
