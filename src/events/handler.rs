use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{AppEvent, EventResult};
use crate::app::App;
use crate::data::SortKey;
use crate::error::Result;

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent) -> Result<EventResult> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => {
            app.refresh()?;
            Ok(EventResult::Continue)
        }
    }
}

/// Handle a key event, returns EventResult
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<EventResult> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(EventResult::Exit);
        }
        KeyCode::Char('q') | KeyCode::Esc => return Ok(EventResult::Exit),
        KeyCode::Left => app.set_sort_key(app.sort_key.prev())?,
        KeyCode::Right => app.set_sort_key(app.sort_key.next())?,
        KeyCode::Char(' ') => app.toggle_sort_dir()?,
        KeyCode::Char('p') => app.set_sort_key(SortKey::Pid)?,
        KeyCode::Char('s') => app.set_sort_key(SortKey::State)?,
        KeyCode::Char('n') => app.set_sort_key(SortKey::Name)?,
        KeyCode::Char('c') => app.set_sort_key(SortKey::Command)?,
        KeyCode::Char('e') => app.set_sort_key(SortKey::Env)?,
        KeyCode::Char('r') => app.refresh()?,
        _ => {}
    }
    Ok(EventResult::Continue)
}
