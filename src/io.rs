use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts a crossterm event into a lifeboard event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            match key_event {
                KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => Some(Event::AppEvent(AppEvent::Exit)),
                KeyEvent {
                    code: KeyCode::Char(' '),
                    ..
                } => Some(Event::AppEvent(AppEvent::TogglePause)),
                KeyEvent {
                    code: KeyCode::Char('g'),
                    ..
                } => Some(Event::AppEvent(AppEvent::ToggleGridlines)),
                KeyEvent {
                    code: KeyCode::Char('s'),
                    ..
                } => Some(Event::EngineEvent(EngineEvent::Step)),
                KeyEvent {
                    code: KeyCode::Char('r'),
                    ..
                } => Some(Event::EngineEvent(EngineEvent::Reseed)),
                _ => None,
            }
        }
        CrossTermEvent::Resize(cols, rows) => Some(Event::AppEvent(AppEvent::Resize { cols, rows })),
        _ => None,
    }
}
