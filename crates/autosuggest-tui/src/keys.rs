use autosuggest_core::{Key, LineBuffer, TextInput};
use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;

/// Map a terminal key to the key identity the widget understands.
pub fn widget_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

/// Default editing action of a key on the input line, if any.
fn edit_action(code: KeyCode, modifiers: KeyModifiers) -> Option<fn(&mut LineBuffer)> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let action: fn(&mut LineBuffer) = match code {
        KeyCode::Backspace if ctrl || modifiers.contains(KeyModifiers::ALT) => {
            LineBuffer::delete_word_back
        }
        KeyCode::Backspace => LineBuffer::delete_back,
        KeyCode::Delete => LineBuffer::delete_forward,
        KeyCode::Left => LineBuffer::cursor_left,
        KeyCode::Right => LineBuffer::cursor_right,
        KeyCode::Home => LineBuffer::cursor_home,
        KeyCode::End => LineBuffer::cursor_end,
        KeyCode::Char('w') if ctrl => LineBuffer::delete_word_back,
        KeyCode::Char('u') if ctrl => LineBuffer::clear,
        KeyCode::Char('a') if ctrl => LineBuffer::cursor_home,
        KeyCode::Char('e') if ctrl => LineBuffer::cursor_end,
        _ => return None,
    };
    Some(action)
}

pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.picked = None;
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    let key = widget_key(code);
    match code {
        // Default action of Enter is submitting the line as typed.
        KeyCode::Enter => {
            let mut submit = false;
            app.press(key, |_| submit = true);
            if submit {
                app.picked = Some(app.input.text().to_string());
                app.should_quit = true;
            }
        }
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.press(key, |input| input.insert_char(c));
        }
        _ => match edit_action(code, modifiers) {
            Some(edit) => {
                app.press(key, edit);
            }
            None => {
                app.press(key, |_| {});
            }
        },
    }
}
