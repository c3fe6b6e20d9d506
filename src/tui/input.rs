//! Raw-mode line editing.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, format_number, reset_terminal};

/// Edit buffer with a cursor counted in characters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Line {
    chars: Vec<char>,
    cursor: usize,
}

enum Edit {
    Changed,
    Submit,
    Cancel,
    Ignored,
}

impl Line {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn apply(&mut self, key: KeyEvent, accept: impl Fn(char) -> bool) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => return Edit::Ignored,
        }
        Edit::Changed
    }
}

/// Run an edit loop. `render` maps the buffer to what is shown and the
/// display column of the cursor.
fn edit(
    prompt: &str,
    initial: &str,
    accept: impl Fn(char) -> bool,
    render: impl Fn(&Line) -> (String, usize),
) -> Option<String> {
    let mut line = Line::new(initial);

    let Ok(guard) = RawModeGuard::new() else {
        return Some(line.text());
    };

    let (shown, _) = render(&line);
    print!("{prompt}: {shown}");
    flush();
    let mut last_width = shown.chars().count();
    let mut cancelled = false;

    loop {
        match read() {
            Ok(Event::Key(key)) => match line.apply(key, &accept) {
                Edit::Submit => break,
                Edit::Cancel => {
                    cancelled = true;
                    break;
                }
                Edit::Ignored => {}
                Edit::Changed => {
                    let (shown, col) = render(&line);
                    print!("\r{prompt}: {}", " ".repeat(last_width + 1));
                    print!("\r{prompt}: {shown}");
                    print!("\x1b[{}G", prompt.chars().count() + 3 + col);
                    flush();
                    last_width = shown.chars().count();
                }
            },
            Ok(_) => {}
            Err(_) => break,
        }
    }

    drop(guard);
    println!();
    (!cancelled).then(|| line.text())
}

/// Free text. `None` when cancelled with Esc or Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    edit(prompt, initial, |_| true, |line| (line.text(), line.cursor))
}

/// Digits only, shown with thousands separators. An empty buffer reads as 0.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let initial = if initial > 0 {
        initial.to_string()
    } else {
        String::new()
    };
    let digits = edit(
        prompt,
        &initial,
        |c| c.is_ascii_digit(),
        |line| {
            let digits = line.text();
            let shown = grouped(&digits);
            (shown, grouped_cursor(digits.len(), line.cursor))
        },
    )?;
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

fn grouped(digits: &str) -> String {
    digits
        .parse::<usize>()
        .map(format_number)
        .unwrap_or_else(|_| digits.to_string())
}

/// Display column of a cursor sitting before digit `cursor` once commas are
/// inserted every three digits from the right.
fn grouped_cursor(len: usize, cursor: usize) -> usize {
    if len == 0 || cursor == 0 {
        return 0;
    }
    let head = match len % 3 {
        0 => 3,
        r => r,
    };
    let commas = if cursor <= head {
        0
    } else {
        1 + (cursor - head - 1) / 3
    };
    cursor + commas
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn editing_moves_the_cursor() {
        let mut line = Line::new("carlo");
        line.apply(key(KeyCode::Char('s')), |_| true);
        line.apply(key(KeyCode::Home), |_| true);
        line.apply(key(KeyCode::Delete), |_| true);
        line.apply(key(KeyCode::Char('C')), |_| true);
        assert_eq!(line.text(), "Carlos");
        line.apply(key(KeyCode::End), |_| true);
        line.apply(key(KeyCode::Backspace), |_| true);
        assert_eq!(line.text(), "Carlo");
        assert_eq!(line.cursor, 5);
    }

    #[test]
    fn rejected_characters_are_ignored() {
        let mut line = Line::new("19");
        assert!(matches!(
            line.apply(key(KeyCode::Char('x')), |c| c.is_ascii_digit()),
            Edit::Ignored
        ));
        assert_eq!(line.text(), "19");
    }

    #[test]
    fn control_keys() {
        let mut line = Line::new("ana");
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        line.apply(ctrl_u, |_| true);
        assert_eq!(line, Line::default());
        assert!(matches!(line.apply(key(KeyCode::Esc), |_| true), Edit::Cancel));
        assert!(matches!(line.apply(key(KeyCode::Enter), |_| true), Edit::Submit));
    }

    #[rstest]
    #[case(7, 0, 0)]
    #[case(7, 1, 1)]
    #[case(7, 2, 3)]
    #[case(7, 7, 9)]
    #[case(6, 3, 3)]
    #[case(6, 4, 5)]
    fn cursor_skips_commas(#[case] len: usize, #[case] cursor: usize, #[case] col: usize) {
        assert_eq!(grouped_cursor(len, cursor), col);
    }
}
