//! Stdin/stdout implementation of the core `Prompter`.

use habit_core::Prompter;
use std::io::{self, BufRead, Write};

pub struct StdConsole;

impl Prompter for StdConsole {
    fn say(&mut self, message: &str) {
        let mut stdout = io::stdout().lock();
        // A closed stdout leaves nothing to report to.
        let _ = writeln!(stdout, "{message}");
        let _ = stdout.flush();
    }

    fn read_line(&mut self) -> Option<String> {
        read_operator_line(&mut io::stdin().lock())
    }
}

/// Reads one line, replacing invalid UTF-8 so validators re-prompt on it.
///
/// `None` only on end of input or an I/O failure of the reader itself.
fn read_operator_line(reader: &mut impl BufRead) -> Option<String> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let line = String::from_utf8_lossy(&buf);
            Some(line.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::read_operator_line;
    use std::io::Cursor;

    #[test]
    fn invalid_utf8_line_is_returned_not_treated_as_end_of_input() {
        let mut reader = Cursor::new(b"\xff\xfe\n1\r\n".to_vec());

        let first = read_operator_line(&mut reader).unwrap();
        assert!(!first.is_empty());
        assert!(first.chars().all(|c| c == char::REPLACEMENT_CHARACTER));

        assert_eq!(read_operator_line(&mut reader).as_deref(), Some("1"));
        assert_eq!(read_operator_line(&mut reader), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut reader = Cursor::new(b"0".to_vec());
        assert_eq!(read_operator_line(&mut reader).as_deref(), Some("0"));
    }
}
