use crate::keymap::KEYMAP;

// Control symbols
pub const TERMINATOR: char = '#';
pub const BACKSPACE: char = '*';
pub const SEPARATOR: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Terminate,
    Backspace,
    Separator,
    Key(char),
    Ignored(char),
}

impl Keystroke {
    pub fn from_char(c: char) -> Self {
        use Keystroke::*;

        match c {
            TERMINATOR => Terminate,
            BACKSPACE => Backspace,
            SEPARATOR => Separator,
            key if KEYMAP.contains(key) => Key(key),
            other => Ignored(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Keystroke::{self, *};

    #[test]
    fn controls_test() {
        assert_eq!(Keystroke::from_char('#'), Terminate);
        assert_eq!(Keystroke::from_char('*'), Backspace);
        assert_eq!(Keystroke::from_char(' '), Separator);
    }

    #[test]
    fn keys_test() {
        for key in "0123456789".chars() {
            assert_eq!(Keystroke::from_char(key), Key(key));
        }
    }

    #[test]
    fn ignored_test() {
        for c in ['c', '\t', '\n', '+', 'é', '٣'] {
            assert_eq!(Keystroke::from_char(c), Ignored(c));
        }
    }
}
