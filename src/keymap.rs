// Keypad layout
pub const KEY_COUNT: usize = 10;

// Letter cycles, indexed by digit value
const LETTERS: [&str; KEY_COUNT] = [
    " 0",          // 0
    ".,?!:'\"()-1", // 1
    "ABC2",        // 2
    "DEF3",        // 3
    "GHI4",        // 4
    "JKL5",        // 5
    "MNO6",        // 6
    "PQRS7",       // 7
    "TUV8",        // 8
    "WXYZ9",       // 9
];

/// Fixed mapping from a keypad digit to the characters it cycles through.
///
/// Every cycle is plain ASCII, so a press count can be resolved by byte index.
pub struct KeyMap {
    letters: [&'static str; KEY_COUNT],
}

pub static KEYMAP: KeyMap = KeyMap { letters: LETTERS };

impl KeyMap {
    pub fn letters_for(&self, key: char) -> Option<&'static str> {
        key.to_digit(10).map(|digit| self.letters[digit as usize])
    }

    pub fn contains(&self, key: char) -> bool {
        key.is_ascii_digit()
    }

    /// Character picked by pressing `key` `presses` times in a row.
    ///
    /// Wraps around the cycle, so `presses` may exceed the cycle length.
    /// Returns `None` for unmapped keys and for zero presses.
    pub fn resolve(&self, key: char, presses: usize) -> Option<char> {
        if presses == 0 {
            return None;
        }
        let letters = self.letters_for(key)?.as_bytes();
        Some(letters[(presses - 1) % letters.len()] as char)
    }
}
