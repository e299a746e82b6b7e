use log::{debug, trace};

use crate::keymap::KEYMAP;
use crate::keystroke::Keystroke;

/// A run of consecutive presses of one key that has not been resolved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub key: char,
    pub presses: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// Multi-tap decoding state machine.
///
/// Characters are fed left to right; each one either extends the pending
/// press run, resolves it into the output, edits the output, or is skipped.
/// A terminator stops the machine and every later `feed` is a no-op.
#[derive(Debug, Default)]
pub struct KeypadDecoder {
    pending: Option<Pending>,
    output: String,
    stopped: bool,
}

impl KeypadDecoder {
    // Pub

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn feed(&mut self, c: char) -> Step {
        if self.stopped {
            return Step::Stop;
        }

        let step = self.execute(Keystroke::from_char(c));
        if step == Step::Stop {
            self.stopped = true;
        }
        step
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Text confirmed so far, not counting the pending run.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn finish(mut self) -> String {
        self.flush();
        self.output
    }

    // Priv

    #[inline]
    fn execute(&mut self, keystroke: Keystroke) -> Step {
        use Keystroke::*;

        match keystroke {
            Terminate => {
                self.flush();
                Step::Stop
            }
            Backspace => {
                self.backspace();
                Step::Continue
            }
            Separator => {
                self.flush();
                Step::Continue
            }
            Key(key) => {
                self.press(key);
                Step::Continue
            }
            Ignored(other) => {
                trace!("ignoring unmapped symbol {:?}", other);
                Step::Continue
            }
        }
    }

    #[inline]
    fn press(&mut self, key: char) {
        if let Some(pending) = self.pending.as_mut() {
            if pending.key == key {
                pending.presses += 1;
                return;
            }
        }

        self.flush();
        self.pending = Some(Pending { key, presses: 1 });
    }

    #[inline]
    fn backspace(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!("cancelled {} presses of {:?}", pending.presses, pending.key);
        } else if let Some(removed) = self.output.pop() {
            trace!("deleted {:?}", removed);
        }
    }

    #[inline]
    fn flush(&mut self) {
        // Pending keys are always mapped
        if let Some(Pending { key, presses }) = self.pending.take() {
            if let Some(letter) = KEYMAP.resolve(key, presses) {
                self.output.push(letter);
            }
        }
    }
}

/// Decodes a complete keystroke sequence.
///
/// Decoding stops at the first `#`; without one it runs to the end of the input.
/// Never fails: unknown symbols are skipped and stray backspaces are no-ops.
pub fn decode(input: &str) -> String {
    let mut decoder = KeypadDecoder::with_capacity(input.len());
    let mut terminated = false;
    for c in input.chars() {
        if decoder.feed(c) == Step::Stop {
            terminated = true;
            break;
        }
    }

    let output = decoder.finish();
    debug!(
        "decoded {} input bytes into {} chars (terminated: {})",
        input.len(),
        output.len(),
        terminated
    );
    output
}

/// Same as [`decode`], treating an absent input as empty.
pub fn decode_optional(input: Option<&str>) -> String {
    input.map(decode).unwrap_or_default()
}
