pub mod cli;
pub mod decoder;
pub mod keymap;
pub mod keystroke;

pub use decoder::{decode, decode_optional, KeypadDecoder};
