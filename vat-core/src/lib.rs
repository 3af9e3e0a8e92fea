pub mod calculations;
pub mod converter;
pub mod keypad;
pub mod models;

pub use converter::{ConverterError, ConverterSnapshot, TriFieldConverter};
pub use keypad::{KEYPAD_ROWS, Key};
pub use models::*;
