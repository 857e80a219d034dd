pub mod cli;
pub mod input;
pub mod reading;

pub use input::{load_text, LoadError};
pub use reading::{pace, present, split_words, wpm_to_delay};
