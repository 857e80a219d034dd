pub mod pacer;
pub mod timing;

pub use pacer::{pace, present, split_words};
pub use timing::wpm_to_delay;
