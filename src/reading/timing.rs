use std::time::Duration;

/// Converts a words-per-minute rate into the pause between words.
///
/// Uses floating-point division (60.0 / wpm seconds) rather than integer
/// millisecond truncation, so rates that do not divide 60 evenly keep
/// their full precision. Guards against wpm == 0 even though the CLI
/// boundary rejects it.
pub fn wpm_to_delay(wpm: u32) -> Duration {
    Duration::from_secs_f64(60.0 / wpm.max(1) as f64)
}
