use std::io::{self, Write};
use std::str::SplitWhitespace;
use std::thread;
use std::time::Duration;

use log::debug;

use crate::reading::timing::wpm_to_delay;

/// Splits text into maximal runs of non-whitespace characters.
///
/// Lazy and finite; leading, trailing, and repeated whitespace
/// (spaces, tabs, newlines) produce no empty tokens.
pub fn split_words(text: &str) -> SplitWhitespace<'_> {
    text.split_whitespace()
}

/// Runs the pacing loop against an arbitrary sink and sleep primitive.
///
/// Each word is written followed by a single space and flushed so it is
/// visible immediately, then `sleep` is called with the inter-word delay.
/// No sleep follows the final word. A trailing newline is written after
/// the loop, including when the text contains no words at all.
pub fn pace<W, S>(text: &str, wpm: u32, out: &mut W, mut sleep: S) -> io::Result<()>
where
    W: Write,
    S: FnMut(Duration),
{
    let delay = wpm_to_delay(wpm);
    debug!(
        "pacing {} words at {} wpm, {:?} between words",
        split_words(text).count(),
        wpm,
        delay
    );

    let mut words = split_words(text).peekable();
    while let Some(word) = words.next() {
        write!(out, "{} ", word)?;
        out.flush()?;
        if words.peek().is_some() {
            sleep(delay);
        }
    }

    writeln!(out)?;
    out.flush()
}

/// Paces the text on standard output, blocking the calling thread
/// between words.
pub fn present(text: &str, wpm: u32) -> io::Result<()> {
    let stdout = io::stdout();
    pace(text, wpm, &mut stdout.lock(), thread::sleep)
}
