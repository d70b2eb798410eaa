use std::io::{self, Write};
use std::time::Duration;

/// Prints `text` one character at a time.
pub fn typewriter(text: &str, delay_ms: u64) -> io::Result<()> {
    let delay = Duration::from_millis(delay_ms);
    let mut stdout = io::stdout();
    for c in text.chars() {
        write!(stdout, "{c}")?;
        stdout.flush()?;
        std::thread::sleep(delay);
    }
    writeln!(stdout)
}
