/// User-facing output lines: status to `out`, problems to `err`.
///
/// Injected into the installer so tests can capture messages instead of
/// scraping process output.
pub trait Console {
    fn out(&mut self, message: &str);
    fn err(&mut self, message: &str);
}

/// Prints to the process stdout/stderr.
pub struct StdConsole;

impl Console for StdConsole {
    fn out(&mut self, message: &str) {
        println!("{message}");
    }

    fn err(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
