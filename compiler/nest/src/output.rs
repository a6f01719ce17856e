//! Output sinks for results and error reports.
//!
//! Results go to the result stream, error reports to the error stream. The
//! binary writes both to the terminal; tests capture them in buffers.

use std::io::Write as _;

use parking_lot::Mutex;

/// Writes results to stdout and errors to stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print without newline, flushing so a prompt shows before input is read.
    pub fn print(&self, msg: &str) {
        print!("{msg}");
        let _ = std::io::stdout().flush();
    }

    pub fn eprintln(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Captures both streams in memory.
pub struct BufferOutput {
    out: Mutex<String>,
    err: Mutex<String>,
}

impl BufferOutput {
    pub fn new() -> Self {
        BufferOutput {
            out: Mutex::new(String::new()),
            err: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.out.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.out.lock().push_str(msg);
    }

    pub fn eprintln(&self, msg: &str) {
        let mut buf = self.err.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything written to the result stream so far.
    pub fn stdout(&self) -> String {
        self.out.lock().clone()
    }

    /// Everything written to the error stream so far.
    pub fn stderr(&self) -> String {
        self.err.lock().clone()
    }
}

impl Default for BufferOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Output sink, dispatched by enum.
pub enum Output {
    Terminal(TerminalOutput),
    Buffer(BufferOutput),
}

impl Output {
    pub fn terminal() -> Self {
        Output::Terminal(TerminalOutput)
    }

    pub fn buffer() -> Self {
        Output::Buffer(BufferOutput::new())
    }

    pub fn println(&self, msg: &str) {
        match self {
            Self::Terminal(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Terminal(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
        }
    }

    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Terminal(h) => h.eprintln(msg),
            Self::Buffer(h) => h.eprintln(msg),
        }
    }

    /// Captured result stream; empty for the terminal.
    pub fn stdout(&self) -> String {
        match self {
            Self::Terminal(_) => String::new(),
            Self::Buffer(h) => h.stdout(),
        }
    }

    /// Captured error stream; empty for the terminal.
    pub fn stderr(&self) -> String {
        match self {
            Self::Terminal(_) => String::new(),
            Self::Buffer(h) => h.stderr(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_separates_streams() {
        let output = Output::buffer();
        output.print("> ");
        output.println("5");
        output.eprintln("Error: boom");
        assert_eq!(output.stdout(), "> 5\n");
        assert_eq!(output.stderr(), "Error: boom\n");
    }

    #[test]
    fn terminal_captures_nothing() {
        let output = Output::terminal();
        assert_eq!(output.stdout(), "");
        assert_eq!(output.stderr(), "");
    }
}
