//! Output abstraction
//!
//! Reports are written through [`OutputWriter`] so tests can capture them.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Writes to stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Collects every line written to it
    #[derive(Default)]
    pub struct MockOutput {
        pub lines: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }
    }
}
