//! Line-oriented console ports.
//!
//! The exam flow only needs somewhere to print lines and a way to block for
//! a single typed character. [`StdConsole`] provides both over any
//! reader/writer pair, normally stdin and stdout.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

/// Where the exam flow writes its output.
pub trait DisplaySink {
    fn show(&mut self, line: &str) -> io::Result<()>;

    /// Start a fresh page. Sinks without a screen ignore this.
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where answers come from.
pub trait AnswerSource {
    /// Block until the user gives one character.
    fn read_answer(&mut self, prompt: &str) -> io::Result<char>;

    /// Wait until the user is ready to move on.
    fn pause(&mut self, _prompt: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Both halves of an interactive console.
pub trait Console: DisplaySink + AnswerSource {}

impl<T: DisplaySink + AnswerSource + ?Sized> Console for T {}

/// Console over a buffered reader and a writer.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin/stdout. The screen is only cleared
    /// when stdout is a terminal.
    pub fn stdio() -> Self {
        use std::io::IsTerminal;

        let output = io::stdout();
        let clear_screen = output.is_terminal();
        Self::new(io::stdin().lock(), output).with_clear_screen(clear_screen)
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Print `prompt` and read one line. Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> DisplaySink for StdConsole<R, W> {
    fn show(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> AnswerSource for StdConsole<R, W> {
    /// The first non-whitespace character typed. Blank lines are skipped.
    fn read_answer(&mut self, prompt: &str) -> io::Result<char> {
        let mut line = self.read_line(prompt)?;
        loop {
            match line {
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input closed while waiting for an answer",
                    ));
                }
                Some(text) => {
                    if let Some(answer) = text.trim_start().chars().next() {
                        return Ok(answer);
                    }
                }
            }
            let mut next = String::new();
            line = match self.input.read_line(&mut next)? {
                0 => None,
                _ => Some(next),
            };
        }
    }

    fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.read_line(prompt).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> StdConsole<&[u8], Vec<u8>> {
        StdConsole::new(input.as_bytes(), Vec::new())
    }

    fn output(console: StdConsole<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn answer_is_first_non_blank_character() {
        let mut console = console("\n   \n  Bcd\n");
        assert_eq!(console.read_answer("? ").unwrap(), 'B');
        assert_eq!(output(console), "? ");
    }

    #[test]
    fn answer_at_end_of_input_is_an_error() {
        let mut console = console("\n");
        let err = console.read_answer("? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn pause_tolerates_end_of_input() {
        let mut console = console("");
        console.pause("Press Enter").unwrap();
        assert_eq!(output(console), "Press Enter");
    }

    #[test]
    fn clear_is_silent_without_a_terminal() {
        let mut console = console("");
        console.clear().unwrap();
        console.show("hello").unwrap();
        assert_eq!(output(console), "hello\n");
    }
}
