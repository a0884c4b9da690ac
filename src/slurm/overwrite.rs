use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use clap::ValueEnum;
use log::{info, warn};

/// What to do when the output directory already exists
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OverwritePolicy {
    /// Prompt on the console, only if the directory exists
    #[default]
    Ask,
    Yes,
    No,
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OverwritePolicy::Ask => write!(f, "ask"),
            OverwritePolicy::Yes => write!(f, "yes"),
            OverwritePolicy::No => write!(f, "no"),
        }
    }
}

impl OverwritePolicy {
    /// Decide whether the job may go ahead for `out_dir`
    ///
    /// Existence of `out_dir` is read once. A missing directory never blocks, whatever the
    /// policy. An existing one (empty or not) needs `Yes`, or a `y` answer under `Ask`; the
    /// prompt repeats until the answer is `y`, `n`/`N` or empty.
    pub fn allows_submission<R: BufRead, W: Write>(
        self,
        out_dir: &str,
        console: &mut Console<R, W>,
    ) -> io::Result<bool> {
        if !Path::new(out_dir).exists() {
            info!("{} does not exist, nothing to overwrite", out_dir);
            return Ok(true);
        }
        let overwrite = match self {
            OverwritePolicy::Yes => true,
            OverwritePolicy::No => false,
            OverwritePolicy::Ask => confirm(out_dir, console)?,
        };
        match overwrite {
            true => warn!("Output directory {} exists, results will be overwritten", out_dir),
            false => info!("{} exists and overwrite policy is {}", out_dir, self),
        }
        Ok(overwrite)
    }
}

fn confirm<R: BufRead, W: Write>(out_dir: &str, console: &mut Console<R, W>) -> io::Result<bool> {
    let message = format!("Directory {} exists. Overwritte(y/N)?[N]", out_dir);
    loop {
        let answer = console.ask(&message)?;
        match parse_answer(&answer) {
            Some(overwrite) => return Ok(overwrite),
            None => {
                warn!("Invalid input '{}'", answer);
                console.say(&format!("Invalid input '{}': answer y or N", answer))?;
            }
        }
    }
}

/// Empty, `n` and `N` decline, `y` accepts, anything else is invalid
fn parse_answer(answer: &str) -> Option<bool> {
    match answer {
        "" | "n" | "N" => Some(false),
        "y" => Some(true),
        _ => None,
    }
}

/// Line-oriented console used for the overwrite prompt
///
/// Input and output are injected so the prompt can be driven without a terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `message`, then read one line without its terminator
    ///
    /// Fails with `UnexpectedEof` if the input is closed, there is nobody left to answer.
    pub fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed before an answer was given",
            ));
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_fixed_policies_never_prompt() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().to_string_lossy();

        let mut c = console("");
        assert!(OverwritePolicy::Yes.allows_submission(&out_dir, &mut c).unwrap());
        assert!(!OverwritePolicy::No.allows_submission(&out_dir, &mut c).unwrap());
        assert!(c.into_output().is_empty());
    }

    #[test]
    fn test_missing_directory_never_blocks() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let missing = missing.to_string_lossy();

        let mut c = console("");
        for policy in [OverwritePolicy::Ask, OverwritePolicy::Yes, OverwritePolicy::No] {
            assert!(policy.allows_submission(&missing, &mut c).unwrap(), "{}", policy);
        }
        assert!(c.into_output().is_empty());
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().to_string_lossy().into_owned();

        let mut c = console("yes\nY\ny\n");
        assert!(OverwritePolicy::Ask.allows_submission(&out_dir, &mut c).unwrap());

        let printed = String::from_utf8(c.into_output()).unwrap();
        let prompt = format!("Directory {} exists. Overwritte(y/N)?[N]", out_dir);
        assert_eq!(printed.matches(&prompt).count(), 3);
        assert!(printed.contains("Invalid input 'yes'"));
        assert!(printed.contains("Invalid input 'Y'"));
    }

    #[test]
    fn test_ask_declines() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().to_string_lossy();

        for answer in ["\n", "n\n", "N\n", "maybe\n\n"] {
            let mut c = console(answer);
            assert!(!OverwritePolicy::Ask.allows_submission(&out_dir, &mut c).unwrap(), "{:?}", answer);
        }
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut c = console("what\n");
        let err = OverwritePolicy::Ask
            .allows_submission(&dir.path().to_string_lossy(), &mut c)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
