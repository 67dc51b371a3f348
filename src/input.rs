use colored::Colorize;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const KEYWORD_PROMPT: &str = "Search for GitHub repositories. Enter a keyword: ";
const PAGE_PROMPT: &str = "Enter page number (or press Enter to exit): ";

/// Reads keywords and page numbers line by line, printing prompts to `out`.
///
/// End of input is reported as an [`io::ErrorKind::UnexpectedEof`] error.
pub struct InputController<R, W> {
    reader: R,
    out: W,
}

impl<R, W> InputController<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        InputController { reader, out }
    }

    /// Prompt for a search keyword. `None` means the line was blank and the
    /// caller should ask again.
    pub async fn read_keyword(&mut self) -> io::Result<Option<String>> {
        let line = self.prompt(KEYWORD_PROMPT).await?;
        match normalize_keyword(&line) {
            Some(keyword) => Ok(Some(keyword)),
            None => {
                writeln!(
                    self.out,
                    "{}",
                    "Invalid input. Please enter a non-empty keyword.".red()
                )?;
                self.out.flush()?;
                Ok(None)
            }
        }
    }

    /// Prompt for the next page. `None` means the user wants to stop paging.
    /// Input that coerces to page 0 is rejected and the prompt repeats.
    pub async fn read_page(&mut self) -> io::Result<Option<u32>> {
        loop {
            let line = self.prompt(PAGE_PROMPT).await?;
            match coerce_page(&line) {
                None => return Ok(None),
                Some(0) => {
                    writeln!(
                        self.out,
                        "{}",
                        "Invalid page number. Please enter a positive number.".red()
                    )?;
                    self.out.flush()?;
                }
                Some(page) => return Ok(Some(page)),
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.out, "{}", text.green())?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(line)
    }
}

/// Trimmed keyword, or `None` when nothing but whitespace was entered.
pub fn normalize_keyword(line: &str) -> Option<String> {
    let keyword = line.trim();
    if keyword.is_empty() {
        None
    } else {
        Some(keyword.to_string())
    }
}

/// Lenient page parsing: `None` for blank input, otherwise the value of the
/// leading digits, or 0 when there are none or they overflow.
pub fn coerce_page(line: &str) -> Option<u32> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let digits = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>();
    Some(digits.parse().unwrap_or(0))
}
