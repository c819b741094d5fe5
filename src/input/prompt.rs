//! Interactive prompting with retry loops
//!
//! Generic over the reader and writer so the loops can be driven by a byte
//! buffer in tests.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, DateFormat, Money};

use super::{parse_amount, parse_category, parse_date};

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Fails with [`LedgerError::Input`] once the input is exhausted or
    /// cannot be read.
    pub fn line(&mut self, prompt: &str) -> LedgerResult<String> {
        Ok(self.raw_line(prompt)?.trim().to_string())
    }

    /// Like [`Prompter::line`] but only the line ending is removed
    pub fn raw_line(&mut self, prompt: &str) -> LedgerResult<String> {
        write!(self.output, "{}", prompt).map_err(console_error)?;
        self.output.flush().map_err(console_error)?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer).map_err(console_error)? == 0 {
            return Err(LedgerError::Input("input closed".into()));
        }

        let len = answer.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        answer.truncate(len);
        Ok(answer)
    }

    /// Print a full line
    pub fn say(&mut self, message: impl std::fmt::Display) -> LedgerResult<()> {
        writeln!(self.output, "{}", message).map_err(console_error)
    }

    /// Re-ask `prompt` until `parse` accepts the answer
    pub fn until_valid<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        loop {
            let answer = self.line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Transaction date, or `today` on a blank answer
    pub fn date(&mut self, format: &DateFormat, today: NaiveDate) -> LedgerResult<NaiveDate> {
        let prompt = format!(
            "Enter the date of the transaction ({}) or press Enter for today's date: ",
            format.hint()
        );
        self.until_valid(&prompt, |answer| parse_date(answer, format, today))
    }

    /// Date with no default, e.g. a range bound
    pub fn required_date(&mut self, prompt: &str, format: &DateFormat) -> LedgerResult<NaiveDate> {
        self.until_valid(prompt, |answer| format.parse(answer))
    }

    pub fn amount(&mut self) -> LedgerResult<Money> {
        self.until_valid("Enter the amount: ", parse_amount)
    }

    pub fn category(&mut self) -> LedgerResult<Category> {
        self.until_valid(
            "Enter the category ('I' for income or 'E' for expense): ",
            parse_category,
        )
    }

    /// Optional free text, kept exactly as typed
    pub fn description(&mut self) -> LedgerResult<String> {
        self.raw_line("Enter a description (optional): ")
    }

    /// Yes/no question, `true` only for `y`/`yes`
    pub fn confirm(&mut self, prompt: &str) -> LedgerResult<bool> {
        let answer = self.line(prompt)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

fn console_error(err: std::io::Error) -> LedgerError {
    LedgerError::Input(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output).unwrap()
    }

    #[test]
    fn test_amount_retries_until_valid() {
        let mut p = prompter("abc\n-3\n0\n42.10\n");

        assert_eq!(p.amount().unwrap(), Money::from_cents(4210));

        let out = transcript(p);
        assert_eq!(out.matches("Enter the amount: ").count(), 4);
        assert!(out.contains("positive, non-zero"));
    }

    #[test]
    fn test_category_retries_until_valid() {
        let mut p = prompter("q\ne\n");
        assert_eq!(p.category().unwrap(), Category::Expense);
        assert!(transcript(p).contains("Invalid category 'q'"));
    }

    #[test]
    fn test_date_blank_is_today() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let mut p = prompter("\n");
        assert_eq!(p.date(&DateFormat::default(), today).unwrap(), today);
    }

    #[test]
    fn test_date_retries_bad_format() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let mut p = prompter("2024-06-01\n01-06-2024\n");
        assert_eq!(
            p.date(&DateFormat::default(), today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_closed_input_stops_the_loop() {
        let mut p = prompter("nope\n");
        let err = p.amount().unwrap_err();
        assert!(matches!(err, LedgerError::Input(_)));
    }

    #[test]
    fn test_description_may_be_empty() {
        let mut p = prompter("\n");
        assert_eq!(p.description().unwrap(), "");
    }

    #[test]
    fn test_description_keeps_surrounding_spaces() {
        let mut p = prompter("  coffee with Sam \r\n");
        assert_eq!(p.description().unwrap(), "  coffee with Sam ");
    }

    #[test]
    fn test_unreadable_input_is_input_error() {
        let mut p = Prompter::new(Cursor::new(vec![0xff, 0xfe, b'\n']), Vec::new());
        assert!(matches!(p.amount(), Err(LedgerError::Input(_))));
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("Y\nn\n");
        assert!(p.confirm("Plot? ").unwrap());
        assert!(!p.confirm("Plot? ").unwrap());
    }
}
