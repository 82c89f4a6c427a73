/// Field-by-field input prompts
///
/// Each prompt writes a label, flushes, then blocks on one line of input.
/// Numeric prompts re-prompt until the line parses instead of tearing down
/// the menu loop on a typo. Reader and writer are generic so tests can
/// drive them with in-memory buffers.

use std::io::{self, BufRead, Write};

/// Print `label`, read one line, return it trimmed.
///
/// End of input surfaces as `UnexpectedEof` rather than an empty string, so
/// callers in a re-prompt loop terminate when stdin closes.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }

    Ok(line.trim().to_string())
}

/// Prompt until the user supplies a whole number
pub fn prompt_i64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<i64> {
    loop {
        let line = prompt_line(input, output, label)?;
        match line.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please enter a whole number.")?,
        }
    }
}

/// Prompt until the user supplies a number (decimal point allowed)
pub fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<f64> {
    loop {
        let line = prompt_line(input, output, label)?;
        match line.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_trims() {
        let mut input = Cursor::new(b"  Widget  \n".to_vec());
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Enter product name: ").unwrap();
        assert_eq!(line, "Widget");
        assert_eq!(output, b"Enter product name: ");
    }

    #[test]
    fn test_prompt_line_eof_is_an_error() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let err = prompt_line(&mut input, &mut output, "> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_i64_reprompts_on_junk() {
        let mut input = Cursor::new(b"ten\n10\n".to_vec());
        let mut output = Vec::new();

        let value = prompt_i64(&mut input, &mut output, "Enter quantity: ").unwrap();
        assert_eq!(value, 10);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("Please enter a whole number."));
        // Label printed twice: once per attempt
        assert_eq!(rendered.matches("Enter quantity: ").count(), 2);
    }

    #[test]
    fn test_prompt_f64_accepts_decimals() {
        let mut input = Cursor::new(b"9.99\n".to_vec());
        let mut output = Vec::new();

        let value = prompt_f64(&mut input, &mut output, "Enter price: ").unwrap();
        assert_eq!(value, 9.99);
    }

    #[test]
    fn test_prompt_f64_reprompts_on_junk() {
        let mut input = Cursor::new(b"free\n0.5\n".to_vec());
        let mut output = Vec::new();

        let value = prompt_f64(&mut input, &mut output, "Enter price: ").unwrap();
        assert_eq!(value, 0.5);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("Please enter a number."));
    }
}
