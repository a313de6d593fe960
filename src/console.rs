//! Interactive console: banner, prompt, and the exit pause.

use crate::i18n::Messages;
use std::io::{self, BufRead, Write};

pub const BANNER: &str = r"
__________         ___________                            ._____________
\____    /____  ___\__    ___/___________    ____  ____   |   \______   \
  /     // __ \/  _ \|    |  \_  __ \__  \ _/ ___\/ __ \  |   ||     ___/
 /     /\  ___(  <_> )    |   |  | \// __ \\  \__\  ___/  |   ||    |
/_______ \___  >____/|____|   |__|  (____  /\___  >___  > |___||____|
        \/   \/                          \/     \/    \/
";

/// Print the prompt and read one line. End of input yields an empty
/// string, and bytes that are not UTF-8 are replaced; validation then
/// rejects either as an invalid address.
pub fn prompt_line(
    messages: &Messages,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<String> {
    write!(out, "{}", messages.prompt)?;
    out.flush()?;
    let mut raw = Vec::new();
    input.read_until(b'\n', &mut raw)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Keep the window open until the user presses Enter.
pub fn pause(messages: &Messages, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", messages.pause)?;
    out.flush()?;
    let mut discard = Vec::new();
    input.read_until(b'\n', &mut discard)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::lookup::{parse_address, LookupError};
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = Cursor::new("8.8.8.8\n1.1.1.1\n");
        let mut out = Vec::new();
        let line = prompt_line(Locale::Fr.messages(), &mut input, &mut out).unwrap();
        assert_eq!(line, "8.8.8.8\n");
        assert_eq!(String::from_utf8(out).unwrap(), "Entrez une adresse IP : ");
    }

    #[test]
    fn test_prompt_eof_is_empty() {
        let mut input = Cursor::new("");
        let line = prompt_line(Locale::En.messages(), &mut input, &mut Vec::new()).unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn test_prompt_non_utf8_is_invalid_address() {
        let mut input = Cursor::new(b"\xff\xfe\n".to_vec());
        let line = prompt_line(Locale::Fr.messages(), &mut input, &mut Vec::new()).unwrap();
        assert_eq!(line, "\u{FFFD}\u{FFFD}\n");
        assert!(matches!(parse_address(&line), Err(LookupError::InvalidAddress(_))));
    }

    #[test]
    fn test_pause_waits_for_line() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        pause(Locale::En.messages(), &mut input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nPress Enter to quit...\n");
    }

    #[test]
    fn test_banner_shape() {
        assert_eq!(BANNER.lines().filter(|l| !l.is_empty()).count(), 6);
    }
}
