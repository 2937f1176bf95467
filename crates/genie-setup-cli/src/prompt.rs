//! Blocking line prompts for the interactive setup flow. Generic over the
//! input source so the resolver loop can be driven by scripted input in
//! tests.

use std::io::{self, BufRead, Write};

/// Print `prompt` without a newline and read one trimmed line from `input`.
pub fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // Closed stdin must not spin the re-prompt loop forever.
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// `[Y/n]` confirmation: empty input, `y`, and `yes` accept.
pub fn confirm_default_yes(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    let answer = prompt_line(input, &format!("{prompt} [Y/n]: "))?;
    Ok(matches!(answer.to_lowercase().as_str(), "" | "y" | "yes"))
}

/// `[y/N]` confirmation: only `y` and `yes` accept.
pub fn confirm_default_no(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    let answer = prompt_line(input, &format!("{prompt} [y/N]: "))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
