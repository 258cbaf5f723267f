use std::io::{BufRead, Write};
use chainmap::Layer;

pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Word that finishes a layer-building loop.
pub const FINISH_WORD: &str = "done";

#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("console i/o failed; {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the session was over")]
    Eof,
}

/// Prints `prompt` and reads one line, trimmed. Fails with
/// [`ConsoleError::Eof`] when the input is exhausted.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConsoleError::Eof);
    }
    Ok(line.trim().to_string())
}

/// Like [`prompt_line`], but re-prompts until the line is non-empty.
pub fn prompt_nonempty<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, prompt)?;
        if line.is_empty() {
            writeln!(output, "a value is required")?;
            continue;
        }
        return Ok(line);
    }
}

/// Reads a number in `0..=max`, re-prompting on junk or out-of-range
/// input.
pub fn prompt_index<R, W>(input: &mut R, output: &mut W, prompt: &str, max: usize) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_nonempty(input, output, prompt)?;
        match line.parse::<usize>() {
            Ok(index) if index <= max => return Ok(index),
            Ok(index) => writeln!(output, "{index} is out of range, highest allowed is {max}")?,
            Err(_) => writeln!(output, "'{line}' is not a number")?,
        }
    }
}

/// Builds one layer from key/value prompts. Empty keys, empty values and
/// keys already present in the layer under construction are rejected
/// with a re-prompt; entering the finish word ends the loop.
pub fn read_layer<R, W>(input: &mut R, output: &mut W, name: &str) -> Result<Layer<String, String>>
where
    R: BufRead,
    W: Write,
{
    let mut layer = Layer::new();
    writeln!(output, "building layer '{name}'")?;

    loop {
        let key = prompt_line(
            input,
            output,
            &format!("  key (or '{FINISH_WORD}' to finish): "),
        )?;
        if key.eq_ignore_ascii_case(FINISH_WORD) {
            break;
        }
        if key.is_empty() {
            writeln!(output, "  keys cannot be empty")?;
            continue;
        }
        if layer.contains_key(&key) {
            writeln!(output, "  key '{key}' is already in this layer")?;
            continue;
        }

        let value = prompt_nonempty(input, output, "  value: ")?;
        layer.insert(key, value);
    }

    Ok(layer)
}
