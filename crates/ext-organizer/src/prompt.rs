use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Ask for the source folder until an existing directory is given.
pub fn prompt_source<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    writeln!(output, "--- Interactive mode ---")?;
    let mut path = PathBuf::from(ask(
        input,
        output,
        "Which SOURCE folder do you want to organize? ",
    )?);

    while !path.is_dir() {
        writeln!(
            output,
            "Error: '{}' was not found or is not a folder.",
            path.display()
        )?;
        path = PathBuf::from(ask(input, output, "Please enter a valid SOURCE path: ")?);
    }

    Ok(path)
}

/// Ask for the destination folder; a blank answer picks `default`.
pub fn prompt_destination<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: &Path,
) -> io::Result<PathBuf> {
    let question = format!(
        "Where should the files be saved? (press ENTER for '{}'): ",
        default.display()
    );
    let answer = ask(input, output, &question)?;

    Ok(match answer.is_empty() {
        true => default.to_path_buf(),
        false => PathBuf::from(answer),
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        ));
    }

    let answer = line.trim_end_matches(&['\r', '\n'][..]);
    match answer.trim().is_empty() {
        true => Ok(String::new()),
        false => Ok(answer.to_string()),
    }
}
