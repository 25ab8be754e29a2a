use std::fmt;
use std::io::{self, BufRead, Write};

use log::warn;

use crate::hash::Algorithm;
use crate::merge::{merge, InvalidSaltFormat};
use crate::salt;

#[derive(Debug)]
pub enum Error {
    Salt(InvalidSaltFormat),
    Io(io::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Salt(e) => write!(f, "{e}"),
            Error::Io(e) => write!(f, "{e}"),
        }
    }
}
impl std::error::Error for Error {}
impl From<InvalidSaltFormat> for Error {
    fn from(e: InvalidSaltFormat) -> Self {
        Self::Salt(e)
    }
}
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Drives the read-hash-print cycle until the operator declines to continue.
///
/// Every iteration is independent: algorithm, password, and salt are read
/// fresh and nothing carries over between rounds. A salt containing the
/// merge delimiters aborts the whole run instead of being stripped.
pub fn run(mut input: impl BufRead, mut output: impl Write) -> Result<(), Error> {
    writeln!(output, "Salted password digest tool")?;

    loop {
        let name = prompt(
            &mut input,
            &mut output,
            "Input hash algorithm (default: SHA-1): ",
        )?;
        let algorithm = match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(e) => {
                warn!("{e}");
                let fallback = Algorithm::default();
                writeln!(output, "No algorithm found, defaulting to {fallback}")?;
                fallback
            }
        };

        let password = prompt(&mut input, &mut output, "Enter new password: ")?;
        let mut salt = prompt(&mut input, &mut output, "Enter salt (default: random): ")?;
        if salt.is_empty() {
            salt = salt::generate();
            writeln!(output, "Generated random salt: {salt}")?;
        }

        let merged = merge(&password, Some(&salt), true)?;
        let digest = algorithm.digest(&merged);

        writeln!(output, "=========== RESULTS ===========")?;
        writeln!(output, "Hash algorithm: {algorithm}")?;
        writeln!(output, "Password: {password}")?;
        writeln!(output, "Salt: {salt}")?;
        writeln!(output, "Hashed password: {}", hex::encode(digest))?;

        writeln!(output)?;
        writeln!(output, "Some more? (Y/n)")?;
        let answer = read_line(&mut input)?;
        if answer != "y" && answer != "Y" {
            writeln!(output, "Goodbye.")?;
            return Ok(());
        }
    }
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    msg: &str,
) -> io::Result<String> {
    write!(output, "{msg}")?;
    output.flush()?;
    read_line(input)
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::run;
    use crate::hash::Algorithm;
    use crate::merge::merge;

    fn transcript(input: &str) -> String {
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn salted_round() {
        let out = transcript("SHA-1\nhunter2\nabc\nn\n");
        assert!(out.contains("Input hash algorithm (default: SHA-1): "));
        assert!(out.contains("Hash algorithm: SHA-1"));
        assert!(out.contains("Password: hunter2"));
        assert!(out.contains("Salt: abc"));
        assert!(out.contains("Hashed password: bc03fb3b50157493853ab0977d7baa2533d196ac"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn unknown_algorithm_falls_back() {
        let out = transcript("FOO\nhunter2\nabc\nn\n");
        assert!(out.contains("No algorithm found, defaulting to SHA-1"));
        assert!(out.contains("Hash algorithm: SHA-1"));
        assert!(out.contains("Hashed password: bc03fb3b50157493853ab0977d7baa2533d196ac"));
    }

    #[test]
    fn fallback_digest_matches_unsalted_password() {
        let algorithm = "FOO".parse::<Algorithm>().unwrap_or_default();
        let merged = merge("hunter2", None, true).unwrap();
        assert_eq!(merged, "hunter2");
        assert_eq!(
            hex::encode(algorithm.digest(&merged)),
            "f3bbbd66a63d4bf1747940578ec3d0103530e21d"
        );
    }

    #[test]
    fn blank_salt_generates_one() {
        let out = transcript("SHA-256\nhunter2\n\nn\n");
        let salt = out
            .lines()
            .find_map(|l| l.strip_prefix("Generated random salt: "))
            .unwrap();
        assert_eq!(salt.len(), 32);
        assert!(out.contains(&format!("Salt: {salt}")));
    }

    #[test]
    fn loops_until_declined() {
        let out = transcript("SHA-1\na\nx\ny\nMD5\nb\nzz\nn\n");
        assert_eq!(out.matches("=========== RESULTS ===========").count(), 2);
        assert!(out.contains("Hash algorithm: MD5"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn anything_but_y_exits() {
        for answer in ["", "no", "Y please", "q"] {
            let out = transcript(&format!("SHA-1\na\nx\n{answer}\n"));
            assert_eq!(out.matches("=========== RESULTS ===========").count(), 1);
            assert!(out.ends_with("Goodbye.\n"));
        }
    }

    #[test]
    fn delimiter_salt_aborts() {
        let mut output = Vec::new();
        let result = run(Cursor::new("SHA-1\nhunter2\n{bad}\n"), &mut output);
        assert!(result.is_err());
    }

    #[test]
    fn truncated_input_is_an_error() {
        let mut output = Vec::new();
        assert!(run(Cursor::new("SHA-1\nhunter2\n"), &mut output).is_err());
    }
}
