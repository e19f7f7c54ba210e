//! Initials prompt shown after a run

use quiz_application::AnswerSource;
use quiz_domain::{ScoreRecord, ScoreRecordError};
use std::io::{self, Write};

/// Ask for initials until a usable value is entered.
///
/// Returns `Ok(None)` when input closes before that happens.
pub async fn prompt_initials<W: Write>(
    source: &mut dyn AnswerSource,
    out: &mut W,
) -> io::Result<Option<String>> {
    loop {
        write!(out, "Enter your initials: ")?;
        out.flush()?;

        let Some(line) = source.next_answer().await else {
            writeln!(out)?;
            return Ok(None);
        };

        match check_initials(&line) {
            Ok(initials) => return Ok(Some(initials)),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn check_initials(line: &str) -> Result<String, ScoreRecordError> {
    let initials = line.trim();
    if initials.is_empty() {
        return Err(ScoreRecordError::EmptyAuthor);
    }
    let len = initials.chars().count();
    if len > ScoreRecord::MAX_AUTHOR_LEN {
        return Err(ScoreRecordError::AuthorTooLong {
            len,
            max: ScoreRecord::MAX_AUTHOR_LEN,
        });
    }
    Ok(initials.to_string())
}
