use std::io::{self, BufRead, Write};

use clap::Args;

use crate::context::AppContext;
use crate::domain::language::Language;
use crate::error::AppResult;
use crate::workflow::commit::{CommitOutcome, commit_and_push};

#[derive(Args, Debug, Clone, Default)]
pub struct CommitArgs {
    /// Commit message language code (en/es). Prompts when omitted.
    #[arg(short, long)]
    pub language: Option<String>,
}

pub async fn run(ctx: &AppContext, args: CommitArgs) -> AppResult<CommitOutcome> {
    commit_and_push(ctx, || match args.language.as_deref() {
        Some(code) => Ok(Language::from_code(code)),
        None => prompt_language(&mut io::stdin().lock(), &mut io::stdout()),
    })
    .await
}

pub fn prompt_language<R, W>(input: &mut R, output: &mut W) -> AppResult<Language>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Enter commit language (en/es) [en]: ")?;
    output.flush()?;

    let mut line = String::new();
    // An unreadable answer means the default language.
    if input.read_line(&mut line).is_err() {
        return Ok(Language::default());
    }
    Ok(Language::from_code(&line))
}
