//! Command-line token parsing
//!
//! The interactive loop speaks a small line protocol with Korean keywords.
//! The delete/update forms carry the target id as a `?id=<N>` suffix.

use regex::Regex;
use std::sync::OnceLock;

/// Matches `삭제?id=` and `수정?id=` command lines, capturing the keyword
/// and the id candidate: the text between the first `=` and the next `=`
/// (or end of line). Anything after a second `=` is ignored, so
/// `삭제?id=1=junk` still targets id 1.
fn id_command_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(삭제|수정)\?id=([^=]*)").unwrap())
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Exit,
    Register,
    List,
    /// `삭제?id=<N>`; `None` when the id was not numeric.
    Delete(Option<i64>),
    /// `수정?id=<N>`; `None` when the id was not numeric.
    Update(Option<i64>),
    Unknown,
}

impl Command {
    /// Parse a trimmed input line into a command.
    pub fn parse(line: &str) -> Command {
        if line.is_empty() {
            return Command::Empty;
        }

        if let Some(captures) = id_command_regex().captures(line) {
            let id = captures[2].parse::<i64>().ok();
            return match &captures[1] {
                "삭제" => Command::Delete(id),
                _ => Command::Update(id),
            };
        }

        match line {
            "종료" => Command::Exit,
            "등록" => Command::Register,
            "목록" => Command::List,
            _ => Command::Unknown,
        }
    }
}
