//! Interactive session
//!
//! Reads line commands from the input stream, applies them to the store,
//! mirrors every mutation through the repository, and writes
//! Korean-language responses to the output stream. One command is fully
//! processed, including any extra line reads it needs, before the next
//! line is read.

use crate::cli::format_saying_list;
use crate::domain::{Command, SayingStore};
use crate::error::Result;
use crate::infrastructure::SayingRepository;
use std::io::{BufRead, Write};

/// The read-parse-execute-print loop over injectable streams.
pub struct AppSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    store: SayingStore,
    repository: Box<dyn SayingRepository>,
}

impl<R: BufRead, W: Write> AppSession<R, W> {
    /// Create a session, loading any previously persisted sayings.
    /// Files that fail to load are reported to the output and skipped.
    pub fn new(input: R, mut output: W, repository: Box<dyn SayingRepository>) -> Result<Self> {
        let report = repository.load_all()?;

        for failure in &report.failures {
            writeln!(
                output,
                "파일 {}을 읽는 중 오류 발생: {}",
                failure.file_name, failure.message
            )?;
        }

        Ok(AppSession {
            input,
            output,
            store: SayingStore::restore(report.sayings, report.last_id),
            repository,
        })
    }

    /// Run the loop until the exit command or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "== 명언 앱 ==")?;

        loop {
            write!(self.output, "명령) ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match Command::parse(&line) {
                Command::Empty => writeln!(self.output, "명령을 입력해주세요.")?,
                Command::Exit => {
                    writeln!(self.output, "명언 앱을 종료합니다.")?;
                    return Ok(());
                }
                Command::Register => self.register()?,
                Command::List => self.list()?,
                Command::Delete(id) => self.delete(id)?,
                Command::Update(id) => self.update(id)?,
                Command::Unknown => {
                    writeln!(self.output, "알 수 없는 명령입니다.")?;
                    writeln!(self.output, "종료하려면 '종료'라고 입력하세요.")?;
                }
            }
        }
    }

    /// Read one line, trimmed. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a field prompt and read the reply line. End of input counts
    /// as an empty reply so a half-entered command still completes.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{} : ", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn register(&mut self) -> Result<()> {
        let content = self.prompt("명언")?;
        let author = self.prompt("작가")?;

        let saying = self.store.add(&content, &author);
        self.repository.save(&saying)?;
        self.repository.save_last_id(self.store.last_id())?;

        writeln!(self.output, "{}번 명언이 등록되었습니다.", saying.id)?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        write!(self.output, "{}", format_saying_list(self.store.list()))?;
        Ok(())
    }

    fn delete(&mut self, id: Option<i64>) -> Result<()> {
        let Some(id) = id else {
            writeln!(self.output, "ID는 숫자로 입력해야 합니다.")?;
            return Ok(());
        };

        match self.store.remove(id) {
            None => writeln!(self.output, "존재하지 않는 명언 번호입니다.")?,
            Some(removed) => {
                self.repository.delete(removed.id)?;
                writeln!(self.output, "{}번 명언이 삭제되었습니다.", removed.id)?;
            }
        }

        Ok(())
    }

    fn update(&mut self, id: Option<i64>) -> Result<()> {
        let Some(id) = id else {
            writeln!(self.output, "ID는 숫자로 입력해야 합니다.")?;
            return Ok(());
        };

        let Some(current) = self.store.find_by_id(id).cloned() else {
            writeln!(self.output, "존재하지 않는 명언 번호입니다.")?;
            return Ok(());
        };

        writeln!(self.output, "명언(기존) : {}", current.content)?;
        let content = self.prompt("명언")?;
        writeln!(self.output, "작가(기존) : {}", current.author)?;
        let author = self.prompt("작가")?;

        if let Some(updated) = self.store.update(id, &content, &author) {
            self.repository.save(&updated)?;
            writeln!(self.output, "{}번 명언이 수정되었습니다.", updated.id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FileSystemRepository, NullRepository};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_in_memory(input: &str) -> String {
        let mut out = Vec::new();
        let mut session = AppSession::new(
            Cursor::new(input.as_bytes().to_vec()),
            &mut out,
            Box::new(NullRepository),
        )
        .unwrap();
        session.run().unwrap();
        drop(session);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_prints_banner_prompt_and_farewell() {
        let output = run_in_memory("종료\n");
        assert_eq!(output, "== 명언 앱 ==\n명령) 명언 앱을 종료합니다.\n");
    }

    #[test]
    fn test_end_of_input_terminates() {
        let output = run_in_memory("");
        assert_eq!(output, "== 명언 앱 ==\n명령) ");
    }

    #[test]
    fn test_empty_line_reprompts() {
        let output = run_in_memory("\n종료\n");
        assert!(output.contains("명령을 입력해주세요."));
    }

    #[test]
    fn test_unknown_command_prints_hint() {
        let output = run_in_memory("아무거나\n종료\n");
        assert!(output.contains("알 수 없는 명령입니다."));
        assert!(output.contains("종료하려면 '종료'라고 입력하세요."));
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let output = run_in_memory("등록\n하나\n작가1\n등록\n둘\n작가2\n종료\n");
        assert!(output.contains("1번 명언이 등록되었습니다."));
        assert!(output.contains("2번 명언이 등록되었습니다."));
    }

    #[test]
    fn test_list_empty_store() {
        let output = run_in_memory("목록\n종료\n");
        assert!(output.contains("등록된 명언이 없습니다."));
        assert!(!output.contains("== 명언 목록 =="));
    }

    #[test]
    fn test_list_shows_rows_in_insertion_order() {
        let output = run_in_memory("등록\n하나\n작가1\n등록\n둘\n작가2\n목록\n종료\n");
        assert!(output.contains("번호 / 명언 / 작가"));
        assert!(output.contains("1 / 하나 / 작가1\n2 / 둘 / 작가2\n"));
    }

    #[test]
    fn test_delete_removes_saying() {
        let output = run_in_memory("등록\n하나\n작가\n삭제?id=1\n목록\n종료\n");
        assert!(output.contains("1번 명언이 삭제되었습니다."));
        assert!(output.contains("등록된 명언이 없습니다."));
    }

    #[test]
    fn test_delete_missing_id_twice_same_message() {
        let output = run_in_memory("삭제?id=1\n삭제?id=1\n종료\n");
        assert_eq!(output.matches("존재하지 않는 명언 번호입니다.").count(), 2);
    }

    #[test]
    fn test_id_not_reused_after_delete() {
        let output = run_in_memory("등록\n하나\n작가\n삭제?id=1\n등록\n둘\n작가\n종료\n");
        assert!(output.contains("2번 명언이 등록되었습니다."));
    }

    #[test]
    fn test_delete_non_numeric_id() {
        let output = run_in_memory("삭제?id=abc\n종료\n");
        assert!(output.contains("ID는 숫자로 입력해야 합니다."));
    }

    #[test]
    fn test_update_replaces_content_and_author() {
        let output = run_in_memory("등록\n옛 명언\n옛 작가\n수정?id=1\n새 명언\n새 작가\n목록\n종료\n");
        assert!(output.contains("명언(기존) : 옛 명언"));
        assert!(output.contains("작가(기존) : 옛 작가"));
        assert!(output.contains("1번 명언이 수정되었습니다."));
        assert!(output.contains("1 / 새 명언 / 새 작가"));
    }

    #[test]
    fn test_update_non_numeric_id_mutates_nothing() {
        let output = run_in_memory("등록\n하나\n작가\n수정?id=abc\n목록\n종료\n");
        assert!(output.contains("ID는 숫자로 입력해야 합니다."));
        assert!(output.contains("1 / 하나 / 작가"));
    }

    #[test]
    fn test_update_missing_id() {
        let output = run_in_memory("수정?id=9\n종료\n");
        assert!(output.contains("존재하지 않는 명언 번호입니다."));
    }

    #[test]
    fn test_command_line_is_trimmed() {
        let output = run_in_memory("  종료  \n");
        assert!(output.contains("명언 앱을 종료합니다."));
    }

    #[test]
    fn test_startup_reports_corrupt_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("wiseSaying");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("lastId.txt"), "1").unwrap();
        std::fs::write(dir.join("1.json"), "broken").unwrap();

        let repo = FileSystemRepository::open(temp.path()).unwrap();
        let mut out = Vec::new();
        let mut session = AppSession::new(
            Cursor::new("목록\n종료\n".as_bytes().to_vec()),
            &mut out,
            Box::new(repo),
        )
        .unwrap();
        session.run().unwrap();
        drop(session);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("파일 1.json을 읽는 중 오류 발생"));
        assert!(output.contains("등록된 명언이 없습니다."));
    }
}
