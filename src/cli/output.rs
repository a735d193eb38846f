//! Output formatting utilities

use crate::domain::WiseSaying;

/// Format the saying listing: an explicit empty-store message, or a header
/// block followed by `id / content / author` rows in store order.
pub fn format_saying_list(sayings: &[WiseSaying]) -> String {
    if sayings.is_empty() {
        return "등록된 명언이 없습니다.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("== 명언 목록 ==\n");
    output.push_str("번호 / 명언 / 작가\n");
    output.push_str("-------------------\n");
    for saying in sayings {
        output.push_str(&format!(
            "{} / {} / {}\n",
            saying.id, saying.content, saying.author
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        let output = format_saying_list(&[]);
        assert_eq!(output, "등록된 명언이 없습니다.\n");
    }

    #[test]
    fn test_format_list_rows_in_order() {
        let sayings = vec![
            WiseSaying::new(1, "하나".to_string(), "작가1".to_string()),
            WiseSaying::new(2, "둘".to_string(), "작가2".to_string()),
        ];

        let output = format_saying_list(&sayings);

        assert!(output.starts_with("== 명언 목록 ==\n번호 / 명언 / 작가\n"));
        assert!(output.contains("1 / 하나 / 작가1\n2 / 둘 / 작가2\n"));
    }
}
