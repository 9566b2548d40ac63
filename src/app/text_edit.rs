//! 다이얼로그 텍스트 필드 편집 (cursor_pos는 UTF-8 바이트 인덱스)

use crossterm::event::{KeyCode, KeyModifiers};

/// 텍스트 필드에 적용할 편집 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EditKey {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Ctrl+W
    DeletePrevWord,
}

impl EditKey {
    /// 키 입력을 편집 키로 변환 (편집 키가 아니면 None)
    pub(super) fn from_key(modifiers: KeyModifiers, code: KeyCode) -> Option<Self> {
        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => Some(EditKey::DeletePrevWord),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                Some(EditKey::Insert(c))
            }
            (_, KeyCode::Backspace) => Some(EditKey::Backspace),
            (_, KeyCode::Delete) => Some(EditKey::Delete),
            (_, KeyCode::Left) => Some(EditKey::Left),
            (_, KeyCode::Right) => Some(EditKey::Right),
            (_, KeyCode::Home) => Some(EditKey::Home),
            (_, KeyCode::End) => Some(EditKey::End),
            _ => None,
        }
    }

    /// 값과 커서에 편집 적용, 값이 바뀌었으면 true
    pub(super) fn apply(self, value: &mut String, cursor_pos: &mut usize) -> bool {
        *cursor_pos = clamp_to_boundary(value, *cursor_pos);
        match self {
            EditKey::Insert(c) => {
                value.insert(*cursor_pos, c);
                *cursor_pos += c.len_utf8();
                true
            }
            EditKey::Backspace => {
                if *cursor_pos == 0 {
                    return false;
                }
                let prev = prev_char_start(value, *cursor_pos);
                value.replace_range(prev..*cursor_pos, "");
                *cursor_pos = prev;
                true
            }
            EditKey::Delete => {
                if *cursor_pos >= value.len() {
                    return false;
                }
                value.remove(*cursor_pos);
                true
            }
            EditKey::Left => {
                *cursor_pos = prev_char_start(value, *cursor_pos);
                false
            }
            EditKey::Right => {
                *cursor_pos = next_char_start(value, *cursor_pos);
                false
            }
            EditKey::Home => {
                *cursor_pos = 0;
                false
            }
            EditKey::End => {
                *cursor_pos = value.len();
                false
            }
            EditKey::DeletePrevWord => delete_prev_word(value, cursor_pos),
        }
    }
}

fn clamp_to_boundary(value: &str, cursor_pos: usize) -> usize {
    let mut pos = cursor_pos.min(value.len());
    while !value.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

fn prev_char_start(value: &str, cursor_pos: usize) -> usize {
    value[..cursor_pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_start(value: &str, cursor_pos: usize) -> usize {
    value[cursor_pos..]
        .chars()
        .next()
        .map(|c| cursor_pos + c.len_utf8())
        .unwrap_or(value.len())
}

/// 채팅 ID 구분자 (공백, 구분 기호)
fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '_' | '.' | ',' | ':' | '/' | '@' | '#')
}

fn delete_prev_word(value: &mut String, cursor_pos: &mut usize) -> bool {
    let original = *cursor_pos;
    let mut pos = original;

    // 커서 왼쪽 구분자를 먼저 건너뛰고, 단어 시작까지 이동
    let mut in_word = false;
    while pos > 0 {
        let prev = prev_char_start(value, pos);
        let delimiter = value[prev..pos].chars().any(is_word_delimiter);
        if delimiter && in_word {
            break;
        }
        in_word |= !delimiter;
        pos = prev;
    }

    if pos == original {
        return false;
    }
    value.replace_range(pos..original, "");
    *cursor_pos = pos;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(value: &str, cursor_pos: usize, keys: &[EditKey]) -> (String, usize) {
        let mut value = value.to_string();
        let mut cursor_pos = cursor_pos;
        for key in keys {
            key.apply(&mut value, &mut cursor_pos);
        }
        (value, cursor_pos)
    }

    #[test]
    fn test_insert_backspace_delete_utf8_cursor_boundary() {
        let (value, cursor) = apply_all(
            "\u{AC00}\u{B098}",
            "\u{AC00}".len(),
            &[EditKey::Insert('\u{B2E4}')],
        );
        assert_eq!(value, "\u{AC00}\u{B2E4}\u{B098}");
        assert_eq!(cursor, "\u{AC00}\u{B2E4}".len());

        let (value, cursor) = apply_all(&value, cursor, &[EditKey::Backspace]);
        assert_eq!(value, "\u{AC00}\u{B098}");
        assert_eq!(cursor, "\u{AC00}".len());

        let (value, cursor) = apply_all(&value, 0, &[EditKey::Delete]);
        assert_eq!(value, "\u{B098}");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_cursor_movement_utf8() {
        let value = "a\u{AC00}b";
        let (_, cursor) = apply_all(value, value.len(), &[EditKey::Left]);
        assert_eq!(cursor, "a\u{AC00}".len());
        let (_, cursor) = apply_all(value, cursor, &[EditKey::Left, EditKey::Right]);
        assert_eq!(cursor, "a\u{AC00}".len());
        let (_, cursor) = apply_all(value, cursor, &[EditKey::Home]);
        assert_eq!(cursor, 0);
        let (_, cursor) = apply_all(value, cursor, &[EditKey::Left, EditKey::End]);
        assert_eq!(cursor, value.len());
    }

    #[test]
    fn test_edges_report_no_change() {
        let mut value = "ab".to_string();
        let mut cursor = 0;
        assert!(!EditKey::Backspace.apply(&mut value, &mut cursor));
        cursor = 2;
        assert!(!EditKey::Delete.apply(&mut value, &mut cursor));
        assert_eq!(value, "ab");
    }

    #[test]
    fn test_delete_prev_word() {
        let (value, cursor) = apply_all("room-42 chat_77  ", 17, &[EditKey::DeletePrevWord]);
        assert_eq!(value, "room-42 chat_");
        assert_eq!(cursor, value.len());

        let (value, _) = apply_all("abc", 3, &[EditKey::DeletePrevWord]);
        assert_eq!(value, "");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            EditKey::from_key(KeyModifiers::SHIFT, KeyCode::Char('A')),
            Some(EditKey::Insert('A'))
        );
        assert_eq!(
            EditKey::from_key(KeyModifiers::CONTROL, KeyCode::Char('w')),
            Some(EditKey::DeletePrevWord)
        );
        assert_eq!(
            EditKey::from_key(KeyModifiers::CONTROL, KeyCode::Char('d')),
            None
        );
        assert_eq!(EditKey::from_key(KeyModifiers::NONE, KeyCode::Tab), None);
    }
}
