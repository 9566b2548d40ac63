//! 판정 폼 상태와 검증
//!
//! 다이얼로그가 열려 있는 동안에만 살아 있는 로컬 상태입니다.
//! 열기/제출/취소 때마다 `JudgeForm::default()`로 새로 만들어집니다.

use thiserror::Error;

/// 채팅 ID 입력 필드 최대 개수
pub const MAX_CHAT_IDS: usize = 5;

/// 확정된 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeAction {
    /// 선정 (Winner)
    Pass,
    /// 미선정
    Fail,
}

impl JudgeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            JudgeAction::Pass => "pass",
            JudgeAction::Fail => "fail",
        }
    }
}

/// 폼에서 고른 판정 (아직 고르지 않은 상태 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionChoice {
    #[default]
    Unset,
    Pass,
    Fail,
}

impl ActionChoice {
    pub fn action(self) -> Option<JudgeAction> {
        match self {
            ActionChoice::Unset => None,
            ActionChoice::Pass => Some(JudgeAction::Pass),
            ActionChoice::Fail => Some(JudgeAction::Fail),
        }
    }
}

impl From<JudgeAction> for ActionChoice {
    fn from(action: JudgeAction) -> Self {
        match action {
            JudgeAction::Pass => ActionChoice::Pass,
            JudgeAction::Fail => ActionChoice::Fail,
        }
    }
}

/// 제출 시 검증 실패 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select Selected or Not Selected")]
    MissingSelection,

    #[error("Maximum 5 Chat IDs allowed")]
    TooManyIdentifiers,

    #[error("Please enter the password")]
    MissingPassword,
}

/// 검증을 통과한 제출 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub action: JudgeAction,
    pub chat_ids: Vec<String>,
}

/// 채팅 ID 입력 목록
///
/// 항상 1개 이상 `MAX_CHAT_IDS`개 이하의 항목을 유지합니다.
/// 빈 문자열도 항목으로 남아 있으며 제출 시점에 걸러집니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatIdList {
    entries: Vec<String>,
}

impl Default for ChatIdList {
    fn default() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }
}

impl ChatIdList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 추가 버튼 노출 여부
    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_CHAT_IDS
    }

    /// 삭제 버튼 노출 여부
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// 빈 필드 추가 (상한이면 무시)
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.entries.push(String::new());
        true
    }

    /// 필드 삭제 (마지막 한 개는 유지)
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// 필드 값 교체 (trim/검증 없음)
    pub fn update(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = value.into();
                true
            }
            None => false,
        }
    }
}

/// 키보드 포커스 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    PassButton,
    FailButton,
    ChatId(usize),
    AddChatId,
    Password,
    CancelButton,
    ConfirmButton,
}

impl FormField {
    pub fn is_text(self) -> bool {
        matches!(self, FormField::ChatId(_) | FormField::Password)
    }
}

/// 판정 다이얼로그 폼 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JudgeForm {
    password: String,
    action: ActionChoice,
    chat_ids: ChatIdList,
    chat_ids_visible: bool,
    error: Option<ValidationError>,
    focus: FormField,
    /// 포커스된 텍스트 필드의 커서 (바이트 인덱스)
    cursor_pos: usize,
}

impl JudgeForm {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn action(&self) -> ActionChoice {
        self.action
    }

    pub fn chat_ids(&self) -> &ChatIdList {
        &self.chat_ids
    }

    pub fn chat_ids_visible(&self) -> bool {
        self.chat_ids_visible
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// 판정 선택: 채팅 ID 섹션도 함께 펼침
    pub fn select_action(&mut self, action: JudgeAction) {
        self.action = action.into();
        self.chat_ids_visible = true;
    }

    pub fn add_chat_id(&mut self) -> bool {
        self.chat_ids.add()
    }

    pub fn remove_chat_id(&mut self, index: usize) -> bool {
        if !self.chat_ids.remove(index) {
            return false;
        }

        // 삭제된 행 뒤쪽에 포커스가 있었다면 한 칸 당김
        if let FormField::ChatId(focused) = self.focus {
            let last = self.chat_ids.len() - 1;
            let next = if focused > index {
                focused - 1
            } else {
                focused.min(last)
            };
            self.set_focus(FormField::ChatId(next));
        }
        true
    }

    /// 포커스된 필드가 바뀌면 커서도 새 값 안으로 맞춤
    pub fn update_chat_id(&mut self, index: usize, value: impl Into<String>) -> bool {
        let updated = self.chat_ids.update(index, value);
        if updated && self.focus == FormField::ChatId(index) {
            self.set_cursor_pos(self.cursor_pos);
        }
        updated
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        if self.focus == FormField::Password {
            self.set_cursor_pos(self.cursor_pos);
        }
    }

    pub(super) fn set_error(&mut self, error: ValidationError) {
        self.error = Some(error);
    }

    /// 커서 설정 (값 길이와 문자 경계 안으로 보정)
    pub fn set_cursor_pos(&mut self, cursor_pos: usize) {
        let text = self.focused_text().unwrap_or("");
        let mut pos = cursor_pos.min(text.len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.cursor_pos = pos;
    }

    /// 포커스된 텍스트 필드 값 (버튼이면 None)
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            FormField::ChatId(index) => self.chat_ids.get(index),
            FormField::Password => Some(&self.password),
            _ => None,
        }
    }

    /// 현재 화면에 보이는 포커스 대상 (Tab 순서)
    pub fn focusable_fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::PassButton, FormField::FailButton];
        if self.chat_ids_visible {
            fields.extend((0..self.chat_ids.len()).map(FormField::ChatId));
            if self.chat_ids.can_add() {
                fields.push(FormField::AddChatId);
            }
        }
        fields.extend([
            FormField::Password,
            FormField::CancelButton,
            FormField::ConfirmButton,
        ]);
        fields
    }

    /// 포커스 이동, 텍스트 필드면 커서를 끝으로
    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
        self.cursor_pos = self.focused_text().map(str::len).unwrap_or(0);
    }

    pub fn focus_next(&mut self) {
        let fields = self.focusable_fields();
        let next = match fields.iter().position(|f| *f == self.focus) {
            Some(i) => fields[(i + 1) % fields.len()],
            None => fields[0],
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let fields = self.focusable_fields();
        let prev = match fields.iter().position(|f| *f == self.focus) {
            Some(0) | None => fields[fields.len() - 1],
            Some(i) => fields[i - 1],
        };
        self.set_focus(prev);
    }
}

/// 빈 항목(공백만 있는 항목 포함)을 걸러낸 채팅 ID 목록
///
/// 입력 상한과 별개로 개수를 다시 확인합니다.
pub fn collect_chat_ids(entries: &[String]) -> Result<Vec<String>, ValidationError> {
    let kept: Vec<String> = entries
        .iter()
        .filter(|id| !id.trim().is_empty())
        .cloned()
        .collect();
    if kept.len() > MAX_CHAT_IDS {
        return Err(ValidationError::TooManyIdentifiers);
    }
    Ok(kept)
}

/// 제출 검증 (첫 실패에서 중단)
pub fn validate(form: &JudgeForm) -> Result<Judgement, ValidationError> {
    let action = form
        .action
        .action()
        .ok_or(ValidationError::MissingSelection)?;

    let chat_ids = if form.chat_ids_visible {
        collect_chat_ids(form.chat_ids.entries())?
    } else {
        Vec::new()
    };

    if form.password.trim().is_empty() {
        return Err(ValidationError::MissingPassword);
    }

    Ok(Judgement { action, chat_ids })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_default_form_state() {
        let form = JudgeForm::default();
        assert_eq!(form.action(), ActionChoice::Unset);
        assert_eq!(form.password(), "");
        assert_eq!(form.chat_ids().entries(), &strings(&[""]));
        assert!(!form.chat_ids_visible());
        assert!(form.error().is_none());
        assert_eq!(form.focus(), FormField::PassButton);
    }

    #[test]
    fn test_select_action_reveals_chat_ids() {
        let mut form = JudgeForm::default();
        form.select_action(JudgeAction::Fail);
        assert_eq!(form.action(), ActionChoice::Fail);
        assert!(form.chat_ids_visible());
    }

    #[test]
    fn test_reselect_keeps_chat_ids() {
        let mut form = JudgeForm::default();
        form.select_action(JudgeAction::Fail);
        form.update_chat_id(0, "room-42");
        form.add_chat_id();
        form.update_chat_id(1, "room-43");

        form.select_action(JudgeAction::Pass);

        assert_eq!(form.action(), ActionChoice::Pass);
        assert_eq!(form.chat_ids().entries(), &strings(&["room-42", "room-43"]));
    }

    #[test]
    fn test_chat_id_list_add_is_capped_at_five() {
        let mut list = ChatIdList::default();
        for _ in 0..10 {
            list.add();
        }
        assert_eq!(list.len(), MAX_CHAT_IDS);
        assert!(!list.can_add());
        assert!(!list.add());
    }

    #[test]
    fn test_chat_id_list_keeps_last_entry() {
        let mut list = ChatIdList::default();
        assert!(!list.can_remove());
        assert!(!list.remove(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_chat_id_list_remove_preserves_order() {
        let mut list = ChatIdList::default();
        list.add();
        list.add();
        list.update(0, "a");
        list.update(1, "b");
        list.update(2, "c");

        assert!(list.remove(1));
        assert_eq!(list.entries(), &strings(&["a", "c"]));
        assert!(!list.remove(5));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_chat_id_update_out_of_range_is_ignored() {
        let mut list = ChatIdList::default();
        assert!(!list.update(3, "x"));
        assert_eq!(list.entries(), &strings(&[""]));
    }

    #[test]
    fn test_chat_id_update_keeps_whitespace() {
        let mut list = ChatIdList::default();
        list.update(0, "  padded  ");
        assert_eq!(list.get(0), Some("  padded  "));
    }

    #[test]
    fn test_validate_requires_selection_first() {
        // 비밀번호가 비어 있어도 선택 누락이 먼저 보고됨
        let form = JudgeForm::default();
        assert_eq!(validate(&form), Err(ValidationError::MissingSelection));
    }

    #[test]
    fn test_validate_requires_password() {
        let mut form = JudgeForm::default();
        form.select_action(JudgeAction::Pass);
        form.set_password("   ");
        assert_eq!(validate(&form), Err(ValidationError::MissingPassword));
    }

    #[test]
    fn test_validate_filters_blank_chat_ids() {
        let mut form = JudgeForm::default();
        form.select_action(JudgeAction::Pass);
        form.add_chat_id();
        form.add_chat_id();
        form.update_chat_id(1, "abc");
        form.update_chat_id(2, "  ");
        form.set_password("secret");

        let judgement = validate(&form).unwrap();
        assert_eq!(judgement.action, JudgeAction::Pass);
        assert_eq!(judgement.chat_ids, strings(&["abc"]));
    }

    #[test]
    fn test_collect_chat_ids_rejects_more_than_five() {
        let entries = strings(&["1", "2", "3", "4", "5", "6"]);
        assert_eq!(
            collect_chat_ids(&entries),
            Err(ValidationError::TooManyIdentifiers)
        );

        let with_blanks = strings(&["1", " ", "2", "3", "", "4", "5"]);
        assert_eq!(
            collect_chat_ids(&with_blanks),
            Ok(strings(&["1", "2", "3", "4", "5"]))
        );
    }

    #[test]
    fn test_focus_order_follows_visible_sections() {
        let mut form = JudgeForm::default();
        assert_eq!(
            form.focusable_fields(),
            vec![
                FormField::PassButton,
                FormField::FailButton,
                FormField::Password,
                FormField::CancelButton,
                FormField::ConfirmButton,
            ]
        );

        form.select_action(JudgeAction::Pass);
        form.add_chat_id();
        assert_eq!(
            form.focusable_fields(),
            vec![
                FormField::PassButton,
                FormField::FailButton,
                FormField::ChatId(0),
                FormField::ChatId(1),
                FormField::AddChatId,
                FormField::Password,
                FormField::CancelButton,
                FormField::ConfirmButton,
            ]
        );

        for _ in 0..3 {
            form.add_chat_id();
        }
        assert!(!form.focusable_fields().contains(&FormField::AddChatId));
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut form = JudgeForm::default();
        form.focus_prev();
        assert_eq!(form.focus(), FormField::ConfirmButton);
        form.focus_next();
        assert_eq!(form.focus(), FormField::PassButton);
    }

    #[test]
    fn test_focus_moves_cursor_to_end_of_text() {
        let mut form = JudgeForm::default();
        form.set_password("hunter2");
        form.set_focus(FormField::Password);
        assert_eq!(form.cursor_pos(), "hunter2".len());

        form.set_cursor_pos(100);
        assert_eq!(form.cursor_pos(), "hunter2".len());
    }

    #[test]
    fn test_remove_chat_id_shifts_focus() {
        let mut form = JudgeForm::default();
        form.select_action(JudgeAction::Pass);
        form.add_chat_id();
        form.add_chat_id();
        form.set_focus(FormField::ChatId(2));

        assert!(form.remove_chat_id(0));
        assert_eq!(form.focus(), FormField::ChatId(1));

        assert!(form.remove_chat_id(1));
        assert_eq!(form.focus(), FormField::ChatId(0));
    }

    #[test]
    fn test_replacing_focused_value_keeps_cursor_on_char_boundary() {
        let mut form = JudgeForm::default();
        form.select_action(JudgeAction::Pass);
        form.update_chat_id(0, "abc");
        form.set_focus(FormField::ChatId(0));
        assert_eq!(form.cursor_pos(), 3);

        // 바이트 3은 '가'(1..4) 안쪽
        form.update_chat_id(0, "a\u{AC00}");
        assert_eq!(form.cursor_pos(), 1);

        form.update_chat_id(0, "");
        assert_eq!(form.cursor_pos(), 0);

        form.set_password("\u{AC00}\u{B098}");
        form.set_focus(FormField::Password);
        form.set_password("x\u{AC00}");
        assert_eq!(form.cursor_pos(), 4);
        form.set_cursor_pos(2);
        assert_eq!(form.cursor_pos(), 1);
    }
}
