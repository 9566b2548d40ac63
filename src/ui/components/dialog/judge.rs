use super::form::{validate, JudgeAction, JudgeForm, Judgement, ValidationError};

/// 판정 다이얼로그 결과를 받는 쪽
///
/// 한 번의 열림 주기마다 둘 중 하나만 정확히 한 번 호출됩니다.
pub trait JudgeEvents {
    /// 취소/닫기
    fn on_close(&mut self);
    /// 제출 성공 (빈 채팅 ID는 이미 걸러진 상태)
    fn on_confirm(&mut self, action: JudgeAction, chat_ids: Vec<String>);
}

/// 가이드 판정 다이얼로그
///
/// 열림 여부, 대상 가이드 이름, 폼 상태를 함께 소유합니다.
#[derive(Debug, Clone, Default)]
pub struct JudgeDialog {
    open: bool,
    guide_name: String,
    form: JudgeForm,
}

impl JudgeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 가이드에 대해 다이얼로그 열기 (폼은 항상 새로 시작)
    pub fn open(&mut self, guide_name: impl Into<String>) {
        self.form = JudgeForm::default();
        self.guide_name = guide_name.into();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn guide_name(&self) -> &str {
        &self.guide_name
    }

    pub fn form(&self) -> &JudgeForm {
        &self.form
    }

    /// 포커스/커서 이동 등 폼 직접 조작용
    pub fn form_mut(&mut self) -> &mut JudgeForm {
        &mut self.form
    }

    pub fn select_action(&mut self, action: JudgeAction) {
        self.form.select_action(action);
    }

    pub fn add_chat_id(&mut self) -> bool {
        self.form.add_chat_id()
    }

    pub fn remove_chat_id(&mut self, index: usize) -> bool {
        self.form.remove_chat_id(index)
    }

    pub fn update_chat_id(&mut self, index: usize, value: impl Into<String>) -> bool {
        self.form.update_chat_id(index, value)
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.set_password(value);
    }

    /// 제출: 검증 실패 시 에러만 남기고 열린 상태 유지
    pub fn submit<E: JudgeEvents + ?Sized>(
        &mut self,
        events: &mut E,
    ) -> Result<(), ValidationError> {
        match validate(&self.form) {
            Ok(Judgement { action, chat_ids }) => {
                events.on_confirm(action, chat_ids);
                self.reset();
                Ok(())
            }
            Err(err) => {
                self.form.set_error(err);
                Err(err)
            }
        }
    }

    /// 취소: 상태 초기화 후 닫힘 알림
    pub fn cancel<E: JudgeEvents + ?Sized>(&mut self, events: &mut E) {
        self.reset();
        events.on_close();
    }

    fn reset(&mut self) {
        self.form = JudgeForm::default();
        self.guide_name.clear();
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::super::form::{ActionChoice, FormField};
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingEvents {
        closed: usize,
        confirmed: Vec<(JudgeAction, Vec<String>)>,
    }

    impl JudgeEvents for RecordingEvents {
        fn on_close(&mut self) {
            self.closed += 1;
        }

        fn on_confirm(&mut self, action: JudgeAction, chat_ids: Vec<String>) {
            self.confirmed.push((action, chat_ids));
        }
    }

    fn open_dialog() -> JudgeDialog {
        let mut dialog = JudgeDialog::new();
        dialog.open("Mina");
        dialog
    }

    fn assert_default_state(dialog: &JudgeDialog) {
        let form = dialog.form();
        assert_eq!(form.action(), ActionChoice::Unset);
        assert_eq!(form.password(), "");
        assert_eq!(form.chat_ids().entries(), &[String::new()]);
        assert!(!form.chat_ids_visible());
        assert!(form.error().is_none());
        assert_eq!(form.focus(), FormField::PassButton);
    }

    #[test]
    fn test_submit_without_selection_does_not_confirm() {
        let mut dialog = open_dialog();
        let mut events = RecordingEvents::default();
        dialog.set_password("secret");

        assert_eq!(
            dialog.submit(&mut events),
            Err(ValidationError::MissingSelection)
        );
        assert!(events.confirmed.is_empty());
        assert_eq!(events.closed, 0);
        assert!(dialog.is_open());
        assert_eq!(
            dialog.form().error(),
            Some(ValidationError::MissingSelection)
        );
    }

    #[test]
    fn test_submit_without_password_does_not_confirm() {
        let mut dialog = open_dialog();
        let mut events = RecordingEvents::default();
        dialog.select_action(JudgeAction::Fail);

        assert_eq!(
            dialog.submit(&mut events),
            Err(ValidationError::MissingPassword)
        );
        assert!(events.confirmed.is_empty());
        assert_eq!(
            dialog.form().error(),
            Some(ValidationError::MissingPassword)
        );
    }

    #[test]
    fn test_submit_confirms_filtered_chat_ids_once() {
        let mut dialog = open_dialog();
        let mut events = RecordingEvents::default();
        dialog.select_action(JudgeAction::Pass);
        dialog.add_chat_id();
        dialog.add_chat_id();
        dialog.update_chat_id(0, "");
        dialog.update_chat_id(1, "abc");
        dialog.update_chat_id(2, "  ");
        dialog.set_password("secret");

        assert_eq!(dialog.submit(&mut events), Ok(()));
        assert_eq!(
            events.confirmed,
            vec![(JudgeAction::Pass, vec!["abc".to_string()])]
        );
        assert_eq!(events.closed, 0);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_failed_then_successful_submit() {
        let mut dialog = open_dialog();
        let mut events = RecordingEvents::default();
        dialog.select_action(JudgeAction::Fail);
        assert!(dialog.submit(&mut events).is_err());

        dialog.set_password("pw");
        assert!(dialog.submit(&mut events).is_ok());
        assert_eq!(events.confirmed, vec![(JudgeAction::Fail, Vec::new())]);
    }

    #[test]
    fn test_cancel_never_confirms() {
        let mut dialog = open_dialog();
        let mut events = RecordingEvents::default();
        dialog.select_action(JudgeAction::Pass);
        dialog.update_chat_id(0, "partial");
        dialog.set_password("secr");

        dialog.cancel(&mut events);

        assert!(events.confirmed.is_empty());
        assert_eq!(events.closed, 1);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_reopen_after_submit_shows_defaults() {
        let mut dialog = open_dialog();
        let mut events = RecordingEvents::default();
        dialog.select_action(JudgeAction::Pass);
        dialog.update_chat_id(0, "abc");
        dialog.set_password("secret");
        dialog.submit(&mut events).unwrap();

        dialog.open("Jun");
        assert!(dialog.is_open());
        assert_eq!(dialog.guide_name(), "Jun");
        assert_default_state(&dialog);
    }

    #[test]
    fn test_reopen_after_cancel_shows_defaults() {
        let mut dialog = open_dialog();
        let mut events = RecordingEvents::default();
        dialog.select_action(JudgeAction::Fail);
        dialog.add_chat_id();
        // 비밀번호 누락으로 에러가 남은 상태에서 취소
        assert!(dialog.submit(&mut events).is_err());
        dialog.cancel(&mut events);
        assert_eq!(events.closed, 1);

        dialog.open("Mina");
        assert_default_state(&dialog);
    }

    #[test]
    fn test_open_discards_previous_input() {
        let mut dialog = open_dialog();
        dialog.select_action(JudgeAction::Pass);
        dialog.set_password("leftover");

        dialog.open("Mina");
        assert_default_state(&dialog);
    }
}
