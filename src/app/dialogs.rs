use super::text_edit::EditKey;
use super::App;
use crate::ui::components::dialog::{FormField, JudgeAction};
use crate::ui::MessageKey;
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    pub fn is_dialog_active(&self) -> bool {
        self.judge_dialog.is_open()
    }

    /// 커서 위치 가이드에 대해 판정 다이얼로그 열기
    pub fn open_judge_dialog(&mut self) {
        let Some(name) = self.roster.begin_judging().map(str::to_string) else {
            let message = self.i18n().msg(MessageKey::NoGuideToJudge);
            self.set_toast(message);
            return;
        };
        tracing::debug!(guide = %name, "judge dialog opened");
        self.judge_dialog.open(name);
    }

    /// 다이얼로그 키 처리
    pub fn handle_dialog_key(&mut self, modifiers: KeyModifiers, code: KeyCode) {
        if !self.judge_dialog.is_open() {
            return;
        }
        let focus = self.judge_dialog.form().focus();

        match (modifiers, code) {
            (_, KeyCode::Esc) => self.cancel_judge_dialog(),
            (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => {
                self.judge_dialog.form_mut().focus_next();
            }
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
                self.judge_dialog.form_mut().focus_prev();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                if let FormField::ChatId(index) = focus {
                    self.judge_dialog.remove_chat_id(index);
                }
            }
            (_, KeyCode::Enter) => self.press_focused(focus, true),
            (KeyModifiers::NONE, KeyCode::Char(' ')) if !focus.is_text() => {
                self.press_focused(focus, false);
            }
            (_, KeyCode::Left | KeyCode::Right) if !focus.is_text() => {
                let sibling = match focus {
                    FormField::PassButton => Some(FormField::FailButton),
                    FormField::FailButton => Some(FormField::PassButton),
                    FormField::CancelButton => Some(FormField::ConfirmButton),
                    FormField::ConfirmButton => Some(FormField::CancelButton),
                    _ => None,
                };
                if let Some(field) = sibling {
                    self.judge_dialog.form_mut().set_focus(field);
                }
            }
            _ => {
                if focus.is_text() {
                    if let Some(key) = EditKey::from_key(modifiers, code) {
                        self.edit_focused_text(key);
                    }
                }
            }
        }
    }

    /// 포커스된 요소 실행 (Enter면 텍스트 필드에서 제출)
    fn press_focused(&mut self, focus: FormField, is_enter: bool) {
        match focus {
            FormField::PassButton => self.judge_dialog.select_action(JudgeAction::Pass),
            FormField::FailButton => self.judge_dialog.select_action(JudgeAction::Fail),
            FormField::AddChatId => {
                if self.judge_dialog.add_chat_id() {
                    let last = self.judge_dialog.form().chat_ids().len() - 1;
                    self.judge_dialog
                        .form_mut()
                        .set_focus(FormField::ChatId(last));
                }
            }
            FormField::CancelButton => self.cancel_judge_dialog(),
            FormField::ConfirmButton => self.submit_judge_dialog(),
            FormField::ChatId(_) | FormField::Password if is_enter => self.submit_judge_dialog(),
            FormField::ChatId(_) | FormField::Password => {}
        }
    }

    fn edit_focused_text(&mut self, key: EditKey) {
        let form = self.judge_dialog.form();
        let focus = form.focus();
        let Some(current) = form.focused_text() else {
            return;
        };
        let mut value = current.to_string();
        let mut cursor_pos = form.cursor_pos();

        if key.apply(&mut value, &mut cursor_pos) {
            match focus {
                FormField::ChatId(index) => {
                    self.judge_dialog.update_chat_id(index, value);
                }
                FormField::Password => self.judge_dialog.set_password(value),
                _ => return,
            }
        }
        self.judge_dialog.form_mut().set_cursor_pos(cursor_pos);
    }

    /// 제출: 성공하면 명단에 기록되고 다이얼로그가 닫힘
    pub fn submit_judge_dialog(&mut self) {
        let pending = self.roster.pending();
        match self.judge_dialog.submit(&mut self.roster) {
            Ok(()) => {
                let Some(guide) = pending.and_then(|index| self.roster.get(index)) else {
                    return;
                };
                let key = match guide.action() {
                    Some(JudgeAction::Fail) => MessageKey::VerdictRecordedFail,
                    _ => MessageKey::VerdictRecordedPass,
                };
                let message = self.i18n().fmt(key, &[("guide", guide.name.clone())]);
                self.set_toast(&message);
            }
            Err(err) => {
                tracing::debug!(error = %err, "judge submission rejected");
            }
        }
    }

    pub fn cancel_judge_dialog(&mut self) {
        self.judge_dialog.cancel(&mut self.roster);
    }
}
