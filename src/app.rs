use crate::core::actions::Action;
use crate::models::Roster;
use crate::ui::components::JudgeDialog;
use crate::ui::{I18n, Language, LayoutManager, MessageKey, ThemeManager};
use crate::utils::config::AppConfig;
use std::time::{Duration, Instant};

mod dialogs;
mod text_edit;

/// 토스트 표시 시간
const TOAST_DURATION: Duration = Duration::from_secs(3);

pub struct App {
    pub should_quit: bool,
    pub layout: LayoutManager,
    /// 가이드 명단 (판정 결과를 받는 쪽)
    pub roster: Roster,
    pub judge_dialog: JudgeDialog,
    pub theme_manager: ThemeManager,
    pub language: Language,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut theme_manager = ThemeManager::new();
        if let Some(dir) = ThemeManager::config_themes_dir() {
            match theme_manager.load_themes_from_dir(&dir) {
                Ok(0) => {}
                Ok(count) => tracing::info!(count, dir = %dir.display(), "custom themes loaded"),
                Err(err) => tracing::warn!(error = %err, "failed to read custom theme directory"),
            }
        }
        if let Some(theme) = config.theme.as_deref() {
            if let Err(err) = theme_manager.switch_theme(theme) {
                tracing::warn!(
                    %err,
                    available = ?theme_manager.available_themes(),
                    "keeping default theme"
                );
            }
        }

        let language = config
            .language
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default();

        let roster = Roster::new(&config.guides);
        tracing::info!(
            guides = roster.len(),
            theme = theme_manager.current_name(),
            language = language.code(),
            "session started"
        );

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            roster,
            judge_dialog: JudgeDialog::new(),
            theme_manager,
            language,
            toast_message: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(guides: &[&str]) -> Self {
        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            roster: Roster::new(guides),
            judge_dialog: JudgeDialog::new(),
            theme_manager: ThemeManager::new(),
            language: Language::English,
            toast_message: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        let counts = self.roster.counts();
        tracing::info!(
            pass = counts.pass,
            fail = counts.fail,
            pending = counts.pending,
            "session ended"
        );
        self.should_quit = true;
    }

    pub fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    /// 액션 실행 (목록 화면)
    pub fn execute_action(&mut self, action: Action) {
        if let Some(def) = action.def() {
            tracing::trace!(action = def.id, "execute action");
        }
        match action {
            Action::MoveUp => self.roster.move_up(),
            Action::MoveDown => self.roster.move_down(),
            Action::GoToTop => self.roster.go_to_top(),
            Action::GoToBottom => self.roster.go_to_bottom(),
            Action::Judge => self.open_judge_dialog(),
            Action::CycleTheme => self.cycle_theme(),
            Action::ToggleLanguage => self.toggle_language(),
            Action::Quit => self.quit(),
        }
    }

    fn cycle_theme(&mut self) {
        let name = self.theme_manager.cycle_theme().to_string();
        tracing::debug!(theme = %name, "theme changed");
        let message = self
            .i18n()
            .fmt(MessageKey::ThemeChanged, &[("name", name)]);
        self.set_toast(&message);
    }

    fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        let message = self.i18n().fmt(
            MessageKey::LanguageChanged,
            &[("name", self.language.display_name().to_string())],
        );
        self.set_toast(&message);
    }

    /// 토스트 메시지 설정 (3초 후 자동 소멸)
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed() >= TOAST_DURATION {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message
            .as_ref()
            .filter(|(_, time)| time.elapsed() < TOAST_DURATION)
            .map(|(msg, _)| msg.as_str())
    }

    /// 상태바 왼쪽: 판정 집계
    pub fn status_summary(&self) -> String {
        let counts = self.roster.counts();
        self.i18n().fmt(
            MessageKey::StatusSummary,
            &[
                ("total", counts.total.to_string()),
                ("pass", counts.pass.to_string()),
                ("fail", counts.fail.to_string()),
                ("pending", counts.pending.to_string()),
            ],
        )
    }

    /// 상태바 오른쪽: 커서 위치 가이드의 판정 상세
    pub fn status_detail(&self) -> String {
        let i18n = self.i18n();
        let Some(guide) = self.roster.current() else {
            return String::new();
        };
        match &guide.verdict {
            Some(verdict) => i18n.fmt(
                MessageKey::StatusDetail,
                &[
                    ("guide", guide.name.clone()),
                    ("verdict", i18n.verdict_label(Some(verdict.action)).to_string()),
                    ("count", verdict.chat_ids.len().to_string()),
                    ("time", verdict.decided_at.format("%H:%M:%S").to_string()),
                ],
            ),
            None => format!("{}: {}", guide.name, i18n.verdict_label(None)),
        }
    }
}
