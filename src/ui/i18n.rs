use crate::ui::components::dialog::{JudgeAction, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Korean,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Language::Korean,
            _ => Language::English,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Korean => "한국어",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Korean,
            Language::Korean => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    AppTitle,
    Cancel,
    Confirm,
    ListTitle,
    ListEmpty,
    VerdictSelected,
    VerdictNotSelected,
    VerdictPending,
    WarnTitle,
    WarnCurrent,
    WarnRequired,
    WarnHint,
    DialogTitleAdminAccess,
    DialogMark,
    DialogMarkAs,
    DialogActionPass,
    DialogActionFail,
    DialogChatIdsHeader,
    DialogAddChatId,
    DialogChatIdsNote,
    DialogAdminPassword,
    DialogPasswordPlaceholder,
    DialogHintJudge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    ChatIdPlaceholder,
    MissingSelection,
    TooManyIdentifiers,
    MissingPassword,
    VerdictRecordedPass,
    VerdictRecordedFail,
    NoGuideToJudge,
    StatusSummary,
    StatusDetail,
    ThemeChanged,
    LanguageChanged,
}

#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn tr(self, key: TextKey) -> &'static str {
        match (self.language, key) {
            (Language::English, TextKey::AppTitle) => "Guide Judge",
            (Language::Korean, TextKey::AppTitle) => "가이드 심사",
            (Language::English, TextKey::Cancel) => "Cancel",
            (Language::Korean, TextKey::Cancel) => "취소",
            (Language::English, TextKey::Confirm) => "Confirm",
            (Language::Korean, TextKey::Confirm) => "확인",
            (Language::English, TextKey::ListTitle) => "Guides",
            (Language::Korean, TextKey::ListTitle) => "가이드",
            (Language::English, TextKey::ListEmpty) => {
                " (No guides - pass names as arguments or list them in config.toml)"
            }
            (Language::Korean, TextKey::ListEmpty) => {
                " (가이드 없음 - 인자로 이름을 넘기거나 config.toml에 등록하세요)"
            }
            (Language::English, TextKey::VerdictSelected) => "Selected",
            (Language::Korean, TextKey::VerdictSelected) => "선정",
            (Language::English, TextKey::VerdictNotSelected) => "Not selected",
            (Language::Korean, TextKey::VerdictNotSelected) => "미선정",
            (Language::English, TextKey::VerdictPending) => "Pending",
            (Language::Korean, TextKey::VerdictPending) => "대기",
            (Language::English, TextKey::WarnTitle) => "Terminal Too Small",
            (Language::Korean, TextKey::WarnTitle) => "터미널 크기가 너무 작습니다",
            (Language::English, TextKey::WarnCurrent) => "Current: ",
            (Language::Korean, TextKey::WarnCurrent) => "현재: ",
            (Language::English, TextKey::WarnRequired) => "Required: ",
            (Language::Korean, TextKey::WarnRequired) => "필요: ",
            (Language::English, TextKey::WarnHint) => "Please resize your terminal",
            (Language::Korean, TextKey::WarnHint) => "터미널 크기를 늘려주세요",
            (Language::English, TextKey::DialogTitleAdminAccess) => " Admin Access ",
            (Language::Korean, TextKey::DialogTitleAdminAccess) => " 관리자 확인 ",
            (Language::English, TextKey::DialogMark) => "Mark ",
            (Language::Korean, TextKey::DialogMark) => "",
            (Language::English, TextKey::DialogMarkAs) => " as:",
            (Language::Korean, TextKey::DialogMarkAs) => " 님을 다음으로 처리:",
            (Language::English, TextKey::DialogActionPass) => "✅ Selected (Winner)",
            (Language::Korean, TextKey::DialogActionPass) => "✅ 선정 (우승)",
            (Language::English, TextKey::DialogActionFail) => "❌ Not Selected",
            (Language::Korean, TextKey::DialogActionFail) => "❌ 미선정",
            (Language::English, TextKey::DialogChatIdsHeader) => "Chat IDs (Optional - Max 5)",
            (Language::Korean, TextKey::DialogChatIdsHeader) => "채팅 ID (선택 - 최대 5개)",
            (Language::English, TextKey::DialogAddChatId) => "+ Add Chat ID",
            (Language::Korean, TextKey::DialogAddChatId) => "+ 채팅 ID 추가",
            (Language::English, TextKey::DialogChatIdsNote) => {
                "Chat IDs are optional and will be saved for record-keeping purposes"
            }
            (Language::Korean, TextKey::DialogChatIdsNote) => {
                "채팅 ID는 선택 사항이며 기록 보관용으로 저장됩니다"
            }
            (Language::English, TextKey::DialogAdminPassword) => "Admin Password",
            (Language::Korean, TextKey::DialogAdminPassword) => "관리자 비밀번호",
            (Language::English, TextKey::DialogPasswordPlaceholder) => "Enter admin password",
            (Language::Korean, TextKey::DialogPasswordPlaceholder) => "관리자 비밀번호 입력",
            (Language::English, TextKey::DialogHintJudge) => {
                "Tab:Next  Enter:Select/Confirm  ^D:Remove ID  Esc:Cancel"
            }
            (Language::Korean, TextKey::DialogHintJudge) => {
                "Tab:다음  Enter:선택/확인  ^D:ID 삭제  Esc:취소"
            }
        }
    }

    pub fn msg(self, key: MessageKey) -> &'static str {
        match (self.language, key) {
            (Language::English, MessageKey::ChatIdPlaceholder) => "Chat ID {index}",
            (Language::Korean, MessageKey::ChatIdPlaceholder) => "채팅 ID {index}",
            (Language::English, MessageKey::MissingSelection) => {
                "Please select Selected or Not Selected"
            }
            (Language::Korean, MessageKey::MissingSelection) => "선정 또는 미선정을 골라주세요",
            (Language::English, MessageKey::TooManyIdentifiers) => "Maximum 5 Chat IDs allowed",
            (Language::Korean, MessageKey::TooManyIdentifiers) => {
                "채팅 ID는 최대 5개까지 입력할 수 있습니다"
            }
            (Language::English, MessageKey::MissingPassword) => "Please enter the password",
            (Language::Korean, MessageKey::MissingPassword) => "비밀번호를 입력해주세요",
            (Language::English, MessageKey::VerdictRecordedPass) => "Marked {guide} as Selected",
            (Language::Korean, MessageKey::VerdictRecordedPass) => "{guide}: 선정 처리됨",
            (Language::English, MessageKey::VerdictRecordedFail) => {
                "Marked {guide} as Not Selected"
            }
            (Language::Korean, MessageKey::VerdictRecordedFail) => "{guide}: 미선정 처리됨",
            (Language::English, MessageKey::NoGuideToJudge) => "No guide to judge",
            (Language::Korean, MessageKey::NoGuideToJudge) => "심사할 가이드가 없습니다",
            (Language::English, MessageKey::StatusSummary) => {
                " {total} guides | {pass} selected | {fail} not selected | {pending} pending"
            }
            (Language::Korean, MessageKey::StatusSummary) => {
                " 가이드 {total}명 | 선정 {pass} | 미선정 {fail} | 대기 {pending}"
            }
            (Language::English, MessageKey::StatusDetail) => {
                "{guide}: {verdict} ({count} chat IDs, {time})"
            }
            (Language::Korean, MessageKey::StatusDetail) => {
                "{guide}: {verdict} (채팅 ID {count}개, {time})"
            }
            (Language::English, MessageKey::ThemeChanged) => "Theme: {name}",
            (Language::Korean, MessageKey::ThemeChanged) => "테마: {name}",
            (Language::English, MessageKey::LanguageChanged) => "Language: {name}",
            (Language::Korean, MessageKey::LanguageChanged) => "언어: {name}",
        }
    }

    pub fn fmt(self, key: MessageKey, args: &[(&str, String)]) -> String {
        let mut out = self.msg(key).to_string();
        for (name, value) in args {
            let needle = format!("{{{}}}", name);
            out = out.replace(&needle, value);
        }
        out
    }

    pub fn validation_message(self, error: ValidationError) -> &'static str {
        let key = match error {
            ValidationError::MissingSelection => MessageKey::MissingSelection,
            ValidationError::TooManyIdentifiers => MessageKey::TooManyIdentifiers,
            ValidationError::MissingPassword => MessageKey::MissingPassword,
        };
        self.msg(key)
    }

    pub fn verdict_label(self, action: Option<JudgeAction>) -> &'static str {
        match action {
            Some(JudgeAction::Pass) => self.tr(TextKey::VerdictSelected),
            Some(JudgeAction::Fail) => self.tr(TextKey::VerdictNotSelected),
            None => self.tr(TextKey::VerdictPending),
        }
    }

    /// 커맨드바 레이블 (영어 기본값을 그대로 쓰는 항목은 fallback)
    pub fn action_label(self, id: &str, fallback: &'static str) -> &'static str {
        match (self.language, id) {
            (Language::Korean, "move_up") => "위/아래",
            (Language::Korean, "go_top") => "처음/끝",
            (Language::Korean, "judge") => "심사",
            (Language::Korean, "cycle_theme") => "테마",
            (Language::Korean, "toggle_language") => "언어",
            (Language::Korean, "quit") => "종료",
            _ => fallback,
        }
    }
}
