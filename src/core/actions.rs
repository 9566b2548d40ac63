//! 액션 시스템: 단일 진실 원천 (Single Source of Truth)
//!
//! 목록 화면의 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.
//! 다이얼로그 내부 키 처리는 `app::dialogs`가 따로 담당합니다.

use crate::ui::components::CommandItem;
use crate::ui::{I18n, Language};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 목록 화면에서 가능한 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    // Judging
    Judge,
    // System
    CycleTheme,
    ToggleLanguage,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Judging,
    System,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub category: ActionCategory,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        category: ActionCategory::Navigation,
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        category: ActionCategory::Navigation,
        command_bar: Some(CommandBarEntry {
            key: "g/G",
            label: "Top/End",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    ActionDef {
        action: Action::Judge,
        id: "judge",
        category: ActionCategory::Judging,
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Judge",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::CycleTheme,
        id: "cycle_theme",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "t",
            label: "Theme",
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::ToggleLanguage,
        id: "toggle_language",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "L",
            label: "Lang",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 90,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 탐색: Vim
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('g'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToTop,
        },
        // Shift+g는 터미널에 따라 SHIFT 포함 여부가 다름
        KeyBinding {
            code: KeyCode::Char('G'),
            modifiers: None,
            action: Action::GoToBottom,
        },
        // 탐색: 화살표
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::End,
            modifiers: None,
            action: Action::GoToBottom,
        },
        // 판정
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::Judge,
        },
        // 시스템
        KeyBinding {
            code: KeyCode::Char('t'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::CycleTheme,
        },
        KeyBinding {
            code: KeyCode::Char('L'),
            modifiers: None,
            action: Action::ToggleLanguage,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

impl Action {
    pub fn def(self) -> Option<&'static ActionDef> {
        ACTION_DEFS.iter().find(|d| d.action == self)
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
///
/// `judging_enabled`가 false면 심사 항목을 비활성으로 표시합니다.
pub fn generate_command_bar_items(language: Language, judging_enabled: bool) -> Vec<CommandItem> {
    let i18n = I18n::new(language);
    let mut entries: Vec<(&CommandBarEntry, &ActionDef)> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (cb, def)))
        .collect();

    entries.sort_by_key(|(cb, _)| cb.priority);

    entries
        .into_iter()
        .map(|(cb, def)| {
            let enabled = judging_enabled || def.category != ActionCategory::Judging;
            CommandItem::new(cb.key, i18n.action_label(def.id, cb.label)).enabled(enabled)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_def_ids() {
        assert_eq!(Action::Judge.def().map(|d| d.id), Some("judge"));
        assert_eq!(Action::Quit.def().map(|d| d.id), Some("quit"));
        assert_eq!(Action::CycleTheme.def().map(|d| d.id), Some("cycle_theme"));
    }

    #[test]
    fn test_every_action_has_def() {
        for action in [
            Action::MoveUp,
            Action::MoveDown,
            Action::GoToTop,
            Action::GoToBottom,
            Action::Judge,
            Action::CycleTheme,
            Action::ToggleLanguage,
            Action::Quit,
        ] {
            assert!(action.def().is_some(), "missing def for {:?}", action);
        }
    }

    #[test]
    fn test_find_action_vim_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('k')),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('g')),
            Some(Action::GoToTop)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Char('G')),
            Some(Action::GoToBottom)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('q')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_find_action_arrow_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Down),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Up),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Home),
            Some(Action::GoToTop)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::End),
            Some(Action::GoToBottom)
        );
    }

    #[test]
    fn test_find_action_system_keys() {
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::Judge)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Char('L')),
            Some(Action::ToggleLanguage)
        );
        // Ctrl+q는 바인딩 없음
        assert_eq!(find_action(KeyModifiers::CONTROL, KeyCode::Char('q')), None);
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_generate_command_bar_items() {
        let items = generate_command_bar_items(Language::English, true);
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|item| item.enabled));
        assert_eq!(items[0].key, "Enter");
        assert_eq!(items[0].label, "Judge");
        assert_eq!(items[items.len() - 1].key, "q");
    }

    #[test]
    fn test_generate_command_bar_items_korean() {
        let items = generate_command_bar_items(Language::Korean, true);
        assert_eq!(items[0].label, "심사");
    }

    #[test]
    fn test_judge_item_disabled_on_empty_roster() {
        let items = generate_command_bar_items(Language::English, false);
        assert!(!items[0].enabled);
        assert!(items[1..].iter().all(|item| item.enabled));
    }
}
