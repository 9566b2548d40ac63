//! 가이드 명단과 판정 기록
//!
//! 세션 동안 메모리에만 유지되며, 판정 다이얼로그의 결과를 받는 쪽입니다.

use crate::ui::components::dialog::{JudgeAction, JudgeEvents};
use chrono::{DateTime, Local};

/// 확정된 판정 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub action: JudgeAction,
    pub chat_ids: Vec<String>,
    pub decided_at: DateTime<Local>,
}

/// 심사 대상 가이드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    pub name: String,
    pub verdict: Option<Verdict>,
}

impl Guide {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verdict: None,
        }
    }

    pub fn action(&self) -> Option<JudgeAction> {
        self.verdict.as_ref().map(|v| v.action)
    }
}

/// 상태바 집계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterCounts {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub pending: usize,
}

/// 가이드 명단 + 커서 + 심사 중인 가이드
#[derive(Debug, Clone, Default)]
pub struct Roster {
    guides: Vec<Guide>,
    cursor: usize,
    /// 다이얼로그가 열려 있는 동안 심사 중인 가이드 인덱스
    pending: Option<usize>,
}

impl Roster {
    /// 이름 목록으로 명단 생성 (앞뒤 공백 제거, 빈 이름 무시)
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let guides = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref().trim();
                (!name.is_empty()).then(|| Guide::new(name))
            })
            .collect();
        Self {
            guides,
            cursor: 0,
            pending: None,
        }
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 커서 위치의 가이드
    pub fn current(&self) -> Option<&Guide> {
        self.guides.get(self.cursor)
    }

    pub fn get(&self, index: usize) -> Option<&Guide> {
        self.guides.get(index)
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.guides.len() {
            self.cursor += 1;
        }
    }

    pub fn go_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.cursor = self.guides.len().saturating_sub(1);
    }

    /// 커서 위치 가이드를 심사 대상으로 지정, 이름 반환 (빈 명단이면 None)
    pub fn begin_judging(&mut self) -> Option<&str> {
        let guide = self.guides.get(self.cursor)?;
        self.pending = Some(self.cursor);
        Some(&guide.name)
    }

    /// 판정 기록 (범위 밖이면 false)
    pub fn record_verdict(
        &mut self,
        index: usize,
        action: JudgeAction,
        chat_ids: Vec<String>,
        decided_at: DateTime<Local>,
    ) -> bool {
        match self.guides.get_mut(index) {
            Some(guide) => {
                guide.verdict = Some(Verdict {
                    action,
                    chat_ids,
                    decided_at,
                });
                true
            }
            None => false,
        }
    }

    pub fn counts(&self) -> RosterCounts {
        let mut counts = RosterCounts {
            total: self.guides.len(),
            ..Default::default()
        };
        for guide in &self.guides {
            match guide.action() {
                Some(JudgeAction::Pass) => counts.pass += 1,
                Some(JudgeAction::Fail) => counts.fail += 1,
                None => counts.pending += 1,
            }
        }
        counts
    }
}

impl JudgeEvents for Roster {
    fn on_close(&mut self) {
        if let Some(guide) = self.pending.take().and_then(|i| self.guides.get(i)) {
            tracing::debug!(guide = %guide.name, "judge dialog cancelled");
        }
    }

    fn on_confirm(&mut self, action: JudgeAction, chat_ids: Vec<String>) {
        let Some(index) = self.pending.take() else {
            tracing::warn!("verdict confirmed without a pending guide");
            return;
        };
        let chat_id_count = chat_ids.len();
        if self.record_verdict(index, action, chat_ids, Local::now()) {
            tracing::info!(
                guide = %self.guides[index].name,
                action = action.as_str(),
                chat_ids = chat_id_count,
                "verdict recorded"
            );
        }
    }
}
