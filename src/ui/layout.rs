// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃 모드:
// - 40x15 이상: 헤더 + 가이드 목록 + 상태바 + 커맨드 바
// - 그 미만: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 15;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 제목 영역
    pub header: Rect,
    /// 가이드 목록 영역
    pub list: Rect,
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 변경 시 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 헤더
                Constraint::Min(3),    // 가이드 목록
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드 바
            ])
            .split(area);

        LayoutAreas {
            header: chunks[0],
            list: chunks[1],
            status_bar: chunks[2],
            command_bar: chunks[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(40, 15), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 14), LayoutMode::TooSmall);
    }

    #[test]
    fn test_normal_areas_stack_vertically() {
        let mut layout = LayoutManager::new();
        layout.update(Rect::new(0, 0, 80, 24));

        let areas = layout.areas();
        assert_eq!(areas.header, Rect::new(0, 0, 80, 1));
        assert_eq!(areas.list, Rect::new(0, 1, 80, 21));
        assert_eq!(areas.status_bar, Rect::new(0, 22, 80, 1));
        assert_eq!(areas.command_bar, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.terminal_size(), (80, 24));
    }

    #[test]
    fn test_too_small_uses_whole_screen_for_warning() {
        let mut layout = LayoutManager::new();
        layout.update(Rect::new(0, 0, 30, 10));

        assert_eq!(layout.mode(), LayoutMode::TooSmall);
        assert_eq!(layout.areas().warning, Rect::new(0, 0, 30, 10));
        assert_eq!(layout.areas().list, Rect::default());
    }
}
