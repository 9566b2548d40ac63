// Command bar component - 하단 커맨드 바 컴포넌트
//
// 액션 레지스트리에서 만든 단축키 목록 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// 단축키 (Enter, j/k, ...)
    pub key: String,
    /// 레이블 (Judge, Quit, ...)
    pub label: String,
    /// 활성화 여부
    pub enabled: bool,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    /// 커맨드 항목들
    commands: Vec<CommandItem>,
    /// 배경색
    bg_color: Color,
    /// 전경색 (키)
    key_fg_color: Color,
    /// 전경색 (레이블)
    label_fg_color: Color,
    /// 비활성 색상
    disabled_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
            disabled_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 커맨드 목록 설정
    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.command_bar_fg.to_color();
        self.disabled_color = theme.fg_muted.to_color();
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        // 커맨드 항목들을 스팬으로 변환
        let mut spans = Vec::new();
        spans.push(Span::raw(" ")); // 왼쪽 패딩

        for (i, cmd) in self.commands.iter().enumerate() {
            let (key_style, label_style) = if cmd.enabled {
                (
                    Style::default()
                        .fg(self.key_fg_color)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.label_fg_color),
                )
            } else {
                (
                    Style::default().fg(self.disabled_color),
                    Style::default().fg(self.disabled_color),
                )
            };

            spans.push(Span::styled(&cmd.key, key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(&cmd.label, label_style));

            if i + 1 < self.commands.len() {
                spans.push(Span::raw("  "));
            }
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("Enter", "Judge");
        assert_eq!(item.key, "Enter");
        assert_eq!(item.label, "Judge");
        assert!(item.enabled);
        assert!(!item.enabled(false).enabled);
    }

    #[test]
    fn test_command_bar_renders_items() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        CommandBar::new()
            .commands(vec![
                CommandItem::new("Enter", "Judge"),
                CommandItem::new("q", "Quit"),
            ])
            .render(area, &mut buf);

        let line: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(line.contains("Enter:Judge  q:Quit"));
    }
}
