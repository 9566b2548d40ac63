// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 표시되는 경고 화면

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::{I18n, Language, TextKey, Theme};

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
    /// 현재 크기 강조
    error_color: Color,
    /// 요구 크기 강조
    success_color: Color,
    language: Language,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            error_color: Color::Red,
            success_color: Color::Green,
            language: Language::English,
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.success.to_color();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let i18n = I18n::new(self.language);
        buf.set_style(area, Style::default().bg(self.bg_color));

        let emphasis = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(Span::styled("⚠", emphasis(self.warning_color))),
            Line::from(""),
            Line::from(Span::styled(
                i18n.tr(TextKey::WarnTitle),
                emphasis(self.warning_color),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    i18n.tr(TextKey::WarnCurrent),
                    Style::default().fg(self.fg_color),
                ),
                Span::styled(
                    format!("{}x{}", self.current_size.0, self.current_size.1),
                    emphasis(self.error_color),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    i18n.tr(TextKey::WarnRequired),
                    Style::default().fg(self.fg_color),
                ),
                Span::styled(
                    format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
                    emphasis(self.success_color),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                i18n.tr(TextKey::WarnHint),
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::DIM),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(screen: WarningScreen, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_warning_screen_shows_sizes() {
        let text = render_text(WarningScreen::new().current_size(30, 10), 38, 12);
        assert!(text.contains("30x10"));
        assert!(text.contains(&format!("{}x{}", MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_warning_screen_localized() {
        let screen = WarningScreen::new()
            .current_size(30, 10)
            .language(Language::Korean);
        let text: String = render_text(screen, 38, 12)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert!(text.contains("현재:"));
        assert!(!text.contains("Current"));
    }
}
