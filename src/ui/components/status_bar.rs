// Status bar component - 상태바 컴포넌트
//
// 판정 집계와 현재 가이드 정보, 토스트 메시지 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 왼쪽 집계 ("3 guides | 1 selected | ...")
    summary: &'a str,
    /// 오른쪽 상세 (현재 가이드)
    detail: &'a str,
    /// 토스트 (있으면 상세 대신 표시)
    toast: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    toast_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            summary: "",
            detail: "",
            toast: None,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            toast_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: &'a str) -> Self {
        self.summary = summary;
        self
    }

    pub fn detail(mut self, detail: &'a str) -> Self {
        self.detail = detail;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.toast_color = theme.warning.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (right_text, right_style) = match self.toast {
            Some(toast) => (
                format!("{} ", toast),
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                format!("{} ", self.detail),
                Style::default().fg(self.fg_color),
            ),
        };

        // 폭은 바이트가 아니라 표시 폭 기준
        let left_width = self.summary.width();
        let right_width = right_text.width();
        let padding_len = (area.width as usize).saturating_sub(left_width + right_width);

        let spans = vec![
            Span::styled(self.summary, Style::default().fg(self.fg_color)),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_text, right_style),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(bar: StatusBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_status_bar_shows_summary_and_detail() {
        let line = render_line(
            StatusBar::new()
                .summary(" 3 guides | 1 selected")
                .detail("Mina: Selected"),
            60,
        );
        assert!(line.starts_with(" 3 guides | 1 selected"));
        assert!(line.trim_end().ends_with("Mina: Selected"));
    }

    #[test]
    fn test_toast_replaces_detail() {
        let line = render_line(
            StatusBar::new()
                .summary(" 3 guides")
                .detail("Mina: Pending")
                .toast(Some("Theme: light")),
            60,
        );
        assert!(line.contains("Theme: light"));
        assert!(!line.contains("Mina: Pending"));
    }
}
