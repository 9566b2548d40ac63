// Guide list component - 가이드 목록 컴포넌트
//
// 가이드 이름과 판정 배지, 커서 행, 스크롤바 렌더링

use crate::models::Guide;
use crate::ui::components::dialog::JudgeAction;
use crate::ui::{I18n, Language, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 가이드 목록 컴포넌트
pub struct GuideList<'a> {
    guides: &'a [Guide],
    /// 커서 위치
    cursor: usize,
    border_color: Color,
    bg_color: Color,
    fg_color: Color,
    cursor_fg_color: Color,
    cursor_bg_color: Color,
    pass_color: Color,
    fail_color: Color,
    muted_color: Color,
    language: Language,
}

impl<'a> Default for GuideList<'a> {
    fn default() -> Self {
        Self {
            guides: &[],
            cursor: 0,
            border_color: Color::Rgb(0, 120, 212),
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            cursor_fg_color: Color::Rgb(255, 255, 255),
            cursor_bg_color: Color::Rgb(0, 120, 212),
            pass_color: Color::Rgb(78, 201, 176),
            fail_color: Color::Rgb(244, 71, 71),
            muted_color: Color::Rgb(128, 128, 128),
            language: Language::English,
        }
    }
}

impl<'a> GuideList<'a> {
    pub fn new(guides: &'a [Guide]) -> Self {
        Self {
            guides,
            ..Default::default()
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.border_active.to_color();
        self.bg_color = theme.list_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.cursor_fg_color = theme.cursor_fg.to_color();
        self.cursor_bg_color = theme.cursor_bg.to_color();
        self.pass_color = theme.success.to_color();
        self.fail_color = theme.error.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self
    }

    /// 커서가 보이도록 하는 스크롤 오프셋
    fn scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            return 0;
        }
        self.cursor.saturating_sub(visible_rows - 1)
    }

    fn badge(&self, guide: &Guide) -> (String, Color) {
        let label = I18n::new(self.language).verdict_label(guide.action());
        let color = match guide.action() {
            Some(JudgeAction::Pass) => self.pass_color,
            Some(JudgeAction::Fail) => self.fail_color,
            None => self.muted_color,
        };
        (format!("[{}]", label), color)
    }

    fn render_row(&self, guide: &Guide, is_cursor: bool, row: Rect, buf: &mut Buffer) {
        let (badge, badge_color) = self.badge(guide);
        let base = if is_cursor {
            Style::default()
                .fg(self.cursor_fg_color)
                .bg(self.cursor_bg_color)
        } else {
            Style::default().fg(self.fg_color)
        };
        let badge_style = if is_cursor {
            base.add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(badge_color)
        };

        let marker = if is_cursor { ">" } else { " " };
        let width = row.width as usize;
        // 마커 + 공백 + 이름 + 공백 + 배지 + 공백
        let name_width = width.saturating_sub(badge.width() + 4);
        let name = truncate_name(&guide.name, name_width);
        let padding = name_width.saturating_sub(name.width());

        let line = Line::from(vec![
            Span::styled(format!("{} ", marker), base),
            Span::styled(name, base),
            Span::styled(" ".repeat(padding + 1), base),
            Span::styled(badge, badge_style),
            Span::styled(" ", base),
        ]);
        buf.set_line(row.x, row.y, &line, row.width);
    }
}

/// 이름을 최대 너비로 잘라냄 (끝에서 "..." 생략)
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    let ellipsis = "...";
    if max_width <= ellipsis.len() {
        return ".".repeat(max_width);
    }

    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in name.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if current_width + ch_width + ellipsis.len() > max_width {
            break;
        }
        truncated.push(ch);
        current_width += ch_width;
    }
    truncated.push_str(ellipsis);
    truncated
}

impl Widget for GuideList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let i18n = I18n::new(self.language);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .title(Span::styled(
                format!(" {} ({}) ", i18n.tr(TextKey::ListTitle), self.guides.len()),
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        if self.guides.is_empty() {
            let empty = Line::from(Span::styled(
                i18n.tr(TextKey::ListEmpty),
                Style::default().fg(self.muted_color),
            ));
            buf.set_line(inner.x, inner.y, &empty, inner.width);
            return;
        }

        let visible_rows = inner.height as usize;
        let has_scrollbar = self.guides.len() > visible_rows;
        let rows_width = if has_scrollbar {
            inner.width - 1
        } else {
            inner.width
        };

        let start = self.scroll_offset(visible_rows);
        let end = (start + visible_rows).min(self.guides.len());
        for (offset, guide) in self.guides[start..end].iter().enumerate() {
            let row = Rect {
                x: inner.x,
                y: inner.y + offset as u16,
                width: rows_width,
                height: 1,
            };
            self.render_row(guide, start + offset == self.cursor, row, buf);
        }

        // 스크롤바 렌더링
        if has_scrollbar {
            let total = self.guides.len();
            let track_height = visible_rows;
            let thumb_height = (track_height * track_height / total).max(1);
            let max_scroll = total.saturating_sub(visible_rows);
            let thumb_pos = if max_scroll == 0 {
                0
            } else {
                start * track_height.saturating_sub(thumb_height) / max_scroll
            };

            let scrollbar_x = inner.x + inner.width - 1;
            let track_style = Style::default().fg(self.muted_color);
            let thumb_style = Style::default().fg(self.fg_color);
            for i in 0..track_height {
                let (symbol, style) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                    ("┃", thumb_style)
                } else {
                    ("│", track_style)
                };
                buf.set_string(scrollbar_x, inner.y + i as u16, symbol, style);
            }
        }
    }
}
