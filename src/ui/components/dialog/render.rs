use super::form::{ActionChoice, FormField, JudgeForm};
use super::judge::JudgeDialog;
use crate::ui::{I18n, Language, MessageKey, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;
/// 채팅 ID 삭제 표시
const REMOVE_MARKER: &str = "✕";

pub struct Dialog<'a> {
    dialog: &'a JudgeDialog,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    input_bg: Color,
    error_color: Color,
    success_color: Color,
    muted_color: Color,
    language: Language,
}

impl<'a> Dialog<'a> {
    pub fn new(dialog: &'a JudgeDialog) -> Self {
        Self {
            dialog,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            input_bg: Color::Rgb(30, 30, 30),
            error_color: Color::Rgb(244, 71, 71),
            success_color: Color::Rgb(78, 201, 176),
            muted_color: Color::Rgb(128, 128, 128),
            language: Language::English,
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.dialog_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.border_active.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.button_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.cursor_bg.to_color();
        self.button_selected_fg = theme.cursor_fg.to_color();
        self.input_bg = theme.input_bg.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.success.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    /// 내용 행 수 (버튼 행 포함)
    fn content_rows(form: &JudgeForm) -> u16 {
        // 안내문, 빈 줄, 판정 버튼, 빈 줄
        let mut rows = 4u16;
        if form.chat_ids_visible() {
            let chat_ids = form.chat_ids();
            // 헤더 + 필드들 + 추가 버튼 + 메모 + 빈 줄
            rows += 1 + chat_ids.len() as u16 + u16::from(chat_ids.can_add()) + 2;
        }
        // 비밀번호 레이블/필드, 빈 줄, 에러, 힌트, 버튼
        rows + 6
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let width = ((sw as f32 * 0.6) as u16).clamp(44, 72);
        let height = Self::content_rows(self.dialog.form()) + DIALOG_V_PADDING + 2;

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(2));

        let x = screen.x + (sw.saturating_sub(width)) / 2;
        let y = screen.y + (sh.saturating_sub(height)) / 2;

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// 버튼 렌더링 헬퍼
    fn render_button(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        is_selected: bool,
    ) -> u16 {
        let (bg, fg) = if is_selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };
        self.render_padded(buf, x, y, label, Style::default().fg(fg).bg(bg))
    }

    /// 판정 버튼: 고른 쪽은 성공/에러 색, 포커스는 굵게+밑줄
    fn render_choice(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        chosen_bg: Option<Color>,
        focused: bool,
    ) -> u16 {
        let mut style = match chosen_bg {
            Some(bg) => Style::default().fg(Color::Black).bg(bg),
            None => Style::default().fg(self.button_fg).bg(self.button_bg),
        };
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        self.render_padded(buf, x, y, label, style)
    }

    fn render_padded(&self, buf: &mut Buffer, x: u16, y: u16, label: &str, style: Style) -> u16 {
        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;

        buf.set_string(x, y, &padded_label, style);

        // Wide character(한글, 이모지) continuation cell의 배경색 보정
        if let Some(bg) = style.bg {
            for i in 0..width {
                if let Some(cell) = buf.cell_mut((x + i, y)) {
                    cell.set_bg(bg);
                }
            }
        }

        width
    }

    /// 텍스트 필드 렌더링 헬퍼 (cursor_pos는 바이트 인덱스)
    #[allow(clippy::too_many_arguments)]
    fn render_text_field(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        width: u16,
        value: &str,
        placeholder: &str,
        cursor_pos: Option<usize>,
    ) {
        for fx in x..x + width {
            if let Some(cell) = buf.cell_mut((fx, y)) {
                cell.set_bg(self.input_bg);
            }
        }

        if value.is_empty() && cursor_pos.is_none() {
            let placeholder_style = Style::default().fg(self.muted_color).bg(self.input_bg);
            buf.set_stringn(
                x + 1,
                y,
                placeholder,
                width.saturating_sub(2) as usize,
                placeholder_style,
            );
            return;
        }

        let visible_width = width.saturating_sub(2) as usize;
        // 커서 위치까지의 표시 폭 (바이트 인덱스가 문자 경계가 아니면 끝으로)
        let cursor = cursor_pos.map(|cpos| {
            let head = value.get(..cpos).unwrap_or(value);
            (head.len(), head.width())
        });
        let (start, skipped) = match cursor {
            Some((_, cursor_col)) => scroll_window(value, cursor_col, visible_width),
            None => (0, 0),
        };

        let value_style = Style::default().fg(self.fg_color).bg(self.input_bg);
        buf.set_stringn(x + 1, y, &value[start..], visible_width, value_style);

        if let Some((cpos, cursor_col)) = cursor {
            let cursor_x = x + 1 + cursor_col.saturating_sub(skipped) as u16;
            if cursor_x < x + width.saturating_sub(1) {
                if let Some(cell) = buf.cell_mut((cursor_x, y)) {
                    if cpos < value.len() {
                        cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
                    } else {
                        cell.set_char('▏');
                        cell.set_style(Style::default().fg(self.fg_color).bg(self.input_bg));
                    }
                }
            }
        }
    }

    fn label_style(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.fg_color);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn render_form(&self, buf: &mut Buffer, area: Rect) {
        let i18n = self.i18n();
        let form = self.dialog.form();
        let focus = form.focus();

        let block = Block::default()
            .title(i18n.tr(TextKey::DialogTitleAdminAccess))
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + 1 + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING + 2),
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        // 버튼은 항상 마지막 행, 나머지는 위에서부터 들어가는 만큼만
        let button_y = inner.bottom() - 1;
        let fits = |y: u16| y < button_y;

        let mut y = inner.y;

        // "Mark <guide> as:"
        let prompt_style = Style::default().fg(self.fg_color);
        let name_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let mut x = inner.x;
        for (text, style) in [
            (i18n.tr(TextKey::DialogMark), prompt_style),
            (self.dialog.guide_name(), name_style),
            (i18n.tr(TextKey::DialogMarkAs), prompt_style),
        ] {
            let remaining = inner.right().saturating_sub(x) as usize;
            let (next_x, _) = buf.set_stringn(x, y, text, remaining, style);
            x = next_x;
        }
        y += 2;

        if fits(y) {
            let choice = form.action();
            let pass_width = self.render_choice(
                buf,
                inner.x,
                y,
                i18n.tr(TextKey::DialogActionPass),
                (choice == ActionChoice::Pass).then_some(self.success_color),
                focus == FormField::PassButton,
            );
            self.render_choice(
                buf,
                inner.x + pass_width + 2,
                y,
                i18n.tr(TextKey::DialogActionFail),
                (choice == ActionChoice::Fail).then_some(self.error_color),
                focus == FormField::FailButton,
            );
        }
        y += 2;

        if form.chat_ids_visible() {
            let chat_ids = form.chat_ids();
            let header_focused = matches!(focus, FormField::ChatId(_) | FormField::AddChatId);
            if fits(y) {
                buf.set_string(
                    inner.x,
                    y,
                    i18n.tr(TextKey::DialogChatIdsHeader),
                    self.label_style(header_focused),
                );
            }
            y += 1;

            let can_remove = chat_ids.can_remove();
            let field_width = if can_remove {
                inner.width.saturating_sub(3)
            } else {
                inner.width
            };
            for (index, value) in chat_ids.entries().iter().enumerate() {
                if fits(y) {
                    let focused = focus == FormField::ChatId(index);
                    let placeholder = i18n.fmt(
                        MessageKey::ChatIdPlaceholder,
                        &[("index", (index + 1).to_string())],
                    );
                    self.render_text_field(
                        buf,
                        inner.x,
                        y,
                        field_width,
                        value,
                        &placeholder,
                        focused.then_some(form.cursor_pos()),
                    );
                    if can_remove {
                        let marker_style = if focused {
                            Style::default()
                                .fg(self.error_color)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(self.muted_color)
                        };
                        buf.set_string(inner.x + field_width + 1, y, REMOVE_MARKER, marker_style);
                    }
                }
                y += 1;
            }

            if chat_ids.can_add() {
                if fits(y) {
                    self.render_button(
                        buf,
                        inner.x,
                        y,
                        i18n.tr(TextKey::DialogAddChatId),
                        focus == FormField::AddChatId,
                    );
                }
                y += 1;
            }

            if fits(y) {
                buf.set_stringn(
                    inner.x,
                    y,
                    i18n.tr(TextKey::DialogChatIdsNote),
                    inner.width as usize,
                    Style::default().fg(self.muted_color),
                );
            }
            y += 2;
        }

        let password_focused = focus == FormField::Password;
        if fits(y) {
            buf.set_string(
                inner.x,
                y,
                i18n.tr(TextKey::DialogAdminPassword),
                self.label_style(password_focused),
            );
        }
        y += 1;
        if fits(y) {
            let masked_password = "*".repeat(form.password().chars().count());
            // 마스킹 문자는 1바이트이므로 커서를 글자 수 기준으로 환산
            let masked_cursor = password_focused.then(|| {
                form.password()
                    .get(..form.cursor_pos())
                    .map(|head| head.chars().count())
                    .unwrap_or(masked_password.len())
            });
            self.render_text_field(
                buf,
                inner.x,
                y,
                inner.width,
                &masked_password,
                i18n.tr(TextKey::DialogPasswordPlaceholder),
                masked_cursor,
            );
        }
        y += 2;

        if let Some(error) = form.error() {
            if fits(y) {
                buf.set_stringn(
                    inner.x,
                    y,
                    i18n.validation_message(error),
                    inner.width as usize,
                    Style::default()
                        .fg(self.error_color)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
        y += 1;

        if fits(y) {
            let hint = i18n.tr(TextKey::DialogHintJudge);
            let hint_x = inner.x + (inner.width.saturating_sub(hint.width() as u16)) / 2;
            buf.set_stringn(
                hint_x,
                y,
                hint,
                inner.width as usize,
                Style::default().fg(self.muted_color),
            );
        }

        // Cancel / Confirm (오른쪽 정렬)
        let cancel_label = i18n.tr(TextKey::Cancel);
        let confirm_label = i18n.tr(TextKey::Confirm);
        let buttons_width = (cancel_label.width() + confirm_label.width() + 6) as u16;
        let buttons_x = inner.x + inner.width.saturating_sub(buttons_width);
        let cancel_width = self.render_button(
            buf,
            buttons_x,
            button_y,
            cancel_label,
            focus == FormField::CancelButton,
        );
        self.render_button(
            buf,
            buttons_x + cancel_width + 2,
            button_y,
            confirm_label,
            focus == FormField::ConfirmButton,
        );
    }
}

/// 커서가 보이도록 앞쪽을 건너뛸 위치: (시작 바이트, 건너뛴 표시 폭)
///
/// 커서 칸까지 포함해 `visible_width` 안에 들어오게 문자 단위로 자릅니다.
fn scroll_window(value: &str, cursor_col: usize, visible_width: usize) -> (usize, usize) {
    let overflow = (cursor_col + 1).saturating_sub(visible_width);
    let mut skipped = 0;
    for (i, ch) in value.char_indices() {
        if skipped >= overflow {
            return (i, skipped);
        }
        skipped += ch.width().unwrap_or(0);
    }
    (value.len(), skipped)
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 닫혀 있으면 아무것도 그리지 않음
        if !self.dialog.is_open() {
            return;
        }

        let dialog_area = self.calculate_area(area);
        if dialog_area.width < 10 || dialog_area.height < 5 {
            return;
        }

        // 배경 클리어
        Clear.render(dialog_area, buf);
        self.render_form(buf, dialog_area);
    }
}
