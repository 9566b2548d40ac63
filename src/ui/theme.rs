use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 색상 테마
///
/// 기본 테마 세 가지(dark/light/high_contrast)를 제공하고,
/// 설정 디렉토리의 TOML 파일로 커스텀 테마를 추가할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_muted: ColorDef,

    // 가이드 목록
    pub border_active: ColorDef,
    pub border_inactive: ColorDef,
    pub list_bg: ColorDef,
    pub cursor_fg: ColorDef,
    pub cursor_bg: ColorDef,

    // 다이얼로그
    pub dialog_bg: ColorDef,
    pub input_bg: ColorDef,
    pub button_bg: ColorDef,

    // 상단/하단 바
    pub header_bg: ColorDef,
    pub header_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조 (success = 선정, error = 미선정)
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }

    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightblue" => Color::LightBlue,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),
            fg_muted: "#808080".into(),

            border_active: "#0078d4".into(),
            border_inactive: "#3c3c3c".into(),
            list_bg: "#1e1e1e".into(),
            cursor_fg: "#ffffff".into(),
            cursor_bg: "#0078d4".into(),

            dialog_bg: "#2d2d30".into(),
            input_bg: "#1e1e1e".into(),
            button_bg: "#3c3c3c".into(),

            header_bg: "#2d2d30".into(),
            header_fg: "#ffffff".into(),
            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),
            fg_muted: "#6e6e6e".into(),

            border_active: "#0078d4".into(),
            border_inactive: "#cccccc".into(),
            list_bg: "#ffffff".into(),
            cursor_fg: "#000000".into(),
            cursor_bg: "#add6ff".into(),

            dialog_bg: "#f3f3f3".into(),
            input_bg: "#ffffff".into(),
            button_bg: "#dddddd".into(),

            header_bg: "#0078d4".into(),
            header_fg: "#ffffff".into(),
            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),
            fg_muted: "#c0c0c0".into(),

            border_active: "#00ff00".into(),
            border_inactive: "#808080".into(),
            list_bg: "#000000".into(),
            cursor_fg: "#000000".into(),
            cursor_bg: "#00ff00".into(),

            dialog_bg: "#000000".into(),
            input_bg: "#202020".into(),
            button_bg: "#404040".into(),

            header_bg: "#000000".into(),
            header_fg: "#00ff00".into(),
            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),
            command_bar_bg: "#000000".into(),
            command_bar_fg: "#ffffff".into(),

            accent: "#00ff00".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

/// 테마 관리자
///
/// 이름으로 테마를 찾고 런타임에 순환 전환합니다.
pub struct ThemeManager {
    themes: Vec<(String, Theme)>,
    current: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
            current: 0,
        }
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.current].1
    }

    pub fn current_name(&self) -> &str {
        &self.themes[self.current].0
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        match self.themes.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(format!("theme not found: {}", name)),
        }
    }

    /// 다음 테마로 순환하고 새 이름 반환
    pub fn cycle_theme(&mut self) -> &str {
        self.current = (self.current + 1) % self.themes.len();
        self.current_name()
    }

    pub fn available_themes(&self) -> Vec<String> {
        self.themes.iter().map(|(name, _)| name.clone()).collect()
    }

    /// 커스텀 테마 추가 (같은 이름이면 교체)
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        match self.themes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = theme,
            None => self.themes.push((name, theme)),
        }
    }

    /// 디렉토리의 *.toml 테마 로드, 읽은 개수 반환
    ///
    /// 파싱에 실패한 파일은 경고만 남기고 건너뜁니다.
    pub fn load_themes_from_dir(&mut self, dir: &Path) -> Result<usize, anyhow::Error> {
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    tracing::debug!(theme = %name, "loaded custom theme");
                    self.add_theme(name, theme);
                    loaded += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping theme file");
                }
            }
        }
        Ok(loaded)
    }

    /// `<config_dir>/guidejudge/themes` 경로
    pub fn config_themes_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("guidejudge").join("themes"))
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
