//! 설정 파일 (TOML)
//!
//! 조회 순서: `--config` > `GUIDEJUDGE_CONFIG` > `<config_dir>/guidejudge/config.toml`.
//! 명시한 경로를 읽지 못하면 에러, 기본 경로에 파일이 없으면 기본값을 씁니다.

use crate::utils::error::{GuideJudgeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로 환경 변수
pub const CONFIG_ENV: &str = "GUIDEJUDGE_CONFIG";

/// 설정 파일 내용 (모든 항목 선택)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub guides: Vec<String>,
    pub log_file: Option<PathBuf>,
}

/// 설정 파일 위치와 필수 여부
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` 또는 환경 변수로 지정 (없으면 에러)
    Explicit(PathBuf),
    /// 기본 위치 (없으면 기본값)
    Default(PathBuf),
    /// 설정 디렉토리를 알 수 없음
    None,
}

/// 커맨드라인에서 넘어온 덮어쓰기 값
///
/// `--log-file`은 여기 없이 `logging::resolve_log_path`에 직접 넘깁니다.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub guides: Vec<String>,
}

impl ConfigSource {
    /// 조회 순서에 따라 설정 파일 위치 결정
    pub fn resolve(
        cli_path: Option<&Path>,
        env_path: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = cli_path {
            return ConfigSource::Explicit(path.to_path_buf());
        }
        if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
            return ConfigSource::Explicit(PathBuf::from(path.trim()));
        }
        match config_dir {
            Some(dir) => ConfigSource::Default(dir.join("guidejudge").join("config.toml")),
            None => ConfigSource::None,
        }
    }

    /// 실제 환경(환경 변수, dirs) 기준으로 결정
    pub fn from_env(cli_path: Option<&Path>) -> Self {
        Self::resolve(
            cli_path,
            std::env::var(CONFIG_ENV).ok(),
            dirs::config_dir(),
        )
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| GuideJudgeError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn load(source: &ConfigSource) -> Result<Self> {
        match source {
            ConfigSource::Explicit(path) => Self::from_file(path),
            ConfigSource::Default(path) if path.is_file() => Self::from_file(path),
            ConfigSource::Default(_) | ConfigSource::None => Ok(Self::default()),
        }
    }

    /// 커맨드라인 값 적용: 단일 값은 덮어쓰고, 가이드는 뒤에 이어 붙임
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.theme.is_some() {
            self.theme = overrides.theme;
        }
        if overrides.language.is_some() {
            self.language = overrides.language;
        }
        self.guides.extend(overrides.guides);
        self
    }
}
