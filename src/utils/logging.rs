//! 파일 로깅 초기화
//!
//! 전체 화면 UI를 깨뜨리지 않도록 표준 출력 대신 파일에만 기록합니다.
//! 필터는 `RUST_LOG`, 기본값은 `info`.

use crate::utils::error::{GuideJudgeError, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그 파일 경로 환경 변수
pub const LOG_ENV: &str = "GUIDEJUDGE_LOG";

/// 로그 파일 경로 결정: CLI > 설정 파일 > 환경 변수 > `<cache_dir>/guidejudge/guidejudge.log`
pub fn resolve_log_path(
    cli_path: Option<&Path>,
    config_path: Option<&Path>,
    env_path: Option<String>,
    cache_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    cli_path
        .or(config_path)
        .map(Path::to_path_buf)
        .or_else(|| {
            env_path
                .filter(|p| !p.trim().is_empty())
                .map(|p| PathBuf::from(p.trim()))
        })
        .or_else(|| cache_dir.map(|dir| dir.join("guidejudge").join("guidejudge.log")))
}

/// tracing subscriber 설치
///
/// 로그 파일을 열 수 없으면 로깅 없이 `Ok(None)`을 돌려줍니다.
/// 이미 전역 subscriber가 있으면 `Unknown` 에러.
pub fn init(path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = path else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return Ok(None);
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return Ok(None);
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| GuideJudgeError::Unknown(e.to_string()))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_log_path_order() {
        let cli = PathBuf::from("/tmp/cli.log");
        let config = PathBuf::from("/tmp/config.log");
        let cache = Some(PathBuf::from("/home/u/.cache"));

        assert_eq!(
            resolve_log_path(
                Some(&cli),
                Some(&config),
                Some("/tmp/env.log".to_string()),
                cache.clone()
            ),
            Some(cli)
        );
        assert_eq!(
            resolve_log_path(
                None,
                Some(&config),
                Some("/tmp/env.log".to_string()),
                cache.clone()
            ),
            Some(config)
        );
        assert_eq!(
            resolve_log_path(None, None, Some("/tmp/env.log".to_string()), cache.clone()),
            Some(PathBuf::from("/tmp/env.log"))
        );
        assert_eq!(
            resolve_log_path(None, None, Some(String::new()), cache),
            Some(PathBuf::from("/home/u/.cache/guidejudge/guidejudge.log"))
        );
        assert_eq!(resolve_log_path(None, None, None, None), None);
    }

    #[test]
    fn test_init_without_path_is_disabled() {
        assert!(matches!(init(None), Ok(None)));
    }

    #[test]
    fn test_unwritable_path_disables_logging() {
        let temp = tempfile::TempDir::new().unwrap();
        // 디렉토리 자체를 파일로 열 수는 없음
        assert!(matches!(init(Some(temp.path().to_path_buf())), Ok(None)));
    }
}
