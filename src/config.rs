use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 오프라인 캐시 워커 설정. 배포마다 자산 목록을 바꿀 수 있도록 설정으로 분리한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineConfig {
    /// 시작 시 워커 등록(install+activate) 수행 여부
    pub enabled: bool,
    /// 캐시 스토어 버전 식별자. 배포 갱신 시 통째로 교체된다.
    pub cache_version: String,
    /// 캐시 스토어가 저장될 루트 디렉터리
    pub cache_root: String,
    /// 자산 경로 앞에 붙는 기준 URL
    pub base_url: String,
    /// 설치 시 선(先)캐시할 고정 자산 목록
    pub asset_paths: Vec<String>,
    /// 네트워크 실패 시 폴백으로 돌려줄 시작 페이지 경로
    pub start_page: String,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cache_version: "steamcalc-v1".to_string(),
            cache_root: "offline_cache".to_string(),
            base_url: "http://localhost:8080".to_string(),
            asset_paths: vec![
                "/index.html".to_string(),
                "/styles.css".to_string(),
                "/script.js".to_string(),
                "/manifest.json".to_string(),
                "/icons/icon-192.png".to_string(),
                "/icons/icon-512.png".to_string(),
            ],
            start_page: "/index.html".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드(auto/ko/en)
    pub language: String,
    pub offline: OfflineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            offline: OfflineConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
