use tracing::{debug, info, warn};

use super::http::{AssetRequest, AssetResponse, FetchError, HttpFetcher, Method};
use super::store::{CacheStorage, StoreError};
use crate::config::OfflineConfig;

/// 워커 수명주기에 들어가는 고정 자산 목록. 시작 시 한 번 로드되는 불변 설정이다.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    /// 현재 캐시 스토어 버전 식별자
    pub cache_version: String,
    /// 자산 경로 앞에 붙는 기준 URL
    pub base_url: String,
    /// 설치 시 선캐시할 자산 경로 목록
    pub asset_paths: Vec<String>,
    /// 네트워크 실패 시 폴백 시작 페이지 경로
    pub start_page: String,
}

impl AssetManifest {
    pub fn from_config(cfg: &OfflineConfig) -> Self {
        Self {
            cache_version: cfg.cache_version.clone(),
            base_url: cfg.base_url.clone(),
            asset_paths: cfg.asset_paths.clone(),
            start_page: cfg.start_page.clone(),
        }
    }

    /// 자산 경로를 절대 URL로 만든다.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// 워커 수명주기 단계 실패를 표현한다. 설치 실패는 복구하지 않고 그대로 전파한다.
#[derive(Debug)]
pub enum WorkerError {
    /// 캐시 스토어 입출력 실패
    Store(StoreError),
    /// 네트워크 전송 실패
    Fetch(FetchError),
    /// 설치 중 자산이 성공 상태로 내려오지 않음
    AssetUnavailable { path: String, status: u16 },
    /// 네트워크 실패 시 폴백할 시작 페이지가 캐시에 없음
    FallbackUnavailable,
}

impl std::fmt::Display for WorkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerError::Store(e) => write!(f, "캐시 스토어 오류: {e}"),
            WorkerError::Fetch(e) => write!(f, "네트워크 오류: {e}"),
            WorkerError::AssetUnavailable { path, status } => {
                write!(f, "자산 선캐시 실패: {path} (상태 {status})")
            }
            WorkerError::FallbackUnavailable => {
                write!(f, "폴백 시작 페이지가 캐시에 없습니다.")
            }
        }
    }
}

impl std::error::Error for WorkerError {}

impl From<StoreError> for WorkerError {
    fn from(value: StoreError) -> Self {
        WorkerError::Store(value)
    }
}

impl From<FetchError> for WorkerError {
    fn from(value: FetchError) -> Self {
        WorkerError::Fetch(value)
    }
}

/// 설치 단계 결과.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// 선캐시된 자산 수
    pub cached_assets: usize,
}

/// 활성화 단계 결과.
#[derive(Debug, Clone)]
pub struct ActivateReport {
    /// 삭제된 구버전 스토어 이름들
    pub purged_stores: Vec<String>,
}

/// 오프라인 가용성 워커. install/activate/fetch 핸들러는 각각 완료까지 실행된다.
pub struct OfflineWorker<F: HttpFetcher> {
    storage: CacheStorage,
    fetcher: F,
    manifest: AssetManifest,
}

impl<F: HttpFetcher> OfflineWorker<F> {
    pub fn new(storage: CacheStorage, fetcher: F, manifest: AssetManifest) -> Self {
        Self {
            storage,
            fetcher,
            manifest,
        }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// 설치: 현재 버전 스토어를 열고 고정 자산 목록을 전부 선캐시한다.
    ///
    /// 하나라도 실패하면 단계 전체가 실패로 전파되고, 이전 버전 스토어는
    /// 건드리지 않으므로 계속 서비스된다.
    pub fn on_install(&self) -> Result<InstallReport, WorkerError> {
        let store = self.storage.open(&self.manifest.cache_version)?;
        for path in &self.manifest.asset_paths {
            let request = AssetRequest::get(self.manifest.url_for(path));
            let response = self.fetcher.fetch(&request)?;
            if !response.is_success() {
                return Err(WorkerError::AssetUnavailable {
                    path: path.clone(),
                    status: response.status,
                });
            }
            store.put(&request, &response)?;
            debug!(path = %path, "자산 선캐시");
        }
        let cached_assets = self.manifest.asset_paths.len();
        // 대기 중인 구버전 워커를 기다리지 않고 즉시 교체 준비 완료를 알린다.
        info!(
            version = %self.manifest.cache_version,
            assets = cached_assets,
            "설치 완료, 즉시 전환 준비"
        );
        Ok(InstallReport { cached_assets })
    }

    /// 활성화: 현재 버전과 이름이 다른 스토어를 모두 삭제한다.
    pub fn on_activate(&self) -> Result<ActivateReport, WorkerError> {
        let mut purged_stores = Vec::new();
        for name in self.storage.store_names()? {
            if name != self.manifest.cache_version {
                if self.storage.delete(&name)? {
                    info!(store = %name, "구버전 스토어 삭제");
                    purged_stores.push(name);
                }
            }
        }
        // 다음 내비게이션을 기다리지 않고 열린 클라이언트를 즉시 인계받는다.
        info!(version = %self.manifest.cache_version, "활성화 완료, 클라이언트 인계");
        Ok(ActivateReport { purged_stores })
    }

    /// 요청 가로채기: 캐시 우선, 미스 시 네트워크, 성공한 GET은 저장,
    /// 네트워크 실패 시 요청과 무관하게 캐시된 시작 페이지를 돌려준다.
    pub fn on_fetch(&self, request: &AssetRequest) -> Result<AssetResponse, WorkerError> {
        let store = self.storage.open(&self.manifest.cache_version)?;
        if let Some(cached) = store.match_request(request)? {
            debug!(url = %request.url, "캐시 적중");
            return Ok(cached);
        }
        match self.fetcher.fetch(request) {
            Ok(response) => {
                if response.is_success() && request.method == Method::Get {
                    store.put(request, &response)?;
                    debug!(url = %request.url, "네트워크 응답 캐시 저장");
                }
                Ok(response)
            }
            Err(err) => {
                warn!(url = %request.url, error = %err, "네트워크 실패, 시작 페이지 폴백");
                let fallback = AssetRequest::get(self.manifest.url_for(&self.manifest.start_page));
                store
                    .match_request(&fallback)?
                    .ok_or(WorkerError::FallbackUnavailable)
            }
        }
    }

    /// 등록: 설치와 활성화를 차례로 수행한다. 시작 시 호출된다.
    pub fn register(&self) -> Result<(InstallReport, ActivateReport), WorkerError> {
        let install = self.on_install()?;
        let activate = self.on_activate()?;
        Ok((install, activate))
    }
}
