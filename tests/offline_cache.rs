//! 오프라인 캐시 워커 수명주기 테스트. 네트워크는 스텁으로 대체한다.
use std::collections::HashMap;
use std::sync::Mutex;

use tempfile::TempDir;

use steam_enthalpy_calculator::offline::{
    AssetManifest, AssetRequest, AssetResponse, CacheStorage, FetchError, HttpFetcher, Method,
    OfflineWorker, WorkerError,
};

const BASE_URL: &str = "http://stub.local";

/// URL별 응답을 미리 정해두는 스텁. 등록되지 않은 URL은 전송 실패로 처리한다.
struct StubFetcher {
    routes: Mutex<HashMap<String, AssetResponse>>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn route(self, path: &str, status: u16, body: &[u8]) -> Self {
        self.routes.lock().unwrap().insert(
            format!("{BASE_URL}{path}"),
            AssetResponse {
                status,
                body: body.to_vec(),
            },
        );
        self
    }

    fn with_all_assets(self) -> Self {
        self.route("/index.html", 200, b"<html>start</html>")
            .route("/styles.css", 200, b"body{}")
            .route("/script.js", 200, b"// app")
            .route("/manifest.json", 200, b"{}")
            .route("/icons/icon-192.png", 200, b"png192")
            .route("/icons/icon-512.png", 200, b"png512")
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl HttpFetcher for StubFetcher {
    fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, FetchError> {
        self.calls.lock().unwrap().push(request.url.clone());
        self.routes
            .lock()
            .unwrap()
            .get(&request.url)
            .cloned()
            .ok_or_else(|| FetchError::Transport("stub: connection refused".to_string()))
    }
}

fn manifest(version: &str) -> AssetManifest {
    AssetManifest {
        cache_version: version.to_string(),
        base_url: BASE_URL.to_string(),
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

fn worker_in(dir: &TempDir, fetcher: StubFetcher, version: &str) -> OfflineWorker<StubFetcher> {
    OfflineWorker::new(
        CacheStorage::new(dir.path().to_path_buf()),
        fetcher,
        manifest(version),
    )
}

#[test]
fn install_precaches_all_listed_assets() {
    let dir = TempDir::new().expect("tempdir");
    let worker = worker_in(&dir, StubFetcher::new().with_all_assets(), "steamcalc-v1");

    let report = worker.on_install().expect("install");
    assert_eq!(report.cached_assets, 6);

    let storage = CacheStorage::new(dir.path().to_path_buf());
    let store = storage.open("steamcalc-v1").expect("open");
    assert_eq!(store.entry_count().expect("count"), 6);
}

#[test]
fn install_fails_when_any_asset_is_unavailable() {
    let dir = TempDir::new().expect("tempdir");
    // 아이콘 하나가 404 → 설치 단계 전체 실패
    let fetcher = StubFetcher::new()
        .with_all_assets()
        .route("/icons/icon-512.png", 404, b"not found");
    let worker = worker_in(&dir, fetcher, "steamcalc-v2");

    let err = worker.on_install().expect_err("install must fail");
    assert!(matches!(
        err,
        WorkerError::AssetUnavailable { ref path, status: 404 } if path == "/icons/icon-512.png"
    ));
}

#[test]
fn install_failure_leaves_previous_store_serving() {
    let dir = TempDir::new().expect("tempdir");
    let v1 = worker_in(&dir, StubFetcher::new().with_all_assets(), "steamcalc-v1");
    v1.on_install().expect("v1 install");

    // v2 설치는 전송 실패로 중단되지만 v1 스토어는 그대로 남아 서비스된다.
    let v2 = worker_in(&dir, StubFetcher::new(), "steamcalc-v2");
    assert!(v2.on_install().is_err());

    let storage = CacheStorage::new(dir.path().to_path_buf());
    assert!(storage
        .store_names()
        .expect("names")
        .contains(&"steamcalc-v1".to_string()));
    let cached = v1
        .on_fetch(&AssetRequest::get(format!("{BASE_URL}/index.html")))
        .expect("v1 still serves");
    assert_eq!(cached.body, b"<html>start</html>");
}

#[test]
fn activation_purges_every_store_except_current() {
    let dir = TempDir::new().expect("tempdir");
    worker_in(&dir, StubFetcher::new().with_all_assets(), "v1")
        .on_install()
        .expect("v1 install");
    let v2 = worker_in(&dir, StubFetcher::new().with_all_assets(), "v2-current");
    v2.on_install().expect("v2 install");

    let report = v2.on_activate().expect("activate");
    assert_eq!(report.purged_stores, vec!["v1".to_string()]);

    let storage = CacheStorage::new(dir.path().to_path_buf());
    assert_eq!(storage.store_names().expect("names"), vec!["v2-current"]);
}

#[test]
fn cached_asset_is_served_without_network_call() {
    let dir = TempDir::new().expect("tempdir");
    let worker = worker_in(&dir, StubFetcher::new().with_all_assets(), "steamcalc-v1");
    worker.on_install().expect("install");
    let installed_calls = worker.fetcher().call_count();

    let response = worker
        .on_fetch(&AssetRequest::get(format!("{BASE_URL}/styles.css")))
        .expect("fetch");
    assert_eq!(response.body, b"body{}");
    // 캐시 적중이므로 네트워크 호출 수가 늘지 않는다.
    assert_eq!(worker.fetcher().call_count(), installed_calls);
}

#[test]
fn uncached_get_is_fetched_then_served_from_cache() {
    let dir = TempDir::new().expect("tempdir");
    let fetcher = StubFetcher::new()
        .with_all_assets()
        .route("/extra.css", 200, b"extra{}");
    let worker = worker_in(&dir, fetcher, "steamcalc-v1");
    worker.on_install().expect("install");

    let request = AssetRequest::get(format!("{BASE_URL}/extra.css"));
    let first = worker.on_fetch(&request).expect("network fetch");
    assert_eq!(first.body, b"extra{}");
    let calls_after_first = worker.fetcher().call_count();

    let second = worker.on_fetch(&request).expect("cache hit");
    assert_eq!(second, first);
    assert_eq!(worker.fetcher().call_count(), calls_after_first);
}

#[test]
fn non_success_response_is_returned_but_not_cached() {
    let dir = TempDir::new().expect("tempdir");
    let fetcher = StubFetcher::new()
        .with_all_assets()
        .route("/missing.css", 404, b"not found");
    let worker = worker_in(&dir, fetcher, "steamcalc-v1");
    worker.on_install().expect("install");

    let request = AssetRequest::get(format!("{BASE_URL}/missing.css"));
    let first = worker.on_fetch(&request).expect("fetch");
    assert_eq!(first.status, 404);
    let calls_after_first = worker.fetcher().call_count();

    // 캐시되지 않았으므로 같은 요청이 다시 네트워크로 나간다.
    worker.on_fetch(&request).expect("fetch again");
    assert_eq!(worker.fetcher().call_count(), calls_after_first + 1);
}

#[test]
fn non_get_success_is_not_cached() {
    let dir = TempDir::new().expect("tempdir");
    let fetcher = StubFetcher::new()
        .with_all_assets()
        .route("/submit", 200, b"ok");
    let worker = worker_in(&dir, fetcher, "steamcalc-v1");
    worker.on_install().expect("install");

    let request = AssetRequest {
        method: Method::Post,
        url: format!("{BASE_URL}/submit"),
    };
    worker.on_fetch(&request).expect("post");
    let calls_after_first = worker.fetcher().call_count();
    worker.on_fetch(&request).expect("post again");
    assert_eq!(worker.fetcher().call_count(), calls_after_first + 1);
}

#[test]
fn network_failure_falls_back_to_cached_start_page() {
    let dir = TempDir::new().expect("tempdir");
    let worker = worker_in(&dir, StubFetcher::new().with_all_assets(), "steamcalc-v1");
    worker.on_install().expect("install");

    // 등록되지 않은 URL은 전송 실패 → 시작 페이지 본문으로 폴백
    let response = worker
        .on_fetch(&AssetRequest::get(format!("{BASE_URL}/not-routed.js")))
        .expect("fallback");
    assert_eq!(response.body, b"<html>start</html>");
}

#[test]
fn fallback_without_cached_start_page_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    // 설치를 건너뛰어 시작 페이지가 캐시에 없는 상태를 만든다.
    let worker = worker_in(&dir, StubFetcher::new(), "steamcalc-v1");
    let err = worker
        .on_fetch(&AssetRequest::get(format!("{BASE_URL}/anything")))
        .expect_err("no fallback available");
    assert!(matches!(err, WorkerError::FallbackUnavailable));
}

#[test]
fn register_runs_install_then_activate() {
    let dir = TempDir::new().expect("tempdir");
    worker_in(&dir, StubFetcher::new().with_all_assets(), "old")
        .on_install()
        .expect("old install");

    let worker = worker_in(&dir, StubFetcher::new().with_all_assets(), "new");
    let (install, activate) = worker.register().expect("register");
    assert_eq!(install.cached_assets, 6);
    assert_eq!(activate.purged_stores, vec!["old".to_string()]);
}
