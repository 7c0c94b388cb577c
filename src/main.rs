use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use steam_enthalpy_calculator::offline::{
    AssetManifest, CacheStorage, OfflineWorker, ReqwestFetcher,
};
use steam_enthalpy_calculator::{app, config, i18n};

/// CLI 옵션.
#[derive(Debug, Parser)]
#[command(name = "steam_enthalpy_calculator_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 시작 시 오프라인 워커 등록을 생략한다
    #[arg(long)]
    no_worker: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);

    // 시작 시 워커 등록. 실패는 로그만 남기고 계산기 UI는 계속 진행한다.
    if cfg.offline.enabled && !cli.no_worker {
        register_offline_worker(&cfg);
    }

    app::run(&mut cfg, &tr)?;
    Ok(())
}

fn register_offline_worker(cfg: &config::Config) {
    let storage = CacheStorage::new(cfg.offline.cache_root.clone());
    let fetcher = match ReqwestFetcher::new() {
        Ok(f) => f,
        Err(err) => {
            warn!(error = %err, "워커 등록 생략");
            return;
        }
    };
    let worker = OfflineWorker::new(storage, fetcher, AssetManifest::from_config(&cfg.offline));
    if let Err(err) = worker.register() {
        warn!(error = %err, "워커 등록 실패");
    }
}
