use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::offline::{AssetManifest, AssetRequest, CacheStorage, OfflineWorker, ReqwestFetcher};
use crate::steam::{self, SteamReading};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Offline,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_OFFLINE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Offline),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 증기 엔탈피 계산 메뉴를 처리한다.
///
/// 입력이 숫자가 아니면 차단형 오류 메시지만 출력하고 계산 없이 돌아간다.
pub fn handle_calculate(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    let temp_input = read_line(tr.t(keys::CALC_PROMPT_TEMPERATURE))?;
    let pressure_input = read_line(tr.t(keys::CALC_PROMPT_PRESSURE))?;

    let table = steam::SaturationTable::standard();
    let reading = match steam::evaluate_inputs(&temp_input, &pressure_input, &table) {
        Ok(reading) => reading,
        Err(_) => {
            println!("{}", tr.t(keys::CALC_INVALID_NUMBER));
            return Ok(());
        }
    };
    print_reading(tr, &reading);
    Ok(())
}

fn print_reading(tr: &Translator, reading: &SteamReading) {
    println!(
        "{}: {:.1} PSIA",
        tr.t(keys::CALC_RESULT_PRESSURE),
        reading.pressure_psia
    );
    println!(
        "{}: {:.1} °F",
        tr.t(keys::CALC_RESULT_SAT_TEMP),
        reading.saturation_temp_f
    );
    println!(
        "{}: {}",
        tr.t(keys::CALC_RESULT_CONDITION),
        reading.condition().label()
    );
    println!(
        "{}: {:.1} °F",
        tr.t(keys::CALC_RESULT_SUPERHEAT),
        reading.superheat_f
    );
    println!(
        "{}: {:.1} BTU/lb",
        tr.t(keys::CALC_RESULT_ENTHALPY),
        reading.enthalpy_btu_per_lb
    );
    if reading.is_subcooled() {
        println!("{}", tr.t(keys::CALC_SUBCOOLED_ADVISORY));
    }
}

/// 오프라인 캐시 관리 메뉴를 처리한다.
pub fn handle_offline(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OFFLINE_HEADING));
    println!("{}", tr.t(keys::OFFLINE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let report = build_worker(cfg)?.on_install()?;
            println!(
                "{} {}",
                tr.t(keys::OFFLINE_INSTALL_DONE),
                report.cached_assets
            );
        }
        "2" => {
            let report = build_worker(cfg)?.on_activate()?;
            println!(
                "{} {}",
                tr.t(keys::OFFLINE_ACTIVATE_DONE),
                report.purged_stores.len()
            );
        }
        "3" => {
            let path = read_line(tr.t(keys::OFFLINE_PROMPT_PATH))?;
            let worker = build_worker(cfg)?;
            let request = AssetRequest::get(worker.manifest().url_for(path.trim()));
            let response = worker.on_fetch(&request)?;
            println!(
                "{} {} / {}",
                tr.t(keys::OFFLINE_FETCH_RESULT),
                response.status,
                response.body.len()
            );
        }
        "0" => {}
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 선택된 캐시 작업에서만 호출된다. HTTP 클라이언트 생성이 실패할 수 있다.
fn build_worker(cfg: &Config) -> Result<OfflineWorker<ReqwestFetcher>, AppError> {
    let storage = CacheStorage::new(cfg.offline.cache_root.clone());
    let fetcher = ReqwestFetcher::new().map_err(crate::offline::WorkerError::Fetch)?;
    Ok(OfflineWorker::new(
        storage,
        fetcher,
        AssetManifest::from_config(&cfg.offline),
    ))
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}: {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "ko".to_string(),
        "2" => "en".to_string(),
        "3" => "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
