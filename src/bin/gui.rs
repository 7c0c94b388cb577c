#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use std::{env, fs, path::Path};
use tracing_subscriber::EnvFilter;

use steam_enthalpy_calculator::i18n::{self, keys, Translator};
use steam_enthalpy_calculator::steam::{CalculatorSession, SteamCondition};
use steam_enthalpy_calculator::{config, offline};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let viewport = egui::ViewportBuilder::default().with_inner_size([420.0, 560.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app_cfg = config::load_or_default().unwrap_or_default();
    let lang = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );

    // 페이지 로드 시 워커 등록에 해당. 실패는 로그만 남긴다.
    if app_cfg.offline.enabled {
        let cfg = app_cfg.clone();
        std::thread::spawn(move || {
            let storage = offline::CacheStorage::new(cfg.offline.cache_root.clone());
            let fetcher = match offline::ReqwestFetcher::new() {
                Ok(f) => f,
                Err(err) => {
                    tracing::warn!(error = %err, "워커 등록 생략");
                    return;
                }
            };
            let worker = offline::OfflineWorker::new(
                storage,
                fetcher,
                offline::AssetManifest::from_config(&cfg.offline),
            );
            if let Err(err) = worker.register() {
                tracing::warn!(error = %err, "워커 등록 실패");
            }
        });
    }

    eframe::run_native(
        "Steam Enthalpy Calculator",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(Translator::new(&lang)))
        }),
    )
}

/// 한글 표시를 위해 시스템 폰트를 탐색해 등록한다. 실패해도 기본 폰트로 계속 간다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let candidates = [
        // Windows
        "C:/Windows/Fonts/malgun.ttf",
        "C:/Windows/Fonts/gulim.ttc",
        // Linux
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        // macOS
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for cand in candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; falling back to default fonts.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
        family.insert(0, name.to_owned());
    }
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
        family.push(name.to_owned());
    }
    ctx.set_fonts(fonts);
}

struct GuiApp {
    tr: Translator,
    session: CalculatorSession,
    error: Option<String>,
}

impl GuiApp {
    fn new(tr: Translator) -> Self {
        Self {
            tr,
            session: CalculatorSession::default(),
            error: None,
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Steam Enthalpy Calculator");
            ui.separator();

            ui.label(self.tr.t(keys::CALC_PROMPT_TEMPERATURE));
            ui.text_edit_singleline(&mut self.session.temperature_input);
            ui.label(self.tr.t(keys::CALC_PROMPT_PRESSURE));
            ui.text_edit_singleline(&mut self.session.pressure_input);

            ui.horizontal(|ui| {
                if ui.button("Calculate").clicked() && self.session.on_calculate().is_err() {
                    // 차단형 검증 실패 알림. 기존 결과는 갱신되지 않는다.
                    self.error = Some(self.tr.t(keys::CALC_INVALID_NUMBER).to_string());
                }
                if ui.button("Reset").clicked() {
                    self.session.on_reset();
                }
            });

            if let Some(reading) = self.session.reading().copied() {
                ui.separator();
                result_row(
                    ui,
                    self.tr.t(keys::CALC_RESULT_PRESSURE),
                    format!("{:.1} PSIA", reading.pressure_psia),
                );
                result_row(
                    ui,
                    self.tr.t(keys::CALC_RESULT_SAT_TEMP),
                    format!("{:.1} °F", reading.saturation_temp_f),
                );
                ui.horizontal(|ui| {
                    ui.label(self.tr.t(keys::CALC_RESULT_CONDITION));
                    let (label, color) = match reading.condition() {
                        SteamCondition::Superheated => {
                            ("Superheated", egui::Color32::from_rgb(220, 38, 38))
                        }
                        SteamCondition::SaturatedWet => {
                            ("Saturated/Wet", egui::Color32::from_rgb(37, 99, 235))
                        }
                    };
                    ui.colored_label(color, label);
                });
                result_row(
                    ui,
                    self.tr.t(keys::CALC_RESULT_SUPERHEAT),
                    format!("{:.1} °F", reading.superheat_f),
                );
                result_row(
                    ui,
                    self.tr.t(keys::CALC_RESULT_ENTHALPY),
                    format!("{:.1} BTU/lb", reading.enthalpy_btu_per_lb),
                );
                if reading.is_subcooled() {
                    ui.separator();
                    ui.colored_label(
                        egui::Color32::from_rgb(202, 138, 4),
                        self.tr.t(keys::CALC_SUBCOOLED_ADVISORY),
                    );
                }
            }
        });

        if let Some(msg) = self.error.clone() {
            egui::Window::new(self.tr.t(keys::ERROR_PREFIX))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(msg);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
        }
    }
}

fn result_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.strong(value);
    });
}
