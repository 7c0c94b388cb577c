use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_OFFLINE: &str = "main_menu.offline";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_PROMPT_TEMPERATURE: &str = "calc.prompt_temperature";
    pub const CALC_PROMPT_PRESSURE: &str = "calc.prompt_pressure";
    pub const CALC_INVALID_NUMBER: &str = "calc.invalid_number";
    pub const CALC_RESULT_PRESSURE: &str = "calc.result_pressure";
    pub const CALC_RESULT_SAT_TEMP: &str = "calc.result_sat_temp";
    pub const CALC_RESULT_CONDITION: &str = "calc.result_condition";
    pub const CALC_RESULT_SUPERHEAT: &str = "calc.result_superheat";
    pub const CALC_RESULT_ENTHALPY: &str = "calc.result_enthalpy";
    pub const CALC_SUBCOOLED_ADVISORY: &str = "calc.subcooled_advisory";

    pub const OFFLINE_HEADING: &str = "offline.heading";
    pub const OFFLINE_OPTIONS: &str = "offline.options";
    pub const OFFLINE_INSTALL_DONE: &str = "offline.install_done";
    pub const OFFLINE_ACTIVATE_DONE: &str = "offline.activate_done";
    pub const OFFLINE_PROMPT_PATH: &str = "offline.prompt_path";
    pub const OFFLINE_FETCH_RESULT: &str = "offline.fetch_result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 내장 문자열 번들을 제공한다. 언어팩 파일 없이 빌드에 포함된 문자열만 사용한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Steam Enthalpy Calculator ===",
        MAIN_MENU_CALCULATE => "1) 증기 엔탈피 계산",
        MAIN_MENU_OFFLINE => "2) 오프라인 캐시 관리",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CALC_HEADING => "\n-- 증기 엔탈피 계산 --",
        CALC_PROMPT_TEMPERATURE => "증기 온도 [°F]: ",
        CALC_PROMPT_PRESSURE => "절대 압력 [PSIA]: ",
        CALC_INVALID_NUMBER => "두 입력란 모두 유효한 숫자를 입력하세요.",
        CALC_RESULT_PRESSURE => "압력",
        CALC_RESULT_SAT_TEMP => "포화 온도",
        CALC_RESULT_CONDITION => "증기 상태",
        CALC_RESULT_SUPERHEAT => "과열도",
        CALC_RESULT_ENTHALPY => "증기 엔탈피",
        CALC_SUBCOOLED_ADVISORY => {
            "주의: 온도가 포화점보다 낮습니다. 습증기 또는 과냉 액체 상태입니다."
        }
        OFFLINE_HEADING => "\n-- 오프라인 캐시 관리 --",
        OFFLINE_OPTIONS => "1) 설치(자산 선캐시)  2) 활성화(구버전 정리)  3) 캐시 경유 요청  0) 뒤로",
        OFFLINE_INSTALL_DONE => "설치 완료. 캐시된 자산 수:",
        OFFLINE_ACTIVATE_DONE => "활성화 완료. 삭제된 구버전 스토어 수:",
        OFFLINE_PROMPT_PATH => "요청 경로(ex: /index.html): ",
        OFFLINE_FETCH_RESULT => "응답 상태 / 본문 크기:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => key_missing(key),
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Steam Enthalpy Calculator ===",
        MAIN_MENU_CALCULATE => "1) Steam enthalpy calculation",
        MAIN_MENU_OFFLINE => "2) Offline cache management",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        CALC_HEADING => "\n-- Steam Enthalpy Calculation --",
        CALC_PROMPT_TEMPERATURE => "Steam temperature [°F]: ",
        CALC_PROMPT_PRESSURE => "Absolute pressure [PSIA]: ",
        CALC_INVALID_NUMBER => "Please enter valid numbers for both fields.",
        CALC_RESULT_PRESSURE => "Pressure",
        CALC_RESULT_SAT_TEMP => "Saturation Temperature",
        CALC_RESULT_CONDITION => "Steam Condition",
        CALC_RESULT_SUPERHEAT => "Degrees of Superheat",
        CALC_RESULT_ENTHALPY => "Steam Enthalpy",
        CALC_SUBCOOLED_ADVISORY => {
            "Warning: temperature is below the saturation point. This indicates wet steam or subcooled liquid."
        }
        OFFLINE_HEADING => "\n-- Offline Cache Management --",
        OFFLINE_OPTIONS => "1) Install (pre-cache assets)  2) Activate (purge old versions)  3) Fetch through cache  0) Back",
        OFFLINE_INSTALL_DONE => "Install complete. Assets cached:",
        OFFLINE_ACTIVATE_DONE => "Activate complete. Stale stores removed:",
        OFFLINE_PROMPT_PATH => "Request path (ex: /index.html): ",
        OFFLINE_FETCH_RESULT => "Response status / body size:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language",
        SETTINGS_OPTIONS => "1) Korean  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    };
    Some(s)
}

fn key_missing(key: &str) -> &'static str {
    // 누락 키는 키 자체를 노출해 디버깅을 돕는다.
    Box::leak(key.to_string().into_boxed_str())
}
