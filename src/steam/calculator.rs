use super::enthalpy::estimate_enthalpy;
use super::saturation::SaturationTable;

/// 계산 입력 검증 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CalcError {
    /// 숫자로 해석할 수 없는 입력
    InvalidNumber,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InvalidNumber => {
                write!(f, "두 입력란 모두 유효한 숫자를 입력하세요.")
            }
        }
    }
}

impl std::error::Error for CalcError {}

/// 증기 상태 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteamCondition {
    Superheated,
    SaturatedWet,
}

impl SteamCondition {
    pub fn label(&self) -> &'static str {
        match self {
            SteamCondition::Superheated => "Superheated",
            SteamCondition::SaturatedWet => "Saturated/Wet",
        }
    }
}

/// 한 번의 계산 결과. 표시 값은 모두 소수 첫째 자리까지 렌더링한다.
#[derive(Debug, Clone, Copy)]
pub struct SteamReading {
    /// 입력 절대 압력 [PSIA]
    pub pressure_psia: f64,
    /// 입력 온도 [°F]
    pub temperature_f: f64,
    /// 포화 온도 [°F]
    pub saturation_temp_f: f64,
    /// 과열도 [°F]. 음수면 포화점 미만.
    pub superheat_f: f64,
    /// 증기 엔탈피 [BTU/lb]
    pub enthalpy_btu_per_lb: f64,
}

impl SteamReading {
    pub fn condition(&self) -> SteamCondition {
        if self.superheat_f > 0.0 {
            SteamCondition::Superheated
        } else {
            SteamCondition::SaturatedWet
        }
    }

    /// 엄격히 포화점 미만(습증기/과냉)이면 참. 정확히 포화점이면 거짓.
    pub fn is_subcooled(&self) -> bool {
        self.superheat_f < 0.0
    }
}

/// 입력 문자열 하나를 숫자로 해석한다. NaN은 유효한 숫자로 취급하지 않는다.
/// (무한대는 숫자이므로 통과한다.)
fn parse_number(input: &str) -> Result<f64, CalcError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or(CalcError::InvalidNumber)
}

/// 사용자 입력 문자열 두 개를 검증 후 계산한다.
/// 파싱에 실패하면 계산/상태 변경 없이 검증 오류를 반환한다.
pub fn evaluate_inputs(
    temp_input: &str,
    pressure_input: &str,
    table: &SaturationTable,
) -> Result<SteamReading, CalcError> {
    let temp_f = parse_number(temp_input)?;
    let pressure_psia = parse_number(pressure_input)?;

    let saturation_temp_f = table.lookup(pressure_psia);
    let superheat_f = temp_f - saturation_temp_f;
    let enthalpy_btu_per_lb = estimate_enthalpy(temp_f, pressure_psia, saturation_temp_f);

    Ok(SteamReading {
        pressure_psia,
        temperature_f: temp_f,
        saturation_temp_f,
        superheat_f,
        enthalpy_btu_per_lb,
    })
}

/// 입력란 두 개와 마지막 결과를 들고 있는 UI 세션.
/// GUI/CLI 양쪽에서 동일한 계산·초기화 동작을 공유한다.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    pub temperature_input: String,
    pub pressure_input: String,
    reading: Option<SteamReading>,
    table: SaturationTable,
}

impl CalculatorSession {
    pub fn new(table: SaturationTable) -> Self {
        Self {
            temperature_input: String::new(),
            pressure_input: String::new(),
            reading: None,
            table,
        }
    }

    /// 현재 입력으로 계산을 수행한다. 검증 실패 시 기존 결과는 유지된다.
    pub fn on_calculate(&mut self) -> Result<SteamReading, CalcError> {
        let reading = evaluate_inputs(&self.temperature_input, &self.pressure_input, &self.table)?;
        self.reading = Some(reading);
        Ok(reading)
    }

    /// 입력란을 비우고 결과 패널을 숨긴다.
    pub fn on_reset(&mut self) {
        self.temperature_input.clear();
        self.pressure_input.clear();
        self.reading = None;
    }

    /// 결과 패널에 표시할 마지막 계산 결과. None이면 패널을 숨긴다.
    pub fn reading(&self) -> Option<&SteamReading> {
        self.reading.as_ref()
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(SaturationTable::standard())
    }
}
