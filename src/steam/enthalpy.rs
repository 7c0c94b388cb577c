//! 고정 근사식 기반 증기 엔탈피 추정.
//!
//! 원 모델을 그대로 보존한다. 습증기 분지는 건도/잠열을 무시하는
//! 의도적 단순화이며 수정 대상이 아니다.

/// 과열 증기의 정압 비열 근사 [BTU/lb·°F]
pub const CP_SUPERHEAT: f64 = 0.48;
/// 잠열 근사식 기준값 [BTU/lb]
pub const LATENT_BASE: f64 = 970.3;
/// 잠열 근사식 압력 계수 [BTU/lb per PSIA]
pub const LATENT_PRESSURE_COEFF: f64 = 0.5;
/// 포화수 현열 근사식 기준값 [BTU/lb]
pub const SENSIBLE_BASE: f64 = 180.0;
/// 포화수 현열 근사식 온도 계수 [BTU/lb per °F]
pub const SENSIBLE_TEMP_COEFF: f64 = 0.3;

/// 포화수(액)의 현열 근사 [BTU/lb].
pub fn sensible_heat(temp_f: f64) -> f64 {
    SENSIBLE_BASE + SENSIBLE_TEMP_COEFF * temp_f
}

/// 증발 잠열 근사 [BTU/lb].
pub fn latent_heat(pressure_psia: f64) -> f64 {
    LATENT_BASE - LATENT_PRESSURE_COEFF * pressure_psia
}

/// 온도/압력/포화 온도로 증기 엔탈피를 추정한다 [BTU/lb].
///
/// temp > sat_temp 이면 과열 분지: h = hf(sat_temp) + hfg(p) + 0.48·(temp - sat_temp).
/// temp ≤ sat_temp 이면 포화/습증기 분지: 현열만 반환한다.
pub fn estimate_enthalpy(temp_f: f64, pressure_psia: f64, sat_temp_f: f64) -> f64 {
    if temp_f > sat_temp_f {
        let hfg = latent_heat(pressure_psia);
        let hf = sensible_heat(sat_temp_f);
        let hg = hf + hfg;
        let superheat = temp_f - sat_temp_f;
        hg + CP_SUPERHEAT * superheat
    } else {
        sensible_heat(temp_f)
    }
}
