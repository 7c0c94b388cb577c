//! 입력 검증과 계산 오케스트레이션 시나리오 테스트.
use steam_enthalpy_calculator::steam::{
    evaluate_inputs, CalcError, CalculatorSession, SaturationTable, SteamCondition,
};

#[test]
fn non_numeric_temperature_is_rejected_without_computation() {
    let table = SaturationTable::standard();
    let result = evaluate_inputs("abc", "50", &table);
    assert!(matches!(result, Err(CalcError::InvalidNumber)));
}

#[test]
fn non_numeric_pressure_is_rejected() {
    let table = SaturationTable::standard();
    let result = evaluate_inputs("300", "", &table);
    assert!(matches!(result, Err(CalcError::InvalidNumber)));
}

#[test]
fn nan_input_is_rejected_as_invalid_number() {
    // "NaN"은 f64로 파싱되지만 계산 값으로는 받지 않는다.
    let table = SaturationTable::standard();
    assert!(matches!(
        evaluate_inputs("NaN", "100", &table),
        Err(CalcError::InvalidNumber)
    ));
    assert!(matches!(
        evaluate_inputs("500", "nan", &table),
        Err(CalcError::InvalidNumber)
    ));
}

#[test]
fn infinite_input_is_still_a_number() {
    let table = SaturationTable::standard();
    let reading = evaluate_inputs("inf", "100", &table).expect("infinity parses as a number");
    assert!(reading.temperature_f.is_infinite());
    assert!(!reading.enthalpy_btu_per_lb.is_nan());
}

#[test]
fn whitespace_around_numbers_is_accepted() {
    let table = SaturationTable::standard();
    let reading = evaluate_inputs(" 500 \n", "\t100\n", &table).expect("valid inputs");
    assert_eq!(reading.pressure_psia, 100.0);
    assert_eq!(reading.saturation_temp_f, 327.8);
}

#[test]
fn superheated_scenario() {
    let table = SaturationTable::standard();
    let reading = evaluate_inputs("500", "100", &table).expect("valid inputs");
    assert_eq!(reading.condition(), SteamCondition::Superheated);
    assert_eq!(reading.condition().label(), "Superheated");
    assert!(!reading.is_subcooled());
    assert!((reading.superheat_f - 172.2).abs() < 1e-9);
    assert!((reading.enthalpy_btu_per_lb - 1281.296).abs() < 1e-9);
}

#[test]
fn subcooled_scenario_renders_advisory() {
    // 300°F, 200 PSIA → 포화 381.8°F, 과열도 -81.8 → 주의 문구 표시 대상
    let table = SaturationTable::standard();
    let reading = evaluate_inputs("300", "200", &table).expect("valid inputs");
    assert_eq!(reading.saturation_temp_f, 381.8);
    assert_eq!(reading.condition(), SteamCondition::SaturatedWet);
    assert_eq!(reading.condition().label(), "Saturated/Wet");
    assert!((reading.superheat_f + 81.8).abs() < 1e-9);
    assert!(reading.is_subcooled());
}

#[test]
fn exactly_saturated_is_wet_but_not_subcooled() {
    let table = SaturationTable::standard();
    let reading = evaluate_inputs("381.8", "200", &table).expect("valid inputs");
    assert_eq!(reading.condition(), SteamCondition::SaturatedWet);
    assert!(!reading.is_subcooled());
}

#[test]
fn session_keeps_last_reading_until_reset() {
    let mut session = CalculatorSession::default();
    assert!(session.reading().is_none());

    session.temperature_input = "500".to_string();
    session.pressure_input = "100".to_string();
    session.on_calculate().expect("valid inputs");
    assert!(session.reading().is_some());

    session.on_reset();
    assert!(session.reading().is_none());
    assert!(session.temperature_input.is_empty());
    assert!(session.pressure_input.is_empty());
}

#[test]
fn session_validation_failure_preserves_previous_result() {
    let mut session = CalculatorSession::default();
    session.temperature_input = "500".to_string();
    session.pressure_input = "100".to_string();
    session.on_calculate().expect("valid inputs");

    session.temperature_input = "abc".to_string();
    assert!(session.on_calculate().is_err());
    // 검증 실패는 상태를 바꾸지 않는다.
    let reading = session.reading().expect("previous reading kept");
    assert_eq!(reading.temperature_f, 500.0);
}
