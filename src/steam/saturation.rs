/// 포화 온도 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationTableRow {
    /// 절대 압력 [PSIA]
    pub pressure_psia: f64,
    /// 포화 온도 [°F]
    pub temperature_f: f64,
}

// 절대 압력(PSIA) 기준 포화 온도(°F) 표. 14.7~1000 PSIA 범위를 고정한다.
const SAT_TABLE: [SaturationTableRow; 26] = [
    SaturationTableRow { pressure_psia: 14.7, temperature_f: 212.0 },
    SaturationTableRow { pressure_psia: 20.0, temperature_f: 228.0 },
    SaturationTableRow { pressure_psia: 30.0, temperature_f: 250.3 },
    SaturationTableRow { pressure_psia: 40.0, temperature_f: 267.2 },
    SaturationTableRow { pressure_psia: 50.0, temperature_f: 281.0 },
    SaturationTableRow { pressure_psia: 60.0, temperature_f: 292.7 },
    SaturationTableRow { pressure_psia: 70.0, temperature_f: 302.9 },
    SaturationTableRow { pressure_psia: 80.0, temperature_f: 312.0 },
    SaturationTableRow { pressure_psia: 90.0, temperature_f: 320.3 },
    SaturationTableRow { pressure_psia: 100.0, temperature_f: 327.8 },
    SaturationTableRow { pressure_psia: 120.0, temperature_f: 341.2 },
    SaturationTableRow { pressure_psia: 140.0, temperature_f: 353.0 },
    SaturationTableRow { pressure_psia: 160.0, temperature_f: 363.5 },
    SaturationTableRow { pressure_psia: 180.0, temperature_f: 373.1 },
    SaturationTableRow { pressure_psia: 200.0, temperature_f: 381.8 },
    SaturationTableRow { pressure_psia: 250.0, temperature_f: 400.9 },
    SaturationTableRow { pressure_psia: 300.0, temperature_f: 417.3 },
    SaturationTableRow { pressure_psia: 350.0, temperature_f: 431.7 },
    SaturationTableRow { pressure_psia: 400.0, temperature_f: 444.6 },
    SaturationTableRow { pressure_psia: 450.0, temperature_f: 456.3 },
    SaturationTableRow { pressure_psia: 500.0, temperature_f: 467.0 },
    SaturationTableRow { pressure_psia: 600.0, temperature_f: 486.2 },
    SaturationTableRow { pressure_psia: 700.0, temperature_f: 503.1 },
    SaturationTableRow { pressure_psia: 800.0, temperature_f: 518.2 },
    SaturationTableRow { pressure_psia: 900.0, temperature_f: 531.9 },
    SaturationTableRow { pressure_psia: 1000.0, temperature_f: 544.6 },
];

/// 표 구성 시 발생 가능한 오류.
#[derive(Debug)]
pub enum SaturationTableError {
    /// 행이 2개 미만
    TooFewRows,
    /// 압력 키가 엄격 증가가 아님
    NotStrictlyIncreasing(usize),
}

impl std::fmt::Display for SaturationTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaturationTableError::TooFewRows => write!(f, "표 행이 2개 이상 필요합니다."),
            SaturationTableError::NotStrictlyIncreasing(i) => {
                write!(f, "압력 키가 엄격 증가가 아닙니다. (행 {i})")
            }
        }
    }
}

impl std::error::Error for SaturationTableError {}

/// 압력→포화 온도 보간용 고정 표. 생성 후에는 불변이다.
#[derive(Debug, Clone)]
pub struct SaturationTable {
    rows: Vec<SaturationTableRow>,
}

impl SaturationTable {
    /// 내장 표준 표(14.7~1000 PSIA, 26행)로 생성한다.
    pub fn standard() -> Self {
        Self {
            rows: SAT_TABLE.to_vec(),
        }
    }

    /// 임의의 행으로 표를 구성한다. 시험용 대체 표를 주입할 때 사용한다.
    pub fn from_rows(rows: Vec<SaturationTableRow>) -> Result<Self, SaturationTableError> {
        if rows.len() < 2 {
            return Err(SaturationTableError::TooFewRows);
        }
        for (i, pair) in rows.windows(2).enumerate() {
            if pair[1].pressure_psia <= pair[0].pressure_psia {
                return Err(SaturationTableError::NotStrictlyIncreasing(i + 1));
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[SaturationTableRow] {
        &self.rows
    }

    /// 압력에 대한 포화 온도를 구한다.
    /// 표 범위 밖은 경계값으로 클램프하고, 범위 안은 인접 두 행 사이를 선형 보간한다.
    /// 오류 없이 항상 값을 반환한다.
    pub fn lookup(&self, pressure_psia: f64) -> f64 {
        let first = self.rows.first().unwrap();
        let last = self.rows.last().unwrap();
        if pressure_psia <= first.pressure_psia {
            return first.temperature_f;
        }
        if pressure_psia >= last.pressure_psia {
            return last.temperature_f;
        }
        for pair in self.rows.windows(2) {
            let a = pair[0];
            let b = pair[1];
            if pressure_psia >= a.pressure_psia && pressure_psia <= b.pressure_psia {
                let ratio = (pressure_psia - a.pressure_psia) / (b.pressure_psia - a.pressure_psia);
                return a.temperature_f + ratio * (b.temperature_f - a.temperature_f);
            }
        }
        // 엄격 증가 표에서는 위 루프가 항상 매칭된다.
        last.temperature_f
    }
}

impl Default for SaturationTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// 내장 표준 표 기준 포화 온도 [°F].
pub fn saturation_temp_f(pressure_psia: f64) -> f64 {
    SaturationTable::standard().lookup(pressure_psia)
}
