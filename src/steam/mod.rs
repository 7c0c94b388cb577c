//! 증기 관련 계산 모듈 모음.

pub mod calculator;
pub mod enthalpy;
pub mod saturation;

pub use calculator::*;
pub use enthalpy::*;
pub use saturation::*;
