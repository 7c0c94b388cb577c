//! 오프라인 가용성 정책 모듈 모음.
//!
//! 고정 자산 목록을 버전 단위 스토어에 선캐시하고,
//! 요청을 캐시 우선으로 처리하며 네트워크 실패 시 시작 페이지로 폴백한다.

pub mod http;
pub mod store;
pub mod worker;

pub use http::*;
pub use store::*;
pub use worker::*;
