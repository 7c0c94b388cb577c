//! 핵심 계산/캐시 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI에서도 재사용한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod install_prompt;
pub mod offline;
pub mod steam;
pub mod ui_cli;
