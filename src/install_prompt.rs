//! 설치 유도 흐름의 상태 기계.
//!
//! 플랫폼이 "설치 가능" 신호와 함께 넘겨준 지연 프롬프트 핸들을
//! UI 컨텍스트 안에서만 보관한다. 사용자가 응답하거나 설치가 끝나면
//! 핸들을 비우며, 컴포넌트 밖으로는 절대 노출하지 않는다.

use tracing::info;

/// 사용자 선택 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Accepted,
    Dismissed,
}

/// 지연된 설치 프롬프트 핸들. 실제 플랫폼 연동과 테스트 스텁이 구현한다.
pub trait PromptHandle {
    /// 미뤄둔 프롬프트를 띄우고 사용자 선택을 돌려준다.
    fn present(&mut self) -> InstallChoice;
}

/// 설치 버튼 표시 여부와 지연 핸들을 관리한다.
#[derive(Debug)]
pub struct InstallPrompt<P: PromptHandle> {
    deferred: Option<P>,
    standalone: bool,
}

impl<P: PromptHandle> InstallPrompt<P> {
    /// 시작 시 현재 표시 모드를 확인해 생성한다.
    pub fn new(standalone: bool) -> Self {
        Self {
            deferred: None,
            standalone,
        }
    }

    /// "설치 가능" 신호 처리: 기본 UI를 억제하고 핸들을 보관한다.
    pub fn on_install_available(&mut self, handle: P) {
        self.deferred = Some(handle);
    }

    /// 설치 컨트롤 표시 여부. 핸들이 있고 독립 실행 모드가 아닐 때만 보인다.
    pub fn control_visible(&self) -> bool {
        self.deferred.is_some() && !self.standalone
    }

    /// 설치 컨트롤 클릭 처리: 프롬프트를 띄우고 선택을 기록한 뒤 핸들을 비운다.
    /// 핸들이 없으면 아무 일도 하지 않는다.
    pub fn on_install_clicked(&mut self) -> Option<InstallChoice> {
        let mut handle = self.deferred.take()?;
        let choice = handle.present();
        match choice {
            InstallChoice::Accepted => info!("설치 프롬프트: 사용자 수락"),
            InstallChoice::Dismissed => info!("설치 프롬프트: 사용자 거절"),
        }
        Some(choice)
    }

    /// 표시 모드 변경 처리. 독립 실행으로 전환되면 컨트롤이 숨는다.
    pub fn on_display_mode_change(&mut self, standalone: bool) {
        self.standalone = standalone;
    }
}
