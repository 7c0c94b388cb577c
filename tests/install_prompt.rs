//! 설치 유도 흐름 상태 기계 테스트.
use steam_enthalpy_calculator::install_prompt::{InstallChoice, InstallPrompt, PromptHandle};

/// 항상 정해진 선택을 돌려주는 스텁 핸들.
struct StubHandle {
    choice: InstallChoice,
    presented: bool,
}

impl StubHandle {
    fn new(choice: InstallChoice) -> Self {
        Self {
            choice,
            presented: false,
        }
    }
}

impl PromptHandle for StubHandle {
    fn present(&mut self) -> InstallChoice {
        self.presented = true;
        self.choice
    }
}

#[test]
fn control_hidden_until_install_available() {
    let prompt: InstallPrompt<StubHandle> = InstallPrompt::new(false);
    assert!(!prompt.control_visible());
}

#[test]
fn control_shown_after_install_available_signal() {
    let mut prompt = InstallPrompt::new(false);
    prompt.on_install_available(StubHandle::new(InstallChoice::Accepted));
    assert!(prompt.control_visible());
}

#[test]
fn control_hidden_when_already_standalone() {
    // 설치된 독립 실행 앱에서는 신호가 와도 컨트롤을 보이지 않는다.
    let mut prompt = InstallPrompt::new(true);
    prompt.on_install_available(StubHandle::new(InstallChoice::Accepted));
    assert!(!prompt.control_visible());
}

#[test]
fn click_presents_prompt_and_clears_handle() {
    let mut prompt = InstallPrompt::new(false);
    prompt.on_install_available(StubHandle::new(InstallChoice::Accepted));

    let choice = prompt.on_install_clicked();
    assert_eq!(choice, Some(InstallChoice::Accepted));
    // 응답 후 핸들이 비워져 컨트롤이 숨는다.
    assert!(!prompt.control_visible());
    assert_eq!(prompt.on_install_clicked(), None);
}

#[test]
fn dismissed_choice_is_reported() {
    let mut prompt = InstallPrompt::new(false);
    prompt.on_install_available(StubHandle::new(InstallChoice::Dismissed));
    assert_eq!(prompt.on_install_clicked(), Some(InstallChoice::Dismissed));
}

#[test]
fn click_without_handle_does_nothing() {
    let mut prompt: InstallPrompt<StubHandle> = InstallPrompt::new(false);
    assert_eq!(prompt.on_install_clicked(), None);
}

#[test]
fn display_mode_change_toggles_visibility() {
    let mut prompt = InstallPrompt::new(false);
    prompt.on_install_available(StubHandle::new(InstallChoice::Accepted));
    assert!(prompt.control_visible());

    prompt.on_display_mode_change(true);
    assert!(!prompt.control_visible());

    prompt.on_display_mode_change(false);
    assert!(prompt.control_visible());
}
