use super::analysis::AnalysisState;
use super::upload::UploadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthForm {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSection {
    /// Empty drop zone.
    Box,
    Preview,
}

/// What the UI should show. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    pub auth_form: AuthForm,
    pub upload_section: UploadSection,
    pub results_shown: bool,
    pub analyze_enabled: bool,
    pub analyzing: bool,
}

pub fn derive_view(
    session_present: bool,
    auth_form: AuthForm,
    upload: &UploadState,
    analysis: AnalysisState,
) -> ViewState {
    let screen = if session_present {
        Screen::Main
    } else {
        Screen::Auth
    };
    let previewing = matches!(upload, UploadState::Previewing(_));
    let upload_section = if previewing {
        UploadSection::Preview
    } else {
        UploadSection::Box
    };
    let on_main = screen == Screen::Main;
    let analyzing = on_main && previewing && analysis == AnalysisState::Busy;

    ViewState {
        screen,
        auth_form,
        upload_section,
        results_shown: on_main && previewing && matches!(analysis, AnalysisState::Done(_)),
        analyze_enabled: on_main && previewing && !analyzing,
        analyzing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::analysis::NUTRITION_TABLE;
    use crate::state::upload::SelectedImage;

    fn previewing() -> UploadState {
        UploadState::Previewing(SelectedImage::from_bytes("image/png", b"png"))
    }

    #[test]
    fn test_logged_out_shows_auth_only() {
        let view = derive_view(
            false,
            AuthForm::Signup,
            &previewing(),
            AnalysisState::Done(&NUTRITION_TABLE[0]),
        );
        assert_eq!(view.screen, Screen::Auth);
        assert_eq!(view.auth_form, AuthForm::Signup);
        assert!(!view.results_shown);
        assert!(!view.analyze_enabled);
    }

    #[test]
    fn test_empty_upload_shows_box_and_disables_analyze() {
        let view = derive_view(true, AuthForm::Login, &UploadState::Empty, AnalysisState::Idle);
        assert_eq!(view.screen, Screen::Main);
        assert_eq!(view.upload_section, UploadSection::Box);
        assert!(!view.analyze_enabled);
        assert!(!view.results_shown);
    }

    #[test]
    fn test_busy_hides_results_and_disables_trigger() {
        let view = derive_view(true, AuthForm::Login, &previewing(), AnalysisState::Busy);
        assert_eq!(view.upload_section, UploadSection::Preview);
        assert!(view.analyzing);
        assert!(!view.analyze_enabled);
        assert!(!view.results_shown);
    }

    #[test]
    fn test_done_shows_results() {
        let view = derive_view(
            true,
            AuthForm::Login,
            &previewing(),
            AnalysisState::Done(&NUTRITION_TABLE[1]),
        );
        assert!(view.results_shown);
        assert!(view.analyze_enabled);
    }
}
