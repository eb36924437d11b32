use super::intake::UploadIntake;
use super::status::OpStatus;
use legalease_common::UploadResult;

/// Everything the upload view shows; kept while the user visits other views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadPanel {
    pub(crate) intake: UploadIntake,
    pub(crate) status: OpStatus,
    pub(crate) result: Option<UploadResult>,
}

impl UploadPanel {
    pub fn intake(&self) -> &UploadIntake {
        &self.intake
    }

    pub fn status(&self) -> &OpStatus {
        &self.status
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    /// The upload button is live only with a candidate and no upload running
    pub fn can_upload(&self) -> bool {
        self.intake.candidate().is_some() && !self.status.is_in_flight()
    }

    /// Validation rejection or failed upload, whichever is current
    pub fn error(&self) -> Option<String> {
        self.intake
            .rejection()
            .map(|r| r.to_string())
            .or_else(|| self.status.error().map(str::to_string))
    }
}
