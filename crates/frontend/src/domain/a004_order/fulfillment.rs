//! Two-step evidence-then-confirm sequencing.
//!
//! Both lifecycle checkpoints (seller ship-confirm, buyer delivery-confirm)
//! are an image upload followed by a PATCH, where the PATCH must never be
//! issued unless the upload yielded a URL. The flow below makes that
//! ordering structural: the confirm URL is only reachable through a
//! successful upload result.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentStep {
    /// No evidence image yet; the confirm button stays disabled.
    AwaitingUpload,
    /// Upload in flight.
    Uploading,
    /// Upload returned a hosted URL; the confirmation PATCH may be sent.
    ReadyToConfirm { image_url: String },
    /// Upload failed; the confirmation must not be attempted.
    UploadFailed { error: String },
}

#[derive(Debug, Clone)]
pub struct FulfillmentFlow {
    step: FulfillmentStep,
}

impl FulfillmentFlow {
    pub fn new() -> Self {
        Self {
            step: FulfillmentStep::AwaitingUpload,
        }
    }

    pub fn step(&self) -> &FulfillmentStep {
        &self.step
    }

    pub fn start_upload(&mut self) {
        self.step = FulfillmentStep::Uploading;
    }

    /// Feed the upload outcome in. A failure is terminal for this attempt;
    /// the user has to pick a file again.
    pub fn on_upload_result(&mut self, result: Result<String, String>) {
        self.step = match result {
            Ok(image_url) => FulfillmentStep::ReadyToConfirm { image_url },
            Err(error) => FulfillmentStep::UploadFailed { error },
        };
    }

    /// URL to pass to the confirmation PATCH. `None` means the PATCH must
    /// not be sent.
    pub fn confirm_url(&self) -> Option<&str> {
        match &self.step {
            FulfillmentStep::ReadyToConfirm { image_url } => Some(image_url),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.step == FulfillmentStep::Uploading
    }

    pub fn upload_error(&self) -> Option<&str> {
        match &self.step {
            FulfillmentStep::UploadFailed { error } => Some(error),
            _ => None,
        }
    }
}

impl Default for FulfillmentFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_unreachable_without_upload() {
        let flow = FulfillmentFlow::new();
        assert_eq!(flow.confirm_url(), None);

        let mut flow = FulfillmentFlow::new();
        flow.start_upload();
        assert_eq!(flow.confirm_url(), None);
    }

    #[test]
    fn test_failed_upload_blocks_confirmation() {
        let mut flow = FulfillmentFlow::new();
        flow.start_upload();
        flow.on_upload_result(Err("Image upload failed: 500".into()));
        assert_eq!(flow.confirm_url(), None);
        assert_eq!(flow.upload_error(), Some("Image upload failed: 500"));
    }

    #[test]
    fn test_successful_upload_enables_confirmation() {
        let mut flow = FulfillmentFlow::new();
        flow.start_upload();
        flow.on_upload_result(Ok("https://assets.example/pkg.jpg".into()));
        assert_eq!(flow.confirm_url(), Some("https://assets.example/pkg.jpg"));
        assert!(!flow.is_uploading());
    }
}
