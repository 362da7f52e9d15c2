use brief_core::BundleError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    MissingPath,
    UnreadableFile,
    InvalidPayload,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::MissingPath => "Enter the path of a saved results file.",
            ViewError::UnreadableFile => "That file could not be read. Check the path and try again.",
            ViewError::InvalidPayload => "That file does not look like a results payload.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&BundleError> for ViewError {
    fn from(err: &BundleError) -> Self {
        match err {
            BundleError::Io { .. } => ViewError::UnreadableFile,
            BundleError::Json(_) => ViewError::InvalidPayload,
            _ => ViewError::Unknown,
        }
    }
}
