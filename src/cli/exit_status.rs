use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed, nothing left to do
/// - `Failure` (1): Discovery found un-localized text
/// - `Error` (2): I/O, configuration, catalog or argument error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing left to do.
    Success,
    /// Discovery found un-localized text.
    Failure,
    /// Command failed or could not finish all of its work.
    Error,
}

impl ExitStatus {
    /// Escalate to `Error` when `failed` is true.
    pub fn or_error(self, failed: bool) -> Self {
        if failed { ExitStatus::Error } else { self }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
