//! Operator-facing message templates.
//!
//! The per-file and summary lines are templates rather than hard-coded
//! strings so operators can localize them; the defaults preserve the
//! tool's original Korean messages.

use crate::config::MessagesConfig;

/// Default per-file success line.
pub const DEFAULT_SUCCESS: &str = "처리 완료: {filename}";
/// Default per-file failure line.
pub const DEFAULT_FAILURE: &str = "오류 발생 (이미지: {filename}): {error}";
/// Default final count line.
pub const DEFAULT_SUMMARY: &str = "총 {succeeded}개 이미지 처리 완료";

/// The three operator-facing message templates, with `{filename}`,
/// `{error}`, `{succeeded}`, and `{total}` placeholders.
#[derive(Debug, Clone)]
pub struct MessageTemplates {
    success: String,
    failure: String,
    summary: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS.to_owned(),
            failure: DEFAULT_FAILURE.to_owned(),
            summary: DEFAULT_SUMMARY.to_owned(),
        }
    }
}

impl MessageTemplates {
    /// Builds templates from config, falling back to the defaults per
    /// line.
    #[must_use]
    pub fn from_config(config: &MessagesConfig) -> Self {
        let defaults = Self::default();
        Self {
            success: config.success.clone().unwrap_or(defaults.success),
            failure: config.failure.clone().unwrap_or(defaults.failure),
            summary: config.summary.clone().unwrap_or(defaults.summary),
        }
    }

    /// Renders the per-file success line.
    #[must_use]
    pub fn success(&self, filename: &str) -> String {
        self.success.replace("{filename}", filename)
    }

    /// Renders the per-file failure line.
    #[must_use]
    pub fn failure(&self, filename: &str, error: &str) -> String {
        self.failure
            .replace("{filename}", filename)
            .replace("{error}", error)
    }

    /// Renders the final count line.
    #[must_use]
    pub fn summary(&self, succeeded: usize, total: usize) -> String {
        self.summary
            .replace("{succeeded}", &succeeded.to_string())
            .replace("{total}", &total.to_string())
    }
}
