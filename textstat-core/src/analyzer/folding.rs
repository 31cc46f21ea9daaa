//! Case-folding capability probe.
//!
//! The probe runs once per process; documents receive the result through
//! [`AnalyzerConfig`](textstat_types::AnalyzerConfig) rather than reading it
//! per call.

use once_cell::sync::Lazy;
use textstat_types::{AnalyzerConfig, CaseFolding};
use tracing::debug;

static DETECTED: Lazy<CaseFolding> = Lazy::new(|| {
    let folding = probe();
    debug!(%folding, "case_folding_detected");
    folding
});

/// Multi-byte capitals must lower to their multi-byte counterparts.
fn probe() -> CaseFolding {
    if "ÄЖΩ".to_lowercase() == "äжω" {
        CaseFolding::Unicode
    } else {
        CaseFolding::Ascii
    }
}

/// The process-wide folding capability.
#[inline]
pub fn detected() -> CaseFolding {
    *DETECTED
}

/// Configuration built from the detected capability.
pub fn detected_config() -> AnalyzerConfig {
    AnalyzerConfig {
        case_folding: detected(),
    }
}
