// src/export/fs_utils.rs

use crate::errors::AppResult;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Create the per-run output directory `output/output_{timestamp}` under the
/// given base path and return it.
///
/// Called only after every table has been computed, so an aborted run never
/// leaves a half-written directory behind.
pub(crate) fn crear_output_dir(base: &Path, timestamp: NaiveDateTime) -> AppResult<PathBuf> {
    let dir = base
        .join("output")
        .join(format!("output_{}", timestamp.format("%Y%m%d_%H%M%S")));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn dir_name_carries_the_run_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(15, 6, 7)
            .unwrap();
        let base = std::env::temp_dir().join("iptareas_fs_utils_test");
        let dir = crear_output_dir(&base, ts).unwrap();
        assert!(dir.ends_with("output/output_20250304_150607"));
        assert!(dir.is_dir());
        fs::remove_dir_all(&base).ok();
    }
}
