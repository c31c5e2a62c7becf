//! `/proc/uptime` reader
//!
//! The file holds two space-separated decimals: seconds since boot and
//! aggregate idle seconds. Only the first is used.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::UptimeSource;
use crate::error::{UptimeError, UptimeResult};
use crate::uptime::Uptime;

pub const PROC_UPTIME_PATH: &str = "/proc/uptime";

/// Reads uptime from a procfs-style pseudo-file
#[derive(Debug, Clone)]
pub struct ProcUptime {
    path: PathBuf,
    name: String,
}

impl ProcUptime {
    pub fn new() -> Self {
        Self::with_path(PROC_UPTIME_PATH)
    }

    /// Read from an alternate file, e.g. a fixture in tests
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProcUptime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UptimeSource for ProcUptime {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> UptimeResult<Uptime> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| UptimeError::unavailable(&self.name, e))?;

        parse_proc_uptime(&content).map_err(|e| e.with_origin(&self.name))
    }
}

/// Parse the contents of `/proc/uptime`
pub fn parse_proc_uptime(content: &str) -> UptimeResult<Uptime> {
    let field = content
        .split_whitespace()
        .next()
        .ok_or_else(|| UptimeError::malformed(PROC_UPTIME_PATH, "empty content"))?;

    let secs: f64 = field.parse().map_err(|e| {
        UptimeError::malformed(PROC_UPTIME_PATH, format!("{:?}: {}", field, e))
    })?;

    Uptime::from_secs_f64(secs).map_err(|e| e.with_origin(PROC_UPTIME_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_first_field() {
        let uptime = parse_proc_uptime("303.22 1172.51\n").unwrap();
        assert_eq!(uptime.as_micros(), 303_220_000);
        assert_eq!(uptime.to_string(), "0:05:03.220000");
    }

    #[test]
    fn test_parse_whole_seconds() {
        assert_eq!(
            parse_proc_uptime("3661.00 0.00").unwrap().to_string(),
            "1:01:01"
        );
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "   \n", "abc 12.0", "-5.00 1.00", "NaN 1.0", "inf 0"] {
            assert!(
                matches!(
                    parse_proc_uptime(bad),
                    Err(UptimeError::MalformedSource { .. })
                ),
                "{:?} should be malformed",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "90000.50 12345.67").unwrap();

        let source = ProcUptime::with_path(file.path());
        let uptime = source.read().await.unwrap();
        assert_eq!(uptime.to_string(), "25:00:00.500000");
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = ProcUptime::with_path(dir.path().join("uptime"));

        let err = source.read().await.unwrap_err();
        assert!(matches!(err, UptimeError::SourceUnavailable { .. }));
        assert!(err.to_string().contains(source.name()));
    }

    #[tokio::test]
    async fn test_malformed_file_names_its_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "garbage").unwrap();

        let source = ProcUptime::with_path(file.path());
        match source.read().await {
            Err(UptimeError::MalformedSource { origin, .. }) => {
                assert_eq!(origin, file.path().display().to_string())
            }
            other => panic!("expected MalformedSource, got {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_read_real_proc_uptime() {
        let uptime = ProcUptime::new().read().await.unwrap();
        assert!(uptime > Uptime::ZERO);
    }
}
