use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[allow(unused_imports)]
use cached::proc_macro::cached;

#[derive(Debug, Error, Clone)]
pub enum ProbeError {
    #[error("failed to run {binary}: {reason}")]
    Spawn { binary: String, reason: String },
    #[error("{0} printed no version line")]
    NoOutput(String),
}

fn first_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Runs `<binary> -version` and returns the first line it prints.
///
/// Stdout is preferred; stderr is used when stdout is empty. The exit status is
/// not checked. Successful results are cached for 60 seconds per binary.
#[cfg_attr(not(test), cached(time = 60, result = true))]
pub async fn probe_ffmpeg_version(binary: String) -> Result<String, ProbeError> {
    debug!("Probing version of '{}'", binary);
    let output = Command::new(&binary)
        .arg("-version")
        .output()
        .await
        .map_err(|e| ProbeError::Spawn {
            binary: binary.clone(),
            reason: e.to_string(),
        })?;

    first_line(&output.stdout)
        .or_else(|| first_line(&output.stderr))
        .ok_or(ProbeError::NoOutput(binary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_skips_blank_lines() {
        assert_eq!(
            first_line(b"\n  ffmpeg version 6.0 Copyright\nbuilt with gcc\n"),
            Some("ffmpeg version 6.0 Copyright".to_string())
        );
        assert_eq!(first_line(b""), None);
        assert_eq!(first_line(b"\n \n"), None);
    }

    #[tokio::test]
    async fn test_probe_reads_stdout() {
        // `echo -version` prints its argument back on stdout.
        let line = probe_ffmpeg_version("echo".to_string()).await.unwrap();
        assert_eq!(line, "-version");
    }

    #[tokio::test]
    async fn test_probe_missing_binary() {
        let err = probe_ffmpeg_version("definitely-not-a-real-ffmpeg".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Spawn { .. }));
    }
}
