//! Scene-change detection by shelling out to ffmpeg's scene filter.
//!
//! Sampling at 1 frame/sec keeps the scan cheap even for hour-long inputs.
//! The adapter owns its timeout discipline: a scan that exceeds the budget is
//! killed and reported as an empty signal, never as an error.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Frame-difference threshold for ffmpeg's scene filter
const SCENE_THRESHOLD: f32 = 0.4;

/// Wall-clock budget for one scene scan
const SCAN_TIMEOUT: Duration = Duration::from_secs(300);

/// Detect scene-change timestamps in a video file.
///
/// Returns an empty set on any failure (missing ffmpeg, unreadable input,
/// timeout); a missing scene signal degrades scoring instead of aborting.
pub fn detect_scene_cuts(video: impl AsRef<Path>) -> Vec<f32> {
    detect_scene_cuts_with_timeout(video.as_ref(), SCAN_TIMEOUT)
}

pub(crate) fn detect_scene_cuts_with_timeout(video: &Path, timeout: Duration) -> Vec<f32> {
    match run_scene_scan(video, timeout) {
        Ok(stderr) => {
            let cuts = parse_pts_times(&stderr);
            tracing::info!(count = cuts.len(), "found scene changes");
            cuts
        }
        Err(e) => {
            tracing::warn!(path = ?video.display(), error = %e, "scene detection failed");
            Vec::new()
        }
    }
}

/// Run ffmpeg's scene filter and capture its stderr (showinfo logs there).
fn run_scene_scan(video: &Path, timeout: Duration) -> std::io::Result<String> {
    let filter = format!("select='gt(scene,{SCENE_THRESHOLD})',showinfo");

    let mut child = Command::new("ffmpeg")
        .arg("-i")
        .arg(video)
        .args(["-r", "1", "-vf", &filter, "-f", "null", "-"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    let Some(mut stderr) = child.stderr.take() else {
        child.kill().ok();
        child.wait().ok();
        return Err(std::io::Error::other("ffmpeg stderr was not captured"));
    };

    // Reading stderr to EOF doubles as process completion; a hung ffmpeg
    // never closes the pipe and trips the timeout below.
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = String::new();
        let read = stderr.read_to_string(&mut buf).map(|_| buf);
        tx.send(read).ok();
    });

    match rx.recv_timeout(timeout) {
        Ok(read) => {
            child.wait()?;
            read
        }
        Err(_) => {
            child.kill().ok();
            child.wait().ok();
            Err(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("scene scan exceeded {}s", timeout.as_secs()),
            ))
        }
    }
}

/// Extract `pts_time:` values from showinfo output.
fn parse_pts_times(stderr: &str) -> Vec<f32> {
    stderr.lines().filter_map(parse_pts_time).collect()
}

fn parse_pts_time(line: &str) -> Option<f32> {
    let rest = &line[line.find("pts_time:")? + "pts_time:".len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}
