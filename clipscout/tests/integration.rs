//! Integration tests for the clipscout CLI.

use clap::Parser;
use clipscout::cli::{Cli, run};
use std::path::{Path, PathBuf};

fn setup_temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);

    // Clean up previous test run
    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

/// 118 one-second words with a keyword cluster at 40-44s.
fn write_words_json(dir: &Path) -> PathBuf {
    let mut entries = Vec::new();
    for i in 0..118 {
        let text = match i {
            40 => "insane",
            41 => "crazy",
            42 => "wow",
            43 => "unbelievable",
            44 => "legendary",
            _ => "word",
        };
        entries.push(serde_json::json!({
            "word": text,
            "start": i as f32,
            "end": i as f32 + 0.9,
        }));
    }

    let path = dir.join("words.json");
    std::fs::write(&path, serde_json::Value::Array(entries).to_string())
        .expect("failed to write words json");
    path
}

/// Mono 16-bit WAV with a loud stretch at 41-46s over a quiet baseline.
fn write_test_wav(path: &Path, sample_rate: u32, duration: f32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("failed to create wav");

    let total = (duration * sample_rate as f32) as u32;
    for i in 0..total {
        let t = i as f32 / sample_rate as f32;
        let amplitude = if (41.0..46.0).contains(&t) { 0.9 } else { 0.1 };
        writer
            .write_sample((amplitude * 32767.0) as i16)
            .expect("failed to write sample");
    }
    writer.finalize().expect("failed to finalize wav");
}

fn read_clips(path: &Path) -> Vec<serde_json::Value> {
    let json = std::fs::read_to_string(path).expect("clip report not written");
    serde_json::from_str(&json).expect("clip report is not valid json")
}

#[test]
fn detect_finds_the_keyword_cluster() {
    let dir = setup_temp_dir("clipscout-keyword-test");
    let words_path = write_words_json(&dir);
    let out_path = dir.join("clips.json");

    let cli = Cli::parse_from([
        "clipscout",
        "detect",
        "--words",
        words_path.to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
        "--min-duration",
        "15",
        "--max-duration",
        "30",
        "--max-clips",
        "1",
    ]);

    run(cli).expect("detection failed");

    let clips = read_clips(&out_path);
    assert_eq!(clips.len(), 1);

    let start = clips[0]["start"].as_f64().unwrap();
    let end = clips[0]["end"].as_f64().unwrap();
    let reason = clips[0]["reason"].as_str().unwrap();

    assert!(start <= 40.0 && end >= 44.9, "clip [{start}, {end}]");
    assert!(end - start >= 15.0 - 0.001);
    assert!(end - start <= 30.0 + 0.001);
    assert!(reason.contains("keyword"), "reason {reason:?}");

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn detect_finds_the_loud_stretch_in_audio() {
    let dir = setup_temp_dir("clipscout-audio-test");
    let wav_path = dir.join("audio.wav");
    write_test_wav(&wav_path, 8000, 120.0);
    let out_path = dir.join("clips.json");

    let cli = Cli::parse_from([
        "clipscout",
        "detect",
        "--audio",
        wav_path.to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
        "--min-duration",
        "15",
        "--max-duration",
        "30",
        "--max-clips",
        "1",
    ]);

    run(cli).expect("detection failed");

    let clips = read_clips(&out_path);
    assert_eq!(clips.len(), 1);

    let start = clips[0]["start"].as_f64().unwrap();
    let end = clips[0]["end"].as_f64().unwrap();

    assert!(start <= 41.0 && end >= 46.0, "clip [{start}, {end}]");

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn chapters_short_circuit_detection() {
    let dir = setup_temp_dir("clipscout-chapter-test");
    let chapters_path = dir.join("chapters.json");
    std::fs::write(
        &chapters_path,
        r#"[
            {"title": "Intro", "start_time": 0.0, "end_time": 30.0},
            {"title": "Build", "start_time": 30.0, "end_time": 75.0},
            {"title": "Payoff", "start_time": 75.0, "end_time": 110.0}
        ]"#,
    )
    .expect("failed to write chapters json");
    let out_path = dir.join("clips.json");

    let cli = Cli::parse_from([
        "clipscout",
        "detect",
        "--chapters",
        chapters_path.to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
        "--min-duration",
        "15",
        "--max-duration",
        "60",
        "--max-clips",
        "2",
    ]);

    run(cli).expect("detection failed");

    let clips = read_clips(&out_path);
    assert_eq!(clips.len(), 2);
    assert_eq!(clips[0]["reason"], "Chapter: Intro");
    assert_eq!(clips[1]["reason"], "Chapter: Build");
    assert_eq!(clips[0]["score"].as_f64().unwrap(), 1.0);
    assert_eq!(clips[1]["score"].as_f64().unwrap(), 1.0);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn empty_inputs_fail_with_no_highlights() {
    let cli = Cli::parse_from(["clipscout", "detect"]);

    let result = run(cli);

    assert!(result.is_err());
    let message = format!("{:?}", result.unwrap_err());
    assert!(
        message.contains("no highlights detected"),
        "unexpected error: {message}"
    );
}
