//! clipscout-detect: highlight detection engine for short-form clip
//! extraction.
//!
//! Fuses three independent signals derived from a long-form video — an audio
//! loudness curve, visual scene-cut timestamps, and keyword-density windows
//! from a word-level transcript — into per-window fusion scores, selects a
//! small non-overlapping set of top windows, and snaps their edges to
//! transcript word boundaries. Pre-chaptered videos skip the heuristic scan
//! entirely via the chapter fast path.
//!
//! # Architecture
//!
//! Data flows one way through the pipeline:
//!
//! - [`audio`], [`scene`], [`keywords`]: signal adapters, pure over their own
//!   inputs, degrading to empty signals on failure
//! - [`score`]: sliding-window fusion scoring across three window sizes
//! - [`select`]: greedy overlap-aware selection
//! - [`refine`]: word-boundary snapping
//! - [`engine`]: orchestration and fallback policy
//!
//! # Quick Start
//!
//! ```ignore
//! use clipscout_detect::config::DetectionConfig;
//! use clipscout_detect::engine::find_highlights;
//!
//! let config = DetectionConfig::default().validated()?;
//! let clips = find_highlights(
//!     Some("audio.wav".as_ref()),
//!     Some("video.mp4".as_ref()),
//!     &words,
//!     &chapters,
//!     &config,
//! )?;
//!
//! for clip in &clips {
//!     println!("{:.1}-{:.1}s ({})", clip.start, clip.end, clip.reason);
//! }
//! ```

pub mod audio;
pub mod config;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod refine;
pub mod scene;
pub mod score;
pub mod select;
pub mod types;
