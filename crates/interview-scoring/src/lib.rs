//! Adaptive scoring and early-termination engine for recorded interview sessions.
//!
//! A submitted transcript of question attempts is reduced to a normalized readiness
//! score, a hiring recommendation, per-question penalty breakdowns and an ordered
//! log of advisory and termination events. The engine is a pure function over one
//! submission; the HTTP router and CSV importer are thin adapters around it.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
pub mod transcript;
