//! Style Pulse - Live Management-Style Survey
//!
//! This crate collects multiple-choice survey responses during a live
//! training session, classifies each respondent into one of four
//! management-style categories, and aggregates results in real time for a
//! presenter dashboard with an optional AI-generated narrative summary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
