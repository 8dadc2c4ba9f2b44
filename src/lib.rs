//! Aptitude Insight Library
//!
//! This library provides the core functionality for the Aptitude Insight
//! situational-judgement assessment: the question bank and feedback tables,
//! the assessment engine and step flow, the bilingual (English/Hindi)
//! certificate, the transliteration integration and the HTTP handlers.
//!
//! # Modules
//!
//! - `api`: API-layer components.
//! - `core`: Assessment domain logic.
//! - `integrations`: External service integrations.
//! - `assessment`: Question-by-question assessment engine.
//! - `certificate`: Certificate data assembly and per-language panes.
//! - `circuit_breaker`: Circuit breaker for the transliteration service.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `feedback`: Per-answer feedback and score bands.
//! - `handlers`: HTTP request handlers.
//! - `live_input`: Debounced live transliteration of a text field.
//! - `locale`: Date formatting for English and Hindi.
//! - `models`: Core data models.
//! - `question_bank`: The fixed question table.
//! - `regions`: Indian states/UTs and their districts.
//! - `render`: Printable certificate HTML.
//! - `step_controller`: The info → assessment → results flow.
//! - `storage`: Checksummed key/value persistence.
//! - `translations`: Language bundles.
//! - `transliteration`: Transliteration service client.
//! - `validation`: Personal information validation.

pub mod api;
pub mod core;
pub mod integrations;

// Re-export primary modules for shared use in tests and other binaries
pub mod assessment;
pub mod certificate;
pub mod circuit_breaker;
pub mod config;
pub mod errors;
pub mod feedback;
pub mod handlers;
pub mod live_input;
pub mod locale;
pub mod models;
pub mod question_bank;
pub mod regions;
pub mod render;
pub mod step_controller;
pub mod storage;
pub mod translations;
pub mod transliteration;
pub mod validation;
