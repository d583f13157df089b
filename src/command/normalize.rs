//! Canonicalize raw parameter values before they are substituted
//!
//! Dispatch is by parameter name. Every input has a defined output; nothing
//! here can fail.

use crate::core::config::EngineConfig;
use ahash::AHashMap;

/// Level used when a `level` value cannot be interpreted at all
pub const DEFAULT_LEVEL: u8 = 50;

/// Per-parameter value normalizer backed by the app and folder tables
#[derive(Debug, Clone)]
pub struct ParamNormalizer {
    app_names: AHashMap<String, String>,
    known_folders: AHashMap<String, String>,
}

impl Default for ParamNormalizer {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl ParamNormalizer {
    pub fn new(
        app_names: AHashMap<String, String>,
        known_folders: AHashMap<String, String>,
    ) -> Self {
        Self {
            app_names,
            known_folders,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.app_names.clone(), config.known_folders.clone())
    }

    /// Normalize `raw` according to the parameter it is bound to
    pub fn normalize(&self, name: &str, raw: &str) -> String {
        match name {
            "app" => self.app(raw),
            "level" => normalize_level(raw),
            "folder" => self.folder(raw),
            _ => raw.to_string(),
        }
    }

    fn app(&self, raw: &str) -> String {
        match self.app_names.get(&raw.to_lowercase()) {
            Some(display) => display.clone(),
            None => capitalize_words(raw),
        }
    }

    fn folder(&self, raw: &str) -> String {
        match self.known_folders.get(&raw.to_lowercase()) {
            Some(path) => path.clone(),
            None => format!("~/{}", raw),
        }
    }
}

/// Turn a loose level description into a percentage in `0..=100`
///
/// Accepts `"70"`, `"70%"`, keywords like `"half"` or `"max"`, and clamps out
/// of range integers. Anything else falls back to [`DEFAULT_LEVEL`].
pub fn normalize_level(raw: &str) -> String {
    let cleaned = raw.trim().trim_end_matches('%').trim().to_lowercase();

    let level = match cleaned.as_str() {
        "half" => 50,
        "max" | "maximum" | "full" => 100,
        "min" | "minimum" => 0,
        other => parse_clamped(other).unwrap_or(DEFAULT_LEVEL),
    };
    level.to_string()
}

fn parse_clamped(s: &str) -> Option<u8> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n.clamp(0, 100) as u8);
    }

    // Integers too wide for i64 still saturate by sign
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(if negative { 0 } else { 100 })
    } else {
        None
    }
}

/// Upper-case the first letter of each whitespace-delimited word and
/// lower-case the rest. Whitespace is kept as-is.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;

    for ch in s.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}
