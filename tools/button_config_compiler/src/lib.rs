//! Compiles `config/buttons.toml` into the threshold constants the
//! `multibutton` crate includes from `OUT_DIR`.

use std::{fmt, fmt::Write as _, fs, path::Path};

use serde::Deserialize;

/// Width limit of the per-button debounce counter.
pub const DEBOUNCE_TICKS_MAX: u8 = 7;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThresholdSection {
    pub debounce_ticks: u8,
    pub short_press_ms: u16,
    pub long_press_ms: u16,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ButtonsFile {
    pub lite: ThresholdSection,
    pub pro: ThresholdSection,
}

#[derive(Debug)]
pub enum ConfigCompilerError {
    Io { path: String, message: String },
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigCompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "failed to read {path}: {message}"),
            Self::Parse(message) => write!(f, "invalid toml: {message}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl std::error::Error for ConfigCompilerError {}

pub fn parse_buttons_str(text: &str) -> Result<ButtonsFile, ConfigCompilerError> {
    toml::from_str(text).map_err(|e| ConfigCompilerError::Parse(e.to_string()))
}

pub fn parse_buttons_file(path: &Path) -> Result<ButtonsFile, ConfigCompilerError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigCompilerError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_buttons_str(&text)
}

fn validate_section(name: &str, section: &ThresholdSection) -> Result<(), ConfigCompilerError> {
    if section.debounce_ticks == 0 || section.debounce_ticks > DEBOUNCE_TICKS_MAX {
        return Err(ConfigCompilerError::Invalid(format!(
            "{name}.debounce_ticks must be in 1..={DEBOUNCE_TICKS_MAX}"
        )));
    }
    if section.short_press_ms == 0 {
        return Err(ConfigCompilerError::Invalid(format!(
            "{name}.short_press_ms must be > 0"
        )));
    }
    if section.long_press_ms <= section.short_press_ms {
        return Err(ConfigCompilerError::Invalid(format!(
            "{name}.long_press_ms must be > {name}.short_press_ms"
        )));
    }
    // Double-click detection degrades once the debounce window eats more
    // than half of the short window.
    if u16::from(section.debounce_ticks) * 2 > section.short_press_ms {
        return Err(ConfigCompilerError::Invalid(format!(
            "{name}.debounce_ticks must be <= {name}.short_press_ms / 2"
        )));
    }
    Ok(())
}

pub fn validate_config(config: &ButtonsFile) -> Result<(), ConfigCompilerError> {
    validate_section("lite", &config.lite)?;
    validate_section("pro", &config.pro)
}

fn render_section(out: &mut String, const_name: &str, section: &ThresholdSection) {
    let _ = writeln!(out, "pub const {const_name}: Thresholds = Thresholds {{");
    let _ = writeln!(out, "    debounce_ticks: {},", section.debounce_ticks);
    let _ = writeln!(out, "    short_press_ms: {},", section.short_press_ms);
    let _ = writeln!(out, "    long_press_ms: {},", section.long_press_ms);
    let _ = writeln!(out, "}};");
}

pub fn render_generated_config(config: &ButtonsFile) -> String {
    let mut out = String::new();
    out.push_str("// @generated by button_config_compiler. Do not edit.\n\n");
    render_section(&mut out, "LITE_THRESHOLDS", &config.lite);
    out.push('\n');
    render_section(&mut out, "DEFAULT_PRO_THRESHOLDS", &config.pro);
    out
}

pub fn generate_from_path(path: &Path) -> Result<String, ConfigCompilerError> {
    let config = parse_buttons_file(path)?;
    validate_config(&config)?;
    Ok(render_generated_config(&config))
}
