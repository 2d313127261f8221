use blocksolve::core::io::traits::MalformedLinePolicy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidFormat(String),

    #[error(
        "Unsupported configuration key for --set: '{0}'. Expected one of 'discovery.min-overlap', 'absorption.enabled', 'output.weight-headers', 'on-malformed'."
    )]
    UnknownKey(String),

    #[error("Invalid {expected} value for '{key}': '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// A single configuration override given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetValue {
    MinOverlap(usize),
    AbsorptionEnabled(bool),
    WeightHeaders(bool),
    OnMalformed(MalformedLinePolicy),
}

fn invalid(key: &str, value: &str, expected: &'static str) -> ParseError {
    ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    value.parse().map_err(|_| invalid(key, value, "boolean"))
}

fn parse_policy(key: &str, value: &str) -> Result<MalformedLinePolicy, ParseError> {
    match value {
        "abort" => Ok(MalformedLinePolicy::Abort),
        "skip" => Ok(MalformedLinePolicy::Skip),
        _ => Err(invalid(key, value, "policy ('abort' or 'skip')")),
    }
}

pub fn parse_set_value(kv_pair: &str) -> Result<SetValue, ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidFormat(kv_pair.to_string()))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() {
        return Err(ParseError::InvalidFormat(kv_pair.to_string()));
    }

    match key {
        "discovery.min-overlap" => value
            .parse()
            .map(SetValue::MinOverlap)
            .map_err(|_| invalid(key, value, "integer")),
        "absorption.enabled" => parse_bool(key, value).map(SetValue::AbsorptionEnabled),
        "output.weight-headers" => parse_bool(key, value).map(SetValue::WeightHeaders),
        "on-malformed" => parse_policy(key, value).map(SetValue::OnMalformed),
        _ => Err(ParseError::UnknownKey(key.to_string())),
    }
}
