use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use libcoalign::align::structs::AlignParams;
use serde_json::Value;
use thiserror::Error;

/// A bound that a config option's value must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    GreaterThan(i64),
}

impl Constraint {
    fn holds(&self, value: i64) -> bool {
        match self {
            Constraint::GreaterThan(bound) => value > *bound,
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::GreaterThan(bound) => write!(f, "> {bound}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing config options: {}", .0.join(", "))]
    MissingOption(Vec<String>),
    #[error("{option} is type {actual}, but should be type int")]
    OptionType { option: String, actual: &'static str },
    #[error("{option} = {value}, but should be {constraint}")]
    OptionValue {
        option: String,
        value: i64,
        constraint: Constraint,
    },
}

/// Every option a config file must define, with its value constraint.
///
/// Presence is checked for all options before any individual option is
/// inspected, so a config that is missing several options reports them
/// all at once. After that, options are validated in table order.
const REQUIRED_OPTIONS: [(&str, Option<Constraint>); 5] = [
    ("SAME", None),
    ("DIFF", None),
    ("GP", None),
    ("MAX_NUMBER_PATHS", Some(Constraint::GreaterThan(0))),
    ("MAX_SEQ_LENGTH", Some(Constraint::GreaterThan(0))),
];

pub fn load_config(path: &impl AsRef<Path>) -> Result<AlignParams> {
    let text = fs::read_to_string(path).with_context(|| {
        format!(
            "failed to read config file: {}",
            path.as_ref().to_string_lossy()
        )
    })?;

    parse_config(&text)
        .with_context(|| format!("invalid config file: {}", path.as_ref().to_string_lossy()))
}

pub fn parse_config(text: &str) -> Result<AlignParams> {
    let root: Value = serde_json::from_str(text).context("config is not valid JSON")?;

    let map = match root.as_object() {
        Some(map) => map,
        None => bail!("config root is not a JSON object"),
    };

    let missing: Vec<String> = REQUIRED_OPTIONS
        .iter()
        .filter(|(option, _)| !map.contains_key(*option))
        .map(|(option, _)| option.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ConfigError::MissingOption(missing).into());
    }

    let mut values = [0i64; REQUIRED_OPTIONS.len()];
    for (idx, (option, constraint)) in REQUIRED_OPTIONS.iter().enumerate() {
        let value = &map[*option];

        let int_value = match value.as_i64() {
            Some(int_value) => int_value,
            None => {
                return Err(ConfigError::OptionType {
                    option: option.to_string(),
                    actual: json_type_name(value),
                }
                .into())
            }
        };

        if let Some(constraint) = constraint {
            if !constraint.holds(int_value) {
                return Err(ConfigError::OptionValue {
                    option: option.to_string(),
                    value: int_value,
                    constraint: *constraint,
                }
                .into());
            }
        }

        values[idx] = int_value;
    }

    Ok(AlignParams {
        match_score: values[0],
        mismatch_score: values[1],
        gap_score: values[2],
        max_paths: values[3] as usize,
        max_seq_length: values[4] as usize,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
