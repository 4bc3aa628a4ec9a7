use crate::schema::{ActionScript, ActionScriptPayload, GameConfig};
use anyhow::Context;
use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads a JSON game config; omitted sections keep the standard tables.
pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    let config: GameConfig = load_json(path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(
        "loaded config {} with {} modifiers",
        path.display(),
        config.modifiers.len()
    );
    Ok(config)
}

pub fn parse_game_config(raw: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(raw).context("parse game config")?;
    config.validate().context("validate game config")?;
    Ok(config)
}

/// Reads either a bare action list or `{ "seed": .., "actions": [..] }`.
pub fn load_action_script(path: &Path) -> anyhow::Result<ActionScript> {
    let payload: ActionScriptPayload = load_json(path)?;
    Ok(payload.into())
}

pub fn parse_action_script(raw: &str) -> anyhow::Result<ActionScript> {
    let payload: ActionScriptPayload =
        serde_json::from_str(raw).context("parse action script")?;
    Ok(payload.into())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
