use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Immutable snapshot of a recorded tabletop session.
///
/// This is the whole input to the analysis pipeline: the chat log, the
/// structured player actions, the roster, and the elapsed session time.
/// Capture tools emit this as camelCase JSON with epoch-millisecond
/// timestamps; missing arrays are treated as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// Chat messages in log order.
    #[serde(default)]
    pub chat_logs: Vec<ChatMessage>,
    /// Discrete player actions in log order.
    #[serde(default)]
    pub player_actions: Vec<PlayerAction>,
    /// Total elapsed session time in milliseconds.
    #[serde(default)]
    pub session_time: i64,
    /// Session roster, including the GM.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Scenario metadata. Carried through, never consumed by the analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_info: Option<ScenarioInfo>,
}

impl SessionData {
    /// Deserialize a session snapshot from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a session snapshot from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// Single chat message in the session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// When the message was sent.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Display name of the sender. For player characters this is the
    /// character name, which is the join key back to the roster.
    pub player_name: String,
    /// Message text.
    pub message: String,
    /// Message channel.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Dice outcome, present only on dice messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice_result: Option<DiceResult>,
}

/// Chat message channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// In-character speech.
    Ic,
    /// Out-of-character table talk.
    Ooc,
    /// System and GM announcements.
    System,
    /// Dice roll message.
    Dice,
}

/// Outcome of a rolled dice formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceResult {
    /// Dice formula as entered (e.g. "2d6+3").
    pub formula: String,
    /// Final numeric result.
    pub result: i64,
    /// Roll breakdown (e.g. "[3,4]+3=9").
    pub details: String,
}

/// Discrete player action recorded outside the chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAction {
    /// When the action was taken.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Character name of the acting player.
    pub player_name: String,
    /// What kind of action this was.
    pub action_type: ActionKind,
    /// What the action targeted, if anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Free-form result text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Whether the action succeeded, when the table tracked it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Structured action vocabulary used by capture tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Move,
    Attack,
    Skill,
    Magic,
    Interaction,
    Investigation,
}

/// Roster entry for one participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Real display name.
    pub name: String,
    /// Character name. Unique within a session; messages and actions are
    /// attributed to a player by matching this name.
    pub character_name: String,
    /// Whether this participant is the facilitator. The GM is excluded
    /// from all per-player engagement statistics.
    #[serde(rename = "isGM")]
    pub is_gm: bool,
    /// When the player joined the session.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub join_time: DateTime<Utc>,
    /// Last observed activity.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_activity: DateTime<Utc>,
}

/// Scenario metadata supplied by the capture tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInfo {
    pub title: String,
    pub genre: String,
    /// Expected total duration in milliseconds.
    pub expected_duration: i64,
    /// Phase the GM believes the scenario is in.
    pub current_phase: String,
}
