use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Ordered classification vocabulary
// ==========================================

/// Coarse narrative stage of a session.
///
/// The declaration order is load-bearing: message classification keeps the
/// last phase (in this order) whose lexicon matched, and phase voting breaks
/// ties in favor of the earliest-declared phase. Keep `ALL` in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryPhase {
    Setup,
    Investigation,
    Development,
    Climax,
    Resolution,
}

impl StoryPhase {
    /// All phases in declaration order.
    pub const ALL: [StoryPhase; 5] = [
        StoryPhase::Setup,
        StoryPhase::Investigation,
        StoryPhase::Development,
        StoryPhase::Climax,
        StoryPhase::Resolution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoryPhase::Setup => "setup",
            StoryPhase::Investigation => "investigation",
            StoryPhase::Development => "development",
            StoryPhase::Climax => "climax",
            StoryPhase::Resolution => "resolution",
        }
    }
}

impl fmt::Display for StoryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gameplay category detected in chat text.
///
/// Like [`StoryPhase`], the declaration order is the classification
/// tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Combat,
    Magic,
    Investigation,
    Social,
    Movement,
}

impl ActionCategory {
    /// All categories in declaration order.
    pub const ALL: [ActionCategory; 5] = [
        ActionCategory::Combat,
        ActionCategory::Magic,
        ActionCategory::Investigation,
        ActionCategory::Social,
        ActionCategory::Movement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Combat => "combat",
            ActionCategory::Magic => "magic",
            ActionCategory::Investigation => "investigation",
            ActionCategory::Social => "social",
            ActionCategory::Movement => "movement",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// Analysis report
// ==========================================

/// Complete diagnostic report for one session snapshot.
///
/// Produced fresh on every analysis call; a pure function of the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAnalysis {
    pub overview: SessionOverview,
    pub player_engagement: PlayerEngagementAnalysis,
    pub story_progress: StoryProgressAnalysis,
    pub gameplay_metrics: GameplayMetrics,
    pub suggestions: Vec<Suggestion>,
    pub warnings: Vec<Warning>,
}

/// Basic whole-session counts. All rates are zero when their denominator is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverview {
    /// Total elapsed session time in milliseconds.
    pub total_duration: i64,
    pub total_messages: usize,
    pub total_actions: usize,
    /// Non-GM players on the roster.
    pub active_players: usize,
    /// Mean message length in characters.
    pub average_message_length: f64,
    /// Messages per minute.
    pub message_frequency: f64,
}

/// Participation metrics per player and across the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEngagementAnalysis {
    pub overall: EngagementLevel,
    /// Per-player metrics keyed by character name. The GM never appears.
    pub individual: BTreeMap<String, PlayerMetrics>,
    /// Character names with participation below the quiet threshold.
    pub quiet_players: Vec<String>,
    /// Character names with participation above the dominating threshold.
    pub dominating_players: Vec<String>,
    pub interaction_quality: InteractionQuality,
}

/// Engagement metrics for a single non-GM player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMetrics {
    pub message_count: usize,
    pub action_count: usize,
    pub average_message_length: f64,
    /// This player's share of all session messages.
    pub participation_rate: f64,
    pub roleplay_quality: RoleplayQuality,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_activity: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "low",
            EngagementLevel::Medium => "medium",
            EngagementLevel::High => "high",
        }
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-tier judgment of a player's message length and volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleplayQuality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl InteractionQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionQuality::Poor => "poor",
            InteractionQuality::Fair => "fair",
            InteractionQuality::Good => "good",
            InteractionQuality::Excellent => "excellent",
        }
    }
}

impl fmt::Display for InteractionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrative phase, pacing, and extracted story beats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryProgressAnalysis {
    pub current_phase: StoryPhase,
    pub progress_rate: PacingRate,
    /// Most recent notable messages, newest last. At most five.
    pub key_events: Vec<String>,
    /// Most recent mystery-flavored hooks, newest last. At most three.
    pub plot_hooks: Vec<String>,
    /// Earliest hooks raised in the session. At most three. Deliberately
    /// derived from the untruncated hook list, so it can differ from
    /// `plot_hooks`.
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingRate {
    Slow,
    Normal,
    Fast,
}

impl PacingRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            PacingRate::Slow => "slow",
            PacingRate::Normal => "normal",
            PacingRate::Fast => "fast",
        }
    }
}

impl fmt::Display for PacingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dice and action-category tallies.
///
/// Category counters are fed by both chat classification and explicit action
/// records; an event logged through both channels counts twice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameplayMetrics {
    pub dice_rolls: u32,
    /// Successful rolls over total rolls; exactly 0 with no rolls.
    pub success_rate: f64,
    pub combat_encounters: u32,
    pub investigation_actions: u32,
    pub social_interactions: u32,
    pub magic_usage: u32,
}

// ==========================================
// Advisories
// ==========================================

/// Advisory emitted by the suggestion rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub description: String,
    /// Concrete step the facilitator can take right now.
    pub actionable: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Gameplay,
    Story,
    PlayerEngagement,
    Pacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory emitted by the warning rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    PlayerDisengagement,
    StoryStagnation,
    TimeManagement,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Major => "major",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
