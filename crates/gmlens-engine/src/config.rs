//! Injectable analysis configuration.
//!
//! Lexicons and thresholds are part of the analysis contract, not buried
//! constants: tests substitute reduced lexicons, and every banding cutoff
//! the rules consult lives here with its default value visible.

use gmlens_types::{ActionCategory, StoryPhase};

/// Keyword lexicons consulted by the message classifier.
///
/// Category lexicons are ordered slices, never maps: classification is
/// last-match-wins over this exact declaration order, and phase voting
/// breaks ties by it.
#[derive(Debug, Clone)]
pub struct Lexicons {
    /// Story-phase lexicons in declaration order.
    pub story: &'static [(StoryPhase, &'static [&'static str])],
    /// Action-category lexicons in declaration order.
    pub action: &'static [(ActionCategory, &'static [&'static str])],
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    /// Detected into tags only; never moves the sentiment scalar.
    pub excitement: &'static [&'static str],
    /// Detected into tags only; never moves the sentiment scalar.
    pub confusion: &'static [&'static str],
    /// Generic second-person references counted as player interaction.
    pub second_person: &'static [&'static str],
    /// Substrings that flag a message as a plot hook.
    pub plot_hooks: &'static [&'static str],
}

const STORY_LEXICON: &[(StoryPhase, &[&str])] = &[
    (
        StoryPhase::Setup,
        &["introduc", "begin", "background", "setting", "opening", "arrive", "meet"],
    ),
    (
        StoryPhase::Investigation,
        &["investigate", "search", "clue", "evidence", "examine", "question", "look around"],
    ),
    (
        StoryPhase::Development,
        &["reveal", "discover", "truth", "secret", "twist", "mystery", "surprise"],
    ),
    (
        StoryPhase::Climax,
        &["battle", "showdown", "boss", "final", "confront", "crisis", "duel"],
    ),
    (
        StoryPhase::Resolution,
        &["resolve", "conclude", "ending", "aftermath", "complete", "victory", "defeat"],
    ),
];

const ACTION_LEXICON: &[(ActionCategory, &[&str])] = &[
    (
        ActionCategory::Combat,
        &["attack", "fight", "damage", "strike", "slay", "hit points"],
    ),
    (
        ActionCategory::Magic,
        &["spell", "cast", "magic", "ritual", "mana", "incantation"],
    ),
    (
        ActionCategory::Investigation,
        &["investigate", "observe", "explore", "inspect", "discover", "check"],
    ),
    (
        ActionCategory::Social,
        &["talk", "persuade", "negotiate", "convince", "ask", "chat"],
    ),
    (
        ActionCategory::Movement,
        &["move", "walk", "run", "flee", "approach", "retreat"],
    ),
];

const POSITIVE: &[&str] = &["fun", "great", "awesome", "wonderful", "good", "success"];
const NEGATIVE: &[&str] = &["trouble", "danger", "fail", "bad", "problem", "worried"];
const EXCITEMENT: &[&str] = &["exciting", "thrilling", "tense", "nervous", "thrill"];
const CONFUSION: &[&str] = &["confused", "unclear", "lost", "puzzled", "no idea"];
const SECOND_PERSON: &[&str] = &["you"];
const PLOT_HOOKS: &[&str] = &["mystery", "clue", "secret"];

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            story: STORY_LEXICON,
            action: ACTION_LEXICON,
            positive: POSITIVE,
            negative: NEGATIVE,
            excitement: EXCITEMENT,
            confusion: CONFUSION,
            second_person: SECOND_PERSON,
            plot_hooks: PLOT_HOOKS,
        }
    }
}

/// Banding cutoffs and rule constants.
#[derive(Debug, Clone)]
pub struct Thresholds {
    /// Average message length above which roleplay can be rated high.
    pub high_roleplay_len: f64,
    /// Message count above which roleplay can be rated high.
    pub high_roleplay_count: usize,
    pub medium_roleplay_len: f64,
    pub medium_roleplay_count: usize,

    /// Mean participation above which the table is highly engaged.
    pub high_engagement: f64,
    /// Mean participation below which the table is disengaged.
    pub low_engagement: f64,
    /// Participation rate below which a player counts as quiet.
    pub quiet_participation: f64,
    /// Participation rate above which a player counts as dominating.
    pub dominating_participation: f64,

    pub excellent_interaction: f64,
    pub good_interaction: f64,
    pub poor_interaction: f64,

    /// Baseline message volume: this many messages per pacing block.
    pub expected_messages_per_block: f64,
    /// Pacing block length in milliseconds.
    pub pacing_block_ms: i64,
    pub fast_pacing_factor: f64,
    pub slow_pacing_factor: f64,

    /// Minimum character length for a message to qualify as a key event.
    pub key_event_min_len: usize,
    /// How many of the most recent key events to keep.
    pub key_events_kept: usize,
    /// How many of the most recent plot hooks to keep.
    pub plot_hooks_kept: usize,
    /// How many of the earliest plot hooks count as unresolved.
    pub unresolved_kept: usize,

    /// Numeric dice result at or above which a roll counts as a success.
    pub dice_success: i64,

    /// Elapsed time after which a session still in setup is flagged.
    pub long_setup_ms: i64,
    /// Elapsed time after which a low dice count is flagged.
    pub dice_drought_ms: i64,
    /// Dice count below which the drought rule fires.
    pub dice_drought_rolls: u32,
    /// Success rate below which the frustration rule fires.
    pub low_success_rate: f64,
    /// Roll count that must be exceeded before success rate is judged.
    pub low_success_min_rolls: u32,
    /// Elapsed time after which session length is flagged.
    pub long_session_ms: i64,
    /// Elapsed time after which too few key events is flagged.
    pub stagnation_ms: i64,
    /// Key event count below which the stagnation rule fires.
    pub stagnation_min_events: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_roleplay_len: 50.0,
            high_roleplay_count: 5,
            medium_roleplay_len: 20.0,
            medium_roleplay_count: 2,

            high_engagement: 0.15,
            low_engagement: 0.05,
            quiet_participation: 0.03,
            dominating_participation: 0.3,

            excellent_interaction: 0.3,
            good_interaction: 0.2,
            poor_interaction: 0.1,

            expected_messages_per_block: 30.0,
            pacing_block_ms: 30 * 60 * 1000,
            fast_pacing_factor: 1.5,
            slow_pacing_factor: 0.5,

            key_event_min_len: 100,
            key_events_kept: 5,
            plot_hooks_kept: 3,
            unresolved_kept: 3,

            dice_success: 7,

            long_setup_ms: 60 * 60 * 1000,
            dice_drought_ms: 30 * 60 * 1000,
            dice_drought_rolls: 5,
            low_success_rate: 0.3,
            low_success_min_rolls: 5,
            long_session_ms: 4 * 60 * 60 * 1000,
            stagnation_ms: 90 * 60 * 1000,
            stagnation_min_events: 2,
        }
    }
}

/// Complete configuration for one analysis pass.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub lexicons: Lexicons,
    pub thresholds: Thresholds,
}
