// Engine module - the session analysis pipeline
// This layer sits between the recorded snapshot (types) and presentation

pub mod advice;
pub mod classify;
pub mod config;
pub mod engagement;
pub mod gameplay;
pub mod report;
pub mod sample;
pub mod story;

pub use advice::{RuleContext, suggestion_rules, warning_rules};
pub use classify::{MessageClassification, Sentiment, classify_message};
pub use config::{AnalysisConfig, Lexicons, Thresholds};
pub use sample::sample_session;

use gmlens_types::{SessionAnalysis, SessionData};

// Façade API - stable public interface for presentation layers

/// Analyze a recorded session snapshot with the default configuration.
///
/// Total and pure: identical input yields identical output, and the empty
/// session produces a fully zeroed report rather than an error.
pub fn analyze(session: &SessionData) -> SessionAnalysis {
    analyze_with(session, &AnalysisConfig::default())
}

/// Analyze a recorded session snapshot with explicit lexicons/thresholds.
pub fn analyze_with(session: &SessionData, config: &AnalysisConfig) -> SessionAnalysis {
    // Classify each message exactly once; every downstream analyzer reads
    // from this shared pass.
    let classifications: Vec<MessageClassification> = session
        .chat_logs
        .iter()
        .map(|msg| classify_message(msg, &config.lexicons))
        .collect();

    let player_engagement = engagement::analyze_engagement(session, config);
    let story_progress = story::analyze_story(session, &classifications, config);
    let gameplay_metrics = gameplay::analyze_gameplay(session, &classifications, &config.thresholds);

    let ctx = RuleContext {
        engagement: &player_engagement,
        story: &story_progress,
        gameplay: &gameplay_metrics,
        session_ms: session.session_time,
        thresholds: &config.thresholds,
    };
    let suggestions = advice::evaluate_suggestions(&ctx);
    let warnings = advice::evaluate_warnings(&ctx);

    report::assemble(
        session,
        player_engagement,
        story_progress,
        gameplay_metrics,
        suggestions,
        warnings,
    )
}

/// Render an analysis as the human-readable facilitator report.
pub fn render(analysis: &SessionAnalysis) -> String {
    report::render(analysis)
}
