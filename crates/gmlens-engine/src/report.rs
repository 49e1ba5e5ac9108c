//! Report assembly and the human-readable rendering.

use std::fmt::Write as _;

use gmlens_types::{
    GameplayMetrics, PlayerEngagementAnalysis, SessionAnalysis, SessionData, SessionOverview,
    StoryProgressAnalysis, Suggestion, Warning,
};

const RULE: &str =
    "=======================================================================";

/// Compose the final report from the already-computed analyses.
pub fn assemble(
    session: &SessionData,
    player_engagement: PlayerEngagementAnalysis,
    story_progress: StoryProgressAnalysis,
    gameplay_metrics: GameplayMetrics,
    suggestions: Vec<Suggestion>,
    warnings: Vec<Warning>,
) -> SessionAnalysis {
    SessionAnalysis {
        overview: build_overview(session),
        player_engagement,
        story_progress,
        gameplay_metrics,
        suggestions,
        warnings,
    }
}

fn build_overview(session: &SessionData) -> SessionOverview {
    let total_messages = session.chat_logs.len();
    let average_message_length = if total_messages > 0 {
        session
            .chat_logs
            .iter()
            .map(|msg| msg.message.chars().count())
            .sum::<usize>() as f64
            / total_messages as f64
    } else {
        0.0
    };
    let message_frequency = if session.session_time > 0 {
        total_messages as f64 / (session.session_time as f64 / 60_000.0)
    } else {
        0.0
    };

    SessionOverview {
        total_duration: session.session_time,
        total_messages,
        total_actions: session.player_actions.len(),
        active_players: session.players.iter().filter(|p| !p.is_gm).count(),
        average_message_length,
        message_frequency,
    }
}

/// Render the report as display text for the facilitator.
///
/// A convenience view over [`SessionAnalysis`], not a wire contract.
pub fn render(analysis: &SessionAnalysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Session Analysis Report");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    let overview = &analysis.overview;
    let _ = writeln!(out, "Basic statistics");
    let _ = writeln!(out, "  Session length:        {}", format_duration(overview.total_duration));
    let _ = writeln!(out, "  Total messages:        {}", overview.total_messages);
    let _ = writeln!(out, "  Total actions:         {}", overview.total_actions);
    let _ = writeln!(out, "  Active players:        {}", overview.active_players);
    let _ = writeln!(
        out,
        "  Avg message length:    {} chars",
        overview.average_message_length.round() as i64
    );
    let _ = writeln!(
        out,
        "  Message frequency:     {:.1}/min",
        overview.message_frequency
    );
    let _ = writeln!(out);

    let engagement = &analysis.player_engagement;
    let _ = writeln!(out, "Player engagement");
    let _ = writeln!(out, "  Overall:               {}", engagement.overall);
    let _ = writeln!(out, "  Interaction quality:   {}", engagement.interaction_quality);
    if !engagement.quiet_players.is_empty() {
        let _ = writeln!(
            out,
            "  Quiet players:         {}",
            engagement.quiet_players.join(", ")
        );
    }
    if !engagement.dominating_players.is_empty() {
        let _ = writeln!(
            out,
            "  Dominating players:    {}",
            engagement.dominating_players.join(", ")
        );
    }
    let _ = writeln!(out);

    let story = &analysis.story_progress;
    let _ = writeln!(out, "Story progress");
    let _ = writeln!(out, "  Current phase:         {}", story.current_phase);
    let _ = writeln!(out, "  Pacing:                {}", story.progress_rate);
    let _ = writeln!(out, "  Key events:            {}", story.key_events.len());
    let _ = writeln!(out, "  Unresolved hooks:      {}", story.unresolved.len());
    let _ = writeln!(out);

    let gameplay = &analysis.gameplay_metrics;
    let _ = writeln!(out, "Gameplay metrics");
    let _ = writeln!(out, "  Dice rolls:            {}", gameplay.dice_rolls);
    let _ = writeln!(
        out,
        "  Success rate:          {:.1}%",
        gameplay.success_rate * 100.0
    );
    let _ = writeln!(out, "  Combat encounters:     {}", gameplay.combat_encounters);
    let _ = writeln!(out, "  Investigation actions: {}", gameplay.investigation_actions);
    let _ = writeln!(out, "  Social interactions:   {}", gameplay.social_interactions);
    let _ = writeln!(out, "  Magic usage:           {}", gameplay.magic_usage);

    if !analysis.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings");
        for warning in &analysis.warnings {
            let _ = writeln!(out, "  [{}] {}", warning.severity, warning.description);
            let _ = writeln!(out, "  -> {}", warning.recommendation);
        }
    }

    if !analysis.suggestions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Suggestions");
        for suggestion in &analysis.suggestions {
            let _ = writeln!(
                out,
                "  [{}] {}",
                suggestion.priority.as_str().to_uppercase(),
                suggestion.description
            );
            let _ = writeln!(out, "  -> {}", suggestion.actionable);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULE);
    out
}

fn format_duration(ms: i64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    format!("{}h {}m", hours, minutes)
}
