use gmlens_types::{
    EngagementLevel, InteractionQuality, PacingRate, Priority, SessionAnalysis, Severity,
};
use owo_colors::OwoColorize;

/// Compact colored summary of an analysis, for interactive use.
/// The full plain-text report lives in the engine's renderer.
pub fn print_summary(analysis: &SessionAnalysis) {
    let overview = &analysis.overview;
    println!("{}", "=== Session Summary ===".bold());
    println!();
    println!(
        "  {} messages, {} actions, {} active players over {}",
        overview.total_messages,
        overview.total_actions,
        overview.active_players,
        format_duration(overview.total_duration)
    );
    println!(
        "  {:.1} messages/min, {} chars average",
        overview.message_frequency,
        overview.average_message_length.round() as i64
    );
    println!();

    let engagement = &analysis.player_engagement;
    println!(
        "  Engagement:  {}  (interaction {})",
        engagement_colored(engagement.overall),
        interaction_colored(engagement.interaction_quality)
    );
    if !engagement.quiet_players.is_empty() {
        println!(
            "  Quiet:       {}",
            engagement.quiet_players.join(", ").yellow()
        );
    }
    if !engagement.dominating_players.is_empty() {
        println!(
            "  Dominating:  {}",
            engagement.dominating_players.join(", ").yellow()
        );
    }

    let story = &analysis.story_progress;
    println!(
        "  Story:       {} phase, {} pacing",
        story.current_phase.as_str().bright_blue(),
        pacing_colored(story.progress_rate)
    );

    let gameplay = &analysis.gameplay_metrics;
    println!(
        "  Dice:        {} rolls, {:.1}% success",
        gameplay.dice_rolls,
        gameplay.success_rate * 100.0
    );

    if !analysis.warnings.is_empty() {
        println!();
        println!("{}", "Warnings".bold());
        for warning in &analysis.warnings {
            println!(
                "  {} {}",
                severity_tag(warning.severity),
                warning.description
            );
            println!("    -> {}", warning.recommendation);
        }
    }

    if !analysis.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions".bold());
        for suggestion in &analysis.suggestions {
            println!(
                "  {} {}",
                priority_tag(suggestion.priority),
                suggestion.description
            );
            println!("    -> {}", suggestion.actionable);
        }
    }
}

fn engagement_colored(level: EngagementLevel) -> String {
    match level {
        EngagementLevel::Low => level.as_str().red().to_string(),
        EngagementLevel::Medium => level.as_str().yellow().to_string(),
        EngagementLevel::High => level.as_str().green().to_string(),
    }
}

fn interaction_colored(quality: InteractionQuality) -> String {
    match quality {
        InteractionQuality::Poor => quality.as_str().red().to_string(),
        InteractionQuality::Fair => quality.as_str().yellow().to_string(),
        InteractionQuality::Good | InteractionQuality::Excellent => {
            quality.as_str().green().to_string()
        }
    }
}

fn pacing_colored(rate: PacingRate) -> String {
    match rate {
        PacingRate::Normal => rate.as_str().green().to_string(),
        PacingRate::Slow | PacingRate::Fast => rate.as_str().yellow().to_string(),
    }
}

fn severity_tag(severity: Severity) -> String {
    let tag = format!("[{}]", severity.as_str());
    match severity {
        Severity::Minor => tag.yellow().to_string(),
        Severity::Moderate => tag.red().to_string(),
        Severity::Major => tag.red().bold().to_string(),
    }
}

fn priority_tag(priority: Priority) -> String {
    let tag = format!("[{}]", priority.as_str());
    match priority {
        Priority::Low => tag,
        Priority::Medium => tag.yellow().to_string(),
        Priority::High => tag.red().bold().to_string(),
    }
}

fn format_duration(ms: i64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    format!("{}h {}m", hours, minutes)
}
