//! Suggestion and warning rule engines.
//!
//! Each rule is an independent predicate plus a fixed payload, held in a
//! declaration-ordered list. Every rule is evaluated on every pass; each
//! match emits exactly one advisory, so output order mirrors rule order.

use gmlens_types::{
    EngagementLevel, GameplayMetrics, InteractionQuality, PacingRate, PlayerEngagementAnalysis,
    Priority, Severity, StoryPhase, StoryProgressAnalysis, Suggestion, SuggestionKind, Warning,
    WarningKind,
};

use crate::config::Thresholds;

/// Everything the advisory rules are allowed to look at.
pub struct RuleContext<'a> {
    pub engagement: &'a PlayerEngagementAnalysis,
    pub story: &'a StoryProgressAnalysis,
    pub gameplay: &'a GameplayMetrics,
    /// Elapsed session time in milliseconds.
    pub session_ms: i64,
    pub thresholds: &'a Thresholds,
}

type PredicateFn = Box<dyn Fn(&RuleContext) -> bool>;
type DescribeFn = Box<dyn Fn(&RuleContext) -> String>;

pub struct SuggestionRule {
    kind: SuggestionKind,
    priority: Priority,
    predicate: PredicateFn,
    describe: DescribeFn,
    actionable: &'static str,
}

impl SuggestionRule {
    fn emit(&self, ctx: &RuleContext) -> Option<Suggestion> {
        (self.predicate)(ctx).then(|| Suggestion {
            kind: self.kind,
            priority: self.priority,
            description: (self.describe)(ctx),
            actionable: self.actionable.to_string(),
        })
    }
}

pub struct WarningRule {
    kind: WarningKind,
    severity: Severity,
    predicate: PredicateFn,
    describe: DescribeFn,
    recommendation: &'static str,
}

impl WarningRule {
    fn emit(&self, ctx: &RuleContext) -> Option<Warning> {
        (self.predicate)(ctx).then(|| Warning {
            kind: self.kind,
            severity: self.severity,
            description: (self.describe)(ctx),
            recommendation: self.recommendation.to_string(),
        })
    }
}

/// The suggestion rule set, in emission order.
pub fn suggestion_rules() -> Vec<SuggestionRule> {
    vec![
        SuggestionRule {
            kind: SuggestionKind::PlayerEngagement,
            priority: Priority::High,
            predicate: Box::new(|ctx| ctx.engagement.overall == EngagementLevel::Low),
            describe: Box::new(|_| "Player participation is dropping".to_string()),
            actionable: "Ask players direct questions or set up individual scenes",
        },
        SuggestionRule {
            kind: SuggestionKind::PlayerEngagement,
            priority: Priority::Medium,
            predicate: Box::new(|ctx| !ctx.engagement.quiet_players.is_empty()),
            describe: Box::new(|ctx| {
                format!(
                    "{} barely participated recently",
                    ctx.engagement.quiet_players.join(", ")
                )
            }),
            actionable: "Offer scenes or choices that put these players in the spotlight",
        },
        SuggestionRule {
            kind: SuggestionKind::PlayerEngagement,
            priority: Priority::Medium,
            predicate: Box::new(|ctx| {
                ctx.engagement.interaction_quality == InteractionQuality::Poor
            }),
            describe: Box::new(|_| "Players are rarely interacting with each other".to_string()),
            actionable: "Present a problem the group must solve together, or one that splits opinion",
        },
        SuggestionRule {
            kind: SuggestionKind::Pacing,
            priority: Priority::Medium,
            predicate: Box::new(|ctx| ctx.story.progress_rate == PacingRate::Slow),
            describe: Box::new(|_| "Story progress has slowed down".to_string()),
            actionable: "Introduce a fresh clue or event to accelerate the plot",
        },
        SuggestionRule {
            kind: SuggestionKind::Story,
            priority: Priority::High,
            predicate: Box::new(|ctx| {
                ctx.story.current_phase == StoryPhase::Setup
                    && ctx.session_ms > ctx.thresholds.long_setup_ms
            }),
            describe: Box::new(|_| "The introduction is running long".to_string()),
            actionable: "Consider bringing the main event or investigation forward",
        },
        SuggestionRule {
            kind: SuggestionKind::Gameplay,
            priority: Priority::Low,
            predicate: Box::new(|ctx| {
                ctx.gameplay.dice_rolls < ctx.thresholds.dice_drought_rolls
                    && ctx.session_ms > ctx.thresholds.dice_drought_ms
            }),
            describe: Box::new(|_| "Few dice rolls so far; game mechanics are underused".to_string()),
            actionable: "Create more opportunities for skill checks and ability tests",
        },
        SuggestionRule {
            kind: SuggestionKind::Gameplay,
            priority: Priority::Medium,
            predicate: Box::new(|ctx| {
                ctx.gameplay.success_rate < ctx.thresholds.low_success_rate
                    && ctx.gameplay.dice_rolls > ctx.thresholds.low_success_min_rolls
            }),
            describe: Box::new(|_| {
                "Check success rate is low; players may be getting frustrated".to_string()
            }),
            actionable: "Adjust target numbers or suggest alternative approaches",
        },
    ]
}

/// The warning rule set, in emission order.
pub fn warning_rules() -> Vec<WarningRule> {
    vec![
        WarningRule {
            kind: WarningKind::PlayerDisengagement,
            severity: Severity::Moderate,
            predicate: Box::new(|ctx| !ctx.engagement.dominating_players.is_empty()),
            describe: Box::new(|ctx| {
                format!(
                    "{} may be dominating the session",
                    ctx.engagement.dominating_players.join(", ")
                )
            }),
            recommendation: "Deliberately hand speaking opportunities to the other players",
        },
        WarningRule {
            kind: WarningKind::TimeManagement,
            severity: Severity::Minor,
            predicate: Box::new(|ctx| ctx.session_ms > ctx.thresholds.long_session_ms),
            describe: Box::new(|_| "The session is running long".to_string()),
            recommendation: "Look for a natural break point to pause or wrap up",
        },
        WarningRule {
            kind: WarningKind::StoryStagnation,
            severity: Severity::Moderate,
            predicate: Box::new(|ctx| {
                ctx.story.key_events.len() < ctx.thresholds.stagnation_min_events
                    && ctx.session_ms > ctx.thresholds.stagnation_ms
            }),
            describe: Box::new(|_| "The story is not visibly moving forward".to_string()),
            recommendation: "Consider a new development or introducing an NPC",
        },
    ]
}

/// Run every suggestion rule; no short-circuiting between rules.
pub fn evaluate_suggestions(ctx: &RuleContext) -> Vec<Suggestion> {
    suggestion_rules()
        .iter()
        .filter_map(|rule| rule.emit(ctx))
        .collect()
}

/// Run every warning rule; no short-circuiting between rules.
pub fn evaluate_warnings(ctx: &RuleContext) -> Vec<Warning> {
    warning_rules()
        .iter()
        .filter_map(|rule| rule.emit(ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn engagement() -> PlayerEngagementAnalysis {
        PlayerEngagementAnalysis {
            overall: EngagementLevel::Medium,
            individual: BTreeMap::new(),
            quiet_players: Vec::new(),
            dominating_players: Vec::new(),
            interaction_quality: InteractionQuality::Fair,
        }
    }

    fn story() -> StoryProgressAnalysis {
        StoryProgressAnalysis {
            current_phase: StoryPhase::Development,
            progress_rate: PacingRate::Normal,
            key_events: vec!["a".to_string(), "b".to_string()],
            plot_hooks: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    fn gameplay() -> GameplayMetrics {
        GameplayMetrics {
            dice_rolls: 10,
            success_rate: 0.6,
            ..GameplayMetrics::default()
        }
    }

    #[test]
    fn healthy_session_emits_nothing() {
        let engagement = engagement();
        let story = story();
        let gameplay = gameplay();
        let thresholds = Thresholds::default();
        let ctx = RuleContext {
            engagement: &engagement,
            story: &story,
            gameplay: &gameplay,
            session_ms: 45 * 60 * 1000,
            thresholds: &thresholds,
        };
        assert!(evaluate_suggestions(&ctx).is_empty());
        assert!(evaluate_warnings(&ctx).is_empty());
    }

    #[test]
    fn quiet_players_are_named_in_the_suggestion() {
        let mut engagement = engagement();
        engagement.quiet_players = vec!["Dorn".to_string(), "Vex".to_string()];
        let story = story();
        let gameplay = gameplay();
        let thresholds = Thresholds::default();
        let ctx = RuleContext {
            engagement: &engagement,
            story: &story,
            gameplay: &gameplay,
            session_ms: 0,
            thresholds: &thresholds,
        };

        let suggestions = evaluate_suggestions(&ctx);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::PlayerEngagement);
        assert_eq!(suggestions[0].priority, Priority::Medium);
        assert!(suggestions[0].description.contains("Dorn, Vex"));
    }

    #[test]
    fn independent_rules_all_fire_in_declaration_order() {
        let mut engagement = engagement();
        engagement.overall = EngagementLevel::Low;
        engagement.interaction_quality = InteractionQuality::Poor;
        let mut story = story();
        story.progress_rate = PacingRate::Slow;
        let mut gameplay = gameplay();
        gameplay.dice_rolls = 2;
        gameplay.success_rate = 0.0;
        let thresholds = Thresholds::default();
        let ctx = RuleContext {
            engagement: &engagement,
            story: &story,
            gameplay: &gameplay,
            session_ms: 40 * 60 * 1000,
            thresholds: &thresholds,
        };

        let suggestions = evaluate_suggestions(&ctx);
        let kinds: Vec<SuggestionKind> = suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionKind::PlayerEngagement, // low overall
                SuggestionKind::PlayerEngagement, // poor interaction
                SuggestionKind::Pacing,           // slow pacing
                SuggestionKind::Gameplay,         // dice drought
            ]
        );
        // success-rate rule needs more than 5 rolls, so it stays silent.
        assert_eq!(suggestions.len(), 4);
    }

    #[test]
    fn setup_phase_after_an_hour_is_flagged_high_priority() {
        let engagement = engagement();
        let mut story = story();
        story.current_phase = StoryPhase::Setup;
        let gameplay = gameplay();
        let thresholds = Thresholds::default();
        let ctx = RuleContext {
            engagement: &engagement,
            story: &story,
            gameplay: &gameplay,
            session_ms: 61 * 60 * 1000,
            thresholds: &thresholds,
        };

        let suggestions = evaluate_suggestions(&ctx);
        assert!(suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::Story && s.priority == Priority::High));
    }

    #[test]
    fn warning_rules_cover_domination_length_and_stagnation() {
        let mut engagement = engagement();
        engagement.dominating_players = vec!["Mira".to_string()];
        let mut story = story();
        story.key_events = Vec::new();
        let gameplay = gameplay();
        let thresholds = Thresholds::default();
        let ctx = RuleContext {
            engagement: &engagement,
            story: &story,
            gameplay: &gameplay,
            session_ms: 5 * 60 * 60 * 1000,
            thresholds: &thresholds,
        };

        let warnings = evaluate_warnings(&ctx);
        let kinds: Vec<WarningKind> = warnings.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WarningKind::PlayerDisengagement,
                WarningKind::TimeManagement,
                WarningKind::StoryStagnation,
            ]
        );
        assert!(warnings[0].description.contains("Mira"));
        assert_eq!(warnings[1].severity, Severity::Minor);
    }

    #[test]
    fn low_success_rate_needs_enough_rolls() {
        let engagement = engagement();
        let story = story();
        let mut gameplay = gameplay();
        gameplay.success_rate = 0.2;
        gameplay.dice_rolls = 5;
        let thresholds = Thresholds::default();
        let ctx = RuleContext {
            engagement: &engagement,
            story: &story,
            gameplay: &gameplay,
            session_ms: 0,
            thresholds: &thresholds,
        };
        // Exactly five rolls is not "more than five".
        assert!(evaluate_suggestions(&ctx).is_empty());

        let mut gameplay = gameplay.clone();
        gameplay.dice_rolls = 6;
        let ctx = RuleContext {
            engagement: &engagement,
            story: &story,
            gameplay: &gameplay,
            session_ms: 0,
            thresholds: &thresholds,
        };
        let suggestions = evaluate_suggestions(&ctx);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].priority, Priority::Medium);
    }
}
