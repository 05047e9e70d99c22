//! Human-readable turn messages.

use std::fmt::Write;

use super::types::{Action, AttackReport, TurnEffect};

pub(crate) fn compose(actor: &str, target: &str, action: &Action, effects: &[TurnEffect]) -> String {
    match action {
        Action::Stunned => format!("{actor} is stunned and loses the turn."),
        Action::Rest { stamina_recovered } => {
            format!("{actor} is too exhausted to attack and rests, recovering {stamina_recovered} stamina.")
        }
        Action::Attack(report) if report.dodged => {
            format!("{target} evades {actor}'s attack.")
        }
        Action::Attack(report) => describe_hit(actor, target, report, effects),
    }
}

fn describe_hit(actor: &str, target: &str, report: &AttackReport, effects: &[TurnEffect]) -> String {
    let mut message = format!("{actor} strikes {target} for {} damage", report.damage);

    match (report.critical, report.strikes) {
        (true, Some(strikes)) => {
            let _ = write!(message, " (critical {strikes}-strike combo)");
        }
        (true, None) => message.push_str(" (critical hit)"),
        (false, Some(strikes)) => {
            let _ = write!(message, " ({strikes}-strike combo)");
        }
        (false, None) => {}
    }
    message.push('.');

    if let Some(healed) = report.life_stolen {
        let _ = write!(message, " Life-steal restores {healed} health.");
    }

    let inflicted: Vec<String> = effects
        .iter()
        .filter_map(|effect| match effect {
            TurnEffect::Applied { effect, .. } => Some(effect.kind.to_string()),
            _ => None,
        })
        .collect();
    if !inflicted.is_empty() {
        let _ = write!(message, " {target} suffers {}.", inflicted.join(", "));
    }

    if let Some(counter) = report.counter_damage {
        let _ = write!(message, " {target} counter-attacks for {counter} damage.");
    }

    message
}
