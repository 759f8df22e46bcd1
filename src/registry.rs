use chrono::{DateTime, FixedOffset, Utc};

use crate::app::{CommandOutcome, LineKind, TerminalLine};
use crate::content;
use crate::storage::{load_history, Storage};

/// East Africa Time, UTC+3 with no daylight saving.
const EAT_OFFSET_SECS: i32 = 3 * 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CommandKey {
    Help,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Clear,
    Home,
    History,
    Themes,
    Sudo,
    Whoami,
    Date,
    Ls,
    Pwd,
}

/// Every registered token. Aliases share a key.
pub(crate) const REGISTRY: &[(&str, CommandKey)] = &[
    ("help", CommandKey::Help),
    ("?", CommandKey::Help),
    ("commands", CommandKey::Help),
    ("about", CommandKey::About),
    ("skills", CommandKey::Skills),
    ("projects", CommandKey::Projects),
    ("experience", CommandKey::Experience),
    ("education", CommandKey::Education),
    ("contact", CommandKey::Contact),
    ("clear", CommandKey::Clear),
    ("cls", CommandKey::Clear),
    ("home", CommandKey::Home),
    ("history", CommandKey::History),
    ("themes", CommandKey::Themes),
    ("sudo", CommandKey::Sudo),
    ("whoami", CommandKey::Whoami),
    ("date", CommandKey::Date),
    ("ls", CommandKey::Ls),
    ("pwd", CommandKey::Pwd),
];

/// `token` must already be lowercase.
pub(crate) fn lookup(token: &str) -> Option<CommandKey> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, key)| *key)
}

/// Registered tokens starting with `prefix`, in registry order.
pub(crate) fn matching_tokens(prefix: &str) -> Vec<&'static str> {
    if prefix.is_empty() {
        return Vec::new();
    }
    REGISTRY
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| name.starts_with(prefix))
        .collect()
}

impl CommandKey {
    pub(crate) fn produce(self, storage: &dyn Storage) -> CommandOutcome {
        match self {
            CommandKey::Help => CommandOutcome::lines(content::to_lines(content::HELP)),
            CommandKey::About => CommandOutcome::lines(content::to_lines(content::ABOUT)),
            CommandKey::Skills => CommandOutcome::lines(content::to_lines(content::SKILLS)),
            CommandKey::Projects => CommandOutcome::lines(content::to_lines(content::PROJECTS)),
            CommandKey::Experience => {
                CommandOutcome::lines(content::to_lines(content::EXPERIENCE))
            }
            CommandKey::Education => {
                CommandOutcome::lines(content::to_lines(content::EDUCATION))
            }
            CommandKey::Contact => CommandOutcome::lines(content::to_lines(content::CONTACT)),
            CommandKey::Clear => CommandOutcome {
                clear: true,
                ..CommandOutcome::default()
            },
            CommandKey::Home => CommandOutcome {
                lines: content::to_lines(content::WELCOME),
                clear: true,
                theme: None,
            },
            CommandKey::History => history_outcome(&load_history(storage)),
            CommandKey::Themes => CommandOutcome::lines(content::to_lines(content::THEMES)),
            CommandKey::Sudo => CommandOutcome::lines(content::to_lines(content::SUDO)),
            CommandKey::Whoami => CommandOutcome::lines(content::to_lines(content::WHOAMI)),
            CommandKey::Date => date_outcome(Utc::now()),
            CommandKey::Ls => CommandOutcome::lines(content::to_lines(content::LS)),
            CommandKey::Pwd => CommandOutcome::lines(content::to_lines(content::PWD)),
        }
    }
}

pub(crate) fn welcome_lines() -> Vec<TerminalLine> {
    content::to_lines(content::WELCOME)
}

fn history_outcome(history: &[String]) -> CommandOutcome {
    let mut lines = vec![
        TerminalLine::new(LineKind::Output, "Command History:"),
        TerminalLine::blank(),
    ];
    lines.extend(
        history
            .iter()
            .enumerate()
            .map(|(i, cmd)| TerminalLine::new(LineKind::List, format!("{}  {}", i + 1, cmd))),
    );
    lines.push(TerminalLine::blank());
    CommandOutcome::lines(lines)
}

pub(crate) fn date_outcome(now: DateTime<Utc>) -> CommandOutcome {
    let stamp = match FixedOffset::east_opt(EAT_OFFSET_SECS) {
        Some(eat) => now
            .with_timezone(&eat)
            .format("%a, %b %-d, %Y, %I:%M:%S %p")
            .to_string(),
        None => now.format("%a, %b %-d, %Y, %I:%M:%S %p").to_string(),
    };
    CommandOutcome::lines(vec![
        TerminalLine::new(
            LineKind::Output,
            format!("Current time in Nairobi: {stamp} EAT"),
        ),
        TerminalLine::blank(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{store_history, MemoryStorage};
    use chrono::TimeZone;

    #[test]
    fn registry_tokens_are_unique_and_lowercase() {
        for (i, (name, _)) in REGISTRY.iter().enumerate() {
            assert_eq!(*name, name.to_lowercase());
            assert!(
                REGISTRY[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate token {name}"
            );
        }
    }

    #[test]
    fn aliases_share_content() {
        let store = MemoryStorage::default();
        let help = CommandKey::Help.produce(&store);
        assert_eq!(lookup("?").map(|k| k.produce(&store)), Some(help.clone()));
        assert_eq!(lookup("commands").map(|k| k.produce(&store)), Some(help));
        assert_eq!(lookup("cls"), Some(CommandKey::Clear));
    }

    #[test]
    fn theme_is_not_a_registered_token() {
        assert_eq!(lookup("theme"), None);
        assert_eq!(matching_tokens("them"), vec!["themes"]);
    }

    #[test]
    fn history_lists_persisted_commands_numbered_from_one() {
        let mut store = MemoryStorage::default();
        store_history(&mut store, &["about".to_string(), "ls".to_string()]);

        let outcome = CommandKey::History.produce(&store);
        let texts: Vec<&str> = outcome.lines.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(texts, vec!["Command History:", "", "1  about", "2  ls", ""]);
    }

    #[test]
    fn date_renders_nairobi_time() {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 16, 11, 3, 4)
            .single()
            .expect("valid timestamp");
        let outcome = date_outcome(now);
        assert_eq!(
            outcome.lines[0].text,
            "Current time in Nairobi: Fri, Oct 16, 2026, 02:03:04 PM EAT"
        );
    }

    #[test]
    fn contact_links_carry_hrefs() {
        let outcome = CommandKey::Contact.produce(&MemoryStorage::default());
        let links: Vec<&TerminalLine> = outcome
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::Link)
            .collect();
        assert_eq!(links.len(), 6);
        assert!(links.iter().all(|l| l.href.is_some()));
        assert!(outcome
            .lines
            .iter()
            .filter(|l| l.kind != LineKind::Link)
            .all(|l| l.href.is_none()));
    }
}
