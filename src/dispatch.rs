use log::debug;

use crate::app::{CommandOutcome, LineKind, TerminalLine, ThemePreset};
use crate::registry::{lookup, matching_tokens};
use crate::storage::Storage;

/// Resolve one line of input to its outcome. Never fails: unknown tokens and
/// bad theme names come back as error lines.
pub(crate) fn execute_command(
    input: &str,
    current_theme: ThemePreset,
    storage: &dyn Storage,
    set_theme: &mut dyn FnMut(ThemePreset),
) -> CommandOutcome {
    let lowered = input.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let cmd = words.next().unwrap_or_default();

    if cmd == "theme" {
        if let Some(name) = words.next() {
            return change_theme(name, current_theme, set_theme);
        }
    }

    match lookup(cmd) {
        Some(key) => {
            debug!("dispatch {cmd} -> {key:?}");
            key.produce(storage)
        }
        None => {
            debug!("dispatch {cmd}: not found");
            not_found(cmd)
        }
    }
}

fn change_theme(
    name: &str,
    current_theme: ThemePreset,
    set_theme: &mut dyn FnMut(ThemePreset),
) -> CommandOutcome {
    let Some(theme) = ThemePreset::parse(name) else {
        let valid = ThemePreset::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return CommandOutcome::lines(vec![
            TerminalLine::new(LineKind::Error, format!("Invalid theme: {name}")),
            TerminalLine::new(LineKind::Output, format!("Available themes: {valid}")),
            TerminalLine::blank(),
        ]);
    };

    debug!(
        "theme {} -> {}",
        current_theme.as_str(),
        theme.as_str()
    );
    set_theme(theme);
    CommandOutcome {
        lines: vec![
            TerminalLine::new(
                LineKind::Success,
                format!("Theme changed to: {}", theme.as_str()),
            ),
            TerminalLine::blank(),
        ],
        clear: false,
        theme: Some(theme),
    }
}

fn not_found(cmd: &str) -> CommandOutcome {
    CommandOutcome::lines(vec![
        TerminalLine::new(LineKind::Error, format!("Command not found: {cmd}")),
        TerminalLine::new(LineKind::Output, "Type \"help\" to see available commands."),
        TerminalLine::blank(),
    ])
}

/// The single registered token completing `input`, if exactly one matches.
/// Ambiguous prefixes yield nothing rather than an arbitrary pick.
pub(crate) fn autocomplete(input: &str) -> Option<String> {
    let query = input.trim().to_lowercase();
    match matching_tokens(&query).as_slice() {
        [only] => Some((*only).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::REGISTRY;
    use crate::storage::MemoryStorage;

    fn run(input: &str) -> (CommandOutcome, Option<ThemePreset>) {
        let store = MemoryStorage::default();
        let mut changed = None;
        let outcome = execute_command(input, ThemePreset::Green, &store, &mut |t: ThemePreset| {
            changed = Some(t)
        });
        (outcome, changed)
    }

    #[test]
    fn registered_tokens_ignore_case_and_whitespace() {
        let store = MemoryStorage::default();
        for (name, key) in REGISTRY {
            if matches!(key, crate::registry::CommandKey::Date) {
                continue;
            }
            let expected = key.produce(&store);
            let noisy = format!("   {}  ", name.to_uppercase());
            assert_eq!(run(&noisy).0, expected, "token {name}");
        }
    }

    #[test]
    fn trailing_words_are_ignored_for_plain_commands() {
        assert_eq!(run("about me please").0, run("about").0);
    }

    #[test]
    fn unknown_token_reports_not_found() {
        let (outcome, changed) = run("rm -rf /");
        assert_eq!(changed, None);
        assert_eq!(outcome.lines[0].kind, LineKind::Error);
        assert_eq!(outcome.lines[0].text, "Command not found: rm");
        assert_eq!(
            outcome.lines[1].text,
            "Type \"help\" to see available commands."
        );
        assert!(!outcome.clear);
    }

    #[test]
    fn valid_theme_invokes_setter_and_reports_success() {
        let (outcome, changed) = run("theme green");
        assert_eq!(changed, Some(ThemePreset::Green));
        assert_eq!(outcome.theme, Some(ThemePreset::Green));
        assert_eq!(outcome.lines[0].kind, LineKind::Success);
        assert_eq!(outcome.lines[0].text, "Theme changed to: green");
        assert_eq!(outcome.lines[1], TerminalLine::blank());

        let (_, changed) = run("THEME Matrix");
        assert_eq!(changed, Some(ThemePreset::Matrix));
    }

    #[test]
    fn invalid_theme_lists_valid_names_and_keeps_theme() {
        let (outcome, changed) = run("theme neon");
        assert_eq!(changed, None);
        assert_eq!(outcome.theme, None);
        assert_eq!(outcome.lines[0].kind, LineKind::Error);
        assert_eq!(outcome.lines[0].text, "Invalid theme: neon");
        assert_eq!(
            outcome.lines[1].text,
            "Available themes: green, blue, amber, white, matrix"
        );
    }

    #[test]
    fn bare_theme_is_not_found() {
        let (outcome, changed) = run("theme");
        assert_eq!(changed, None);
        assert_eq!(outcome.lines[0].text, "Command not found: theme");
    }

    #[test]
    fn clear_and_home_request_a_full_clear() {
        let (clear, _) = run("cls");
        assert!(clear.clear);
        assert!(clear.lines.is_empty());

        let (home, _) = run("home");
        assert!(home.clear);
        assert_eq!(home.lines, crate::registry::welcome_lines());
    }

    #[test]
    fn read_only_commands_are_idempotent() {
        assert_eq!(run("about").0, run("about").0);
    }

    #[test]
    fn autocomplete_needs_a_unique_prefix() {
        assert_eq!(autocomplete("he"), Some("help".to_string()));
        assert_eq!(autocomplete("  PRO "), Some("projects".to_string()));
        assert_eq!(autocomplete("h"), None);
        assert_eq!(autocomplete("c"), None);
        assert_eq!(autocomplete(""), None);
        assert_eq!(autocomplete("   "), None);
        assert_eq!(autocomplete("xyz"), None);
    }

    #[test]
    fn autocomplete_of_full_token_is_itself() {
        assert_eq!(autocomplete("whoami"), Some("whoami".to_string()));
    }
}
