//! Positional board name handling ahead of ortho-config parsing.
//!
//! ortho-config only understands flags, so the board name given as a bare
//! argument is lifted out first and the remaining flags are parsed as usual.

use std::ffi::OsString;

use ortho_config::OrthoConfig;

use crate::config::TrelloExportConfig;
use crate::error::ExportError;

/// Long flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &[
    "--board",
    "--key",
    "--secret",
    "--token",
    "--lists",
    "--prefix",
    "--output-dir",
    "--api-base-url",
    "--config-path",
];

/// Short flags that consume a value.
const VALUE_SHORTS: &[char] = &['b', 'k', 't', 'l', 'p', 'o'];

/// Splits `args` into bare positional values and the arguments left for
/// ortho-config.
///
/// The first element is kept as the program name. Values that follow a
/// value-taking flag are not positional; `--flag=value` and `-lValue` carry
/// their value inline. Everything after `--` is positional.
pub fn extract_positional_arguments<I>(args: I) -> (Vec<String>, Vec<OsString>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = args.into_iter();
    let mut remaining: Vec<OsString> = iter.next().into_iter().collect();
    let mut positionals = Vec::new();
    let mut expects_value = false;
    let mut after_separator = false;

    for arg in iter {
        let text = arg.to_string_lossy().into_owned();
        if after_separator {
            positionals.push(text);
        } else if expects_value {
            expects_value = false;
            remaining.push(arg);
        } else if text == "--" {
            after_separator = true;
        } else if text.starts_with('-') && text != "-" {
            expects_value = takes_separate_value(&text);
            remaining.push(arg);
        } else {
            positionals.push(text);
        }
    }

    (positionals, remaining)
}

fn takes_separate_value(flag: &str) -> bool {
    if let Some(long) = flag.strip_prefix("--") {
        return !long.contains('=') && VALUE_FLAGS.contains(&flag);
    }

    // In a short group such as `-nl`, the first value-taking flag consumes the
    // rest of the group, or the next argument when it ends the group.
    let shorts = flag.trim_start_matches('-');
    shorts
        .char_indices()
        .find(|(_, short)| VALUE_SHORTS.contains(short))
        .is_some_and(|(index, short)| index + short.len_utf8() == shorts.len())
}

/// Loads configuration from `args`, accepting the board name as a single
/// positional argument.
///
/// # Errors
///
/// Returns [`ExportError::InvalidArgument`] for a second positional value,
/// [`ExportError::Configuration`] when both a positional board name and
/// `--board` are given or when ortho-config rejects the arguments or
/// configuration files.
pub fn load_config_from_args<I>(args: I) -> Result<TrelloExportConfig, ExportError>
where
    I: IntoIterator<Item = OsString>,
{
    let (positionals, remaining) = extract_positional_arguments(args);

    let mut positional_iter = positionals.into_iter();
    let board_name = positional_iter.next();
    if let Some(extra) = positional_iter.next() {
        return Err(ExportError::InvalidArgument { argument: extra });
    }
    if board_name.is_some() && has_board_flag(&remaining) {
        return Err(ExportError::Configuration {
            message: "board name given both positionally and with --board".to_owned(),
        });
    }

    let mut config = TrelloExportConfig::load_from_iter(remaining).map_err(|error| {
        ExportError::Configuration {
            message: error.to_string(),
        }
    })?;
    if let Some(name) = board_name {
        config.set_board_name(name);
    }
    Ok(config)
}

fn has_board_flag(args: &[OsString]) -> bool {
    args.iter().skip(1).any(|arg| {
        let text = arg.to_string_lossy();
        text == "--board"
            || text.starts_with("--board=")
            || (!text.starts_with("--")
                && text.starts_with('-')
                && text
                    .trim_start_matches('-')
                    .chars()
                    .find(|short| VALUE_SHORTS.contains(short))
                    == Some('b'))
    })
}

#[cfg(test)]
#[path = "arguments_tests.rs"]
mod tests;
