//! Interactive numbered menu.
//!
//! Reads a selection from any `BufRead` and re-prompts on invalid input,
//! up to a fixed number of attempts.

use std::io::{BufRead, Write};

use crate::error::{MenuError, MenuResult};
use crate::transform::pipeline::Action;

pub const PROMPT: &str = "Choose an option: ";

/// Numbered list of actions, one per line.
pub fn render_options() -> String {
    Action::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| format!("{}. {}", i + 1, action.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn one line of user input into an action.
pub fn parse_selection(input: &str) -> MenuResult<Action> {
    let max = Action::ALL.len();
    let invalid = || MenuError::InvalidSelection {
        input: input.trim().to_string(),
        max,
    };

    let choice: usize = input.trim().parse().map_err(|_| invalid())?;
    if !(1..=max).contains(&choice) {
        return Err(invalid());
    }
    Ok(Action::ALL[choice - 1])
}

/// Show the options and read until a valid selection is made.
///
/// Invalid input prints a hint and prompts again; after `max_attempts`
/// invalid answers, or when input ends, the menu gives up.
pub fn choose_action<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> MenuResult<Action> {
    writeln!(output, "{}", render_options())?;

    let mut line = String::new();
    for attempt in 1..=max_attempts {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }

        match parse_selection(&line) {
            Ok(action) => return Ok(action),
            Err(MenuError::InvalidSelection { input: raw, max }) => {
                tracing::debug!(attempt, input = %raw, "invalid menu selection");
                writeln!(output, "Enter a number from 1 to {}", max)?;
            }
            Err(e) => return Err(e),
        }
    }

    Err(MenuError::Exhausted(max_attempts))
}
