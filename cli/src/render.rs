use syncd_core::{Card, FlipOutcome, SessionState, format_elapsed};

const HIDDEN_FACE: &str = "??";

fn face(card: &Card) -> &str {
    if card.is_revealed() {
        card.symbol.as_str()
    } else {
        HIDDEN_FACE
    }
}

/// Grid with card numbers, matched cards marked with `*`.
pub fn board(state: &SessionState) -> String {
    let cols = usize::from(state.cols).max(1);
    let mut out = String::new();
    for row in state.cards.chunks(cols) {
        let line: Vec<String> = row
            .iter()
            .map(|card| {
                let mark = if card.is_matched { '*' } else { ' ' };
                format!("{:>2}{}{}", card.id, mark, face(card))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Attempts, clock, best and pair progress on one line.
pub fn stats(state: &SessionState) -> String {
    let best = match state.best_attempts {
        Some(best) => format!("{best} attempts"),
        None => "None".to_string(),
    };
    let level = state
        .difficulty
        .map(|difficulty| difficulty.label())
        .unwrap_or_else(|| format!("custom ({}×{})", state.rows, state.cols));

    format!(
        "{level} | Attempts: {} | Time: {} | Best: {best} | Pairs: {}/{}",
        state.attempt_count,
        format_elapsed(state.elapsed_seconds),
        state.matched_pair_count,
        state.pair_count,
    )
}

/// Feedback line for the flip just made, `None` when there is nothing to say.
pub fn outcome(outcome: FlipOutcome, state: &SessionState, player: &str) -> Option<String> {
    use FlipOutcome::*;

    match outcome {
        Ignored => Some("That card can't be flipped right now.".to_string()),
        Revealed { .. } => None,
        Matched { .. } => Some("It's a match!".to_string()),
        Mismatched { first, second } => {
            let reveal = state.last_pair.as_ref()?;
            Some(format!(
                "No match: {first} is {} and {second} is {}.",
                reveal.first_symbol, reveal.second_symbol
            ))
        }
        Completed {
            attempts, new_best, ..
        } => {
            let mut line = format!(
                "Congratulations, {player}! Completed in {attempts} attempts and {}.",
                format_elapsed(state.elapsed_seconds)
            );
            if new_best {
                line.push_str(" New best!");
            }
            Some(line)
        }
    }
}
