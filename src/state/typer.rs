// Typed-text rotation for the hero section.
// A pure stepper: each step mutates the visible prefix and reports the
// delay until the next step, so the caller owns all timing.

use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Rotates through a fixed set of phrases: type a phrase out, hold it,
/// delete it, move to the next, wrapping forever.
#[derive(Debug)]
pub struct Typer {
    phrases: &'static [&'static str],
    phrase: usize,
    /// Number of characters currently visible.
    cursor: usize,
    deleting: bool,
}

impl Typer {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase: 0,
            cursor: 0,
            deleting: false,
        }
    }

    fn current_phrase(&self) -> &'static str {
        self.phrases.get(self.phrase).copied().unwrap_or("")
    }

    /// The currently visible prefix.
    pub fn text(&self) -> String {
        self.current_phrase().chars().take(self.cursor).collect()
    }

    /// Advance one step and return the delay before the next one.
    pub fn step(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return HOLD_DELAY;
        }

        let len = self.current_phrase().chars().count();

        if self.deleting {
            self.cursor = self.cursor.saturating_sub(1);
            if self.cursor == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
            }
            DELETE_DELAY
        } else {
            self.cursor = (self.cursor + 1).min(len);
            if self.cursor == len {
                self.deleting = true;
                HOLD_DELAY
            } else {
                TYPE_DELAY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PHRASES: [&str; 2] = ["ab", "xyz"];

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut typer = Typer::new(&PHRASES);
        assert_eq!(typer.text(), "");

        assert_eq!(typer.step(), TYPE_DELAY);
        assert_eq!(typer.text(), "a");

        // Completing a phrase holds it before deletion starts.
        assert_eq!(typer.step(), HOLD_DELAY);
        assert_eq!(typer.text(), "ab");

        assert_eq!(typer.step(), DELETE_DELAY);
        assert_eq!(typer.text(), "a");

        assert_eq!(typer.step(), DELETE_DELAY);
        assert_eq!(typer.text(), "");

        // Next phrase types from scratch.
        typer.step();
        assert_eq!(typer.text(), "x");
    }

    #[test]
    fn rotation_wraps_to_the_first_phrase() {
        let mut typer = Typer::new(&PHRASES);

        // Two full type/hold/delete cycles.
        for _ in 0..2 {
            while !typer.deleting {
                typer.step();
            }
            while typer.deleting {
                typer.step();
            }
        }

        assert_eq!(typer.phrase, 0);
        typer.step();
        assert_eq!(typer.text(), "a");
    }

    #[test]
    fn multibyte_phrases_step_per_character() {
        static ACCENTED: [&str; 1] = ["héllo"];
        let mut typer = Typer::new(&ACCENTED);

        typer.step();
        typer.step();
        assert_eq!(typer.text(), "hé");
    }
}
