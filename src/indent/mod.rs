//! Indentation-signature detection
//!
//! Before two sides are compared, each side's whitespace runs are fed through
//! an `IndentTracker` to find the most representative indentation step for
//! that side (e.g. two spaces, or one tab). The engine then rewrites the old
//! side's indentation to the new side's convention, so a pure indent-style
//! difference never shows up as an insert or delete.

use anyhow::Context;
use std::collections::BTreeMap;

/// Matches an indentation run at the start of a whitespace fragment: either a
/// run of tabs, or a run of two or more spaces. A single space is not an
/// indent signal.
const INDENT_REGEX: &str = r"^(?:( ){2,}|\t+)";

/// The character an indentation step is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndentUnit {
    Space,
    Tab,
}

impl IndentUnit {
    pub fn as_char(&self) -> char {
        match self {
            IndentUnit::Space => ' ',
            IndentUnit::Tab => '\t',
        }
    }
}

/// A candidate indentation step observed while scanning one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndentKey {
    pub unit: IndentUnit,
    pub amount: usize,
}

/// The indentation convention judged most representative of one side.
///
/// `amount` is always at least 1. When a side shows no indent signal at all,
/// the signature defaults to one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentSignature {
    pub unit: IndentUnit,
    pub amount: usize,
}

impl IndentSignature {
    /// The literal text of one indentation step, e.g. `"  "` or `"\t"`.
    pub fn as_text(&self) -> String {
        std::iter::repeat(self.unit.as_char())
            .take(self.amount)
            .collect()
    }
}

impl Default for IndentSignature {
    fn default() -> Self {
        IndentSignature {
            unit: IndentUnit::Tab,
            amount: 1,
        }
    }
}

/// Accumulates indentation observations across one side's whitespace runs.
///
/// Each recorded fragment that looks like an indent updates a running width;
/// a nonzero width delta against the previous fragment of the same unit sets
/// the active candidate key, and every fragment with an active key bumps that
/// key's usage counter. The second accumulator slot is a weight that is never
/// incremented on this path; it only participates in tie-breaking.
#[derive(Debug, Default)]
pub struct IndentTracker {
    usage: BTreeMap<IndentKey, (u64, u64)>,
    previous_width: usize,
    previous_unit: Option<IndentUnit>,
    key: Option<IndentKey>,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one whitespace fragment in document order.
    pub fn record(&mut self, fragment: &str) -> anyhow::Result<()> {
        let pattern = regex::Regex::new(INDENT_REGEX)
            .with_context(|| format!("invalid indent regex: {INDENT_REGEX}"))?;

        let Some(captures) = pattern.captures(fragment) else {
            return Ok(());
        };

        let width = captures[0].len();
        let unit = if captures.get(1).is_some() {
            IndentUnit::Space
        } else {
            IndentUnit::Tab
        };

        if Some(unit) != self.previous_unit {
            self.previous_width = 0;
        }
        self.previous_unit = Some(unit);

        let delta = width as isize - self.previous_width as isize;
        self.previous_width = width;

        if delta != 0 {
            self.key = Some(IndentKey {
                unit,
                amount: delta.unsigned_abs(),
            });
        }

        if let Some(key) = self.key {
            let entry = self.usage.entry(key).or_insert((0, 0));
            entry.0 += 1;
        }

        Ok(())
    }

    /// The most-used indentation key, or one tab when nothing was recorded.
    ///
    /// Ties on the usage counter fall back to the weight slot; BTreeMap
    /// iteration keeps the remaining ties deterministic.
    pub fn signature(&self) -> IndentSignature {
        let mut best = None;
        let mut max_used = 0;
        let mut max_weight = 0;

        for (key, (used, weight)) in &self.usage {
            if *used > max_used || (*used == max_used && *weight > max_weight) {
                max_used = *used;
                max_weight = *weight;
                best = Some(*key);
            }
        }

        match best {
            Some(key) => IndentSignature {
                unit: key.unit,
                amount: key.amount,
            },
            None => IndentSignature::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn signature_of(fragments: &[&str]) -> IndentSignature {
        let mut tracker = IndentTracker::new();
        for fragment in fragments {
            tracker.record(fragment).unwrap();
        }
        tracker.signature()
    }

    #[rstest]
    fn defaults_to_one_tab_without_any_signal() {
        assert_eq!(
            signature_of(&[]),
            IndentSignature {
                unit: IndentUnit::Tab,
                amount: 1
            }
        );
    }

    #[rstest]
    fn single_spaces_are_not_an_indent_signal() {
        assert_eq!(signature_of(&[" ", " ", " "]), IndentSignature::default());
    }

    #[rstest]
    fn detects_two_space_steps() {
        // a block indented by two, then four, then back to two spaces
        assert_eq!(
            signature_of(&["  ", "    ", "  "]),
            IndentSignature {
                unit: IndentUnit::Space,
                amount: 2
            }
        );
    }

    #[rstest]
    fn detects_tab_steps() {
        assert_eq!(
            signature_of(&["\t", "\t\t", "\t"]),
            IndentSignature {
                unit: IndentUnit::Tab,
                amount: 1
            }
        );
    }

    #[rstest]
    fn flat_runs_keep_counting_the_active_key() {
        // the first fragment sets the key, the rest reuse it
        assert_eq!(
            signature_of(&["  ", "  ", "  ", "    "]),
            IndentSignature {
                unit: IndentUnit::Space,
                amount: 2
            }
        );
    }

    #[rstest]
    fn dominant_unit_wins_on_mixed_input() {
        // one four-space observation against three tab observations
        assert_eq!(
            signature_of(&["    ", "\t", "\t", "\t"]),
            IndentSignature {
                unit: IndentUnit::Tab,
                amount: 1
            }
        );
    }

    #[rstest]
    fn unit_change_resets_the_running_width() {
        let mut tracker = IndentTracker::new();
        tracker.record("    ").unwrap();
        tracker.record("\t\t").unwrap();
        // the tab fragment is measured against width 0, not 4
        assert_eq!(
            tracker.signature().unit,
            IndentUnit::Space // one observation each; Space < Tab in key order, first max wins
        );
    }

    #[rstest]
    fn as_text_repeats_the_unit() {
        let signature = IndentSignature {
            unit: IndentUnit::Space,
            amount: 2,
        };
        assert_eq!(signature.as_text(), "  ");
        assert_eq!(IndentSignature::default().as_text(), "\t");
    }
}
