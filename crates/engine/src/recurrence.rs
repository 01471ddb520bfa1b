//! Recurrence expansion: one transaction rule + a horizon → dated movements.
//!
//! Occurrence `k` of a rule is always computed from the rule's `start_date`
//! (the anchor), never from occurrence `k - 1`:
//!
//! - `once`: only `k = 0`, the start date itself;
//! - `weekly`: `start_date + 7k` days;
//! - `monthly`: `start_date + k` months, clamped to the month's last day.
//!
//! Anchoring keeps the phase stable when the horizon starts after the rule
//! does, and stops a month-end clamp (Jan 31 → Feb 28) from leaking into the
//! following months (Mar 31, not Mar 28).

use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDate};

use crate::{CashMovement, Frequency, MoneyCents, Transaction, calendar::add_months_clamped};

/// Lazy sequence of the movements one rule produces inside a horizon.
///
/// Finite (bounded by the horizon end) and restartable: clone it before
/// iterating, or call [`expand`] again, to replay the same sequence.
#[derive(Clone, Debug)]
pub struct Occurrences {
    anchor: NaiveDate,
    frequency: Frequency,
    signed_amount: MoneyCents,
    from: NaiveDate,
    until: NaiveDate,
    next_index: u32,
    done: bool,
}

/// Expands `transaction` into the movements falling in
/// `[horizon_start, horizon_end]`, additionally bounded by the rule's own
/// `end_date`.
///
/// Never fails: a reversed horizon, or a rule whose `end_date` precedes its
/// `start_date`, simply yields nothing. Output order is not part of the
/// contract; the projector sorts.
#[must_use]
pub fn expand(
    transaction: &Transaction,
    horizon_start: NaiveDate,
    horizon_end: NaiveDate,
) -> Occurrences {
    let until = match transaction.end_date {
        Some(end) => end.min(horizon_end),
        None => horizon_end,
    };
    let anchor = transaction.start_date;
    let malformed = horizon_start > horizon_end
        || transaction.end_date.is_some_and(|end| end < anchor);

    Occurrences {
        anchor,
        frequency: transaction.frequency,
        signed_amount: transaction.signed_amount(),
        from: horizon_start,
        until,
        next_index: first_candidate(transaction.frequency, anchor, horizon_start),
        done: malformed || anchor > until,
    }
}

/// Smallest occurrence index that can land on or after `from`.
///
/// Occurrences before it are skipped without being generated; the phase is
/// still anchored at `anchor`.
fn first_candidate(frequency: Frequency, anchor: NaiveDate, from: NaiveDate) -> u32 {
    if anchor >= from {
        return 0;
    }
    match frequency {
        Frequency::Once => 0,
        Frequency::Weekly => {
            let days = (from - anchor).num_days();
            u32::try_from((days + 6) / 7).unwrap_or(u32::MAX)
        }
        Frequency::Monthly => {
            // `anchor + months` lands inside `from`'s month, every earlier
            // index lands in an earlier month.
            let months = i64::from(from.year() - anchor.year()) * 12
                + i64::from(from.month())
                - i64::from(anchor.month());
            u32::try_from(months.max(0)).unwrap_or(u32::MAX)
        }
    }
}

impl Occurrences {
    fn occurrence(&self, index: u32) -> Option<NaiveDate> {
        match self.frequency {
            Frequency::Once => (index == 0).then_some(self.anchor),
            Frequency::Weekly => self
                .anchor
                .checked_add_days(Days::new(u64::from(index) * 7)),
            Frequency::Monthly => add_months_clamped(self.anchor, index),
        }
    }
}

impl Iterator for Occurrences {
    type Item = CashMovement;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let Some(date) = self.occurrence(self.next_index) else {
                self.done = true;
                break;
            };
            match self.next_index.checked_add(1) {
                Some(next) => self.next_index = next,
                None => self.done = true,
            }
            if date > self.until {
                self.done = true;
                break;
            }
            if date < self.from {
                continue;
            }
            return Some(CashMovement {
                date,
                signed_amount: self.signed_amount,
            });
        }
        None
    }
}

impl FusedIterator for Occurrences {}
