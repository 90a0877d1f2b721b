//! Outstanding balance aggregation.
//!
//! Computes per-record remainders and the total outstanding balance over a
//! snapshot of wage records, applying the eligibility and period filters.
//! The snapshot is assumed to belong to one employee; filtering by employee
//! is the store query's job.

use crate::models::{OutstandingLine, OutstandingSummary, PayPeriod, WageRecord};

use super::money::{Cents, clamp_non_negative, from_minor_units, to_minor_units};

/// Computes the remaining unpaid balance of one record, in cents.
///
/// Never negative: an overpaid or corrupt record reports a remainder of 0.
pub fn record_remainder_cents(record: &WageRecord) -> Cents {
    clamp_non_negative(to_minor_units(record.wage_amount) - to_minor_units(record.paid_amount))
}

/// Selects the records eligible for allocation: status `approved` or
/// `partial`, and within the period when one is given.
pub(crate) fn eligible_records<'a>(
    records: &'a [WageRecord],
    period: Option<&PayPeriod>,
) -> Vec<&'a WageRecord> {
    records
        .iter()
        .filter(|r| r.is_outstanding())
        .filter(|r| period.is_none_or(|p| p.contains(r.date)))
        .collect()
}

/// Sums the remainders of the given records, in cents.
///
/// Always `>= 0`; `0` for an empty set.
pub fn total_outstanding_cents<'a, I>(records: I) -> Cents
where
    I: IntoIterator<Item = &'a WageRecord>,
{
    records.into_iter().map(record_remainder_cents).sum()
}

/// Builds the outstanding-balance summary displayed before a payment run.
///
/// Lines are restricted to eligible records (and the period, when given)
/// and sorted oldest first, ties broken by record id.
pub fn summarize_outstanding(
    records: &[WageRecord],
    period: Option<&PayPeriod>,
) -> OutstandingSummary {
    let mut eligible = eligible_records(records, period);
    eligible.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let total_cents = total_outstanding_cents(eligible.iter().copied());
    let lines = eligible
        .into_iter()
        .map(|r| OutstandingLine {
            record_id: r.id,
            date: r.date,
            description: r.description.clone(),
            wage_amount: r.wage_amount,
            paid_amount: r.paid_amount,
            remainder: from_minor_units(record_remainder_cents(r)),
        })
        .collect();

    OutstandingSummary {
        lines,
        total_outstanding: from_minor_units(total_cents),
    }
}
