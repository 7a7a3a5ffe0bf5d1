//! Projected earnings for a single shift.
//!
//! Earnings are the sum of four independently truncated terms:
//!
//! ```text
//! base       = trunc(working_minutes * wage / 60)
//! night      = trunc(night_minutes * wage * (night_rate - 1) / 60)
//! holiday    = trunc(working_minutes * wage * (holiday_rate - 1) / 60)   weekends only
//! allowance  = trunc(transportation_allowance)
//! ```
//!
//! The holiday term always uses the workplace's own `holiday_rate`. A term
//! whose arithmetic overflows `Decimal` is recorded as zero, and the total
//! saturates instead of overflowing.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AuditStep, EarningsBreakdown, Shift, Workplace};

use super::day_detection::get_day_type;
use super::night_shift::night_working_minutes;
use super::working_time::working_minutes;

const MINUTES_PER_HOUR: i64 = 60;

/// The result of an earnings calculation, including the audit trail.
#[derive(Debug, Clone)]
pub struct EarningsResult {
    /// The earnings components.
    pub breakdown: EarningsBreakdown,
    /// One audit step per component plus a summary step.
    pub audit_steps: Vec<AuditStep>,
}

/// Pay for `minutes` at `wage * multiplier` per hour, truncated toward zero.
///
/// Returns zero when the product does not fit in a `Decimal`.
fn minutes_pay(rule_id: &str, minutes: i64, wage: Decimal, multiplier: Decimal) -> Decimal {
    let pay = Decimal::from(minutes)
        .checked_mul(wage)
        .and_then(|amount| amount.checked_mul(multiplier))
        .and_then(|amount| amount.checked_div(Decimal::from(MINUTES_PER_HOUR)));
    match pay {
        Some(amount) => amount.trunc(),
        None => {
            warn!(
                rule_id,
                minutes,
                wage = %wage,
                multiplier = %multiplier,
                "Earnings term overflowed, recording zero"
            );
            Decimal::ZERO
        }
    }
}

/// Calculates the projected earnings of a shift.
///
/// A shift without a resolved workplace earns nothing; the result is
/// [`EarningsBreakdown::ZERO`] with a single audit step explaining why.
///
/// # Arguments
///
/// * `shift` - The shift to price
/// * `workplace` - The shift's workplace, if it resolved
/// * `start_step_number` - The first step number for the audit trail
///
/// # Examples
///
/// ```
/// use shift_engine::calculation::calculate_earnings;
/// use shift_engine::models::{Shift, Workplace};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let workplace = Workplace::new("Cafe", Decimal::new(1000, 0));
/// // 2026-01-14 is a Wednesday
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let shift = Shift::new(
///     workplace.id,
///     date,
///     date.and_hms_opt(9, 0, 0).unwrap(),
///     date.and_hms_opt(17, 0, 0).unwrap(),
/// )
/// .with_break(60);
///
/// let result = calculate_earnings(&shift, Some(&workplace), 1);
/// assert_eq!(result.breakdown.base, Decimal::new(7000, 0));
/// assert_eq!(result.breakdown.total, Decimal::new(7000, 0));
/// ```
pub fn calculate_earnings(
    shift: &Shift,
    workplace: Option<&Workplace>,
    start_step_number: u32,
) -> EarningsResult {
    let Some(workplace) = workplace else {
        return EarningsResult {
            breakdown: EarningsBreakdown::ZERO,
            audit_steps: vec![AuditStep {
                step_number: start_step_number,
                rule_id: "unknown_workplace".to_string(),
                rule_name: "Unknown Workplace".to_string(),
                input: serde_json::json!({
                    "shift_id": shift.id,
                    "workplace_id": shift.workplace_id
                }),
                output: serde_json::json!({ "total": "0" }),
                reasoning: "Workplace does not resolve: no rate, earnings are zero".to_string(),
            }],
        };
    };

    let mut audit_steps = Vec::with_capacity(5);
    let mut step = start_step_number;
    let wage = workplace.hourly_wage;

    let worked = working_minutes(shift);
    let base = minutes_pay("base_pay", worked, wage, Decimal::ONE);
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "base_pay".to_string(),
        rule_name: "Base Pay".to_string(),
        input: serde_json::json!({
            "working_minutes": worked,
            "hourly_wage": wage.normalize().to_string()
        }),
        output: serde_json::json!({ "amount": base.to_string() }),
        reasoning: format!(
            "{} minutes × {} / 60 = {}",
            worked,
            wage.normalize(),
            base
        ),
    });
    step += 1;

    let night_minutes = night_working_minutes(shift);
    let night_uplift = workplace.night_shift_rate.saturating_sub(Decimal::ONE);
    let night_differential = minutes_pay("night_differential", night_minutes, wage, night_uplift);
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "night_differential".to_string(),
        rule_name: "Night Differential".to_string(),
        input: serde_json::json!({
            "night_minutes": night_minutes,
            "night_shift_rate": workplace.night_shift_rate.normalize().to_string()
        }),
        output: serde_json::json!({ "amount": night_differential.to_string() }),
        reasoning: if night_minutes > 0 {
            format!(
                "{} night minutes × {} × {} / 60 = {}",
                night_minutes,
                wage.normalize(),
                night_uplift.normalize(),
                night_differential
            )
        } else {
            "No minutes inside the 22:00-05:00 window".to_string()
        },
    });
    step += 1;

    let day_type = get_day_type(shift.date);
    let holiday_uplift = workplace.holiday_rate.saturating_sub(Decimal::ONE);
    let holiday_differential = if day_type.is_holiday() {
        minutes_pay("holiday_differential", worked, wage, holiday_uplift)
    } else {
        Decimal::ZERO
    };
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "holiday_differential".to_string(),
        rule_name: "Holiday Differential".to_string(),
        input: serde_json::json!({
            "day_type": day_type,
            "working_minutes": worked,
            "holiday_rate": workplace.holiday_rate.normalize().to_string()
        }),
        output: serde_json::json!({ "amount": holiday_differential.to_string() }),
        reasoning: if day_type.is_holiday() {
            format!(
                "{} shift: {} minutes × {} × {} / 60 = {}",
                day_type,
                worked,
                wage.normalize(),
                holiday_uplift.normalize(),
                holiday_differential
            )
        } else {
            format!("{} shift: no holiday differential", day_type)
        },
    });
    step += 1;

    let transportation_allowance = workplace.transportation_allowance.trunc();
    let total = base
        .saturating_add(night_differential)
        .saturating_add(holiday_differential)
        .saturating_add(transportation_allowance);
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "shift_total".to_string(),
        rule_name: "Shift Earnings Total".to_string(),
        input: serde_json::json!({
            "base": base.to_string(),
            "night_differential": night_differential.to_string(),
            "holiday_differential": holiday_differential.to_string(),
            "transportation_allowance": transportation_allowance.to_string()
        }),
        output: serde_json::json!({ "total": total.to_string() }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            base, night_differential, holiday_differential, transportation_allowance, total
        ),
    });

    EarningsResult {
        breakdown: EarningsBreakdown {
            base,
            night_differential,
            holiday_differential,
            transportation_allowance,
            total,
        },
        audit_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_workplace(wage: &str) -> Workplace {
        let mut workplace = Workplace::new("Cafe", dec(wage));
        workplace.id = Uuid::from_u128(10);
        workplace
    }

    fn make_shift(date: &str, start: (&str, &str), end: (&str, &str), break_minutes: u32) -> Shift {
        Shift::new(
            Uuid::from_u128(10),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            make_datetime(start.0, start.1),
            make_datetime(end.0, end.1),
        )
        .with_break(break_minutes)
    }

    #[test]
    fn test_weekday_day_shift_is_base_only() {
        // 2026-01-14 is a Wednesday
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "09:00:00"),
            ("2026-01-14", "17:00:00"),
            60,
        );
        let result = calculate_earnings(&shift, Some(&make_workplace("1000")), 1);

        assert_eq!(result.breakdown.base, dec("7000"));
        assert_eq!(result.breakdown.night_differential, Decimal::ZERO);
        assert_eq!(result.breakdown.holiday_differential, Decimal::ZERO);
        assert_eq!(result.breakdown.total, dec("7000"));
        assert_eq!(result.audit_steps.len(), 4);
        assert_eq!(result.audit_steps[0].step_number, 1);
        assert_eq!(result.audit_steps[3].rule_id, "shift_total");
    }

    #[test]
    fn test_night_differential_uses_workplace_rate() {
        // 90 night minutes at 1000/h with 1.25 → 90 * 1000 * 0.25 / 60 = 375
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "21:00:00"),
            ("2026-01-14", "23:30:00"),
            0,
        );
        let result = calculate_earnings(&shift, Some(&make_workplace("1000")), 1);

        assert_eq!(result.breakdown.base, dec("2500"));
        assert_eq!(result.breakdown.night_differential, dec("375"));
        assert_eq!(result.breakdown.total, dec("2875"));
    }

    #[test]
    fn test_holiday_differential_pins_configurable_rate() {
        // Saturday, 420 minutes at 1000/h. With holiday_rate 1.5 the differential
        // is 3500, not the 2450 a fixed 35% uplift would give.
        let shift = make_shift(
            "2026-01-17",
            ("2026-01-17", "09:00:00"),
            ("2026-01-17", "17:00:00"),
            60,
        );
        let mut workplace = make_workplace("1000");
        workplace.holiday_rate = dec("1.5");
        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.holiday_differential, dec("3500"));
        assert_eq!(result.breakdown.total, dec("10500"));
    }

    #[test]
    fn test_holiday_rate_of_one_adds_nothing() {
        let shift = make_shift(
            "2026-01-18",
            ("2026-01-18", "09:00:00"),
            ("2026-01-18", "17:00:00"),
            0,
        );
        let mut workplace = make_workplace("1000");
        workplace.holiday_rate = Decimal::ONE;
        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.holiday_differential, Decimal::ZERO);
    }

    #[test]
    fn test_each_term_is_truncated_separately() {
        // 61 minutes at 1001/h: base = 61061/60 = 1017.68 → 1017
        // allowance 300.9 → 300
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "10:00:00"),
            ("2026-01-14", "11:01:00"),
            0,
        );
        let mut workplace = make_workplace("1001");
        workplace.transportation_allowance = dec("300.9");
        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.base, dec("1017"));
        assert_eq!(result.breakdown.transportation_allowance, dec("300"));
        assert_eq!(result.breakdown.total, dec("1317"));
    }

    #[test]
    fn test_unknown_workplace_earns_zero() {
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "09:00:00"),
            ("2026-01-14", "17:00:00"),
            0,
        );
        let result = calculate_earnings(&shift, None, 5);

        assert_eq!(result.breakdown, EarningsBreakdown::ZERO);
        assert_eq!(result.audit_steps.len(), 1);
        assert_eq!(result.audit_steps[0].rule_id, "unknown_workplace");
        assert_eq!(result.audit_steps[0].step_number, 5);
    }

    #[test]
    fn test_malformed_interval_earns_only_allowance() {
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "17:00:00"),
            ("2026-01-14", "09:00:00"),
            0,
        );
        let mut workplace = make_workplace("1000");
        workplace.transportation_allowance = dec("500");
        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.base, Decimal::ZERO);
        assert_eq!(result.breakdown.total, dec("500"));
    }

    #[test]
    fn test_saturday_overnight_combines_all_terms() {
        // Saturday 20:00 → Sunday 02:00, break 30, wage 1200, allowance 400.
        // working = 330, night overlap = 240 - 30 = 210
        // base = 330 * 1200 / 60 = 6600
        // night = 210 * 1200 * 0.25 / 60 = 1050
        // holiday = 330 * 1200 * 0.35 / 60 = 2310
        let shift = make_shift(
            "2026-01-17",
            ("2026-01-17", "20:00:00"),
            ("2026-01-18", "02:00:00"),
            30,
        );
        let mut workplace = make_workplace("1200");
        workplace.transportation_allowance = dec("400");
        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.base, dec("6600"));
        assert_eq!(result.breakdown.night_differential, dec("1050"));
        assert_eq!(result.breakdown.holiday_differential, dec("2310"));
        assert_eq!(result.breakdown.total, dec("10360"));
    }

    #[test]
    fn test_overflowing_night_rate_records_zero_term() {
        // 2026-01-14 is a Wednesday; 22:00-23:00 is all night time
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "22:00:00"),
            ("2026-01-14", "23:00:00"),
            0,
        );
        let mut workplace = make_workplace("10000");
        workplace.night_shift_rate = Decimal::MAX;

        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.base, dec("10000"));
        assert_eq!(result.breakdown.night_differential, Decimal::ZERO);
        assert_eq!(result.breakdown.total, dec("10000"));
    }

    #[test]
    fn test_huge_night_rate_with_max_wage_does_not_panic() {
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "22:00:00"),
            ("2026-01-15", "05:00:00"),
            0,
        );
        let mut workplace = make_workplace("10000");
        workplace.night_shift_rate = dec("1000000000000000000000000");

        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.night_differential, Decimal::ZERO);
        assert_eq!(result.breakdown.base, dec("70000"));
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let shift = make_shift(
            "2026-01-14",
            ("2026-01-14", "09:00:00"),
            ("2026-01-14", "17:00:00"),
            0,
        );
        let mut workplace = make_workplace("1000");
        workplace.transportation_allowance = Decimal::MAX;

        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.base, dec("8000"));
        assert_eq!(result.breakdown.total, Decimal::MAX);
    }

    #[test]
    fn test_minimum_holiday_rate_does_not_panic() {
        // 2026-01-17 is a Saturday
        let shift = make_shift(
            "2026-01-17",
            ("2026-01-17", "09:00:00"),
            ("2026-01-17", "10:00:00"),
            0,
        );
        let mut workplace = make_workplace("1000");
        workplace.holiday_rate = Decimal::MIN;

        let result = calculate_earnings(&shift, Some(&workplace), 1);

        assert_eq!(result.breakdown.holiday_differential, Decimal::ZERO);
        assert_eq!(result.breakdown.base, dec("1000"));
    }
}
