//! Per-day payability
//!
//! Each calendar day is run through [`RULES`] in order and the first rule that
//! applies decides how much of the day is paid.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entity::sea_orm_active_enums::{AttendanceStatus, LeaveType};

/// What is known about a single day of the month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFacts {
    pub attendance: Option<AttendanceStatus>,
    /// Type of the approved leave covering the day, if any
    pub leave: Option<LeaveType>,
    pub is_work_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCredit {
    Full,
    Half,
    Unpaid,
}

impl DayCredit {
    pub fn days(self) -> Decimal {
        match self {
            DayCredit::Full => Decimal::ONE,
            DayCredit::Half => dec!(0.5),
            DayCredit::Unpaid => Decimal::ZERO,
        }
    }
}

pub struct DayRule {
    pub name: &'static str,
    applies: fn(&DayFacts) -> bool,
    credit: fn(&DayFacts) -> DayCredit,
}

fn paid_if_leave_is_paid(facts: &DayFacts) -> DayCredit {
    match facts.leave {
        Some(LeaveType::Paid | LeaveType::Sick) => DayCredit::Full,
        Some(LeaveType::Unpaid) | None => DayCredit::Unpaid,
    }
}

pub static RULES: [DayRule; 6] = [
    DayRule {
        name: "present",
        applies: |facts| facts.attendance == Some(AttendanceStatus::Present),
        credit: |_| DayCredit::Full,
    },
    DayRule {
        name: "half_day",
        applies: |facts| facts.attendance == Some(AttendanceStatus::HalfDay),
        credit: |_| DayCredit::Half,
    },
    // Leave-marked attendance without a matching approved leave is unpaid
    DayRule {
        name: "attendance_leave",
        applies: |facts| facts.attendance == Some(AttendanceStatus::Leave),
        credit: paid_if_leave_is_paid,
    },
    DayRule {
        name: "approved_leave",
        applies: |facts| facts.attendance.is_none() && facts.leave.is_some(),
        credit: paid_if_leave_is_paid,
    },
    DayRule {
        name: "weekly_off",
        applies: |facts| facts.attendance.is_none() && facts.leave.is_none() && !facts.is_work_day,
        credit: |_| DayCredit::Full,
    },
    // Working days with nothing recorded, and every ABSENT record
    DayRule {
        name: "absent",
        applies: |_| true,
        credit: |_| DayCredit::Unpaid,
    },
];

/// Returns the rule that decided the day together with its credit
pub fn classify_day(facts: &DayFacts) -> (&'static DayRule, DayCredit) {
    let rule = RULES.iter()
        .find(|rule| (rule.applies)(facts))
        .unwrap_or(&RULES[RULES.len() - 1]);

    (rule, (rule.credit)(facts))
}
