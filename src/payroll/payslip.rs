//! Payslip computation
//!
//! Everything here is pure: the storage layer hands in the structure, attendance
//! and approved leave for one employee and gets back the figures to persist.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{entity::sea_orm_active_enums::{AttendanceStatus, LeaveType}, error::PayrollError, utils};

use super::{classify::{classify_day, DayFacts}, structure::SalaryStructure};

/// A calendar month to run payroll for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    pub year: i32,
    pub month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl PayPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, PayrollError> {
        if !(1..=12).contains(&month) {
            return Err(PayrollError::validation("month must be between 1 and 12"));
        }

        let Some((first_day, last_day)) = utils::month_bounds(year, month) else {
            return Err(PayrollError::validation(format!("year {year} is out of range")));
        };

        Ok(Self { year, month, first_day, last_day })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn total_days(&self) -> u32 {
        (self.last_day - self.first_day).num_days() as u32 + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_day.iter_days().take_while(|day| *day <= self.last_day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovedLeave {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
}

impl ApprovedLeave {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Starts inside the period, ends inside it, or spans all of it
    pub fn overlaps(&self, period: &PayPeriod) -> bool {
        self.start_date <= period.last_day() && self.end_date >= period.first_day()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    pub basic: Decimal,
    pub hra: Decimal,
    pub standard_allowance: Decimal,
    pub performance_bonus: Decimal,
    pub lta: Decimal,
    pub fixed_allowance: Decimal,
    pub gross_earnings: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    pub pf_employee: Decimal,
    pub professional_tax: Decimal,
    /// Informational only, proration already removes unpaid days from the earnings
    pub unpaid_leave_deduction: Decimal,
    pub total_deductions: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipFigures {
    pub total_days: u32,
    pub payable_days: Decimal,
    pub earnings: Earnings,
    pub deductions: Deductions,
    pub net_salary: Decimal,
}

/// Sums the paid fraction of every day in `period`
pub fn count_payable_days(
    period: &PayPeriod,
    working_days_per_week: u8,
    attendance: &[AttendanceDay],
    leaves: &[ApprovedLeave],
) -> Decimal {
    let attendance_by_date = attendance.iter()
        .map(|day| (day.date, day.status))
        .collect::<HashMap<_, _>>();

    let mut payable_days = Decimal::ZERO;

    for date in period.days() {
        let facts = DayFacts {
            attendance: attendance_by_date.get(&date).copied(),
            leave: leaves.iter().find(|leave| leave.covers(date)).map(|leave| leave.leave_type),
            is_work_day: utils::is_working_day(date, working_days_per_week),
        };

        let (rule, credit) = classify_day(&facts);
        trace!(%date, rule = rule.name, ?credit, "classified day");

        payable_days += credit.days();
    }

    payable_days
}

/// Prorates `structure` over `period`.
///
/// Every component is rounded to cents on its own before totals are taken.
pub fn compute_payslip(
    structure: &SalaryStructure,
    period: &PayPeriod,
    attendance: &[AttendanceDay],
    leaves: &[ApprovedLeave],
) -> PayslipFigures {
    let total_days = period.total_days();
    let payable_days = count_payable_days(period, structure.working_days_per_week, attendance, leaves);

    let proration_factor = payable_days / Decimal::from(total_days);
    let prorate = |amount: Decimal| utils::round_money(amount * proration_factor);

    let [basic, hra, standard_allowance, performance_bonus, lta, fixed_allowance] =
        structure.earning_components().map(prorate);

    let gross_earnings = utils::round_money(basic + hra + standard_allowance + performance_bonus + lta + fixed_allowance);

    let pf_employee = prorate(structure.pf.employee_contribution);
    let professional_tax = structure.professional_tax;
    let unpaid_leave_deduction = utils::round_money(structure.monthly_wage * (Decimal::ONE - proration_factor));
    let total_deductions = utils::round_money(pf_employee + professional_tax);

    PayslipFigures {
        total_days,
        payable_days,
        earnings: Earnings {
            basic,
            hra,
            standard_allowance,
            performance_bonus,
            lta,
            fixed_allowance,
            gross_earnings,
        },
        deductions: Deductions {
            pf_employee,
            professional_tax,
            unpaid_leave_deduction,
            total_deductions,
        },
        net_salary: utils::round_money(gross_earnings - total_deductions),
    }
}
