//! Thin persistence layer between the payroll arithmetic and the database

use chrono::{DateTime, FixedOffset};
use sea_orm::{sea_query::OnConflict, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity::{attendance, leave_request, payslip, salary_structure, sea_orm_active_enums::{LeaveStatus, PayslipStatus, RoleType}, user},
    error::PayrollError,
};

use super::{
    payslip::{ApprovedLeave, AttendanceDay, PayPeriod, PayslipFigures},
    structure::{PercentOfBasic, PercentOfWage, ProvidentFund, SalaryStructure},
};

impl From<&salary_structure::Model> for SalaryStructure {
    fn from(model: &salary_structure::Model) -> Self {
        Self {
            monthly_wage: model.monthly_wage,
            yearly_wage: model.yearly_wage,
            basic: PercentOfWage {
                percentage: model.basic_percentage,
                amount: model.basic_amount,
            },
            hra: PercentOfBasic {
                percentage_of_basic: model.hra_percentage_of_basic,
                amount: model.hra_amount,
            },
            standard_allowance: model.standard_allowance,
            performance_bonus: PercentOfBasic {
                percentage_of_basic: model.performance_bonus_percentage_of_basic,
                amount: model.performance_bonus_amount,
            },
            lta: PercentOfBasic {
                percentage_of_basic: model.lta_percentage_of_basic,
                amount: model.lta_amount,
            },
            fixed_allowance: model.fixed_allowance,
            pf: ProvidentFund {
                rate: model.pf_rate,
                employee_contribution: model.pf_employee_contribution,
                employer_contribution: model.pf_employer_contribution,
            },
            professional_tax: model.professional_tax,
            working_days_per_week: model.working_days_per_week.clamp(1, 7) as u8,
        }
    }
}

pub async fn find_employee(db: &impl ConnectionTrait, login_id: &str) -> Result<user::Model, PayrollError> {
    user::Entity::find()
        .filter(user::Column::LoginId.eq(login_id))
        .one(db).await?
        .ok_or_else(|| PayrollError::not_found(format!("employee `{login_id}` not found")))
}

pub async fn active_employees(db: &impl ConnectionTrait) -> Result<Vec<user::Model>, PayrollError> {
    Ok(
        user::Entity::find()
            .filter(user::Column::Active.eq(true))
            .filter(user::Column::Role.eq(RoleType::Employee))
            .order_by_asc(user::Column::LoginId)
            .all(db).await?
    )
}

pub async fn find_structure(db: &impl ConnectionTrait, employee_id: Uuid) -> Result<Option<salary_structure::Model>, PayrollError> {
    Ok(
        salary_structure::Entity::find()
            .filter(salary_structure::Column::EmployeeId.eq(employee_id))
            .one(db).await?
    )
}

/// Replaces the whole rule set stored for the employee, creating it on first save
pub async fn save_structure(
    db: &impl ConnectionTrait,
    employee_id: Uuid,
    admin_id: Uuid,
    structure: &SalaryStructure,
    now: DateTime<FixedOffset>,
) -> Result<salary_structure::Model, PayrollError> {
    use salary_structure::Column;

    let model = salary_structure::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(Some(admin_id)),
        updated_by: Set(Some(admin_id)),
        employee_id: Set(employee_id),
        monthly_wage: Set(structure.monthly_wage),
        yearly_wage: Set(structure.yearly_wage),
        basic_percentage: Set(structure.basic.percentage),
        basic_amount: Set(structure.basic.amount),
        hra_percentage_of_basic: Set(structure.hra.percentage_of_basic),
        hra_amount: Set(structure.hra.amount),
        standard_allowance: Set(structure.standard_allowance),
        performance_bonus_percentage_of_basic: Set(structure.performance_bonus.percentage_of_basic),
        performance_bonus_amount: Set(structure.performance_bonus.amount),
        lta_percentage_of_basic: Set(structure.lta.percentage_of_basic),
        lta_amount: Set(structure.lta.amount),
        fixed_allowance: Set(structure.fixed_allowance),
        pf_rate: Set(structure.pf.rate),
        pf_employee_contribution: Set(structure.pf.employee_contribution),
        pf_employer_contribution: Set(structure.pf.employer_contribution),
        professional_tax: Set(structure.professional_tax),
        working_days_per_week: Set(structure.working_days_per_week as i16),
    };

    let res = salary_structure::Entity::insert(model)
        .on_conflict(OnConflict::column(Column::EmployeeId)
            .update_columns([
                Column::UpdatedAt,
                Column::UpdatedBy,
                Column::MonthlyWage,
                Column::YearlyWage,
                Column::BasicPercentage,
                Column::BasicAmount,
                Column::HraPercentageOfBasic,
                Column::HraAmount,
                Column::StandardAllowance,
                Column::PerformanceBonusPercentageOfBasic,
                Column::PerformanceBonusAmount,
                Column::LtaPercentageOfBasic,
                Column::LtaAmount,
                Column::FixedAllowance,
                Column::PfRate,
                Column::PfEmployeeContribution,
                Column::PfEmployerContribution,
                Column::ProfessionalTax,
                Column::WorkingDaysPerWeek,
            ])
            .to_owned())
        .exec_with_returning(db).await?;

    Ok(res)
}

pub async fn month_attendance(db: &impl ConnectionTrait, employee_id: Uuid, period: &PayPeriod) -> Result<Vec<AttendanceDay>, PayrollError> {
    let rows = attendance::Entity::find()
        .filter(attendance::Column::EmployeeId.eq(employee_id))
        .filter(attendance::Column::Date.between(period.first_day(), period.last_day()))
        .order_by_asc(attendance::Column::Date)
        .all(db).await?;

    Ok(
        rows.into_iter()
            .map(|row| AttendanceDay { date: row.date, status: row.status })
            .collect()
    )
}

pub async fn month_approved_leaves(db: &impl ConnectionTrait, employee_id: Uuid, period: &PayPeriod) -> Result<Vec<ApprovedLeave>, PayrollError> {
    let rows = leave_request::Entity::find()
        .filter(leave_request::Column::EmployeeId.eq(employee_id))
        .filter(leave_request::Column::Status.eq(LeaveStatus::Approved))
        .filter(leave_request::Column::StartDate.lte(period.last_day()))
        .filter(leave_request::Column::EndDate.gte(period.first_day()))
        .order_by_asc(leave_request::Column::StartDate)
        .all(db).await?;

    Ok(
        rows.into_iter()
            .map(|row| ApprovedLeave {
                start_date: row.start_date,
                end_date: row.end_date,
                leave_type: row.leave_type,
            })
            .filter(|leave| leave.overlaps(period))
            .collect()
    )
}

/// Writes the payslip for (employee, month, year) in one statement, overwriting any earlier one
pub async fn save_payslip(
    db: &impl ConnectionTrait,
    employee_id: Uuid,
    period: &PayPeriod,
    figures: &PayslipFigures,
    now: DateTime<FixedOffset>,
) -> Result<payslip::Model, PayrollError> {
    use payslip::Column;

    let model = payslip::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        employee_id: Set(employee_id),
        month: Set(period.month as i16),
        year: Set(period.year),
        total_days: Set(figures.total_days as i16),
        payable_days: Set(figures.payable_days),
        basic: Set(figures.earnings.basic),
        hra: Set(figures.earnings.hra),
        standard_allowance: Set(figures.earnings.standard_allowance),
        performance_bonus: Set(figures.earnings.performance_bonus),
        lta: Set(figures.earnings.lta),
        fixed_allowance: Set(figures.earnings.fixed_allowance),
        gross_earnings: Set(figures.earnings.gross_earnings),
        pf_employee: Set(figures.deductions.pf_employee),
        professional_tax: Set(figures.deductions.professional_tax),
        unpaid_leave_deduction: Set(figures.deductions.unpaid_leave_deduction),
        total_deductions: Set(figures.deductions.total_deductions),
        net_salary: Set(figures.net_salary),
        status: Set(PayslipStatus::Pending),
        generated_date: Set(now),
    };

    let res = payslip::Entity::insert(model)
        .on_conflict(OnConflict::columns([Column::EmployeeId, Column::Month, Column::Year])
            .update_columns([
                Column::UpdatedAt,
                Column::TotalDays,
                Column::PayableDays,
                Column::Basic,
                Column::Hra,
                Column::StandardAllowance,
                Column::PerformanceBonus,
                Column::Lta,
                Column::FixedAllowance,
                Column::GrossEarnings,
                Column::PfEmployee,
                Column::ProfessionalTax,
                Column::UnpaidLeaveDeduction,
                Column::TotalDeductions,
                Column::NetSalary,
                Column::Status,
                Column::GeneratedDate,
            ])
            .to_owned())
        .exec_with_returning(db).await?;

    Ok(res)
}

pub async fn set_payslip_status(
    db: &impl ConnectionTrait,
    payslip_id: Uuid,
    status: PayslipStatus,
    now: DateTime<FixedOffset>,
) -> Result<payslip::Model, PayrollError> {
    let model = payslip::ActiveModel {
        id: Set(payslip_id),
        status: Set(status),
        updated_at: Set(now),
        ..Default::default()
    };

    payslip::Entity::update(model)
        .exec(db).await
        .map_err(|err| match err {
            sea_orm::DbErr::RecordNotUpdated => PayrollError::not_found("payslip not found"),
            err => err.into(),
        })
}

#[derive(Debug, Default)]
pub struct PayslipFilter {
    pub employee_id: Option<Uuid>,
    pub month: Option<i16>,
    pub year: Option<i32>,
}

pub async fn list_payslips(db: &impl ConnectionTrait, filter: PayslipFilter) -> Result<Vec<payslip::Model>, PayrollError> {
    let mut query = payslip::Entity::find();

    if let Some(employee_id) = filter.employee_id {
        query = query.filter(payslip::Column::EmployeeId.eq(employee_id));
    }
    if let Some(month) = filter.month {
        query = query.filter(payslip::Column::Month.eq(month));
    }
    if let Some(year) = filter.year {
        query = query.filter(payslip::Column::Year.eq(year));
    }

    Ok(
        query
            .order_by_desc(payslip::Column::Year)
            .order_by_desc(payslip::Column::Month)
            .all(db).await?
    )
}
