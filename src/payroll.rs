use chrono::Local;
use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{entity::{payslip as payslip_entity, salary_structure, user}, error::PayrollError};

use self::{payslip::{compute_payslip, PayPeriod}, structure::{resolve_structure, SalaryRules, SalaryStructure}};

pub mod classify;
pub mod payslip;
pub mod store;
pub mod structure;

/// Validates the rules, resolves them against the wage and stores the result for `employee`
#[instrument(skip_all, fields(employee = %employee.login_id))]
pub async fn update_structure(
    db: &impl ConnectionTrait,
    admin_id: Uuid,
    employee: &user::Model,
    monthly_wage: Decimal,
    rules: &SalaryRules,
) -> Result<salary_structure::Model, PayrollError> {
    rules.validate(monthly_wage)?;

    let structure = resolve_structure(monthly_wage, rules);
    info!(%monthly_wage, fixed_allowance = %structure.fixed_allowance, "resolved salary structure");

    store::save_structure(db, employee.id, admin_id, &structure, Local::now().fixed_offset()).await
}

/// Computes and stores the payslip of `employee` for `period`.
///
/// Nothing is written unless the employee has a salary structure.
#[instrument(skip_all, fields(employee = %employee.login_id, month = period.month, year = period.year))]
pub async fn generate_payslip(
    db: &impl ConnectionTrait,
    employee: &user::Model,
    period: PayPeriod,
) -> Result<payslip_entity::Model, PayrollError> {
    let Some(structure) = store::find_structure(db, employee.id).await? else {
        return Err(PayrollError::not_found("salary structure not defined"));
    };
    let structure = SalaryStructure::from(&structure);

    let attendance = store::month_attendance(db, employee.id, &period).await?;
    let leaves = store::month_approved_leaves(db, employee.id, &period).await?;

    let figures = compute_payslip(&structure, &period, &attendance, &leaves);
    info!(
        payable_days = %figures.payable_days,
        total_days = figures.total_days,
        net_salary = %figures.net_salary,
        "computed payslip"
    );

    store::save_payslip(db, employee.id, &period, &figures, Local::now().fixed_offset()).await
}

#[derive(Debug, Default)]
pub struct PayrollRun {
    pub generated: Vec<payslip_entity::Model>,
    /// Employees left out because they have no salary structure yet
    pub skipped: Vec<String>,
}

/// Generates payslips for every active employee, one after another
#[instrument(skip_all, fields(month = period.month, year = period.year))]
pub async fn run_payroll(db: &impl ConnectionTrait, period: PayPeriod) -> Result<PayrollRun, PayrollError> {
    let mut run = PayrollRun::default();

    for employee in store::active_employees(db).await? {
        match generate_payslip(db, &employee, period).await {
            Ok(payslip) => run.generated.push(payslip),
            Err(PayrollError::NotFound(reason)) => {
                warn!(employee = %employee.login_id, %reason, "skipping employee");
                run.skipped.push(employee.login_id);
            }
            Err(err) => return Err(err),
        }
    }

    info!(generated = run.generated.len(), skipped = run.skipped.len(), "payroll run finished");

    Ok(run)
}
