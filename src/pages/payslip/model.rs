use super::*;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GeneratePayslip {
    pub(super) login_id: String,
    pub(super) month: u32,
    pub(super) year: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct RunPayroll {
    pub(super) month: u32,
    pub(super) year: i32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PayslipQuery {
    pub(super) login_id: Option<String>,
    pub(super) month: Option<i16>,
    pub(super) year: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct UpdatePayslipStatus {
    pub(super) status: PayslipStatus,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PayslipView {
    pub(super) id: Uuid,
    pub(super) employee_id: Uuid,
    pub(super) month: i16,
    pub(super) year: i32,
    pub(super) total_days: i16,
    pub(super) payable_days: Decimal,
    pub(super) earnings: Earnings,
    pub(super) deductions: Deductions,
    pub(super) net_salary: Decimal,
    pub(super) status: PayslipStatus,
    pub(super) generated_date: DateTimeWithTimeZone,
}

impl From<payslip::Model> for PayslipView {
    fn from(model: payslip::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            month: model.month,
            year: model.year,
            total_days: model.total_days,
            payable_days: model.payable_days,
            earnings: Earnings {
                basic: model.basic,
                hra: model.hra,
                standard_allowance: model.standard_allowance,
                performance_bonus: model.performance_bonus,
                lta: model.lta,
                fixed_allowance: model.fixed_allowance,
                gross_earnings: model.gross_earnings,
            },
            deductions: Deductions {
                pf_employee: model.pf_employee,
                professional_tax: model.professional_tax,
                unpaid_leave_deduction: model.unpaid_leave_deduction,
                total_deductions: model.total_deductions,
            },
            net_salary: model.net_salary,
            status: model.status,
            generated_date: model.generated_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PayrollRunView {
    pub(super) generated: Vec<PayslipView>,
    pub(super) skipped: Vec<String>,
}

impl From<PayrollRun> for PayrollRunView {
    fn from(run: PayrollRun) -> Self {
        Self {
            generated: run.generated.into_iter().map(PayslipView::from).collect(),
            skipped: run.skipped,
        }
    }
}
