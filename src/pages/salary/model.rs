use super::*;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateSalaryStructure {
    pub(super) login_id: String,
    pub(super) monthly_wage: Decimal,
    #[serde(flatten)]
    pub(super) rules: SalaryRules,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SalaryStructureView {
    pub(super) employee_id: Uuid,
    pub(super) login_id: String,
    #[serde(flatten)]
    pub(super) structure: SalaryStructure,
    pub(super) updated_at: DateTimeWithTimeZone,
}

impl SalaryStructureView {
    pub(super) fn new(employee: &user::Model, model: &salary_structure::Model) -> Self {
        Self {
            employee_id: employee.id,
            login_id: employee.login_id.clone(),
            structure: SalaryStructure::from(model),
            updated_at: model.updated_at,
        }
    }
}
