//! Salary structure resolution
//!
//! Turns a monthly wage and a set of percentage rules into concrete component
//! amounts. Amounts are kept at full precision, rounding only happens on the payslip.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{consts, error::PayrollError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryRules {
    pub basic_percentage: Decimal,
    pub hra_percentage_of_basic: Decimal,
    pub standard_allowance: Decimal,
    pub performance_bonus_percentage_of_basic: Decimal,
    pub lta_percentage_of_basic: Decimal,
    pub pf_rate: Decimal,
    pub professional_tax: Decimal,
    pub working_days_per_week: u8,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            basic_percentage: consts::DEFAULT_BASIC_PERCENTAGE,
            hra_percentage_of_basic: consts::DEFAULT_HRA_PERCENTAGE_OF_BASIC,
            standard_allowance: consts::DEFAULT_STANDARD_ALLOWANCE,
            performance_bonus_percentage_of_basic: consts::DEFAULT_PERFORMANCE_BONUS_PERCENTAGE_OF_BASIC,
            lta_percentage_of_basic: consts::DEFAULT_LTA_PERCENTAGE_OF_BASIC,
            pf_rate: consts::DEFAULT_PF_RATE,
            professional_tax: consts::DEFAULT_PROFESSIONAL_TAX,
            working_days_per_week: consts::DEFAULT_WORKING_DAYS_PER_WEEK,
        }
    }
}

impl SalaryRules {
    /// Rejects rule sets an administrator should never be able to store
    pub fn validate(&self, monthly_wage: Decimal) -> Result<(), PayrollError> {
        if monthly_wage <= Decimal::ZERO {
            return Err(PayrollError::validation("monthlyWage must be greater than 0"));
        }

        let amounts = [
            ("monthlyWage", monthly_wage),
            ("standardAllowance", self.standard_allowance),
            ("professionalTax", self.professional_tax),
        ];

        for (name, value) in amounts {
            if value >= consts::MAX_AMOUNT {
                return Err(PayrollError::validation(format!("{name} must be less than {}", consts::MAX_AMOUNT)));
            }
        }

        let percentages = [
            ("basicPercentage", self.basic_percentage),
            ("hraPercentageOfBasic", self.hra_percentage_of_basic),
            ("performanceBonusPercentageOfBasic", self.performance_bonus_percentage_of_basic),
            ("ltaPercentageOfBasic", self.lta_percentage_of_basic),
            ("pfRate", self.pf_rate),
        ];

        for (name, value) in percentages {
            if value < Decimal::ZERO || value > dec!(100) {
                return Err(PayrollError::validation(format!("{name} must be between 0 and 100")));
            }
        }

        if self.standard_allowance < Decimal::ZERO {
            return Err(PayrollError::validation("standardAllowance cannot be negative"));
        }

        if self.professional_tax < Decimal::ZERO {
            return Err(PayrollError::validation("professionalTax cannot be negative"));
        }

        if !(1..=7).contains(&self.working_days_per_week) {
            return Err(PayrollError::validation("workingDaysPerWeek must be between 1 and 7"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentOfWage {
    pub percentage: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentOfBasic {
    pub percentage_of_basic: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidentFund {
    pub rate: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStructure {
    pub monthly_wage: Decimal,
    pub yearly_wage: Decimal,
    pub basic: PercentOfWage,
    pub hra: PercentOfBasic,
    pub standard_allowance: Decimal,
    pub performance_bonus: PercentOfBasic,
    pub lta: PercentOfBasic,
    pub fixed_allowance: Decimal,
    pub pf: ProvidentFund,
    pub professional_tax: Decimal,
    pub working_days_per_week: u8,
}

impl SalaryStructure {
    /// Every earning component, in payslip order
    pub fn earning_components(&self) -> [Decimal; 6] {
        [
            self.basic.amount,
            self.hra.amount,
            self.standard_allowance,
            self.performance_bonus.amount,
            self.lta.amount,
            self.fixed_allowance,
        ]
    }
}

fn percent_of(base: Decimal, percentage: Decimal) -> Decimal {
    base * percentage / dec!(100)
}

fn percent_of_basic(basic: Decimal, percentage_of_basic: Decimal) -> PercentOfBasic {
    PercentOfBasic {
        percentage_of_basic,
        amount: percent_of(basic, percentage_of_basic),
    }
}

/// Derives every component of a salary from the monthly wage.
///
/// The fixed allowance takes whatever is left of the wage after the other earnings,
/// and is clamped at zero when the configured percentages already exceed the wage.
pub fn resolve_structure(monthly_wage: Decimal, rules: &SalaryRules) -> SalaryStructure {
    let basic_amount = percent_of(monthly_wage, rules.basic_percentage);

    let hra = percent_of_basic(basic_amount, rules.hra_percentage_of_basic);
    let performance_bonus = percent_of_basic(basic_amount, rules.performance_bonus_percentage_of_basic);
    let lta = percent_of_basic(basic_amount, rules.lta_percentage_of_basic);

    let initial_sum = basic_amount + hra.amount + rules.standard_allowance + performance_bonus.amount + lta.amount;
    let fixed_allowance = (monthly_wage - initial_sum).max(Decimal::ZERO);

    let pf_contribution = percent_of(basic_amount, rules.pf_rate);

    SalaryStructure {
        monthly_wage,
        yearly_wage: monthly_wage * dec!(12),
        basic: PercentOfWage {
            percentage: rules.basic_percentage,
            amount: basic_amount,
        },
        hra,
        standard_allowance: rules.standard_allowance,
        performance_bonus,
        lta,
        fixed_allowance,
        pf: ProvidentFund {
            rate: rules.pf_rate,
            employee_contribution: pf_contribution,
            employer_contribution: pf_contribution,
        },
        professional_tax: rules.professional_tax,
        working_days_per_week: rules.working_days_per_week,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_rules() {
        let structure = resolve_structure(dec!(50000), &SalaryRules::default());

        assert_eq!(structure.yearly_wage, dec!(600000));
        assert_eq!(structure.basic.amount, dec!(25000));
        assert_eq!(structure.hra.amount, dec!(12500));
        assert_eq!(structure.standard_allowance, dec!(4167));
        assert_eq!(structure.performance_bonus.amount, dec!(2082.5));
        assert_eq!(structure.lta.amount, dec!(2083.25));
        assert_eq!(structure.fixed_allowance, dec!(4167.25));
        assert_eq!(structure.pf.employee_contribution, dec!(3000));
        assert_eq!(structure.pf.employer_contribution, dec!(3000));
        assert_eq!(structure.professional_tax, dec!(200));
        assert_eq!(structure.working_days_per_week, 5);
    }

    #[test]
    fn test_earnings_reconcile_to_wage() {
        for wage in [dec!(30000), dec!(50000), dec!(73456.78), dec!(250000)] {
            let structure = resolve_structure(wage, &SalaryRules::default());
            let total: Decimal = structure.earning_components().iter().sum();

            assert_eq!(total, wage, "earnings for {wage} don't add up");
        }
    }

    #[test]
    fn test_fixed_allowance_is_clamped() {
        let rules = SalaryRules {
            basic_percentage: dec!(80),
            hra_percentage_of_basic: dec!(60),
            ..Default::default()
        };

        let structure = resolve_structure(dec!(20000), &rules);

        assert_eq!(structure.fixed_allowance, Decimal::ZERO);

        let total: Decimal = structure.earning_components().iter().sum();
        assert!(total > structure.monthly_wage);
    }

    #[test]
    fn test_small_wage_is_swallowed_by_standard_allowance() {
        let structure = resolve_structure(dec!(5000), &SalaryRules::default());

        // 2500 + 1250 + 4167 + ... already exceeds 5000
        assert_eq!(structure.fixed_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_validate_upper_bounds() {
        let rules = SalaryRules::default();
        let largest = consts::MAX_AMOUNT - dec!(0.01);

        assert!(rules.validate(largest).is_ok());
        assert!(matches!(rules.validate(consts::MAX_AMOUNT), Err(PayrollError::Validation(_))));
        assert!(matches!(rules.validate(dec!(10000000000000000000000000000)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { standard_allowance: consts::MAX_AMOUNT, ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { professional_tax: consts::MAX_AMOUNT, ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));

        // Everything that passes validation resolves without overflowing
        let rules = SalaryRules {
            basic_percentage: dec!(100),
            hra_percentage_of_basic: dec!(100),
            performance_bonus_percentage_of_basic: dec!(100),
            lta_percentage_of_basic: dec!(100),
            pf_rate: dec!(100),
            standard_allowance: largest,
            professional_tax: largest,
            ..Default::default()
        };
        assert!(rules.validate(largest).is_ok());

        let structure = resolve_structure(largest, &rules);
        assert_eq!(structure.yearly_wage, largest * dec!(12));
        assert_eq!(structure.fixed_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_validate() {
        let rules = SalaryRules::default();
        assert!(rules.validate(dec!(50000)).is_ok());

        assert!(matches!(rules.validate(Decimal::ZERO), Err(PayrollError::Validation(_))));
        assert!(matches!(rules.validate(dec!(-1)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { basic_percentage: dec!(100.01), ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { pf_rate: dec!(-3), ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { standard_allowance: dec!(-1), ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { professional_tax: dec!(-200), ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { working_days_per_week: 0, ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));

        let rules = SalaryRules { working_days_per_week: 8, ..Default::default() };
        assert!(matches!(rules.validate(dec!(50000)), Err(PayrollError::Validation(_))));
    }
}
