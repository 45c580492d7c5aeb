use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default salary rules applied when an administrator leaves a field out
pub const DEFAULT_BASIC_PERCENTAGE: Decimal = dec!(50);
pub const DEFAULT_HRA_PERCENTAGE_OF_BASIC: Decimal = dec!(50);
pub const DEFAULT_STANDARD_ALLOWANCE: Decimal = dec!(4167);
pub const DEFAULT_PERFORMANCE_BONUS_PERCENTAGE_OF_BASIC: Decimal = dec!(8.33);
pub const DEFAULT_LTA_PERCENTAGE_OF_BASIC: Decimal = dec!(8.333);
pub const DEFAULT_PF_RATE: Decimal = dec!(12);
pub const DEFAULT_PROFESSIONAL_TAX: Decimal = dec!(200);
pub const DEFAULT_WORKING_DAYS_PER_WEEK: u8 = 5;

/// Exclusive upper bound for the wage and the flat amounts in a rule set
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Monetary figures on a payslip are kept to this many decimal places
pub const MONEY_SCALE: u32 = 2;
