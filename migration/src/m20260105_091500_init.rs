use sea_orm_migration::{prelude::{extension::postgres::TypeDropStatement, *}, sea_orm::{ActiveEnum, DbBackend, DeriveActiveEnum, EnumIter, Schema}};

use crate::util::{audited_table_statement, default_table_statement, employee_table_statement, setup_audit_fk, setup_employee_fk, EmployeeColumn};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(DbBackend::Postgres);

        manager.create_type(schema.create_enum_from_active_enum::<RoleType>()).await?;
        manager.create_type(schema.create_enum_from_active_enum::<AttendanceStatus>()).await?;
        manager.create_type(schema.create_enum_from_active_enum::<LeaveType>()).await?;
        manager.create_type(schema.create_enum_from_active_enum::<LeaveStatus>()).await?;
        manager.create_type(schema.create_enum_from_active_enum::<PayslipStatus>()).await?;

        manager
            .create_table(default_table_statement()
                .table(User::Table)
                .col(ColumnDef::new(User::LoginId)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(User::Role)
                    .custom(RoleType::name())
                    .not_null())
                .col(ColumnDef::new(User::Active)
                    .boolean()
                    .not_null()
                    .default(true))
                .take()
            ).await?;

        manager
            .create_table(employee_table_statement()
                .table(Attendance::Table)
                .col(ColumnDef::new(Attendance::Date)
                    .date()
                    .not_null())
                .col(ColumnDef::new(Attendance::Status)
                    .custom(AttendanceStatus::name())
                    .not_null())
                .col(ColumnDef::new(Attendance::CheckIn)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(Attendance::CheckOut)
                    .timestamp_with_time_zone())
                .take()
            ).await?;
        setup_employee_fk(manager, Attendance::Table).await?;

        // One record per employee and calendar day
        manager
            .create_index(Index::create()
                .name("idx-attendance-employee-date")
                .table(Attendance::Table)
                .col(EmployeeColumn::EmployeeId)
                .col(Attendance::Date)
                .unique()
                .take()
            ).await?;

        manager
            .create_table(employee_table_statement()
                .table(LeaveRequest::Table)
                .col(ColumnDef::new(LeaveRequest::StartDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::EndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::LeaveType)
                    .custom(LeaveType::name())
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::Status)
                    .custom(LeaveStatus::name())
                    .not_null()
                    .default(Expr::val("pending").cast_as("leave_status")))
                .check(Expr::col(LeaveRequest::StartDate).lte(Expr::col(LeaveRequest::EndDate)))
                .take()
            ).await?;
        setup_employee_fk(manager, LeaveRequest::Table).await?;

        manager
            .create_table(audited_table_statement()
                .table(SalaryStructure::Table)
                .col(ColumnDef::new(SalaryStructure::MonthlyWage).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::YearlyWage).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::BasicPercentage).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::BasicAmount).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::HraPercentageOfBasic).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::HraAmount).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::StandardAllowance).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::PerformanceBonusPercentageOfBasic).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::PerformanceBonusAmount).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::LtaPercentageOfBasic).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::LtaAmount).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::FixedAllowance).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::PfRate).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::PfEmployeeContribution).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::PfEmployerContribution).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::ProfessionalTax).decimal().not_null())
                .col(ColumnDef::new(SalaryStructure::WorkingDaysPerWeek)
                    .small_integer()
                    .not_null()
                    .default(5))
                .take()
            ).await?;
        setup_employee_fk(manager, SalaryStructure::Table).await?;
        setup_audit_fk(manager, SalaryStructure::Table).await?;

        // Target of the structure upsert
        manager
            .create_index(Index::create()
                .name("idx-salary-structure-employee")
                .table(SalaryStructure::Table)
                .col(EmployeeColumn::EmployeeId)
                .unique()
                .take()
            ).await?;

        manager
            .create_table(employee_table_statement()
                .table(Payslip::Table)
                .col(ColumnDef::new(Payslip::Month).small_integer().not_null())
                .col(ColumnDef::new(Payslip::Year).integer().not_null())
                .col(ColumnDef::new(Payslip::TotalDays).small_integer().not_null())
                .col(ColumnDef::new(Payslip::PayableDays).decimal_len(5, 1).not_null())
                .col(ColumnDef::new(Payslip::Basic).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::Hra).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::StandardAllowance).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::PerformanceBonus).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::Lta).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::FixedAllowance).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::GrossEarnings).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::PfEmployee).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::ProfessionalTax).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::UnpaidLeaveDeduction).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::TotalDeductions).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::NetSalary).decimal_len(20, 2).not_null())
                .col(ColumnDef::new(Payslip::Status)
                    .custom(PayslipStatus::name())
                    .not_null())
                .col(ColumnDef::new(Payslip::GeneratedDate)
                    .timestamp_with_time_zone()
                    .not_null())
                .check(Expr::col(Payslip::Month).between(1, 12))
                .take()
            ).await?;
        setup_employee_fk(manager, Payslip::Table).await?;

        // Regenerating a period overwrites the previous payslip
        manager
            .create_index(Index::create()
                .name("idx-payslip-employee-period")
                .table(Payslip::Table)
                .col(EmployeeColumn::EmployeeId)
                .col(Payslip::Month)
                .col(Payslip::Year)
                .unique()
                .take()
            ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for statement in [
            TableDropStatement::new().table(Payslip::Table).take(),
            TableDropStatement::new().table(SalaryStructure::Table).take(),
            TableDropStatement::new().table(LeaveRequest::Table).take(),
            TableDropStatement::new().table(Attendance::Table).take(),
            TableDropStatement::new().table(User::Table).take(),
        ] {
            manager.drop_table(statement).await?;
        }

        for name in [PayslipStatus::name(), LeaveStatus::name(), LeaveType::name(), AttendanceStatus::name(), RoleType::name()] {
            manager
                .drop_type(
                    TypeDropStatement::new()
                        .name(name)
                        .to_owned()
                ).await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum User {
    Table,
    LoginId,
    Role,
    Active,
}

#[derive(Iden)]
enum Attendance {
    Table,
    Date,
    Status,
    CheckIn,
    CheckOut,
}

#[derive(Iden)]
enum LeaveRequest {
    Table,
    StartDate,
    EndDate,
    LeaveType,
    Status,
}

#[derive(Iden)]
enum SalaryStructure {
    Table,
    MonthlyWage,
    YearlyWage,
    BasicPercentage,
    BasicAmount,
    HraPercentageOfBasic,
    HraAmount,
    StandardAllowance,
    PerformanceBonusPercentageOfBasic,
    PerformanceBonusAmount,
    LtaPercentageOfBasic,
    LtaAmount,
    FixedAllowance,
    PfRate,
    PfEmployeeContribution,
    PfEmployerContribution,
    ProfessionalTax,
    WorkingDaysPerWeek,
}

#[derive(Iden)]
enum Payslip {
    Table,
    Month,
    Year,
    TotalDays,
    PayableDays,
    Basic,
    Hra,
    StandardAllowance,
    PerformanceBonus,
    Lta,
    FixedAllowance,
    GrossEarnings,
    PfEmployee,
    ProfessionalTax,
    UnpaidLeaveDeduction,
    TotalDeductions,
    NetSalary,
    Status,
    GeneratedDate,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role_type")]
enum RoleType {
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "attendance_status")]
enum AttendanceStatus {
    #[sea_orm(string_value = "PRESENT")]
    Present,
    #[sea_orm(string_value = "ABSENT")]
    Absent,
    #[sea_orm(string_value = "HALF_DAY")]
    HalfDay,
    #[sea_orm(string_value = "LEAVE")]
    Leave,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "leave_type")]
enum LeaveType {
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "sick")]
    Sick,
    #[sea_orm(string_value = "unpaid")]
    Unpaid,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "leave_status")]
enum LeaveStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payslip_status")]
enum PayslipStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PAID")]
    Paid,
    #[sea_orm(string_value = "UNPAID")]
    Unpaid,
}
