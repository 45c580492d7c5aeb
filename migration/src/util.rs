use sea_orm_migration::prelude::*;

use crate::m20260105_091500_init::User;

pub(crate) fn default_table_statement() -> TableCreateStatement {
    TableCreateStatement::new()
        .if_not_exists()
        .col(ColumnDef::new(DefaultColumn::Id)
            .uuid()
            .primary_key()
            .default(Expr::cust("GEN_RANDOM_UUID()"))
            .take())
        .col(ColumnDef::new(DefaultColumn::CreatedAt)
            .timestamp_with_time_zone()
            .not_null()
            .take())
        .col(ColumnDef::new(DefaultColumn::UpdatedAt)
            .timestamp_with_time_zone()
            .not_null()
            .take())
        .take()
}

#[derive(DeriveIden)]
pub(crate) enum DefaultColumn {
    Id,
    CreatedAt,
    UpdatedAt,
}

/// Table owned by one employee through `employee_id`
pub(crate) fn employee_table_statement() -> TableCreateStatement {
    default_table_statement()
        .col(ColumnDef::new(EmployeeColumn::EmployeeId)
            .uuid()
            .not_null())
        .take()
}

/// Same as [`employee_table_statement`] with the admin who last touched the row.
///
/// Must run [`setup_audit_fk`] on the table afterwards
pub(crate) fn audited_table_statement() -> TableCreateStatement {
    employee_table_statement()
        .col(ColumnDef::new(AuditColumn::CreatedBy)
            .uuid())
        .col(ColumnDef::new(AuditColumn::UpdatedBy)
            .uuid())
        .take()
}

pub(crate) async fn setup_employee_fk(manager: &SchemaManager<'_>, table: impl IntoIden + Clone + 'static) -> Result<(), DbErr> {
    manager.create_foreign_key(ForeignKeyCreateStatement::new()
        .from(table, EmployeeColumn::EmployeeId)
        .to(User::Table, DefaultColumn::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .take()
    ).await
}

pub(crate) async fn setup_audit_fk(manager: &SchemaManager<'_>, table: impl IntoIden + Clone + 'static) -> Result<(), DbErr> {
    for column in [AuditColumn::CreatedBy, AuditColumn::UpdatedBy] {
        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(table.clone(), column)
            .to(User::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await?;
    }

    Ok(())
}

#[derive(DeriveIden)]
pub(crate) enum EmployeeColumn {
    EmployeeId,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum AuditColumn {
    CreatedBy,
    UpdatedBy,
}
