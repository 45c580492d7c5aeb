pub use sea_orm_migration::prelude::*;

mod util;
mod m20260105_091500_init;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_091500_init::Migration),
        ]
    }
}
