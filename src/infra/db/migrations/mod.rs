//! Database migrations.
//!
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20230919_000001_create_users_table;
mod m20230919_000002_create_places_table;
mod m20230919_000003_create_transactions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230919_000001_create_users_table::Migration),
            Box::new(m20230919_000002_create_places_table::Migration),
            Box::new(m20230919_000003_create_transactions_table::Migration),
        ]
    }
}
