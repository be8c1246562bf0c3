use sea_orm_migration::prelude::*;

mod m20250601_000001_create_links;
mod m20250601_000002_create_visits;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_links::Migration),
            Box::new(m20250601_000002_create_visits::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
