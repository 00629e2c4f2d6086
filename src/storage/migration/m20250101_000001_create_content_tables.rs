use crate::content::entities::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};
use tracing::info;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_table(manager, hero_section::Entity).await?;
        create_table(manager, about_section::Entity).await?;
        create_table(manager, services_section::Entity).await?;
        create_table(manager, service_item::Entity).await?;
        create_table(manager, portfolio_section::Entity).await?;
        create_table(manager, partners_section::Entity).await?;
        create_table(manager, partner_item::Entity).await?;
        create_table(manager, examples_section::Entity).await?;
        create_table(manager, example_video::Entity).await?;
        create_table(manager, contact_section::Entity).await?;
        create_table(manager, footer_section::Entity).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, footer_section::Entity).await?;
        drop_table(manager, contact_section::Entity).await?;
        drop_table(manager, example_video::Entity).await?;
        drop_table(manager, examples_section::Entity).await?;
        drop_table(manager, partner_item::Entity).await?;
        drop_table(manager, partners_section::Entity).await?;
        drop_table(manager, portfolio_section::Entity).await?;
        drop_table(manager, service_item::Entity).await?;
        drop_table(manager, services_section::Entity).await?;
        drop_table(manager, about_section::Entity).await?;
        drop_table(manager, hero_section::Entity).await?;
        Ok(())
    }
}

/// Create the table for `entity` from its SeaORM definition.
async fn create_table<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let schema = Schema::new(manager.get_database_backend());
    let stmt = schema
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned();
    manager.create_table(stmt).await?;
    info!("Table ready: {}", entity.table_name());
    Ok(())
}

async fn drop_table<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
