//! Generic read/write helpers over every [`ContentEntity`].
//!
//! Reads used by the homepage never fail on missing data: an absent singleton
//! is `None`, an empty list is empty. Writes run in a transaction so that a
//! singleton saved as active deactivates its siblings atomically.

use super::entities::{footer_section, hero_section, partner_item, portfolio_section, service_item};
use super::{ContentEntity, SectionKind};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder,
    TransactionTrait, UpdateMany, Value,
};
use serde::Deserialize;

/// One row of a bulk order update.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrderEntry {
    pub id: i32,
    pub order: i32,
}

// ============================================================================
// Reads
// ============================================================================

/// First active row by ascending id, or `None`.
pub async fn first_active<E, C>(db: &C) -> Result<Option<E::Model>, DbErr>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    E::find()
        .filter(ColumnTrait::eq(&E::active_column(), true))
        .order_by_asc(E::id_column())
        .one(db)
        .await
}

/// Active rows, by `order` then id for list types, by id otherwise.
pub async fn all_active<E, C>(db: &C) -> Result<Vec<E::Model>, DbErr>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    let mut query = E::find().filter(ColumnTrait::eq(&E::active_column(), true));
    if let Some(order) = E::order_column() {
        query = query.order_by_asc(order);
    }
    query.order_by_asc(E::id_column()).all(db).await
}

/// Every row, active or not, in display order.
pub async fn list<E, C>(db: &C) -> Result<Vec<E::Model>, DbErr>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    let mut query = E::find();
    if let Some(order) = E::order_column() {
        query = query.order_by_asc(order);
    }
    query.order_by_asc(E::id_column()).all(db).await
}

pub async fn get<E, C>(db: &C, id: i32) -> Result<Option<E::Model>, DbErr>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    E::find()
        .filter(ColumnTrait::eq(&E::id_column(), id))
        .one(db)
        .await
}

// ============================================================================
// Writes
// ============================================================================

/// Insert a record built from the type's defaults plus `form`.
pub async fn create<E>(db: &DatabaseConnection, form: E::Form) -> Result<E::Model, DbErr>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let mut record = E::blank();
    E::apply(form, &mut record);

    let txn = db.begin().await?;
    let model = record.insert(&txn).await?;
    let siblings = sibling_deactivation::<E>(&model);
    let deactivated = deactivate_siblings(&txn, siblings).await?;
    txn.commit().await?;

    if deactivated > 0 {
        tracing::info!("{}: deactivated {} other active row(s)", E::SLUG, deactivated);
    }
    Ok(model)
}

/// Apply a partial `form` to an existing record. `Ok(None)` when the id is unknown.
pub async fn update<E>(
    db: &DatabaseConnection,
    id: i32,
    form: E::Form,
) -> Result<Option<E::Model>, DbErr>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let txn = db.begin().await?;

    let Some(existing) = get::<E, _>(&txn, id).await? else {
        return Ok(None);
    };

    let mut record: E::ActiveModel = existing.into_active_model();
    E::apply(form, &mut record);
    // An empty form still issues a valid UPDATE
    record.reset(E::active_column());

    let model = record.update(&txn).await?;
    let siblings = sibling_deactivation::<E>(&model);
    let deactivated = deactivate_siblings(&txn, siblings).await?;
    txn.commit().await?;

    if deactivated > 0 {
        tracing::info!("{}: deactivated {} other active row(s)", E::SLUG, deactivated);
    }
    Ok(Some(model))
}

/// Delete a record, returning it so owned media can be cleaned up.
pub async fn delete<E>(db: &DatabaseConnection, id: i32) -> Result<Option<E::Model>, DbErr>
where
    E: ContentEntity,
{
    let Some(existing) = get::<E, _>(db, id).await? else {
        return Ok(None);
    };

    E::delete_many()
        .filter(ColumnTrait::eq(&E::id_column(), id))
        .exec(db)
        .await?;

    Ok(Some(existing))
}

/// Bulk-update `order` for a list type. Returns the number of rows touched.
pub async fn reorder<E>(db: &DatabaseConnection, entries: &[OrderEntry]) -> Result<u64, DbErr>
where
    E: ContentEntity,
{
    let Some(order_column) = E::order_column() else {
        return Err(DbErr::Custom(format!("{} has no order column", E::SLUG)));
    };

    let txn = db.begin().await?;
    let mut updated = 0;
    for entry in entries {
        let result = E::update_many()
            .col_expr(order_column, Expr::value(entry.order))
            .filter(ColumnTrait::eq(&E::id_column(), entry.id))
            .exec(&txn)
            .await?;
        updated += result.rows_affected;
    }
    txn.commit().await?;

    Ok(updated)
}

/// Media paths referenced by a record's image columns.
pub fn image_paths<E>(model: &E::Model) -> Vec<String>
where
    E: ContentEntity,
{
    E::image_columns()
        .into_iter()
        .filter_map(|column| match model.get(column) {
            Value::String(Some(path)) if !path.is_empty() => Some(path.to_string()),
            _ => None,
        })
        .collect()
}

/// Whether a record of `E` points at `path` from one of its image columns.
pub async fn references_media<E, C>(db: &C, path: &str) -> Result<bool, DbErr>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    let columns = E::image_columns();
    if columns.is_empty() {
        return Ok(false);
    }

    let condition = columns
        .into_iter()
        .fold(Condition::any(), |condition, column| {
            condition.add(ColumnTrait::eq(&column, path))
        });
    let query = E::find().filter(condition);
    Ok(query.one(db).await?.is_some())
}

/// Whether any record of any type still uses the media file at `path`.
pub async fn media_in_use<C>(db: &C, path: &str) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    Ok(references_media::<hero_section::Entity, _>(db, path).await?
        || references_media::<service_item::Entity, _>(db, path).await?
        || references_media::<portfolio_section::Entity, _>(db, path).await?
        || references_media::<partner_item::Entity, _>(db, path).await?
        || references_media::<footer_section::Entity, _>(db, path).await?)
}

pub fn is_active<E>(model: &E::Model) -> bool
where
    E: ContentEntity,
{
    matches!(model.get(E::active_column()), Value::Bool(Some(true)))
}

/// Keep at most one active singleton: when `model` is an active singleton,
/// the returned statement switches off every other active row of its type.
fn sibling_deactivation<E>(model: &E::Model) -> Option<UpdateMany<E>>
where
    E: ContentEntity,
{
    if E::KIND != SectionKind::Singleton || !is_active::<E>(model) {
        return None;
    }

    let statement = E::update_many()
        .col_expr(E::active_column(), Expr::value(false))
        .filter(ColumnTrait::ne(&E::id_column(), model.get(E::id_column())))
        .filter(ColumnTrait::eq(&E::active_column(), true));
    Some(statement)
}

async fn deactivate_siblings<E, C>(db: &C, statement: Option<UpdateMany<E>>) -> Result<u64, DbErr>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    match statement {
        Some(statement) => Ok(statement.exec(db).await?.rows_affected),
        None => Ok(0),
    }
}
