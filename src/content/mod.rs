//! Content Store
//!
//! Every homepage section is a SeaORM entity under `entities/`. Singleton
//! sections (hero, about, headers, contact, footer) hold one current
//! configuration; list sections (service items, partners, example videos) are
//! independent rows sorted by `order`.
//!
//! [`ContentEntity`] carries the per-type metadata the admin API and the page
//! composer need, so both can stay generic over the eleven record types.

pub mod entities;
pub mod repository;

use sea_orm::{ActiveValue, EntityTrait, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use entities::*;

/// Whether a record type holds one current configuration or many ordered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Singleton,
    List,
}

/// Named group of fields shown together in the admin.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Fieldset {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

/// Admin-facing description of one record type.
#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub slug: &'static str,
    pub label: &'static str,
    pub kind: SectionKind,
    pub upload_folder: Option<&'static str>,
    pub list_display: &'static [&'static str],
    pub fieldsets: &'static [Fieldset],
}

/// A homepage content record type.
///
/// `Form` is the admin write payload: every field optional, so the same type
/// serves create (missing fields keep the type's defaults) and partial update.
pub trait ContentEntity: EntityTrait {
    const SLUG: &'static str;
    const LABEL: &'static str;
    const KIND: SectionKind;
    const UPLOAD_FOLDER: Option<&'static str> = None;
    const LIST_DISPLAY: &'static [&'static str];
    const FIELDSETS: &'static [Fieldset];

    type Form: DeserializeOwned + Send + 'static;

    fn id_column() -> Self::Column;
    fn active_column() -> Self::Column;

    /// Sort column for list types; `None` for singletons.
    fn order_column() -> Option<Self::Column> {
        None
    }

    /// Columns holding media paths owned by the record.
    fn image_columns() -> Vec<Self::Column> {
        Vec::new()
    }

    /// New record populated with the type's field defaults.
    fn blank() -> Self::ActiveModel;

    /// Copy every field present in `form` onto `record`.
    fn apply(form: Self::Form, record: &mut Self::ActiveModel);

    fn info() -> SectionInfo {
        SectionInfo {
            slug: Self::SLUG,
            label: Self::LABEL,
            kind: Self::KIND,
            upload_folder: Self::UPLOAD_FOLDER,
            list_display: Self::LIST_DISPLAY,
            fieldsets: Self::FIELDSETS,
        }
    }
}

/// Metadata for every record type, in homepage order.
pub fn sections() -> Vec<SectionInfo> {
    vec![
        hero_section::Entity::info(),
        about_section::Entity::info(),
        services_section::Entity::info(),
        service_item::Entity::info(),
        portfolio_section::Entity::info(),
        partners_section::Entity::info(),
        partner_item::Entity::info(),
        examples_section::Entity::info(),
        example_video::Entity::info(),
        contact_section::Entity::info(),
        footer_section::Entity::info(),
    ]
}

/// Upload folders accepted by the media endpoint.
pub fn upload_folders() -> Vec<&'static str> {
    let mut folders: Vec<&'static str> = sections()
        .iter()
        .filter_map(|info| info.upload_folder)
        .collect();
    folders.sort_unstable();
    folders.dedup();
    folders
}

/// Overwrite `slot` when the form carried a value for it.
pub(crate) fn assign<V>(slot: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(value) = value {
        *slot = ActiveValue::Set(value);
    }
}

pub(crate) const STATUS_FIELDSET: Fieldset = Fieldset {
    name: "Status",
    fields: &["is_active"],
};

pub(crate) const HEADER_FIELDSETS: &[Fieldset] = &[
    Fieldset {
        name: "Content",
        fields: &["title", "subtitle", "description"],
    },
    STATUS_FIELDSET,
];
