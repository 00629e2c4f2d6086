//! `SeaORM` Entity for one card in the services section.

use crate::content::{assign, ContentEntity, Fieldset, SectionKind};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: String,
    /// Display order, lower numbers first.
    pub order: i32,
    /// HTML anchor id (e.g. `cctv`, `card`), empty for none.
    pub anchor_id: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub order: Option<i32>,
    pub anchor_id: Option<String>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "service-items";
    const LABEL: &'static str = "Service Items";
    const KIND: SectionKind = SectionKind::List;
    const UPLOAD_FOLDER: Option<&'static str> = Some("services");
    const LIST_DISPLAY: &'static [&'static str] = &["title", "order", "anchor_id", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Content",
            fields: &["title", "description", "image"],
        },
        Fieldset {
            name: "Settings",
            fields: &["order", "anchor_id", "is_active"],
        },
    ];

    type Form = Form;

    fn id_column() -> Column {
        Column::Id
    }

    fn active_column() -> Column {
        Column::IsActive
    }

    fn order_column() -> Option<Column> {
        Some(Column::Order)
    }

    fn image_columns() -> Vec<Column> {
        vec![Column::Image]
    }

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set(String::new()),
            description: Set(String::new()),
            image: Set(String::new()),
            order: Set(0),
            anchor_id: Set(String::new()),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.title, form.title);
        assign(&mut record.description, form.description);
        assign(&mut record.image, form.image);
        assign(&mut record.order, form.order);
        assign(&mut record.anchor_id, form.anchor_id);
        assign(&mut record.is_active, form.is_active);
    }
}
