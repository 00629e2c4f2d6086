//! `SeaORM` Entity for a partner logo.

use crate::content::{assign, ContentEntity, Fieldset, SectionKind};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "partner_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub logo: String,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "partner-items";
    const LABEL: &'static str = "Partners";
    const KIND: SectionKind = SectionKind::List;
    const UPLOAD_FOLDER: Option<&'static str> = Some("partners");
    const LIST_DISPLAY: &'static [&'static str] = &["name", "order", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Content",
            fields: &["name", "logo"],
        },
        Fieldset {
            name: "Settings",
            fields: &["order", "is_active"],
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
        vec![Column::Logo]
    }

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(String::new()),
            logo: Set(String::new()),
            order: Set(0),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.name, form.name);
        assign(&mut record.logo, form.logo);
        assign(&mut record.order, form.order);
        assign(&mut record.is_active, form.is_active);
    }
}
