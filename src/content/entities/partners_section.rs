//! `SeaORM` Entity for the partners header shown above the logo strip.

use crate::content::{assign, ContentEntity, Fieldset, SectionKind, HEADER_FIELDSETS};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "partners_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "partners-header";
    const LABEL: &'static str = "Partners Section Header";
    const KIND: SectionKind = SectionKind::Singleton;
    const LIST_DISPLAY: &'static [&'static str] = &["title", "is_active"];
    const FIELDSETS: &'static [Fieldset] = HEADER_FIELDSETS;

    type Form = Form;

    fn id_column() -> Column {
        Column::Id
    }

    fn active_column() -> Column {
        Column::IsActive
    }

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set("Our Partners".to_string()),
            subtitle: Set(String::new()),
            description: Set(String::new()),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.title, form.title);
        assign(&mut record.subtitle, form.subtitle);
        assign(&mut record.description, form.description);
        assign(&mut record.is_active, form.is_active);
    }
}
