//! `SeaORM` Entity for the hero banner (logo over a background image).

use crate::content::{assign, ContentEntity, Fieldset, SectionKind, STATUS_FIELDSET};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Media path under `hero/`, rendered 280px wide.
    pub logo_image: String,
    pub background_image: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    pub logo_image: Option<String>,
    pub background_image: Option<String>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "hero";
    const LABEL: &'static str = "Hero Section";
    const KIND: SectionKind = SectionKind::Singleton;
    const UPLOAD_FOLDER: Option<&'static str> = Some("hero");
    const LIST_DISPLAY: &'static [&'static str] = &["id", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Images",
            fields: &["logo_image", "background_image"],
        },
        STATUS_FIELDSET,
    ];

    type Form = Form;

    fn id_column() -> Column {
        Column::Id
    }

    fn active_column() -> Column {
        Column::IsActive
    }

    fn image_columns() -> Vec<Column> {
        vec![Column::LogoImage, Column::BackgroundImage]
    }

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            logo_image: Set(String::new()),
            background_image: Set(String::new()),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.logo_image, form.logo_image);
        assign(&mut record.background_image, form.background_image);
        assign(&mut record.is_active, form.is_active);
    }
}
