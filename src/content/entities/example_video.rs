//! `SeaORM` Entity for an embedded example video.
//!
//! The stored URL is always an embed URL: watch and share links are
//! converted on write.

use crate::content::{assign, ContentEntity, Fieldset, SectionKind};
use crate::utils::youtube_embed_url;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "example_video")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub youtube_url: String,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    pub youtube_url: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "example-videos";
    const LABEL: &'static str = "Example Videos";
    const KIND: SectionKind = SectionKind::List;
    const LIST_DISPLAY: &'static [&'static str] = &["youtube_url", "order", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Content",
            fields: &["youtube_url"],
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

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            youtube_url: Set(String::new()),
            order: Set(0),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(
            &mut record.youtube_url,
            form.youtube_url.map(|url| youtube_embed_url(&url)),
        );
        assign(&mut record.order, form.order);
        assign(&mut record.is_active, form.is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_converts_watch_url() {
        let mut record = Entity::blank();
        Entity::apply(
            Form {
                youtube_url: Some("https://www.youtube.com/watch?v=i5n6OMiVgEU".to_string()),
                ..Default::default()
            },
            &mut record,
        );
        assert_eq!(
            record.youtube_url,
            Set("https://www.youtube-nocookie.com/embed/i5n6OMiVgEU".to_string())
        );
    }
}
