//! `SeaORM` Entity for the contact block (heading, phone, map embed).

use crate::content::{assign, ContentEntity, Fieldset, SectionKind, STATUS_FIELDSET};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub subtitle: String,
    pub phone: String,
    /// `src` of the Google Maps iframe.
    #[sea_orm(column_type = "Text")]
    pub google_maps_embed_url: String,
    pub is_active: bool,
}

impl Model {
    /// Phone number reduced to a `tel:` link target.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub phone: Option<String>,
    pub google_maps_embed_url: Option<String>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "contact";
    const LABEL: &'static str = "Contact Section";
    const KIND: SectionKind = SectionKind::Singleton;
    const LIST_DISPLAY: &'static [&'static str] = &["title", "phone", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Content",
            fields: &["title", "subtitle", "phone", "google_maps_embed_url"],
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

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set("Get LiT Now!".to_string()),
            subtitle: Set(String::new()),
            phone: Set("(954) 445-0712".to_string()),
            google_maps_embed_url: Set(String::new()),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.title, form.title);
        assign(&mut record.subtitle, form.subtitle);
        assign(&mut record.phone, form.phone);
        assign(&mut record.google_maps_embed_url, form.google_maps_embed_url);
        assign(&mut record.is_active, form.is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_href() {
        let model = Model {
            id: 1,
            title: "Get LiT Now!".to_string(),
            subtitle: String::new(),
            phone: "(954) 445-0712".to_string(),
            google_maps_embed_url: String::new(),
            is_active: true,
        };
        assert_eq!(model.phone_href(), "tel:9544450712");
    }
}
