//! `SeaORM` Entity for the site footer.

use crate::content::{assign, ContentEntity, Fieldset, SectionKind, STATUS_FIELDSET};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "footer_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub logo_image: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub copyright_text: String,
    pub phone: String,
    pub location: String,
    pub developer_text: String,
    pub developer_url: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    pub logo_image: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub copyright_text: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub developer_text: Option<String>,
    pub developer_url: Option<String>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "footer";
    const LABEL: &'static str = "Footer Section";
    const KIND: SectionKind = SectionKind::Singleton;
    const UPLOAD_FOLDER: Option<&'static str> = Some("footer");
    const LIST_DISPLAY: &'static [&'static str] = &["id", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Logo",
            fields: &["logo_image"],
        },
        Fieldset {
            name: "Social Media Links",
            fields: &["facebook_url", "twitter_url", "instagram_url", "youtube_url"],
        },
        Fieldset {
            name: "Contact Information",
            fields: &["copyright_text", "phone", "location"],
        },
        Fieldset {
            name: "Developer Credit",
            fields: &["developer_text", "developer_url"],
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
        vec![Column::LogoImage]
    }

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            logo_image: Set(String::new()),
            facebook_url: Set(String::new()),
            twitter_url: Set(String::new()),
            instagram_url: Set(String::new()),
            youtube_url: Set(String::new()),
            copyright_text: Set("©2025 LIVE i TECH, Inc.".to_string()),
            phone: Set("(954) 445-0712".to_string()),
            location: Set("Ft. Lauderdale, Fl".to_string()),
            developer_text: Set("Tébar Software".to_string()),
            developer_url: Set(String::new()),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.logo_image, form.logo_image);
        assign(&mut record.facebook_url, form.facebook_url);
        assign(&mut record.twitter_url, form.twitter_url);
        assign(&mut record.instagram_url, form.instagram_url);
        assign(&mut record.youtube_url, form.youtube_url);
        assign(&mut record.copyright_text, form.copyright_text);
        assign(&mut record.phone, form.phone);
        assign(&mut record.location, form.location);
        assign(&mut record.developer_text, form.developer_text);
        assign(&mut record.developer_url, form.developer_url);
        assign(&mut record.is_active, form.is_active);
    }
}
