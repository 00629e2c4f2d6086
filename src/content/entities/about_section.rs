//! `SeaORM` Entity for the "About Us" section.
//!
//! Besides the copy, the section shows a grid of up to eight service icons.
//! Each slot is a FontAwesome class plus a caption; a slot with an empty
//! caption is not rendered.

use crate::content::{assign, ContentEntity, Fieldset, SectionKind, STATUS_FIELDSET};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "about_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub service_1_icon: String,
    pub service_1_text: String,
    pub service_2_icon: String,
    pub service_2_text: String,
    pub service_3_icon: String,
    pub service_3_text: String,
    pub service_4_icon: String,
    pub service_4_text: String,
    pub service_5_icon: String,
    pub service_5_text: String,
    pub service_6_icon: String,
    pub service_6_text: String,
    pub service_7_icon: String,
    pub service_7_text: String,
    pub service_8_icon: String,
    pub service_8_text: String,
    pub is_active: bool,
}

/// One cell of the icon grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceIcon {
    pub icon: String,
    pub text: String,
}

impl Model {
    /// Icon slots in display order, skipping slots without a caption.
    pub fn service_icons(&self) -> Vec<ServiceIcon> {
        [
            (&self.service_1_icon, &self.service_1_text),
            (&self.service_2_icon, &self.service_2_text),
            (&self.service_3_icon, &self.service_3_text),
            (&self.service_4_icon, &self.service_4_text),
            (&self.service_5_icon, &self.service_5_text),
            (&self.service_6_icon, &self.service_6_text),
            (&self.service_7_icon, &self.service_7_text),
            (&self.service_8_icon, &self.service_8_text),
        ]
        .into_iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(icon, text)| ServiceIcon {
            icon: icon.clone(),
            text: text.clone(),
        })
        .collect()
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
    pub description: Option<String>,
    pub service_1_icon: Option<String>,
    pub service_1_text: Option<String>,
    pub service_2_icon: Option<String>,
    pub service_2_text: Option<String>,
    pub service_3_icon: Option<String>,
    pub service_3_text: Option<String>,
    pub service_4_icon: Option<String>,
    pub service_4_text: Option<String>,
    pub service_5_icon: Option<String>,
    pub service_5_text: Option<String>,
    pub service_6_icon: Option<String>,
    pub service_6_text: Option<String>,
    pub service_7_icon: Option<String>,
    pub service_7_text: Option<String>,
    pub service_8_icon: Option<String>,
    pub service_8_text: Option<String>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "about";
    const LABEL: &'static str = "About Section";
    const KIND: SectionKind = SectionKind::Singleton;
    const LIST_DISPLAY: &'static [&'static str] = &["title", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Content",
            fields: &["title", "subtitle", "description"],
        },
        Fieldset {
            name: "Service Icons Row 1",
            fields: &[
                "service_1_icon",
                "service_1_text",
                "service_2_icon",
                "service_2_text",
                "service_3_icon",
                "service_3_text",
                "service_4_icon",
                "service_4_text",
            ],
        },
        Fieldset {
            name: "Service Icons Row 2",
            fields: &[
                "service_5_icon",
                "service_5_text",
                "service_6_icon",
                "service_6_text",
                "service_7_icon",
                "service_7_text",
                "service_8_icon",
                "service_8_text",
            ],
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
            title: Set("About Us".to_string()),
            subtitle: Set(String::new()),
            description: Set(String::new()),
            service_1_icon: Set("fa fa-comments".to_string()),
            service_1_text: Set("PA & Audio".to_string()),
            service_2_icon: Set("fa fa-phone".to_string()),
            service_2_text: Set("Intercom & Phone".to_string()),
            service_3_icon: Set("fa fa-lock".to_string()),
            service_3_text: Set("Access Control".to_string()),
            service_4_icon: Set("fa fa-support".to_string()),
            service_4_text: Set("CCTV".to_string()),
            service_5_icon: Set("fa fa-random".to_string()),
            service_5_text: Set("Support".to_string()),
            service_6_icon: Set("fa fa-ambulance".to_string()),
            service_6_text: Set("Maintenance".to_string()),
            service_7_icon: Set("fa fa-exclamation-triangle".to_string()),
            service_7_text: Set(String::new()),
            service_8_icon: Set("fa fa-code".to_string()),
            service_8_text: Set("Custom Software".to_string()),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.title, form.title);
        assign(&mut record.subtitle, form.subtitle);
        assign(&mut record.description, form.description);
        assign(&mut record.service_1_icon, form.service_1_icon);
        assign(&mut record.service_1_text, form.service_1_text);
        assign(&mut record.service_2_icon, form.service_2_icon);
        assign(&mut record.service_2_text, form.service_2_text);
        assign(&mut record.service_3_icon, form.service_3_icon);
        assign(&mut record.service_3_text, form.service_3_text);
        assign(&mut record.service_4_icon, form.service_4_icon);
        assign(&mut record.service_4_text, form.service_4_text);
        assign(&mut record.service_5_icon, form.service_5_icon);
        assign(&mut record.service_5_text, form.service_5_text);
        assign(&mut record.service_6_icon, form.service_6_icon);
        assign(&mut record.service_6_text, form.service_6_text);
        assign(&mut record.service_7_icon, form.service_7_icon);
        assign(&mut record.service_7_text, form.service_7_text);
        assign(&mut record.service_8_icon, form.service_8_icon);
        assign(&mut record.service_8_text, form.service_8_text);
        assign(&mut record.is_active, form.is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model {
            id: 1,
            title: "About Us".to_string(),
            subtitle: String::new(),
            description: String::new(),
            service_1_icon: "fa fa-comments".to_string(),
            service_1_text: "PA & Audio".to_string(),
            service_2_icon: "fa fa-phone".to_string(),
            service_2_text: "Intercom & Phone".to_string(),
            service_3_icon: "fa fa-lock".to_string(),
            service_3_text: "Access Control".to_string(),
            service_4_icon: "fa fa-support".to_string(),
            service_4_text: "CCTV".to_string(),
            service_5_icon: "fa fa-random".to_string(),
            service_5_text: "Support".to_string(),
            service_6_icon: "fa fa-ambulance".to_string(),
            service_6_text: "Maintenance".to_string(),
            service_7_icon: "fa fa-exclamation-triangle".to_string(),
            service_7_text: String::new(),
            service_8_icon: "fa fa-code".to_string(),
            service_8_text: "Custom Software".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_service_icons_skip_empty_captions() {
        let icons = model().service_icons();
        assert_eq!(icons.len(), 7);
        assert_eq!(icons[0].text, "PA & Audio");
        assert_eq!(icons[6].icon, "fa fa-code");
        assert!(icons.iter().all(|i| i.icon != "fa fa-exclamation-triangle"));
    }
}
