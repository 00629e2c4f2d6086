//! `SeaORM` Entity for the portfolio section: copy plus four project images.

use crate::content::{assign, ContentEntity, Fieldset, SectionKind, STATUS_FIELDSET};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_1: String,
    pub image_1_alt: String,
    pub image_2: String,
    pub image_2_alt: String,
    pub image_3: String,
    pub image_3_alt: String,
    pub image_4: String,
    pub image_4_alt: String,
    pub is_active: bool,
}

/// A portfolio image with its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioImage {
    pub path: String,
    pub alt: String,
}

impl Model {
    /// Uploaded images in slot order; empty slots are skipped.
    pub fn images(&self) -> Vec<PortfolioImage> {
        [
            (&self.image_1, &self.image_1_alt),
            (&self.image_2, &self.image_2_alt),
            (&self.image_3, &self.image_3_alt),
            (&self.image_4, &self.image_4_alt),
        ]
        .into_iter()
        .filter(|(path, _)| !path.is_empty())
        .map(|(path, alt)| PortfolioImage {
            path: path.clone(),
            alt: alt.clone(),
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
    pub image_1: Option<String>,
    pub image_1_alt: Option<String>,
    pub image_2: Option<String>,
    pub image_2_alt: Option<String>,
    pub image_3: Option<String>,
    pub image_3_alt: Option<String>,
    pub image_4: Option<String>,
    pub image_4_alt: Option<String>,
    pub is_active: Option<bool>,
}

impl ContentEntity for Entity {
    const SLUG: &'static str = "portfolio";
    const LABEL: &'static str = "Portfolio Section";
    const KIND: SectionKind = SectionKind::Singleton;
    const UPLOAD_FOLDER: Option<&'static str> = Some("portfolio");
    const LIST_DISPLAY: &'static [&'static str] = &["title", "is_active"];
    const FIELDSETS: &'static [Fieldset] = &[
        Fieldset {
            name: "Content",
            fields: &["title", "subtitle", "description"],
        },
        Fieldset {
            name: "Portfolio Images",
            fields: &[
                "image_1",
                "image_1_alt",
                "image_2",
                "image_2_alt",
                "image_3",
                "image_3_alt",
                "image_4",
                "image_4_alt",
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

    fn image_columns() -> Vec<Column> {
        vec![Column::Image1, Column::Image2, Column::Image3, Column::Image4]
    }

    fn blank() -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set("Portfolio".to_string()),
            subtitle: Set(String::new()),
            description: Set(String::new()),
            image_1: Set(String::new()),
            image_1_alt: Set("Portfolio Project 1".to_string()),
            image_2: Set(String::new()),
            image_2_alt: Set("Portfolio Project 2".to_string()),
            image_3: Set(String::new()),
            image_3_alt: Set("Portfolio Project 3".to_string()),
            image_4: Set(String::new()),
            image_4_alt: Set("Portfolio Project 4".to_string()),
            is_active: Set(true),
        }
    }

    fn apply(form: Form, record: &mut ActiveModel) {
        assign(&mut record.title, form.title);
        assign(&mut record.subtitle, form.subtitle);
        assign(&mut record.description, form.description);
        assign(&mut record.image_1, form.image_1);
        assign(&mut record.image_1_alt, form.image_1_alt);
        assign(&mut record.image_2, form.image_2);
        assign(&mut record.image_2_alt, form.image_2_alt);
        assign(&mut record.image_3, form.image_3);
        assign(&mut record.image_3_alt, form.image_3_alt);
        assign(&mut record.image_4, form.image_4);
        assign(&mut record.image_4_alt, form.image_4_alt);
        assign(&mut record.is_active, form.is_active);
    }
}
