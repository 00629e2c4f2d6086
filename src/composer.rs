//! Page Composer
//!
//! Builds the homepage context from the content store. Each singleton slot is
//! the first active row by id or `None`; each list is the active rows sorted by
//! `order` then id. No caching: every request reads the current content.

use crate::content::entities::*;
use crate::content::repository::{all_active, first_active};
use sea_orm::{ConnectionTrait, DbErr};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    pub hero: Option<hero_section::Model>,
    pub about: Option<about_section::Model>,
    pub services_header: Option<services_section::Model>,
    pub services: Vec<service_item::Model>,
    pub portfolio: Option<portfolio_section::Model>,
    pub partners_header: Option<partners_section::Model>,
    pub partners: Vec<partner_item::Model>,
    pub examples_header: Option<examples_section::Model>,
    pub examples: Vec<example_video::Model>,
    pub contact: Option<contact_section::Model>,
    pub footer: Option<footer_section::Model>,
}

pub async fn compose<C>(db: &C) -> Result<PageContext, DbErr>
where
    C: ConnectionTrait,
{
    Ok(PageContext {
        hero: first_active::<hero_section::Entity, _>(db).await?,
        about: first_active::<about_section::Entity, _>(db).await?,
        services_header: first_active::<services_section::Entity, _>(db).await?,
        services: all_active::<service_item::Entity, _>(db).await?,
        portfolio: first_active::<portfolio_section::Entity, _>(db).await?,
        partners_header: first_active::<partners_section::Entity, _>(db).await?,
        partners: all_active::<partner_item::Entity, _>(db).await?,
        examples_header: first_active::<examples_section::Entity, _>(db).await?,
        examples: all_active::<example_video::Entity, _>(db).await?,
        contact: first_active::<contact_section::Entity, _>(db).await?,
        footer: first_active::<footer_section::Entity, _>(db).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{repository, ContentEntity};
    use crate::storage::init_db;
    use sea_orm::ActiveModelTrait;
    use sea_orm::ActiveValue::Set;

    #[tokio::test]
    async fn test_empty_store_composes_empty_page() {
        let db = init_db("sqlite::memory:").await.unwrap();
        let page = compose(&db).await.unwrap();

        assert!(page.hero.is_none());
        assert!(page.footer.is_none());
        assert!(page.services.is_empty());
        assert!(page.examples.is_empty());
    }

    #[tokio::test]
    async fn test_only_active_rows_are_composed() {
        let db = init_db("sqlite::memory:").await.unwrap();

        for (name, order, active) in [("Shown", 1, true), ("Hidden", 2, false)] {
            partner_item::ActiveModel {
                name: Set(name.to_string()),
                order: Set(order),
                is_active: Set(active),
                ..partner_item::Entity::blank()
            }
            .insert(&db)
            .await
            .unwrap();
        }
        services_section::ActiveModel {
            is_active: Set(false),
            ..services_section::Entity::blank()
        }
        .insert(&db)
        .await
        .unwrap();

        let page = compose(&db).await.unwrap();
        let names: Vec<&str> = page.partners.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Shown"]);
        assert!(page.services_header.is_none());
    }

    #[tokio::test]
    async fn test_lists_sorted_by_order_then_id() {
        let db = init_db("sqlite::memory:").await.unwrap();

        for (title, order) in [("Third", 2), ("First", 1), ("Fourth", 2), ("Second", 1)] {
            service_item::ActiveModel {
                title: Set(title.to_string()),
                order: Set(order),
                ..service_item::Entity::blank()
            }
            .insert(&db)
            .await
            .unwrap();
        }

        let page = compose(&db).await.unwrap();
        let titles: Vec<&str> = page.services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third", "Fourth"]);
    }

    #[tokio::test]
    async fn test_singleton_tie_break_is_lowest_id() {
        let db = init_db("sqlite::memory:").await.unwrap();

        // Legacy data with two active rows, written around the repository
        for title in ["Older", "Newer"] {
            examples_section::ActiveModel {
                title: Set(title.to_string()),
                ..examples_section::Entity::blank()
            }
            .insert(&db)
            .await
            .unwrap();
        }

        let page = compose(&db).await.unwrap();
        assert_eq!(page.examples_header.unwrap().title, "Older");
    }

    #[tokio::test]
    async fn test_saving_active_singleton_replaces_current() {
        let db = init_db("sqlite::memory:").await.unwrap();

        repository::create::<contact_section::Entity>(&db, contact_section::Form::default())
            .await
            .unwrap();
        let replacement = contact_section::Form {
            title: Some("Call us".to_string()),
            ..Default::default()
        };
        repository::create::<contact_section::Entity>(&db, replacement)
            .await
            .unwrap();

        let page = compose(&db).await.unwrap();
        assert_eq!(page.contact.unwrap().title, "Call us");
        let all = repository::list::<contact_section::Entity, _>(&db).await.unwrap();
        assert_eq!(all.iter().filter(|c| c.is_active).count(), 1);
    }
}
