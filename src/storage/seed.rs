//! Initial homepage content.
//!
//! [`populate`] is get-or-create: a singleton is only seeded into an empty
//! table, list items are keyed by a natural key (service title, partner name,
//! video URL). Existing rows are never modified, so running it twice is
//! harmless and never brings back content an admin has replaced.

use crate::content::entities::*;
use crate::content::{repository, ContentEntity};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, IntoActiveModel,
    QueryFilter,
};

/// Whether a seed record was inserted or already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStatus {
    Created,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub label: String,
    pub status: SeedStatus,
    /// Reminder printed next to created records that still need media.
    pub note: Option<&'static str>,
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == SeedStatus::Created)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.created()
    }

    fn push(&mut self, label: impl Into<String>, created: bool, note: Option<&'static str>) {
        self.outcomes.push(SeedOutcome {
            label: label.into(),
            status: if created { SeedStatus::Created } else { SeedStatus::Skipped },
            note,
        });
    }
}

/// Media the seeder cannot provide; upload these through the admin API.
pub const PENDING_UPLOADS: &[&str] = &[
    "Hero Section (logo + background)",
    "Service Items (6 images)",
    "Portfolio (4 images)",
    "Partners (9 logos)",
    "Footer (1 logo)",
];

const SERVICES: &[(&str, &str, i32, &str)] = &[
    (
        "CCTV",
        "<p>LIVE i TECH has worked with many of the leading CCTV manufacturers to consistently stay informed on new systems. Whether you have a home, business, or municipality, our team is equipped to handle projects of any size. Our systems are modular and therefore can be scaled for future growth.</p>",
        1,
        "cctv",
    ),
    (
        "Access Control",
        "<p>Our access control or \"keyless entry\" systems assist our clients by providing restricted access to certain areas of their home, or business. Whether it's a keypad to restrict entry, or a dozen biometric readers logging traffic in and out of multiple areas, we have the knowledge and expertise to get you exactly what you need. We have multiple systems to choose from; these systems are available for many different budgets, and needs.</p>",
        2,
        "card",
    ),
    (
        "IOT LAN & WAN",
        "<p>The Internet of Things is growing as every year more devices are connected to the internet. What used to be only a computer hardwired with an ethernet cable, is now a network of interconnected devices. Since our family realized this change, we have been continuously educating ourselves on the latest networked systems so that we may offer you the latest in VOIP, RFID Asset Tracking, etc. We have the capabilities to install your physical network infrastructure, or your private wireless area network.</p>",
        3,
        "iot",
    ),
    (
        "Intercom & PA",
        "<p>Did you hear? LIVE i TECH can help you with all of your audio needs as well. Our commercial installers can assist you in setting up your intercom and/or public address systems; high-quality sound, and quality installations to address your specific needs.</p>",
        4,
        "intercom",
    ),
    (
        "System Design",
        "<p>Our consultants are provided with consistent access to education and training so that they may design the system that meets your needs. LIVE i TECH maintains strong relationships with local municipalities to get your projects completed in a timely manner. Our team has designed customized systems for multiple applications in many different industries.</p>",
        5,
        "design",
    ),
    (
        "Software Development/Consulting",
        "<p>LIVE i TECH has added an experienced software development team. We now offer custom web sites and full-fledged eCommerce web applications!</p>",
        6,
        "software",
    ),
];

const PARTNERS: &[&str] = &[
    "BioConnect Suprema",
    "Digital Watch Dog",
    "Aiphone",
    "Keyscan",
    "Honeywell",
    "Nortek",
    "Axis Communications",
    "Comelit",
    "Ubiquiti Networks",
];

const VIDEO_IDS: &[&str] = &["i5n6OMiVgEU", "o36rO2BBWKE", "n0mFru_O_Z4", "0164NzWczEU", "VKisTNDkQpo"];
const VIDEO_PARAMS: &str = "?rel=0&modestbranding=1&showinfo=0";

const MAPS_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m10!1m8!1m3!1d764022.0392365947!2d-81.10230656282094!3d26.32140860227949!3m2!1i1024!2i768!4f13.1!5e0!3m2!1sen!2sus!4v1556176806680!5m2!1sen!2sus";

/// Insert `record` as row 1 of `E` when the table has no rows at all.
async fn ensure_singleton<E>(db: &DatabaseConnection, record: E::ActiveModel) -> Result<bool, DbErr>
where
    E: ContentEntity,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
{
    if E::find().one(db).await?.is_some() {
        return Ok(false);
    }
    record.insert(db).await?;
    Ok(true)
}

/// Insert `record` unless a row of `E` already has `value` in `column`.
async fn ensure_by_key<E>(
    db: &DatabaseConnection,
    column: E::Column,
    value: &str,
    record: E::ActiveModel,
) -> Result<bool, DbErr>
where
    E: ContentEntity,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
{
    let existing = E::find()
        .filter(ColumnTrait::eq(&column, value))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }
    record.insert(db).await?;
    Ok(true)
}

pub async fn populate(db: &DatabaseConnection) -> Result<SeedReport, DbErr> {
    let mut report = SeedReport::default();

    let created = ensure_singleton::<hero_section::Entity>(
        db,
        hero_section::ActiveModel {
            id: Set(1),
            ..hero_section::Entity::blank()
        },
    )
    .await?;
    report.push("Hero Section", created, Some("upload images in admin"));

    let created = ensure_singleton::<about_section::Entity>(
        db,
        about_section::ActiveModel {
            id: Set(1),
            subtitle: Set("<h6 class=\"m-b-2\">The technology world grows at an expontential rate and is integrated into myriad applications that better our physical world. LIVE i TECH was founded with the sole purpose of understanding this growth and providing its full potential to our clients through customized, tech-based systems.</h6>".to_string()),
            description: Set("<p>Our team takes pride in offering a full-service approach to our clients including consultation, design, installation, service & maintenance. LIVE i TECH continues to build and maintain strong relationships with our vendors in the Security, Surveillance & IOT (Internet of Things) industries so that we may always provide the best solutions for our clients. LIVE i TECH strives to keep its community informed about the latest technologies so that together we can innovate a smarter, safer and better world. Our corporate office is located in Fort Lauderdale Florida, and we service the entire USA.</p>".to_string()),
            service_7_icon: Set(String::new()),
            ..about_section::Entity::blank()
        },
    )
    .await?;
    report.push("About Section", created, None);

    let created = ensure_singleton::<services_section::Entity>(
        db,
        services_section::ActiveModel {
            id: Set(1),
            subtitle: Set("<h6>Our family of consultants and systems engineers are equipped with the knowledge to design the perfect system to address all of your security, network and low voltage needs. From surveillance to audio, our team of technicians can install any system for both, residential and commercial applications.</h6>".to_string()),
            description: Set("<p>Our installers have the knowledge and support to do the job right, the first time. Check out what LIVE i TECH has to offer --below, and schedule your free assessment today!</p>".to_string()),
            ..services_section::Entity::blank()
        },
    )
    .await?;
    report.push("Services Section Header", created, None);

    for (title, description, order, anchor_id) in SERVICES {
        let created = ensure_by_key::<service_item::Entity>(
            db,
            service_item::Column::Title,
            title,
            service_item::ActiveModel {
                title: Set(title.to_string()),
                description: Set(description.to_string()),
                order: Set(*order),
                anchor_id: Set(anchor_id.to_string()),
                ..service_item::Entity::blank()
            },
        )
        .await?;
        report.push(format!("Service \"{}\"", title), created, Some("upload image in admin"));
    }

    let created = ensure_singleton::<portfolio_section::Entity>(
        db,
        portfolio_section::ActiveModel {
            id: Set(1),
            subtitle: Set("<h6 class=\"m-b-2\">LIVE i TECH embraces a culture dedicated to excellence. Therefore, our business philosophy is built around trust, partnership, and leveraging proven technologies that will provide you with maximum value and reliability for years to come.</h6>".to_string()),
            description: Set("<p>From best-in-class security cameras and video surveillance solutions, to the latest intercom and access control systems, to advanced information management solutions, we never lose sight of the fact that we are in the business of protecting people, not just property.</p>".to_string()),
            image_1_alt: Set("Elite Flower Portfolio Project".to_string()),
            image_2_alt: Set("Bay Harbor Islands Portfolio Project".to_string()),
            image_3_alt: Set("BNM Portfolio Project".to_string()),
            image_4_alt: Set("PTZ Escalator Security System".to_string()),
            ..portfolio_section::Entity::blank()
        },
    )
    .await?;
    report.push("Portfolio Section", created, Some("upload images in admin"));

    let created = ensure_singleton::<partners_section::Entity>(
        db,
        partners_section::ActiveModel {
            id: Set(1),
            subtitle: Set("<h6>LIVE i TECH strives to build and maintain relationships with top manufacturers in the security and technology industry. With these relationships in place, our clients can rest assured that they are receiving the very best technology.</h6>".to_string()),
            description: Set("<p>Get priceless peace of mind.</p>".to_string()),
            ..partners_section::Entity::blank()
        },
    )
    .await?;
    report.push("Partners Section Header", created, None);

    for (index, name) in PARTNERS.iter().enumerate() {
        let created = ensure_by_key::<partner_item::Entity>(
            db,
            partner_item::Column::Name,
            name,
            partner_item::ActiveModel {
                name: Set(name.to_string()),
                order: Set(index as i32 + 1),
                ..partner_item::Entity::blank()
            },
        )
        .await?;
        report.push(format!("Partner \"{}\"", name), created, Some("upload logo in admin"));
    }

    let created = ensure_singleton::<examples_section::Entity>(
        db,
        examples_section::ActiveModel {
            id: Set(1),
            subtitle: Set("<h6>Our work, in action.</h6>".to_string()),
            description: Set("<p>Subscribe to our YouTube channel.</p>".to_string()),
            ..examples_section::Entity::blank()
        },
    )
    .await?;
    report.push("Examples Section Header", created, None);

    for (index, video_id) in VIDEO_IDS.iter().enumerate() {
        let url = format!("{}{}{}", crate::utils::youtube::EMBED_BASE, video_id, VIDEO_PARAMS);
        let created = ensure_by_key::<example_video::Entity>(
            db,
            example_video::Column::YoutubeUrl,
            &url,
            example_video::ActiveModel {
                youtube_url: Set(url.clone()),
                order: Set(index as i32 + 1),
                ..example_video::Entity::blank()
            },
        )
        .await?;
        report.push(format!("Video {}", index + 1), created, None);
    }

    let created = ensure_singleton::<contact_section::Entity>(
        db,
        contact_section::ActiveModel {
            id: Set(1),
            subtitle: Set("<h6>Schedule a free assessment.</h6>".to_string()),
            google_maps_embed_url: Set(MAPS_EMBED_URL.to_string()),
            ..contact_section::Entity::blank()
        },
    )
    .await?;
    report.push("Contact Section", created, None);

    let created = ensure_singleton::<footer_section::Entity>(
        db,
        footer_section::ActiveModel {
            id: Set(1),
            facebook_url: Set("https://www.facebook.com/LIVEiTECHINC/".to_string()),
            twitter_url: Set("https://x.com/LIVEiTECH".to_string()),
            instagram_url: Set("https://www.instagram.com/liveitech/".to_string()),
            youtube_url: Set("https://www.youtube.com/channel/UCXq_QNtvHMJQCqChthZs6VA".to_string()),
            developer_url: Set("https://dtebar.pythonanywhere.com".to_string()),
            ..footer_section::Entity::blank()
        },
    )
    .await?;
    report.push("Footer Section", created, Some("upload logo in admin"));

    tracing::info!(
        "Content population finished: {} created, {} skipped",
        report.created(),
        report.skipped()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::init_db;

    #[tokio::test]
    async fn test_populate_creates_every_record() {
        let db = init_db("sqlite::memory:").await.unwrap();
        let report = populate(&db).await.unwrap();

        // 8 singletons + 6 services + 9 partners + 5 videos
        assert_eq!(report.outcomes.len(), 28);
        assert_eq!(report.created(), 28);

        let services = repository::all_active::<service_item::Entity, _>(&db).await.unwrap();
        let titles: Vec<&str> = services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"CCTV"));
        assert_eq!(titles.last(), Some(&"Software Development/Consulting"));

        let footer = repository::first_active::<footer_section::Entity, _>(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(footer.copyright_text, "©2025 LIVE i TECH, Inc.");
        assert_eq!(footer.developer_url, "https://dtebar.pythonanywhere.com");
    }

    #[tokio::test]
    async fn test_populate_is_idempotent() {
        let db = init_db("sqlite::memory:").await.unwrap();
        populate(&db).await.unwrap();
        let second = populate(&db).await.unwrap();

        assert_eq!(second.created(), 0);
        assert_eq!(second.skipped(), 28);

        let partners = repository::list::<partner_item::Entity, _>(&db).await.unwrap();
        assert_eq!(partners.len(), 9);
    }

    #[tokio::test]
    async fn test_rerun_keeps_admin_replaced_singleton() {
        let db = init_db("sqlite::memory:").await.unwrap();
        populate(&db).await.unwrap();

        repository::delete::<contact_section::Entity>(&db, 1)
            .await
            .unwrap()
            .unwrap();
        let form = contact_section::Form {
            title: Some("Admin current".to_string()),
            ..Default::default()
        };
        repository::create::<contact_section::Entity>(&db, form)
            .await
            .unwrap();

        let rerun = populate(&db).await.unwrap();
        assert_eq!(rerun.created(), 0);

        let rows = repository::list::<contact_section::Entity, _>(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Admin current");

        let page = crate::compose(&db).await.unwrap();
        assert_eq!(page.contact.unwrap().title, "Admin current");
    }

    #[tokio::test]
    async fn test_about_section_hides_empty_icon_slot() {
        let db = init_db("sqlite::memory:").await.unwrap();
        populate(&db).await.unwrap();

        let about = repository::first_active::<about_section::Entity, _>(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(about.service_icons().len(), 7);
        assert_eq!(about.title, "About Us");
    }
}
