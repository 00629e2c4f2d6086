//! SeaORM entities, one module per homepage record type.

pub mod about_section;
pub mod contact_section;
pub mod example_video;
pub mod examples_section;
pub mod footer_section;
pub mod hero_section;
pub mod partner_item;
pub mod partners_section;
pub mod portfolio_section;
pub mod service_item;
pub mod services_section;

pub mod prelude {
    pub use super::about_section::{Entity as AboutSection, Model as AboutSectionModel};
    pub use super::contact_section::{Entity as ContactSection, Model as ContactSectionModel};
    pub use super::example_video::{Entity as ExampleVideo, Model as ExampleVideoModel};
    pub use super::examples_section::{Entity as ExamplesSection, Model as ExamplesSectionModel};
    pub use super::footer_section::{Entity as FooterSection, Model as FooterSectionModel};
    pub use super::hero_section::{Entity as HeroSection, Model as HeroSectionModel};
    pub use super::partner_item::{Entity as PartnerItem, Model as PartnerItemModel};
    pub use super::partners_section::{Entity as PartnersSection, Model as PartnersSectionModel};
    pub use super::portfolio_section::{Entity as PortfolioSection, Model as PortfolioSectionModel};
    pub use super::service_item::{Entity as ServiceItem, Model as ServiceItemModel};
    pub use super::services_section::{Entity as ServicesSection, Model as ServicesSectionModel};
}
