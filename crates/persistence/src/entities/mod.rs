//! Database entity definitions.
//!
//! Entities are direct mappings to database rows. Each converts into its
//! domain model via `From`.

pub mod application;
pub mod board_member;
pub mod contact_message;
pub mod content_section;
pub mod donation;
pub mod program;
pub mod site_setting;
pub mod volunteer;

pub use application::{ApplicationEntity, StatusCountRow};
pub use board_member::BoardMemberEntity;
pub use contact_message::ContactMessageEntity;
pub use content_section::ContentSectionEntity;
pub use donation::{DonationEntity, DonationTotalsRow};
pub use program::ProgramEntity;
pub use site_setting::SiteSettingEntity;
pub use volunteer::VolunteerEntity;
