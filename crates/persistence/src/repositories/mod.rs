//! Repository implementations.
//!
//! Repositories own the SQL. They return entities (or row counts) and plain
//! `sqlx::Error`; mapping to API errors happens at the route layer.

pub mod application;
pub mod board_member;
pub mod contact_message;
pub mod content_section;
pub mod dashboard;
pub mod donation;
pub mod program;
pub mod site_setting;
pub mod volunteer;

pub use application::ApplicationRepository;
pub use board_member::BoardMemberRepository;
pub use contact_message::ContactMessageRepository;
pub use content_section::ContentSectionRepository;
pub use dashboard::{DashboardCounts, DashboardRepository};
pub use donation::DonationRepository;
pub use program::ProgramRepository;
pub use site_setting::SiteSettingRepository;
pub use volunteer::VolunteerRepository;
