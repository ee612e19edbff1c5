//! Domain models for the Goodfellows CMS.

pub mod application;
pub mod board_member;
pub mod contact_message;
pub mod content_section;
pub mod donation;
pub mod program;
pub mod site_setting;
pub mod volunteer;

pub use application::{
    Application, ApplicationStats, ApplicationStatus, ApplicationStatusCounts,
    CreateApplicationRequest, UpdateApplicationStatusRequest,
};
pub use board_member::{BoardMember, CreateBoardMemberRequest, UpdateBoardMemberRequest};
pub use contact_message::{ContactMessage, CreateContactMessageRequest};
pub use content_section::{ContentSection, SectionType, UpsertContentSectionRequest};
pub use donation::{
    CreateDonationRequest, Donation, DonationStats, DonationStatus, UpdateDonationStatusRequest,
};
pub use program::{CreateProgramRequest, Program, UpdateProgramRequest};
pub use site_setting::{SiteSetting, UpdateSiteSettingRequest};
pub use volunteer::{
    CreateVolunteerRequest, UpdateVolunteerStatusRequest, Volunteer, VolunteerStatus,
};
