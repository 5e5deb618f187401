//! Repositories: one unit struct per table, methods take `&PgPool`.

pub mod company_repo;
pub mod employee_profile_repo;
pub mod founder_profile_repo;
pub mod session_repo;
pub mod status_update_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use employee_profile_repo::EmployeeProfileRepo;
pub use founder_profile_repo::{FounderProfileRepo, TalentSearchFilters};
pub use session_repo::SessionRepo;
pub use status_update_repo::StatusUpdateRepo;
pub use user_repo::UserRepo;
