// =============================================================================
// OffGriid Web - Page Components
// =============================================================================

pub mod index;
pub mod not_found;

pub use index::LandingPage;
pub use not_found::NotFoundPage;
