pub mod slide;
pub mod visitor_profile;

pub use slide::Slide;
pub use visitor_profile::VisitorProfile;
