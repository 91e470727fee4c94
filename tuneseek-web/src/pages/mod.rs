mod home;
mod layout;
mod not_found;
mod search;
mod track_details;

pub use home::Home;
pub use layout::AppLayout;
pub use not_found::NotFound;
pub use search::Search;
pub use track_details::TrackDetails;
