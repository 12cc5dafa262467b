mod peak_window;
mod ticket_type;
mod time_of_day;
mod traveler_profile;
mod trip_request;

pub use peak_window::PeakWindow;
pub use ticket_type::TicketType;
pub use time_of_day::TimeOfDay;
pub use traveler_profile::TravelerProfile;
pub use trip_request::TripRequest;
