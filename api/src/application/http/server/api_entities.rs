pub mod api_error;
pub mod dates;
pub mod response;
