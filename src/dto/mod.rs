mod list_response;

pub use list_response::ListResponse;
