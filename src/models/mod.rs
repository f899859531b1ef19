pub mod app_state;
pub mod submit_response;

pub use app_state::AppState;
pub use submit_response::SubmitResponse;
