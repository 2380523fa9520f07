pub mod form_state;
pub mod use_now;

pub use form_state::*;
pub use use_now::*;
