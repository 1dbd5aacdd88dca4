pub mod envelope;
pub mod router;

pub use envelope::Envelope;
pub use router::{AppState, soapbox_router};
