pub mod forms;
pub mod render;
pub mod routes;
pub mod session;

// Re-export the pieces the binary wires together.
pub use forms::{DraftForm, FormError};
pub use render::render_view;
pub use routes::Route;
pub use session::{PrintOutcome, UiSession, View};
