pub mod controller;
pub mod session;

pub use controller::GestureController;
pub use session::GestureSession;
