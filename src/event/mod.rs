mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::*;
pub use handlers::{EventRecorder, LogHandler};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EngineEvent);
}
