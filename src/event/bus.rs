use std::cell::RefCell;
use crate::event::{EngineEvent, EventHandler};

/// Fan-out of [`EngineEvent`]s to the host's handlers.
///
/// The engine emits synchronously from inside a tick, and also from host
/// calls (`undo`, `redo`, `clear`) made between ticks, so a subscribed HUD
/// sees a control change as soon as it happens rather than on the next frame.
/// Handlers run in subscription order and must not call back into the engine.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Hands `event` to every handler, oldest subscription first.
    pub fn emit(&self, event: &EngineEvent) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventRecorder;

    #[test]
    fn test_handlers_receive_in_emit_order() {
        let bus = EventBus::default();
        let first = EventRecorder::new();
        let second = EventRecorder::new();
        bus.subscribe(Box::new(first.clone()));
        bus.subscribe(Box::new(second.clone()));

        bus.emit(&EngineEvent::BrushResized { size: 3 });
        bus.emit(&EngineEvent::CanvasCleared);

        let expected = vec![EngineEvent::BrushResized { size: 3 }, EngineEvent::CanvasCleared];
        assert_eq!(first.take(), expected);
        assert_eq!(second.take(), expected);
    }
}
