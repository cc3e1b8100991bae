use parking_lot::Mutex;
use std::sync::Arc;

use crate::event::{EngineEvent, EventHandler};

/// Collects every event it receives. Clones share the same buffer, so a host
/// can subscribe one clone and drain the other from its UI loop.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &EngineEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Logs every event at info level.
#[derive(Debug, Default)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle_event(&mut self, event: &EngineEvent) {
        log::info!("{:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventBus;

    #[test]
    fn test_recorder_clones_share_buffer() {
        let bus = EventBus::new();
        let recorder = EventRecorder::new();
        bus.subscribe(Box::new(recorder.clone()));
        bus.subscribe(Box::new(LogHandler));
        assert_eq!(bus.handler_count(), 2);

        bus.emit(&EngineEvent::CanvasCleared);
        bus.emit(&EngineEvent::BrushResized { size: 4 });

        assert_eq!(recorder.len(), 2);
        assert_eq!(
            recorder.take(),
            vec![EngineEvent::CanvasCleared, EngineEvent::BrushResized { size: 4 }]
        );
        assert!(recorder.is_empty());
    }
}
