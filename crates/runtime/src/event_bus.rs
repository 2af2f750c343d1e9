use crate::frame::Frame;

/// Frame-stamped structured event, the runtime's observability channel.
///
/// Collaborators outside the frame loop (UI, logging) read these; nothing in
/// the runtime reacts to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, frame: Frame, kind: &'static str, message: impl Into<String>) {
        self.events.push(Event {
            frame_index: frame.index,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::EventBus;
    use crate::frame::Frame;

    #[test]
    fn events_carry_their_frame() {
        let mut bus = EventBus::new();
        bus.emit(Frame::new(7, 0.1), "route", "planned");
        assert_eq!(bus.events().len(), 1);
        assert_eq!(bus.events()[0].frame_index, 7);
        assert_eq!(bus.events()[0].kind, "route");
    }

    #[test]
    fn drain_empties_the_bus() {
        let mut bus = EventBus::new();
        bus.emit(Frame::first(1.0), "k", "m");
        assert_eq!(bus.drain().len(), 1);
        assert!(bus.events().is_empty());
    }
}
