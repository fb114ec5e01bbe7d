use crate::world::BodyHandle;

/// Events occurring when two bodies start or stop overlapping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionEvent {
    /// Event occurring when two bodies start overlapping.
    Started(BodyHandle, BodyHandle),
    /// Event occurring when two bodies stop overlapping, or when one of them is removed while they overlap.
    Stopped(BodyHandle, BodyHandle),
}

impl CollisionEvent {
    /// Is this a `Started` collision event?
    pub fn started(self) -> bool {
        matches!(self, CollisionEvent::Started(..))
    }

    /// Is this a `Stopped` collision event?
    pub fn stopped(self) -> bool {
        matches!(self, CollisionEvent::Stopped(..))
    }

    /// The handle of the first body involved in this collision event.
    pub fn handle1(self) -> BodyHandle {
        match self {
            Self::Started(h, _) | Self::Stopped(h, _) => h,
        }
    }

    /// The handle of the second body involved in this collision event.
    pub fn handle2(self) -> BodyHandle {
        match self {
            Self::Started(_, h) | Self::Stopped(_, h) => h,
        }
    }

    /// The body involved in this event together with `handle`, if `handle` is involved at all.
    pub fn other(self, handle: BodyHandle) -> Option<BodyHandle> {
        if self.handle1() == handle {
            Some(self.handle2())
        } else if self.handle2() == handle {
            Some(self.handle1())
        } else {
            None
        }
    }
}

/// Trait implemented by structures responsible for handling the events generated by a world step.
pub trait EventHandler {
    /// Handle a collision event.
    fn handle_collision_event(&mut self, event: CollisionEvent);
}

impl EventHandler for () {
    fn handle_collision_event(&mut self, _event: CollisionEvent) {}
}

impl EventHandler for Vec<CollisionEvent> {
    fn handle_collision_event(&mut self, event: CollisionEvent) {
        self.push(event);
    }
}
