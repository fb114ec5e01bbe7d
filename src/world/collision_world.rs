use crate::math::{Isometry, Real};
use crate::query::{self, Penetration};
use crate::shape::{Circle, Polygon, ShapeType};
use crate::utils::SortedPair;
use crate::world::{
    BodyHandle, CollisionBody, CollisionEvent, CollisionResponse, EventHandler, WorldOptions,
};
use indexmap::IndexSet;
use slab::Slab;

/// A set of bodies tested for overlaps, pair by pair, once per step.
///
/// ```
/// use sat2d::shape::{Circle, Polygon};
/// use sat2d::world::{CollisionEvent, CollisionResponse, CollisionWorld};
/// use sat2d::math::Isometry;
///
/// let mut world = CollisionWorld::new();
/// let square = world.insert_polygon(
///     Polygon::rectangle(1.0, 1.0),
///     Isometry::identity(),
///     CollisionResponse::Overlap,
/// );
/// let ball = world.insert_circle(
///     Circle::with_radius(0.5),
///     Isometry::translation(1.25, 0.0),
///     CollisionResponse::Overlap,
/// );
///
/// let mut events = Vec::new();
/// world.step(&mut events);
/// assert_eq!(events, vec![CollisionEvent::Started(square, ball)]);
/// assert!(world.get(ball).unwrap().is_colliding());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct CollisionWorld {
    bodies: Slab<CollisionBody>,
    options: WorldOptions,
    // Insertion order is the order in which the pairs started overlapping.
    overlaps: IndexSet<SortedPair<BodyHandle>>,
    removed_overlaps: Vec<SortedPair<BodyHandle>>,
}

impl CollisionWorld {
    /// Creates an empty world with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world with the given options.
    pub fn with_options(options: WorldOptions) -> Self {
        CollisionWorld {
            options,
            ..Self::default()
        }
    }

    /// The options of this world.
    pub fn options(&self) -> &WorldOptions {
        &self.options
    }

    /// A mutable reference to the options of this world.
    pub fn options_mut(&mut self) -> &mut WorldOptions {
        &mut self.options
    }

    /// Adds a body to this world.
    pub fn insert(&mut self, body: CollisionBody) -> BodyHandle {
        BodyHandle(self.bodies.insert(body))
    }

    /// Adds a polygon body to this world.
    pub fn insert_polygon(
        &mut self,
        polygon: Polygon,
        position: Isometry<Real>,
        response: CollisionResponse,
    ) -> BodyHandle {
        self.insert(
            CollisionBody::new(polygon)
                .with_position(position)
                .with_response(response),
        )
    }

    /// Adds a circle body to this world.
    pub fn insert_circle(
        &mut self,
        circle: Circle,
        position: Isometry<Real>,
        response: CollisionResponse,
    ) -> BodyHandle {
        self.insert(
            CollisionBody::new(circle)
                .with_position(position)
                .with_response(response),
        )
    }

    /// Removes a body from this world.
    ///
    /// The pairs this body was overlapping with are reported as stopped at the
    /// beginning of the next [`CollisionWorld::step`].
    pub fn remove(&mut self, handle: BodyHandle) -> Option<CollisionBody> {
        let body = self.bodies.try_remove(handle.0)?;
        let removed = &mut self.removed_overlaps;

        self.overlaps.retain(|pair| {
            if pair.contains(&handle) {
                removed.push(*pair);
                false
            } else {
                true
            }
        });

        Some(body)
    }

    /// The body with the given handle.
    pub fn get(&self, handle: BodyHandle) -> Option<&CollisionBody> {
        self.bodies.get(handle.0)
    }

    /// A mutable reference to the body with the given handle.
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut CollisionBody> {
        self.bodies.get_mut(handle.0)
    }

    /// Is there a body with the given handle in this world?
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle.0)
    }

    /// The number of bodies in this world.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Is this world empty?
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates through all the bodies of this world.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &CollisionBody)> {
        self.bodies.iter().map(|(i, body)| (BodyHandle(i), body))
    }

    /// Iterates mutably through all the bodies of this world.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut CollisionBody)> {
        self.bodies.iter_mut().map(|(i, body)| (BodyHandle(i), body))
    }

    /// The pairs of bodies found overlapping during the last step.
    pub fn overlapping_pairs(&self) -> impl Iterator<Item = (BodyHandle, BodyHandle)> + '_ {
        self.overlaps.iter().map(|pair| pair.pair())
    }

    /// Were the two given bodies overlapping during the last step?
    pub fn is_overlapping(&self, handle1: BodyHandle, handle2: BodyHandle) -> bool {
        self.overlaps.contains(&SortedPair::new(handle1, handle2))
    }

    /// The bodies found overlapping with `handle` during the last step.
    pub fn overlaps_with(&self, handle: BodyHandle) -> impl Iterator<Item = BodyHandle> + '_ {
        self.overlapping_pairs().filter_map(move |(h1, h2)| {
            if h1 == handle {
                Some(h2)
            } else if h2 == handle {
                Some(h1)
            } else {
                None
            }
        })
    }

    /// Tests every pair of bodies, reports overlap changes to `events`, and pushes apart blocking pairs.
    ///
    /// Polygon pairs are tested first, then circle pairs, then every polygon
    /// against every circle. Bodies that are ignored or degenerate are skipped.
    /// Blocking resolutions move bodies immediately, so pairs tested later in
    /// the same step see the updated positions.
    pub fn step(&mut self, events: &mut impl EventHandler) {
        for pair in self.removed_overlaps.drain(..) {
            let (h1, h2) = pair.pair();
            log::debug!("{h1:?} stopped overlapping with {h2:?} (body removed).");
            events.handle_collision_event(CollisionEvent::Stopped(h1, h2));
        }

        for (_, body) in self.bodies.iter_mut() {
            body.colliding = false;
        }

        let polygons = self.active_handles(ShapeType::Polygon);
        let circles = self.active_handles(ShapeType::Circle);
        let mut current = IndexSet::with_capacity(self.overlaps.len());

        for (i, h1) in polygons.iter().enumerate() {
            for h2 in &polygons[i + 1..] {
                self.test_pair(*h1, *h2, &mut current, events);
            }
        }

        for (i, h1) in circles.iter().enumerate() {
            for h2 in &circles[i + 1..] {
                self.test_pair(*h1, *h2, &mut current, events);
            }
        }

        for polygon in &polygons {
            for circle in &circles {
                self.test_pair(*polygon, *circle, &mut current, events);
            }
        }

        self.overlaps.retain(|pair| {
            if current.contains(pair) {
                true
            } else {
                let (h1, h2) = pair.pair();
                log::debug!("{h1:?} stopped overlapping with {h2:?}.");
                events.handle_collision_event(CollisionEvent::Stopped(h1, h2));
                false
            }
        });

        // Pairs still overlapping keep their slot, new ones go last.
        self.overlaps.extend(current);
    }

    fn active_handles(&self, shape_type: ShapeType) -> Vec<BodyHandle> {
        self.bodies
            .iter()
            .filter(|(_, body)| body.shape().shape_type() == shape_type && body.is_active())
            .map(|(i, _)| BodyHandle(i))
            .collect()
    }

    fn test_pair(
        &mut self,
        handle1: BodyHandle,
        handle2: BodyHandle,
        current: &mut IndexSet<SortedPair<BodyHandle>>,
        events: &mut impl EventHandler,
    ) {
        let Some((body1, body2)) = self.bodies.get2_mut(handle1.0, handle2.0) else {
            return;
        };

        let Some(pen) = query::penetration(
            body1.position(),
            body1.shape(),
            body2.position(),
            body2.shape(),
        ) else {
            return;
        };

        body1.colliding = true;
        body2.colliding = true;

        let pair = SortedPair::new(handle1, handle2);
        let _ = current.insert(pair);

        if !self.overlaps.contains(&pair) {
            log::debug!("{handle1:?} started overlapping with {handle2:?}.");
            events.handle_collision_event(CollisionEvent::Started(handle1, handle2));
        }

        if body1.response().blocks_with(body2.response())
            && !abs_diff_eq!(pen.depth, 0.0, epsilon = self.options.epsilon)
        {
            log::trace!(
                "Resolving the overlap between {handle1:?} and {handle2:?} (depth: {}).",
                pen.depth
            );
            resolve_overlap(body1, body2, &pen, &self.options);
        }
    }
}

/// Pushes two blocking bodies apart along their penetration axis.
///
/// Polygon/polygon and circle/circle pairs are each moved by half the minimum
/// translation vector. In a circle/polygon pair, both bodies are moved by the
/// full minimum translation vector in opposite directions, and the circle is
/// pushed further away by the nudge distance of `options`.
fn resolve_overlap(
    body1: &mut CollisionBody,
    body2: &mut CollisionBody,
    pen: &Penetration,
    options: &WorldOptions,
) {
    let mtv = pen.mtv();

    match (body1.shape().shape_type(), body2.shape().shape_type()) {
        (ShapeType::Circle, ShapeType::Polygon) => {
            let nudge = -*pen.axis * options.circle_polygon_nudge;
            body1.translate(&(mtv + nudge));
            body2.translate(&-mtv);
        }
        (ShapeType::Polygon, ShapeType::Circle) => {
            let nudge = *pen.axis * options.circle_polygon_nudge;
            body1.translate(&mtv);
            body2.translate(&(-mtv + nudge));
        }
        _ => {
            let half_mtv = mtv * 0.5;
            body1.translate(&half_mtv);
            body2.translate(&-half_mtv);
        }
    }
}
