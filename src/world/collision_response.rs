/// How a body reacts to overlapping another body.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionResponse {
    /// The body is never tested against any other body.
    Ignore,
    /// Overlaps are detected and reported, but nothing is moved.
    #[default]
    Overlap,
    /// Overlaps are detected, reported, and the bodies are pushed apart.
    Block,
}

impl CollisionResponse {
    /// Is a body with this response excluded from collision detection?
    #[inline]
    pub fn is_ignored(self) -> bool {
        self == CollisionResponse::Ignore
    }

    /// Should an overlap between bodies with the responses `self` and `other` be resolved?
    ///
    /// This is the case if at least one of them blocks.
    #[inline]
    pub fn blocks_with(self, other: CollisionResponse) -> bool {
        self == CollisionResponse::Block || other == CollisionResponse::Block
    }
}
