//! Collision categories and the category → reaction mapping.
//!
//! The tag set is a closed enum and the two standard behavioral variants are
//! explicit policy values rather than divergent code paths, so a fleet can
//! mix both in one simulation.

/// Classification of a collision partner, assigned by the external collision
/// detector.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionCategory {
    /// Another robot agent.
    Robot,
    /// A storage shelf.
    Shelf,
    /// An arena boundary wall.
    Wall,
    /// Anything else (floor decals, sensors, …) — never reacted to.
    Other,
}

impl CollisionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CollisionCategory::Robot => "robot",
            CollisionCategory::Shelf => "shelf",
            CollisionCategory::Wall  => "wall",
            CollisionCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for CollisionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an agent does in response to a collision of some category.
///
/// The start variants are filtered through the agent's idempotence guards: a
/// `StartTurn` while already turning (or `StartHalt` while already halted)
/// is a silent no-op.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reaction {
    /// Begin a smooth yaw turn (if not already turning).
    StartTurn,
    /// Begin a timed halt (if not already halting).
    StartHalt,
    /// Do nothing.
    #[default]
    Ignore,
}

/// A total mapping from collision category to reaction.
///
/// Two stock policies are provided and both are valid agent configurations;
/// use the named constructors rather than assuming one is canonical:
///
/// | Constructor                                  | Robot     | Shelf     | Wall      |
/// |----------------------------------------------|-----------|-----------|-----------|
/// | [`halt_for_robots`][Self::halt_for_robots]   | StartHalt | StartTurn | StartTurn |
/// | [`turn_on_contact`][Self::turn_on_contact]   | StartTurn | StartTurn | StartTurn |
///
/// `Other` is `Ignore` in both.  Arbitrary mappings are constructible for
/// custom fleets.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionPolicy {
    pub robot: Reaction,
    pub shelf: Reaction,
    pub wall:  Reaction,
    pub other: Reaction,
}

impl ReactionPolicy {
    /// Avoid-other-robots variant: halt and wait when meeting a robot, turn
    /// away from shelves and walls.
    pub fn halt_for_robots() -> Self {
        Self {
            robot: Reaction::StartHalt,
            shelf: Reaction::StartTurn,
            wall:  Reaction::StartTurn,
            other: Reaction::Ignore,
        }
    }

    /// Turn-on-anything variant: every obstacle (robots included) triggers a
    /// turn; no halt behavior exists.
    pub fn turn_on_contact() -> Self {
        Self {
            robot: Reaction::StartTurn,
            shelf: Reaction::StartTurn,
            wall:  Reaction::StartTurn,
            other: Reaction::Ignore,
        }
    }

    /// The reaction mapped to `category`.
    #[inline]
    pub fn reaction_for(&self, category: CollisionCategory) -> Reaction {
        match category {
            CollisionCategory::Robot => self.robot,
            CollisionCategory::Shelf => self.shelf,
            CollisionCategory::Wall  => self.wall,
            CollisionCategory::Other => self.other,
        }
    }
}

impl Default for ReactionPolicy {
    /// [`halt_for_robots`][Self::halt_for_robots] — the variant with both
    /// reaction kinds in play.
    fn default() -> Self {
        Self::halt_for_robots()
    }
}
