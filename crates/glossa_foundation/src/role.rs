//! Semantic roles and role markers.
//!
//! Roles abstract language-specific syntax (prepositions, postpositions,
//! particles, case suffixes, word order) into universal argument slots.
//! Localization changes only the marker→role surface mapping carried by a
//! language profile; the matcher logic never changes per language.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Named argument slot of a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SemanticRole {
    /// The entity acted upon. In "toggle .active", `.active` is the patient.
    Patient,
    /// Where the action lands. In "toggle .active on #button", `#button`.
    Destination,
    /// Where the action originates. Marked by "from" in English.
    Source,
    /// Visual or behavioral style. Marked by "with" in English.
    Style,
    /// An event name, for event handlers and `send`.
    Event,
    /// A time span. In "wait 2s", `2s`.
    Duration,
    /// A boolean condition guarding execution.
    Condition,
    /// A numeric amount. In "increment #counter by 3", `3`.
    Quantity,
    /// A payload value. In "put 42 into #out", `42`.
    Content,
    /// A tool or means used to perform the action.
    Instrument,
    /// How the action is performed (adverbial).
    Manner,
}

impl SemanticRole {
    /// All roles, in canonical order.
    pub const ALL: [Self; 11] = [
        Self::Patient,
        Self::Destination,
        Self::Source,
        Self::Style,
        Self::Event,
        Self::Duration,
        Self::Condition,
        Self::Quantity,
        Self::Content,
        Self::Instrument,
        Self::Manner,
    ];

    /// The value kinds a binding for this role may carry.
    ///
    /// Numeric slots only accept literals; everything else accepts the full
    /// union. The AST builder enforces this at build time.
    #[must_use]
    pub fn accepted_kinds(self) -> &'static [ValueKind] {
        match self {
            Self::Quantity | Self::Duration => &[ValueKind::Literal],
            Self::Condition => &[ValueKind::Expression, ValueKind::Reference],
            Self::Event => &[ValueKind::Literal, ValueKind::Reference],
            _ => &[
                ValueKind::Literal,
                ValueKind::Selector,
                ValueKind::Reference,
                ValueKind::Expression,
                ValueKind::PropertyPath,
            ],
        }
    }

    /// Stable lowercase name, used in diagnostics and pattern ids.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Destination => "destination",
            Self::Source => "source",
            Self::Style => "style",
            Self::Event => "event",
            Self::Duration => "duration",
            Self::Condition => "condition",
            Self::Quantity => "quantity",
            Self::Content => "content",
            Self::Instrument => "instrument",
            Self::Manner => "manner",
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which side of the role's value a marker sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkerPosition {
    /// Marker precedes the value (prepositions: "on #button").
    Before,
    /// Marker follows the value (postpositions, particles, suffixes).
    After,
}

/// A language-specific surface marker for one semantic role.
///
/// The primary surface is what the renderer emits; alternatives cover
/// synonyms and morphological variants (e.g. vowel-harmony suffix forms)
/// accepted during matching.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoleMarker {
    /// Canonical surface, always used when rendering.
    pub primary: String,
    /// Accepted alternative surfaces.
    pub alternatives: Vec<String>,
    /// Side of the value the marker occupies.
    pub position: MarkerPosition,
}

impl RoleMarker {
    /// Creates a marker with no alternatives.
    #[must_use]
    pub fn new(primary: impl Into<String>, position: MarkerPosition) -> Self {
        Self {
            primary: primary.into(),
            alternatives: Vec::new(),
            position,
        }
    }

    /// Adds alternative surfaces.
    #[must_use]
    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives
            .extend(alternatives.into_iter().map(Into::into));
        self
    }

    /// Checks a normalized surface against the primary and all alternatives.
    #[must_use]
    pub fn accepts(&self, surface: &str) -> bool {
        self.primary == surface || self.alternatives.iter().any(|alt| alt == surface)
    }

    /// Iterates over every accepted surface, primary first.
    pub fn surfaces(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alternatives.iter().map(String::as_str))
    }
}
