//! Static per-language grammar and keyword configuration.

use std::collections::HashMap;
use std::sync::OnceLock;

use glossa_foundation::{
    CommandShape, MarkerPosition, RoleMarker, SemanticRole, SemanticValue, Token,
};

use crate::trie::SurfaceTrie;

/// Basic constituent order of a language.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WordOrder {
    /// Subject-verb-object (English, Spanish, Chinese).
    Svo,
    /// Subject-object-verb (Japanese, Korean, Turkish).
    Sov,
    /// Verb-subject-object (Irish, Classical Arabic).
    Vso,
}

/// How a language marks semantic roles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkingStrategy {
    /// Free-standing words before the role value.
    Preposition,
    /// Free-standing words after the role value.
    Postposition,
    /// Particles attached to the role value.
    Particle,
    /// Suffixes fused onto the role value, with vowel-harmony variants.
    Suffix,
}

/// How raw text is segmented into tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundaryStrategy {
    /// Split on whitespace.
    Space,
    /// Whitespace-tolerant greedy particle detachment.
    Particle,
    /// No delimiters; longest-prefix keyword segmentation.
    Character,
    /// Whitespace split plus suffix stripping.
    Suffix,
}

/// One localized command: canonical name plus surface forms, primary first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandEntry {
    /// Canonical command name (language-independent).
    pub command: String,
    /// Surface forms; the first is the primary used when rendering.
    pub surfaces: Vec<String>,
}

/// Surfaces for compound sentence structure.
///
/// All fields may be empty; a profile without structure surfaces simply
/// never produces wrapper nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructureSurfaces {
    /// Event-handler markers ("on" in English, "時" in Japanese).
    pub event_prefix: Vec<String>,
    /// Whether the event marker precedes or follows the event name.
    pub event_position: Option<MarkerPosition>,
    /// Command-sequence connectors ("then").
    pub connectors: Vec<String>,
    /// Conditional openers ("if").
    pub conditional: Vec<String>,
    /// Else-branch markers ("else", "otherwise").
    pub conditional_else: Vec<String>,
    /// Loop openers ("repeat").
    pub loop_keyword: Vec<String>,
    /// Loop count units ("times").
    pub loop_unit: Vec<String>,
}

impl StructureSurfaces {
    /// Iterates over every structure surface.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.event_prefix
            .iter()
            .chain(&self.connectors)
            .chain(&self.conditional)
            .chain(&self.conditional_else)
            .chain(&self.loop_keyword)
            .chain(&self.loop_unit)
            .map(String::as_str)
    }
}

/// Static grammar and keyword configuration for one language.
///
/// Built once at registration time and immutable afterwards; every field
/// the pipeline consults is read-only.
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    /// Language code ("en", "ja", ...).
    pub code: String,
    /// Human-readable language name.
    pub name: String,
    /// Constituent order.
    pub word_order: WordOrder,
    /// Role marking strategy.
    pub marking: MarkingStrategy,
    /// Tokenization boundary strategy.
    pub boundary: BoundaryStrategy,
    /// Whether space-separated words may carry attached markers (Korean).
    pub attached_markers: bool,
    commands: Vec<CommandEntry>,
    markers: HashMap<SemanticRole, RoleMarker>,
    structure: StructureSurfaces,
    defaults: HashMap<String, Vec<(SemanticRole, SemanticValue)>>,
    shapes: Vec<CommandShape>,
    surface_trie: OnceLock<SurfaceTrie>,
}

impl LanguageProfile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        word_order: WordOrder,
        marking: MarkingStrategy,
        boundary: BoundaryStrategy,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            word_order,
            marking,
            boundary,
            attached_markers: false,
            commands: Vec::new(),
            markers: HashMap::new(),
            structure: StructureSurfaces::default(),
            defaults: HashMap::new(),
            shapes: Vec::new(),
            surface_trie: OnceLock::new(),
        }
    }

    /// Adds a localized command with its surface forms, primary first.
    #[must_use]
    pub fn with_command<I, S>(mut self, command: impl Into<String>, surfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands.push(CommandEntry {
            command: command.into(),
            surfaces: surfaces.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Sets the marker for a role.
    #[must_use]
    pub fn with_marker(mut self, role: SemanticRole, marker: RoleMarker) -> Self {
        self.markers.insert(role, marker);
        self
    }

    /// Sets the structure surfaces.
    #[must_use]
    pub fn with_structure(mut self, structure: StructureSurfaces) -> Self {
        self.structure = structure;
        self
    }

    /// Enables attached-marker detachment for space tokenization.
    #[must_use]
    pub fn with_attached_markers(mut self) -> Self {
        self.attached_markers = true;
        self
    }

    /// Declares a default value bound when a role goes unmarked
    /// (e.g. an implicit "me" destination for `send`).
    #[must_use]
    pub fn with_default(
        mut self,
        command: impl Into<String>,
        role: SemanticRole,
        value: SemanticValue,
    ) -> Self {
        self.defaults
            .entry(command.into())
            .or_default()
            .push((role, value));
        self
    }

    /// Adds or overrides a command shape beyond the builtin set.
    #[must_use]
    pub fn with_shape(mut self, shape: CommandShape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// The localized command entries.
    #[must_use]
    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    /// Extra or overriding command shapes declared by this profile.
    #[must_use]
    pub fn shapes(&self) -> &[CommandShape] {
        &self.shapes
    }

    /// The marker declared for a role, if any.
    #[must_use]
    pub fn marker(&self, role: SemanticRole) -> Option<&RoleMarker> {
        self.markers.get(&role)
    }

    /// The structure surfaces.
    #[must_use]
    pub fn structure(&self) -> &StructureSurfaces {
        &self.structure
    }

    /// Declared default bindings for a command.
    #[must_use]
    pub fn defaults(&self, command: &str) -> &[(SemanticRole, SemanticValue)] {
        self.defaults.get(command).map_or(&[], Vec::as_slice)
    }

    /// The primary surface for a command.
    #[must_use]
    pub fn primary_surface(&self, command: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|entry| entry.command == command)
            .and_then(|entry| entry.surfaces.first())
            .map(String::as_str)
    }

    /// Resolves a normalized surface to its canonical command name.
    #[must_use]
    pub fn command_for_surface(&self, surface: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|entry| entry.surfaces.iter().any(|s| s == surface))
            .map(|entry| entry.command.as_str())
    }

    /// Returns true if the surface is any command's surface form.
    #[must_use]
    pub fn is_command_surface(&self, surface: &str) -> bool {
        self.command_for_surface(surface).is_some()
    }

    /// Returns true if the surface belongs to any role marker.
    #[must_use]
    pub fn is_marker_surface(&self, surface: &str) -> bool {
        self.markers.values().any(|m| m.accepts(surface))
    }

    /// Returns true if the surface is a structure word.
    #[must_use]
    pub fn is_structure_surface(&self, surface: &str) -> bool {
        self.structure.all().any(|s| s == surface)
    }

    /// Marker surfaces that attach after their value, longest first.
    ///
    /// Used by the suffix tokenizer and attached-marker detachment.
    #[must_use]
    pub fn trailing_marker_surfaces(&self) -> Vec<&str> {
        let mut surfaces: Vec<&str> = self
            .markers
            .values()
            .filter(|m| m.position == MarkerPosition::After)
            .flat_map(RoleMarker::surfaces)
            .collect();
        surfaces.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        surfaces.dedup();
        surfaces
    }

    /// The trie over every known surface, built lazily once.
    pub fn surface_trie(&self) -> &SurfaceTrie {
        self.surface_trie.get_or_init(|| {
            let commands = self
                .commands
                .iter()
                .flat_map(|entry| entry.surfaces.iter())
                .map(String::as_str);
            let markers = self
                .markers
                .values()
                .flat_map(RoleMarker::surfaces);
            SurfaceTrie::from_surfaces(commands.chain(markers).chain(self.structure.all()))
        })
    }

    /// The equality used when matching pattern literals against tokens.
    ///
    /// A literal matches a token when the normalized surfaces are equal or
    /// when both surfaces belong to the same command entry (synonyms).
    #[must_use]
    pub fn surface_eq(&self, expected: &str, token: &Token) -> bool {
        if expected == token.normalized {
            return true;
        }
        match (
            self.command_for_surface(expected),
            self.command_for_surface(&token.normalized),
        ) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
