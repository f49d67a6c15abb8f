//! Flip card state.
//!
//! A card is a two-state machine: it starts on its [`FlipFace::Front`] and
//! every activation moves it to the other face. There is no terminal state.
//!
//! [`FlipDeck`] is the arena holding one face per toolbox entry, indexed by
//! the entry's position in the source array. Cards never share state; the
//! only way to change a face is to toggle its own index.

use serde::{Deserialize, Serialize};

/// Which side of a flip card is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipFace {
    /// Icon and label
    #[default]
    Front,
    /// Descriptive value
    Back,
}

impl FlipFace {
    /// The other face
    pub fn toggled(self) -> Self {
        match self {
            FlipFace::Front => FlipFace::Back,
            FlipFace::Back => FlipFace::Front,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == FlipFace::Back
    }

    /// Value of the `aria-pressed` attribute
    pub fn aria_pressed(self) -> &'static str {
        if self.is_flipped() {
            "true"
        } else {
            "false"
        }
    }

    /// Rotation of the tile in degrees around the Y axis
    pub fn rotation_deg(self) -> u16 {
        match self {
            FlipFace::Front => 0,
            FlipFace::Back => 180,
        }
    }
}

/// User input that activates a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipTrigger {
    Click,
    Enter,
    Space,
}

impl FlipTrigger {
    /// Map a keyboard key name to a trigger.
    ///
    /// Accepts the DOM `KeyboardEvent.key` spelling: `"Enter"` and `" "`
    /// (`"Spacebar"` from older engines too). Anything else is not an
    /// activation.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(FlipTrigger::Enter),
            " " | "Spacebar" => Some(FlipTrigger::Space),
            _ => None,
        }
    }

    /// Face after this trigger fires on `face`.
    ///
    /// All triggers produce the same transition.
    pub fn apply(self, face: FlipFace) -> FlipFace {
        face.toggled()
    }
}

/// One independent [`FlipFace`] per toolbox card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipDeck {
    faces: Vec<FlipFace>,
}

impl FlipDeck {
    /// A deck of `len` cards, all showing their front.
    pub fn new(len: usize) -> Self {
        Self {
            faces: vec![FlipFace::Front; len],
        }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn face(&self, index: usize) -> Option<FlipFace> {
        self.faces.get(index).copied()
    }

    pub fn faces(&self) -> &[FlipFace] {
        &self.faces
    }

    /// Flip the card at `index` and return its new face.
    ///
    /// Out-of-range indexes leave the deck untouched and return `None`.
    pub fn toggle(&mut self, index: usize) -> Option<FlipFace> {
        let face = self.faces.get_mut(index)?;
        *face = face.toggled();
        tracing::debug!(index, face = ?*face, "Flip card toggled");
        Some(*face)
    }

    /// Apply a user trigger to the card at `index`.
    pub fn apply(&mut self, index: usize, trigger: FlipTrigger) -> Option<FlipFace> {
        let face = self.faces.get_mut(index)?;
        *face = trigger.apply(*face);
        tracing::debug!(index, ?trigger, face = ?*face, "Flip card activated");
        Some(*face)
    }

    /// Grow or shrink the deck to `len` cards.
    ///
    /// Faces below `len` are kept; new cards start on their front.
    pub fn resize(&mut self, len: usize) {
        if len != self.faces.len() {
            tracing::debug!(from = self.faces.len(), to = len, "Flip deck resized");
            self.faces.resize(len, FlipFace::Front);
        }
    }
}
