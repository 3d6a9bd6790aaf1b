//! Overtone stacks: the named presets and the user-editable custom set.

use serde::{Deserialize, Serialize};

use crate::param::parse_number;
use crate::OvertoneId;

/// A single partial definition: frequency ratio to the note's fundamental and
/// relative amplitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overtone {
    pub id: OvertoneId,
    pub enabled: bool,
    pub multiplier: f64,
    pub magnitude: f64,
}

impl Overtone {
    pub fn is_valid_multiplier(value: f64) -> bool {
        value.is_finite() && value > 0.0
    }

    pub fn is_valid_magnitude(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }
}

/// Named overtone stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    PureTone,
    PluckedString,
    Bell,
    Custom,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::PureTone,
        Preset::PluckedString,
        Preset::Bell,
        Preset::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::PureTone => "pure-tone",
            Preset::PluckedString => "plucked-string",
            Preset::Bell => "bell",
            Preset::Custom => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "pure-tone" | "pure" | "sine" => Some(Preset::PureTone),
            "plucked-string" | "plucked" | "guitar" => Some(Preset::PluckedString),
            "bell" => Some(Preset::Bell),
            "custom" => Some(Preset::Custom),
            _ => None,
        }
    }

    /// Template partials as (multiplier, magnitude). All start enabled.
    /// The custom preset has no template; it starts empty.
    pub fn template(&self) -> &'static [(f64, f64)] {
        match self {
            Preset::PureTone => &PURE_TONE,
            Preset::PluckedString => &PLUCKED_STRING,
            Preset::Bell => &BELL,
            Preset::Custom => &[],
        }
    }
}

const PURE_TONE: [(f64, f64); 1] = [(1.0, 1.0)];

const PLUCKED_STRING: [(f64, f64); 5] = [
    (1.0, 1.0),
    (2.0, 0.5),
    (3.0, 0.33),
    (4.0, 0.21),
    (5.0, 0.2),
];

// Inharmonic: sub-octave hum, minor-third-ish 1.2 and a fifth
const BELL: [(f64, f64); 5] = [
    (0.5, 0.3),
    (1.0, 0.7),
    (1.2, 0.8),
    (1.5, 0.6),
    (2.0, 1.0),
];

/// One row of an externally edited overtone table, still in text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableRow {
    pub enabled: bool,
    pub multiplier: String,
    pub magnitude: String,
}

impl EditableRow {
    pub fn new(enabled: bool, multiplier: impl Into<String>, magnitude: impl Into<String>) -> Self {
        Self {
            enabled,
            multiplier: multiplier.into(),
            magnitude: magnitude.into(),
        }
    }
}

/// The selected preset plus the overtone list it currently resolves to.
///
/// Presets are templates: selecting one copies its template into `working`,
/// so edits never leak back into the catalogue and re-selecting a preset
/// restores it. The custom set is stored on its own and edited in place while
/// selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertoneState {
    pub selected: Preset,
    working: Vec<Overtone>,
    custom: Vec<Overtone>,
    next_id: u32,
}

impl Default for OvertoneState {
    fn default() -> Self {
        Self::new(Preset::default())
    }
}

impl OvertoneState {
    pub fn new(preset: Preset) -> Self {
        let mut state = Self {
            selected: Preset::PureTone,
            working: Vec::new(),
            custom: Vec::new(),
            next_id: 0,
        };
        state.select_preset(preset);
        state
    }

    /// The overtone list every note currently uses.
    pub fn current(&self) -> &[Overtone] {
        match self.selected {
            Preset::Custom => &self.custom,
            _ => &self.working,
        }
    }

    fn current_mut(&mut self) -> &mut Vec<Overtone> {
        match self.selected {
            Preset::Custom => &mut self.custom,
            _ => &mut self.working,
        }
    }

    pub fn custom(&self) -> &[Overtone] {
        &self.custom
    }

    pub fn len(&self) -> usize {
        self.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Overtone> {
        self.current().get(index)
    }

    /// Position of `id` in the current set.
    pub fn position(&self, id: OvertoneId) -> Option<usize> {
        self.current().iter().position(|o| o.id == id)
    }

    pub fn overtone(&self, id: OvertoneId) -> Option<&Overtone> {
        self.current().iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: OvertoneId) -> bool {
        self.overtone(id).is_some()
    }

    fn alloc_id(&mut self) -> OvertoneId {
        let id = OvertoneId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn make_overtone(&mut self, enabled: bool, multiplier: f64, magnitude: f64) -> Overtone {
        Overtone {
            id: self.alloc_id(),
            enabled,
            multiplier,
            magnitude,
        }
    }

    /// Switch the current set. Non-custom presets are re-instantiated from
    /// their template with fresh ids; the custom set is left untouched.
    pub fn select_preset(&mut self, preset: Preset) {
        self.selected = preset;
        if preset != Preset::Custom {
            let working: Vec<Overtone> = preset
                .template()
                .iter()
                .map(|&(multiplier, magnitude)| self.make_overtone(true, multiplier, magnitude))
                .collect();
            self.working = working;
        }
    }

    /// Append an enabled overtone at the next integer harmonic with a quiet magnitude.
    pub fn add_partial(&mut self) -> OvertoneId {
        let multiplier = (self.len() + 1) as f64;
        let overtone = self.make_overtone(true, multiplier, 0.1);
        let id = overtone.id;
        self.current_mut().push(overtone);
        id
    }

    /// Remove the overtone at `index`. Later overtones shift down one position.
    pub fn remove_partial(&mut self, index: usize) -> Option<Overtone> {
        let current = self.current_mut();
        if index < current.len() {
            Some(current.remove(index))
        } else {
            None
        }
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> bool {
        match self.current_mut().get_mut(index) {
            Some(overtone) => {
                overtone.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Returns false (leaving the old value) for a missing index or a
    /// non-positive / non-finite multiplier.
    pub fn set_multiplier(&mut self, index: usize, multiplier: f64) -> bool {
        if !Overtone::is_valid_multiplier(multiplier) {
            return false;
        }
        match self.current_mut().get_mut(index) {
            Some(overtone) => {
                overtone.multiplier = multiplier;
                true
            }
            None => false,
        }
    }

    /// Returns false (leaving the old value) for a missing index or a
    /// negative / non-finite magnitude.
    pub fn set_magnitude(&mut self, index: usize, magnitude: f64) -> bool {
        if !Overtone::is_valid_magnitude(magnitude) {
            return false;
        }
        match self.current_mut().get_mut(index) {
            Some(overtone) => {
                overtone.magnitude = magnitude;
                true
            }
            None => false,
        }
    }

    /// Rebuild the custom set wholesale from table rows. Rows whose multiplier
    /// or magnitude do not parse (or are out of range) are skipped. Returns the
    /// number of rows kept.
    pub fn sync_custom(&mut self, rows: &[EditableRow]) -> usize {
        let mut custom = Vec::with_capacity(rows.len());
        for row in rows {
            let multiplier =
                parse_number(&row.multiplier).filter(|&m| Overtone::is_valid_multiplier(m));
            let magnitude =
                parse_number(&row.magnitude).filter(|&m| Overtone::is_valid_magnitude(m));
            if let (Some(multiplier), Some(magnitude)) = (multiplier, magnitude) {
                custom.push(self.make_overtone(row.enabled, multiplier, magnitude));
            }
        }
        let kept = custom.len();
        self.custom = custom;
        kept
    }
}
