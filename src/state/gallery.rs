/// Gallery state: cards, detail cards and the navigation between them
///
/// Every loaded person gets a `Tile` (the summary card in the grid) and an
/// `Overlay` (the detail card), both tagged with the person's position in
/// the loaded batch. The position is the only link between the two and is
/// never renumbered: filtering hides tiles, it does not remove anything.
///
/// At most one overlay is visible. The visible one is tracked by a single
/// `Option<usize>`, so showing an overlay implicitly hides the previous one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::data::Person;
use crate::color::Accent;
use crate::roster::LoadError;

/// Errors from navigation on the gallery
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("gallery is empty")]
    Empty,
    #[error("index {index} out of range for {len} people")]
    OutOfRange { index: usize, len: usize },
}

/// Summary card bound to one person by position
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub index: usize,
    /// False when the current search text does not match
    pub shown: bool,
}

/// Detail card bound to one person by position
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub index: usize,
    /// Accent picked when this card was opened, None while hidden
    pub accent: Option<Accent>,
}

/// Visibility of a single overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Visible,
}

/// All gallery state owned by the application
#[derive(Debug)]
pub struct Gallery {
    people: Vec<Person>,
    tiles: Vec<Tile>,
    overlays: Vec<Overlay>,
    /// Index of the one visible overlay, if any
    visible: Option<usize>,
    /// Current search text, kept so it can be re-applied and displayed
    search: String,
    /// Load failures reported to the user
    diagnostics: Vec<String>,
    rng: StdRng,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Gallery {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty gallery with a specific accent RNG
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            people: Vec::new(),
            tiles: Vec::new(),
            overlays: Vec::new(),
            visible: None,
            search: String::new(),
            diagnostics: Vec::new(),
            rng,
        }
    }

    /// Build one tile and one overlay per person, in batch order.
    ///
    /// Replaces any previous content. All overlays start hidden and the
    /// current search text is re-applied to the new tiles.
    pub fn build_all(&mut self, people: Vec<Person>) {
        self.tiles = (0..people.len())
            .map(|index| Tile { index, shown: true })
            .collect();
        self.overlays = (0..people.len())
            .map(|index| Overlay { index, accent: None })
            .collect();
        self.people = people;
        self.visible = None;

        let search = std::mem::take(&mut self.search);
        self.filter(&search);
    }

    /// Apply the outcome of a roster load.
    ///
    /// On failure the gallery stays empty and one diagnostic is recorded.
    pub fn apply_load(&mut self, result: Result<Vec<Person>, LoadError>) {
        match result {
            Ok(people) => self.build_all(people),
            Err(err) => {
                self.people.clear();
                self.tiles.clear();
                self.overlays.clear();
                self.visible = None;
                self.diagnostics.push(format!("There has been a problem: {}", err));
            }
        }
    }

    /// Show overlay `index`, hiding whichever one was visible.
    ///
    /// A fresh accent is picked on every show.
    pub fn show_overlay(&mut self, index: usize) -> Result<(), GalleryError> {
        self.check_index(index)?;

        if let Some(current) = self.visible {
            self.hide_overlay(current)?;
        }

        let accent = Accent::pick(&mut self.rng);
        self.overlays[index].accent = Some(accent);
        self.visible = Some(index);
        Ok(())
    }

    /// Hide overlay `index`. Hiding an overlay that is not visible is a no-op.
    ///
    /// The accent is dropped with it; the next show picks a new one.
    pub fn hide_overlay(&mut self, index: usize) -> Result<(), GalleryError> {
        self.check_index(index)?;

        if self.visible == Some(index) {
            self.visible = None;
            self.overlays[index].accent = None;
        }
        Ok(())
    }

    /// Hide overlay `index` and show its successor, wrapping N-1 to 0
    pub fn show_next(&mut self, index: usize) -> Result<usize, GalleryError> {
        let next = next_index(index, self.len())?;
        self.hide_overlay(index)?;
        self.show_overlay(next)?;
        Ok(next)
    }

    /// Hide overlay `index` and show its predecessor, wrapping 0 to N-1
    pub fn show_previous(&mut self, index: usize) -> Result<usize, GalleryError> {
        let prev = previous_index(index, self.len())?;
        self.hide_overlay(index)?;
        self.show_overlay(prev)?;
        Ok(prev)
    }

    /// Show the tiles whose full name contains `text`, case-insensitively.
    ///
    /// Empty (or whitespace-only) text shows every tile. Overlays are untouched.
    pub fn filter(&mut self, text: &str) {
        self.search = text.to_string();
        let needle = text.trim().to_lowercase();

        for tile in &mut self.tiles {
            tile.shown = needle.is_empty()
                || self.people[tile.index]
                    .full_name()
                    .to_lowercase()
                    .contains(&needle);
        }
    }

    /// Number of people in the gallery
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Tiles that match the current search
    pub fn shown_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.shown)
    }

    pub fn shown_count(&self) -> usize {
        self.shown_tiles().count()
    }

    /// The visible overlay, if any
    pub fn visible(&self) -> Option<&Overlay> {
        self.visible.and_then(|i| self.overlays.get(i))
    }

    pub fn visible_index(&self) -> Option<usize> {
        self.visible
    }

    pub fn overlay_state(&self, index: usize) -> OverlayState {
        if self.visible == Some(index) {
            OverlayState::Visible
        } else {
            OverlayState::Hidden
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    fn check_index(&self, index: usize) -> Result<(), GalleryError> {
        match self.len() {
            0 => Err(GalleryError::Empty),
            len if index >= len => Err(GalleryError::OutOfRange { index, len }),
            _ => Ok(()),
        }
    }
}

/// Successor of `index` in a cyclic collection of `len`
pub fn next_index(index: usize, len: usize) -> Result<usize, GalleryError> {
    match len {
        0 => Err(GalleryError::Empty),
        _ if index >= len => Err(GalleryError::OutOfRange { index, len }),
        _ => Ok((index + 1) % len),
    }
}

/// Predecessor of `index` in a cyclic collection of `len`
pub fn previous_index(index: usize, len: usize) -> Result<usize, GalleryError> {
    match len {
        0 => Err(GalleryError::Empty),
        _ if index >= len => Err(GalleryError::OutOfRange { index, len }),
        _ => Ok((index + len - 1) % len),
    }
}
