/// Widget builders for the gallery window
///
/// - `card.rs` - summary card shown in the grid
/// - `modal.rs` - detail card and the modal layer that hosts it
/// - `search.rs` - search row above the grid

pub mod card;
pub mod modal;
pub mod search;
