/// State management module
///
/// This module handles all application state, including:
/// - Person records as decoded from the people API (data.rs)
/// - Gallery cards, detail cards and navigation between them (gallery.rs)

pub mod data;
pub mod gallery;
