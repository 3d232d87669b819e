use iced::keyboard::{self, key};
use iced::widget::{column, container, image, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};
use iced_aw::Wrap;
use std::collections::HashMap;

mod color;
mod roster;
mod state;
mod ui;

use roster::{fetch_portrait, load_roster, LoadError, RosterRequest};
use state::data::Person;
use state::gallery::{Gallery, Overlay, OverlayState};

/// Main application state
struct PeopleGallery {
    /// Cards, detail cards and which one is open
    gallery: Gallery,
    /// Decoded portraits by positional index
    portraits: HashMap<usize, image::Handle>,
    /// Shared HTTP client for the roster and portrait requests
    client: reqwest::Client,
    /// True until the roster request completes
    loading: bool,
}

/// Keyboard shortcuts available while a detail card is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Close,
    Previous,
    Next,
}

/// Application messages (events)
#[derive(Debug, Clone, PartialEq)]
enum Message {
    /// Roster request finished
    RosterLoaded(Result<Vec<Person>, LoadError>),
    /// Portrait request for the person at this index finished
    PortraitLoaded(usize, Result<Vec<u8>, LoadError>),
    /// User clicked the card at this index
    OpenOverlay(usize),
    /// Close button (or backdrop) of the detail card at this index
    CloseOverlay(usize),
    /// Prev button of the detail card at this index
    PreviousOverlay(usize),
    /// Next button of the detail card at this index
    NextOverlay(usize),
    /// Search text edited
    SearchChanged(String),
    /// Search submitted with Enter or the button
    SearchSubmitted,
    /// Keyboard shortcut
    Key(KeyAction),
}

impl PeopleGallery {
    /// Create the application and start the roster request
    fn new() -> (Self, Task<Message>) {
        let app = Self::from_gallery(Gallery::new(), reqwest::Client::new());
        let request = RosterRequest::default();

        println!("🎨 People Gallery initialized, requesting {} people", request.results);

        let task = Task::perform(
            load_roster(app.client.clone(), request),
            Message::RosterLoaded,
        );

        (app, task)
    }

    fn from_gallery(gallery: Gallery, client: reqwest::Client) -> Self {
        PeopleGallery {
            gallery,
            portraits: HashMap::new(),
            client,
            loading: true,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RosterLoaded(result) => {
                self.loading = false;

                // Report a failed load once; the gallery stays empty
                if let Err(err) = &result {
                    eprintln!("❌ There has been a problem loading the roster: {}", err);
                }
                self.gallery.apply_load(result);

                // Portraits from an earlier batch no longer match these indexes
                self.portraits.clear();

                // One portrait request per person, matched back by index
                let tasks: Vec<Task<Message>> = self
                    .gallery
                    .people()
                    .iter()
                    .enumerate()
                    .filter(|(_, person)| !person.picture.large.is_empty())
                    .map(|(index, person)| {
                        Task::perform(
                            fetch_portrait(self.client.clone(), person.picture.large.clone()),
                            move |result| Message::PortraitLoaded(index, result),
                        )
                    })
                    .collect();

                Task::batch(tasks)
            }
            Message::PortraitLoaded(index, result) => {
                match result {
                    Ok(bytes) => {
                        // iced decodes the JPEG bytes lazily when the card is drawn
                        self.portraits.insert(index, image::Handle::from_bytes(bytes));
                    }
                    Err(err) => {
                        eprintln!("⚠️  Portrait {} unavailable: {}", index, err);
                    }
                }
                Task::none()
            }
            Message::OpenOverlay(index) => {
                // Opening a card closes whichever one was open
                match self.gallery.show_overlay(index) {
                    Ok(()) => {
                        if let Some(accent) = self.gallery.visible().and_then(|o| o.accent) {
                            println!("🪪 Opened card {} ({})", index, accent.name);
                        }
                    }
                    Err(err) => eprintln!("⚠️  Cannot open card {}: {}", index, err),
                }
                Task::none()
            }
            Message::CloseOverlay(index) => {
                if let Err(err) = self.gallery.hide_overlay(index) {
                    eprintln!("⚠️  Cannot close card {}: {}", index, err);
                }
                Task::none()
            }
            Message::PreviousOverlay(index) => {
                // Wraps from the first card to the last
                if let Err(err) = self.gallery.show_previous(index) {
                    eprintln!("⚠️  Cannot move back from card {}: {}", index, err);
                }
                Task::none()
            }
            Message::NextOverlay(index) => {
                // Wraps from the last card to the first
                if let Err(err) = self.gallery.show_next(index) {
                    eprintln!("⚠️  Cannot move on from card {}: {}", index, err);
                }
                Task::none()
            }
            Message::SearchChanged(query) => {
                // Filter live on every keystroke
                self.gallery.filter(&query);
                Task::none()
            }
            Message::SearchSubmitted => {
                // Enter or the Search button re-applies the current text
                let query = self.gallery.search().to_string();
                self.gallery.filter(&query);
                println!(
                    "🔍 \"{}\": {} of {} match",
                    query,
                    self.gallery.shown_count(),
                    self.gallery.len()
                );
                Task::none()
            }
            Message::Key(action) => {
                // Shortcuts only act on an open detail card
                let Some(index) = self.gallery.visible_index() else {
                    return Task::none();
                };
                let next = match action {
                    KeyAction::Close => Message::CloseOverlay(index),
                    KeyAction::Previous => Message::PreviousOverlay(index),
                    KeyAction::Next => Message::NextOverlay(index),
                };
                self.update(next)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Employee Directory").size(32),
            ui::search::search_bar(self.gallery.search()),
            text(self.status_line()).size(14),
        ]
        .spacing(12);

        // Cards in batch order, skipping the ones the search hides
        let cards: Vec<Element<Message>> = self
            .gallery
            .tiles()
            .iter()
            .filter(|tile| tile.shown)
            .filter_map(|tile| {
                let person = self.gallery.person(tile.index)?;
                Some(ui::card::card(
                    tile.index,
                    person,
                    self.portraits.get(&tile.index),
                ))
            })
            .collect();

        let grid = Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0);

        let base = container(column![header, scrollable(grid)].spacing(20))
            .padding(30)
            .width(Length::Fill)
            .height(Length::Fill);

        // Layer the open detail card, if any, over the grid
        match self.open_overlay() {
            Some((overlay, person)) => ui::modal::modal(
                base,
                ui::modal::detail_card(overlay, person, self.portraits.get(&overlay.index)),
                Message::CloseOverlay(overlay.index),
            ),
            None => base.into(),
        }
    }

    /// The visible detail card and the person it shows
    fn open_overlay(&self) -> Option<(&Overlay, &Person)> {
        let overlay = self
            .gallery
            .overlays()
            .iter()
            .find(|overlay| self.gallery.overlay_state(overlay.index) == OverlayState::Visible)?;
        let person = self.gallery.person(overlay.index)?;
        Some((overlay, person))
    }

    /// Listen for keyboard shortcuts
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(key_action)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// One-line summary shown under the search row
    fn status_line(&self) -> String {
        if self.loading {
            return "Loading directory...".to_string();
        }
        if let Some(problem) = self.gallery.diagnostics().last() {
            return problem.clone();
        }
        if self.gallery.is_empty() {
            return "No people in the directory".to_string();
        }

        let total = self.gallery.len();
        if self.gallery.search().trim().is_empty() {
            format!("{} people", total)
        } else {
            format!(
                "{} of {} match \"{}\"",
                self.gallery.shown_count(),
                total,
                self.gallery.search().trim()
            )
        }
    }
}

/// Map Escape and the left/right arrows to detail card navigation
fn key_action(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::Key(KeyAction::Close)),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::Key(KeyAction::Previous)),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::Key(KeyAction::Next)),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application(
        "People Gallery",
        PeopleGallery::update,
        PeopleGallery::view,
    )
    .subscription(PeopleGallery::subscription)
    .theme(PeopleGallery::theme)
    .centered()
    .run_with(PeopleGallery::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use state::data::Name;

    fn person(first: &str, last: &str) -> Person {
        Person {
            name: Name {
                title: String::new(),
                first: first.to_string(),
                last: last.to_string(),
            },
            ..Person::default()
        }
    }

    fn app() -> PeopleGallery {
        PeopleGallery::from_gallery(
            Gallery::with_rng(StdRng::seed_from_u64(9)),
            reqwest::Client::new(),
        )
    }

    fn loaded_app(n: usize) -> PeopleGallery {
        let mut app = app();
        let people = (0..n).map(|i| person(&format!("P{}", i), "Test")).collect();
        let _ = app.update(Message::RosterLoaded(Ok(people)));
        app
    }

    #[test]
    fn test_click_next_and_wrap() {
        let mut app = loaded_app(12);

        let _ = app.update(Message::OpenOverlay(3));
        assert_eq!(app.gallery.visible_index(), Some(3));

        let _ = app.update(Message::NextOverlay(3));
        assert_eq!(app.gallery.visible_index(), Some(4));

        let _ = app.update(Message::OpenOverlay(11));
        let _ = app.update(Message::NextOverlay(11));
        assert_eq!(app.gallery.visible_index(), Some(0));

        let _ = app.update(Message::PreviousOverlay(0));
        assert_eq!(app.gallery.visible_index(), Some(11));

        let _ = app.update(Message::CloseOverlay(11));
        assert_eq!(app.gallery.visible_index(), None);
    }

    #[test]
    fn test_open_overlay_follows_state() {
        let mut app = loaded_app(4);
        assert!(app.open_overlay().is_none());

        let _ = app.update(Message::OpenOverlay(2));
        let (overlay, person) = app.open_overlay().unwrap();
        assert_eq!(overlay.index, 2);
        assert_eq!(person.name.first, "P2");
        assert!(overlay.accent.is_some());

        // Pairing holds after navigation and under a filter hiding the card
        let _ = app.update(Message::SearchChanged("P0".to_string()));
        let _ = app.update(Message::NextOverlay(2));
        let (overlay, person) = app.open_overlay().unwrap();
        assert_eq!(overlay.index, 3);
        assert_eq!(person.name.first, "P3");

        let _ = app.update(Message::CloseOverlay(3));
        assert!(app.open_overlay().is_none());
    }

    #[test]
    fn test_empty_roster_status() {
        let mut app = app();
        let _ = app.update(Message::RosterLoaded(Ok(Vec::new())));

        assert_eq!(app.status_line(), "No people in the directory");
        assert!(app.open_overlay().is_none());
    }

    #[test]
    fn test_keyboard_shortcuts_follow_open_card() {
        let mut app = loaded_app(5);

        // No open card: shortcuts do nothing
        let _ = app.update(Message::Key(KeyAction::Next));
        assert_eq!(app.gallery.visible_index(), None);

        let _ = app.update(Message::OpenOverlay(4));
        let _ = app.update(Message::Key(KeyAction::Next));
        assert_eq!(app.gallery.visible_index(), Some(0));

        let _ = app.update(Message::Key(KeyAction::Previous));
        assert_eq!(app.gallery.visible_index(), Some(4));

        let _ = app.update(Message::Key(KeyAction::Close));
        assert_eq!(app.gallery.visible_index(), None);
    }

    #[test]
    fn test_key_mapping() {
        let none = keyboard::Modifiers::empty();

        assert_eq!(
            key_action(keyboard::Key::Named(key::Named::Escape), none),
            Some(Message::Key(KeyAction::Close))
        );
        assert_eq!(
            key_action(keyboard::Key::Named(key::Named::ArrowLeft), none),
            Some(Message::Key(KeyAction::Previous))
        );
        assert_eq!(
            key_action(keyboard::Key::Named(key::Named::ArrowRight), none),
            Some(Message::Key(KeyAction::Next))
        );
        assert_eq!(key_action(keyboard::Key::Named(key::Named::Enter), none), None);
    }

    #[test]
    fn test_search_updates_status() {
        let mut app = app();
        let _ = app.update(Message::RosterLoaded(Ok(vec![
            person("Anna", "Smith"),
            person("Dana", "Mann"),
            person("Bob", "Brown"),
        ])));
        assert_eq!(app.status_line(), "3 people");

        let _ = app.update(Message::SearchChanged("ann".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        assert_eq!(app.gallery.shown_count(), 2);
        assert_eq!(app.status_line(), "2 of 3 match \"ann\"");

        let _ = app.update(Message::SearchChanged(String::new()));
        assert_eq!(app.status_line(), "3 people");
    }

    #[test]
    fn test_failed_load_reports_once() {
        let mut app = app();
        assert_eq!(app.status_line(), "Loading directory...");

        let _ = app.update(Message::RosterLoaded(Err(LoadError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        })));

        assert!(app.gallery.is_empty());
        assert_eq!(app.gallery.diagnostics().len(), 1);
        assert!(app.status_line().contains("HTTP 500"));

        // Navigation on an empty gallery is rejected, not a panic
        let _ = app.update(Message::OpenOverlay(0));
        let _ = app.update(Message::NextOverlay(0));
        assert_eq!(app.gallery.visible_index(), None);
    }

    #[test]
    fn test_failed_portrait_leaves_card_without_image() {
        let mut app = loaded_app(2);

        let _ = app.update(Message::PortraitLoaded(
            1,
            Err(LoadError::Network("timed out".to_string())),
        ));
        assert!(app.portraits.is_empty());

        let _ = app.update(Message::PortraitLoaded(0, Ok(vec![0xFF, 0xD8, 0xFF, 0xD9])));
        assert!(app.portraits.contains_key(&0));
    }
}
