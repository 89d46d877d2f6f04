// SPDX-License-Identifier: MPL-2.0
//! Gallery state controller.
//!
//! Translates category selection, pagination requests, and lightbox
//! gestures into [`GalleryController`] state transitions. The controller
//! never performs I/O: loading a category yields an [`Effect::Fetch`]
//! carrying a [`LoadTicket`], and the shell feeds the response back with
//! that ticket. Responses whose ticket no longer matches the displayed
//! category view are discarded.

use super::lightbox::{Direction, Lightbox};
use super::scroll_lock::ScrollLock;
use super::swipe::{self, Gesture};
use crate::application::port::FetchError;
use crate::domain::gallery::{Category, GalleryItem, Pagination};

// =============================================================================
// Load tickets and phases
// =============================================================================

/// Identity of one category fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    request_id: u64,
    category: Category,
}

impl LoadTicket {
    /// Category the fetch was issued for.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

/// Load state of the displayed category view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// The fetch has not completed yet.
    Loading,
    /// Items were fetched (possibly none).
    Ready,
    /// The fetch failed; the view shows an error instead of the gallery.
    Failed(FetchError),
}

/// What happened to a fetch response handed to [`GalleryController::apply_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response populated the current view.
    Applied,
    /// The response belonged to a superseded request and was dropped.
    Stale,
}

// =============================================================================
// Input
// =============================================================================

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Raw lightbox input delivered by the event subscription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightboxInput {
    Key(NavigationKey),
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    TouchLost,
}

// =============================================================================
// Messages and effects
// =============================================================================

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// A category was selected from the category bar or the route.
    SelectCategory(Category),
    /// A fetch completed.
    ItemsLoaded {
        ticket: LoadTicket,
        result: Result<Vec<GalleryItem>, FetchError>,
    },
    /// A page button was pressed.
    Paginate(usize),
    /// A grid cell was pressed; the index addresses the full item list.
    OpenLightbox(usize),
    /// The close button was pressed.
    CloseLightbox,
    /// A click or touch was released on the lightbox backdrop.
    BackdropReleased,
    /// The previous arrow was pressed.
    Previous,
    /// The next arrow was pressed.
    Next,
    /// Keyboard or touch input while the lightbox is open.
    Input(LightboxInput),
}

/// Side effects requested by the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch the ticket's category and deliver the result as
    /// [`Message::ItemsLoaded`] with the same ticket.
    Fetch(LoadTicket),
}

// =============================================================================
// Category view
// =============================================================================

/// State of one category, replaced wholesale whenever the category changes.
#[derive(Debug)]
struct CategoryView {
    ticket: LoadTicket,
    phase: LoadPhase,
    items: Vec<GalleryItem>,
    current_page: usize,
    lightbox: Option<Lightbox>,
}

impl CategoryView {
    fn loading(ticket: LoadTicket) -> Self {
        Self {
            ticket,
            phase: LoadPhase::Loading,
            items: Vec::new(),
            current_page: 1,
            lightbox: None,
        }
    }

    fn pagination(&self) -> Pagination {
        Pagination::gallery(self.items.len())
    }
}

/// Observable gallery state, used to compare states in tests and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub category: Option<Category>,
    pub phase: Option<LoadPhase>,
    pub item_ids: Vec<String>,
    pub current_page: usize,
    pub lightbox_index: Option<usize>,
    pub scroll_locked: bool,
}

// =============================================================================
// Controller
// =============================================================================

/// Gallery state machine.
#[derive(Debug)]
pub struct GalleryController {
    view: Option<CategoryView>,
    next_request_id: u64,
    scroll_lock: ScrollLock,
}

impl GalleryController {
    /// Creates a controller with no category loaded.
    ///
    /// Opening the lightbox acquires `scroll_lock` until it closes.
    #[must_use]
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            view: None,
            next_request_id: 0,
            scroll_lock,
        }
    }

    /// Handles a gallery message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SelectCategory(category) => Effect::Fetch(self.load_category(category)),
            Message::ItemsLoaded { ticket, result } => {
                self.apply_load(ticket, result);
                Effect::None
            }
            Message::Paginate(page) => {
                self.paginate(page);
                Effect::None
            }
            Message::OpenLightbox(index) => {
                self.open_lightbox(index);
                Effect::None
            }
            Message::CloseLightbox => {
                self.close_lightbox();
                Effect::None
            }
            Message::BackdropReleased => {
                self.release_backdrop();
                Effect::None
            }
            Message::Previous => {
                self.advance(Direction::Previous);
                Effect::None
            }
            Message::Next => {
                self.advance(Direction::Next);
                Effect::None
            }
            Message::Input(input) => {
                self.handle_input(input);
                Effect::None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Starts loading `category`, replacing the current view.
    ///
    /// Any response still in flight for an earlier ticket will be discarded.
    pub fn load_category(&mut self, category: Category) -> LoadTicket {
        self.next_request_id += 1;
        let ticket = LoadTicket {
            request_id: self.next_request_id,
            category,
        };
        if let Some(previous) = &self.view {
            if matches!(previous.phase, LoadPhase::Loading) {
                tracing::debug!(
                    superseded = %previous.ticket.category,
                    request_id = previous.ticket.request_id,
                    "superseding pending gallery load"
                );
            }
        }
        tracing::info!(%category, request_id = ticket.request_id, "loading gallery category");
        self.view = Some(CategoryView::loading(ticket));
        ticket
    }

    /// Applies a fetch response if `ticket` still identifies the current view.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<GalleryItem>, FetchError>,
    ) -> LoadOutcome {
        let Some(view) = self.view.as_mut().filter(|view| view.ticket == ticket) else {
            tracing::debug!(
                category = %ticket.category,
                request_id = ticket.request_id,
                "discarding stale gallery response"
            );
            return LoadOutcome::Stale;
        };

        match result {
            Ok(items) => {
                tracing::info!(category = %ticket.category, count = items.len(), "gallery loaded");
                view.items = items;
                view.phase = LoadPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(category = %ticket.category, error = %err, "gallery load failed");
                view.items = Vec::new();
                view.phase = LoadPhase::Failed(err);
            }
        }
        view.current_page = 1;
        view.lightbox = None;
        LoadOutcome::Applied
    }

    /// Moves to `page`, clamped into the valid page range. Returns the page shown.
    pub fn paginate(&mut self, page: usize) -> usize {
        let Some(view) = self.view.as_mut() else {
            return 1;
        };
        let clamped = view.pagination().clamp(page);
        if clamped != page {
            tracing::debug!(requested = page, applied = clamped, "clamped gallery page");
        }
        view.current_page = clamped;
        clamped
    }

    /// Opens the lightbox on the item at `index` of the full list.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn open_lightbox(&mut self, index: usize) -> bool {
        let Some(view) = self.view.as_mut() else {
            return false;
        };
        if index >= view.items.len() {
            return false;
        }
        view.lightbox = Some(Lightbox::open(index, self.scroll_lock.acquire()));
        true
    }

    /// Closes the lightbox, releasing its scroll lock.
    pub fn close_lightbox(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.lightbox = None;
        }
    }

    /// Closes the lightbox for a click or tap on the backdrop.
    ///
    /// The release that ends a swipe leaves the lightbox open.
    pub fn release_backdrop(&mut self) {
        let close = self
            .lightbox_mut()
            .is_some_and(|lightbox| lightbox.swipe_mut().release());
        if close {
            self.close_lightbox();
        }
    }

    /// Steps the lightbox one item in `direction`, wrapping around.
    ///
    /// Does nothing while the lightbox is closed.
    pub fn advance(&mut self, direction: Direction) {
        if let Some(view) = self.view.as_mut() {
            let len = view.items.len();
            if let Some(lightbox) = view.lightbox.as_mut() {
                lightbox.advance(direction, len);
            }
        }
    }

    /// Evaluates a completed horizontal swipe and advances accordingly.
    pub fn handle_swipe(&mut self, start_x: f32, end_x: f32) -> Option<Direction> {
        if !self.is_lightbox_open() {
            return None;
        }
        let direction = swipe::classify(start_x, end_x)?;
        self.advance(direction);
        Some(direction)
    }

    /// Routes keyboard and touch input through the lightbox operations.
    pub fn handle_input(&mut self, input: LightboxInput) {
        match input {
            LightboxInput::Key(NavigationKey::Escape) => self.close_lightbox(),
            LightboxInput::Key(NavigationKey::ArrowLeft) => self.advance(Direction::Previous),
            LightboxInput::Key(NavigationKey::ArrowRight) => self.advance(Direction::Next),
            LightboxInput::TouchStart { x } => {
                if let Some(lightbox) = self.lightbox_mut() {
                    lightbox.swipe_mut().start(x);
                }
            }
            LightboxInput::TouchMove { x } => {
                if let Some(lightbox) = self.lightbox_mut() {
                    lightbox.swipe_mut().update(x);
                }
            }
            LightboxInput::TouchEnd => {
                let gesture = self
                    .lightbox_mut()
                    .and_then(|lightbox| lightbox.swipe_mut().finish());
                match gesture {
                    Some(Gesture::Swipe(direction)) => self.advance(direction),
                    Some(Gesture::Tap) => self.close_lightbox(),
                    None => {}
                }
            }
            LightboxInput::TouchLost => {
                if let Some(lightbox) = self.lightbox_mut() {
                    lightbox.swipe_mut().cancel();
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Category of the displayed view, if any has been selected.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.view.as_ref().map(|view| view.ticket.category)
    }

    /// Ticket a response must carry to be applied.
    #[must_use]
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        self.view.as_ref().map(|view| view.ticket)
    }

    #[must_use]
    pub fn phase(&self) -> Option<&LoadPhase> {
        self.view.as_ref().map(|view| &view.phase)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase(), Some(LoadPhase::Loading))
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self.phase() {
            Some(LoadPhase::Failed(err)) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        self.view.as_ref().map_or(&[], |view| view.items.as_slice())
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.view.as_ref().map_or(1, |view| view.current_page)
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::gallery(self.items().len())
    }

    /// Number of page buttons to render.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pagination().page_count()
    }

    /// Whether the pagination bar should be shown.
    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        self.pagination().is_paginated()
    }

    /// Items on the current page.
    #[must_use]
    pub fn page_slice(&self) -> &[GalleryItem] {
        let range = self.pagination().range(self.current_page());
        &self.items()[range]
    }

    /// Index in the full list of the first item on the current page.
    #[must_use]
    pub fn page_offset(&self) -> usize {
        self.pagination().offset(self.current_page())
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox().is_some()
    }

    #[must_use]
    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox().map(Lightbox::index)
    }

    /// Item displayed in the lightbox.
    #[must_use]
    pub fn lightbox_item(&self) -> Option<&GalleryItem> {
        self.lightbox_index().and_then(|index| self.items().get(index))
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.view.as_ref().and_then(|view| view.lightbox.as_ref())
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            category: self.category(),
            phase: self.phase().cloned(),
            item_ids: self.items().iter().map(|item| item.id.clone()).collect(),
            current_page: self.current_page(),
            lightbox_index: self.lightbox_index(),
            scroll_locked: self.scroll_lock.is_locked(),
        }
    }

    fn lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        self.view.as_mut().and_then(|view| view.lightbox.as_mut())
    }
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new(ScrollLock::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<GalleryItem> {
        (0..count)
            .map(|i| {
                GalleryItem::new(
                    format!("doc-{i}"),
                    format!("Work {i}"),
                    format!("https://cdn.example.com/{i}.jpg"),
                    "branding",
                )
            })
            .collect()
    }

    fn loaded(count: usize) -> GalleryController {
        let mut gallery = GalleryController::default();
        let ticket = gallery.load_category(Category::Branding);
        assert_eq!(gallery.apply_load(ticket, Ok(items(count))), LoadOutcome::Applied);
        gallery
    }

    #[test]
    fn new_controller_has_no_view() {
        let gallery = GalleryController::default();
        assert_eq!(gallery.category(), None);
        assert!(gallery.items().is_empty());
        assert_eq!(gallery.current_page(), 1);
        assert!(!gallery.is_loading());
    }

    #[test]
    fn select_category_requests_fetch_and_enters_loading() {
        let mut gallery = GalleryController::default();
        let effect = gallery.handle(Message::SelectCategory(Category::LogoDesign));

        match effect {
            Effect::Fetch(ticket) => assert_eq!(ticket.category(), Category::LogoDesign),
            Effect::None => panic!("expected a fetch"),
        }
        assert!(gallery.is_loading());
        assert_eq!(gallery.category(), Some(Category::LogoDesign));
    }

    #[test]
    fn successful_load_sets_items_and_resets_page() {
        let gallery = loaded(30);
        assert_eq!(gallery.phase(), Some(&LoadPhase::Ready));
        assert_eq!(gallery.items().len(), 30);
        assert_eq!(gallery.current_page(), 1);
        assert_eq!(gallery.page_count(), 3);
    }

    #[test]
    fn failed_load_reports_error_with_no_items() {
        let mut gallery = GalleryController::default();
        let ticket = gallery.load_category(Category::Branding);
        gallery.apply_load(ticket, Err(FetchError::new("HTTP status: 500")));

        assert!(!gallery.is_loading());
        assert!(gallery.items().is_empty());
        assert_eq!(gallery.error().map(FetchError::detail), Some("HTTP status: 500"));
    }

    #[test]
    fn later_successful_load_clears_error() {
        let mut gallery = GalleryController::default();
        let ticket = gallery.load_category(Category::Branding);
        gallery.apply_load(ticket, Err(FetchError::new("offline")));

        let ticket = gallery.load_category(Category::Branding);
        gallery.apply_load(ticket, Ok(items(2)));
        assert!(gallery.error().is_none());
        assert_eq!(gallery.items().len(), 2);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut gallery = GalleryController::default();
        let first = gallery.load_category(Category::Branding);
        let second = gallery.load_category(Category::SocialMedia);

        assert_eq!(gallery.apply_load(first, Ok(items(5))), LoadOutcome::Stale);
        assert!(gallery.is_loading());
        assert!(gallery.items().is_empty());

        assert_eq!(gallery.apply_load(second, Ok(items(2))), LoadOutcome::Applied);
        assert_eq!(gallery.category(), Some(Category::SocialMedia));
        assert_eq!(gallery.items().len(), 2);
    }

    #[test]
    fn stale_response_for_same_category_is_discarded() {
        let mut gallery = GalleryController::default();
        let first = gallery.load_category(Category::Branding);
        let _ = gallery.load_category(Category::LogoDesign);
        let third = gallery.load_category(Category::Branding);

        assert_eq!(gallery.apply_load(first, Ok(items(9))), LoadOutcome::Stale);
        assert_eq!(gallery.apply_load(third, Ok(items(1))), LoadOutcome::Applied);
        assert_eq!(gallery.items().len(), 1);
    }

    #[test]
    fn category_change_resets_page() {
        let mut gallery = loaded(30);
        gallery.paginate(3);
        assert_eq!(gallery.current_page(), 3);

        gallery.load_category(Category::PosterFlyers);
        assert_eq!(gallery.current_page(), 1);
        assert!(gallery.items().is_empty());
    }

    #[test]
    fn paginate_clamps_out_of_range_pages() {
        let mut gallery = loaded(30);
        assert_eq!(gallery.paginate(2), 2);
        assert_eq!(gallery.paginate(0), 1);
        assert_eq!(gallery.paginate(42), 3);
        assert_eq!(gallery.current_page(), 3);
    }

    #[test]
    fn page_slice_follows_current_page() {
        let mut gallery = loaded(14);
        assert_eq!(gallery.page_slice().len(), 12);
        assert_eq!(gallery.page_offset(), 0);

        gallery.paginate(2);
        let ids: Vec<&str> = gallery.page_slice().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["doc-12", "doc-13"]);
        assert_eq!(gallery.page_offset(), 12);
    }

    #[test]
    fn pagination_only_shown_beyond_one_page() {
        assert!(!loaded(12).shows_pagination());
        assert!(loaded(13).shows_pagination());
    }

    #[test]
    fn open_lightbox_rejects_out_of_range_index() {
        let mut gallery = loaded(3);
        assert!(!gallery.open_lightbox(3));
        assert!(!gallery.is_lightbox_open());
        assert!(!gallery.scroll_lock().is_locked());
    }

    #[test]
    fn open_lightbox_locks_scrolling_until_closed() {
        let mut gallery = loaded(3);
        assert!(gallery.open_lightbox(1));
        assert_eq!(gallery.lightbox_index(), Some(1));
        assert_eq!(gallery.lightbox_item().map(|i| i.id.as_str()), Some("doc-1"));
        assert!(gallery.scroll_lock().is_locked());

        gallery.close_lightbox();
        assert!(!gallery.is_lightbox_open());
        assert!(!gallery.scroll_lock().is_locked());
    }

    #[test]
    fn reopening_keeps_a_single_lock_holder() {
        let mut gallery = loaded(3);
        gallery.open_lightbox(0);
        gallery.open_lightbox(2);
        assert_eq!(gallery.scroll_lock().holders(), 1);
        assert_eq!(gallery.lightbox_index(), Some(2));
    }

    #[test]
    fn open_then_close_restores_observable_state() {
        let mut gallery = loaded(20);
        gallery.paginate(2);
        let before = gallery.snapshot();

        gallery.open_lightbox(15);
        gallery.handle_input(LightboxInput::TouchStart { x: 200.0 });
        gallery.close_lightbox();

        assert_eq!(gallery.snapshot(), before);
    }

    #[test]
    fn advance_wraps_both_ways() {
        let mut gallery = loaded(4);
        gallery.open_lightbox(3);
        gallery.advance(Direction::Next);
        assert_eq!(gallery.lightbox_index(), Some(0));
        gallery.advance(Direction::Previous);
        assert_eq!(gallery.lightbox_index(), Some(3));
    }

    #[test]
    fn advance_is_ignored_while_closed() {
        let mut gallery = loaded(4);
        let before = gallery.snapshot();
        gallery.advance(Direction::Next);
        gallery.handle_input(LightboxInput::Key(NavigationKey::ArrowRight));
        assert_eq!(gallery.snapshot(), before);
    }

    #[test]
    fn keys_route_through_lightbox_operations() {
        let mut gallery = loaded(5);
        gallery.open_lightbox(0);

        gallery.handle_input(LightboxInput::Key(NavigationKey::ArrowLeft));
        assert_eq!(gallery.lightbox_index(), Some(4));
        gallery.handle_input(LightboxInput::Key(NavigationKey::ArrowRight));
        assert_eq!(gallery.lightbox_index(), Some(0));
        gallery.handle_input(LightboxInput::Key(NavigationKey::Escape));
        assert!(!gallery.is_lightbox_open());
        assert!(!gallery.scroll_lock().is_locked());
    }

    #[test]
    fn swipe_matches_arrow_keys() {
        let mut swiped = loaded(5);
        let mut keyed = loaded(5);
        swiped.open_lightbox(2);
        keyed.open_lightbox(2);

        swiped.handle_swipe(100.0, 10.0);
        keyed.handle_input(LightboxInput::Key(NavigationKey::ArrowRight));
        assert_eq!(swiped.snapshot(), keyed.snapshot());

        swiped.handle_swipe(10.0, 100.0);
        keyed.handle_input(LightboxInput::Key(NavigationKey::ArrowLeft));
        assert_eq!(swiped.snapshot(), keyed.snapshot());
    }

    #[test]
    fn short_swipe_changes_nothing() {
        let mut gallery = loaded(5);
        gallery.open_lightbox(2);
        let before = gallery.snapshot();
        assert_eq!(gallery.handle_swipe(55.0, 50.0), None);
        assert_eq!(gallery.snapshot(), before);
    }

    #[test]
    fn touch_sequence_advances_like_swipe() {
        let mut gallery = loaded(5);
        gallery.open_lightbox(2);

        gallery.handle_input(LightboxInput::TouchStart { x: 300.0 });
        gallery.handle_input(LightboxInput::TouchMove { x: 250.0 });
        gallery.handle_input(LightboxInput::TouchMove { x: 180.0 });
        gallery.handle_input(LightboxInput::TouchEnd);
        assert_eq!(gallery.lightbox_index(), Some(3));
    }

    #[test]
    fn lost_touch_does_not_advance() {
        let mut gallery = loaded(5);
        gallery.open_lightbox(2);

        gallery.handle_input(LightboxInput::TouchStart { x: 300.0 });
        gallery.handle_input(LightboxInput::TouchMove { x: 10.0 });
        gallery.handle_input(LightboxInput::TouchLost);
        gallery.handle_input(LightboxInput::TouchEnd);
        assert_eq!(gallery.lightbox_index(), Some(2));
    }

    /// Replays a touch on the backdrop as the runtime delivers it: touch
    /// events from the subscription plus the backdrop's own release message,
    /// with the release before or after the touch end.
    fn touch_backdrop(gallery: &mut GalleryController, from: f32, to: f32, release_first: bool) {
        gallery.handle(Message::Input(LightboxInput::TouchStart { x: from }));
        if to != from {
            gallery.handle(Message::Input(LightboxInput::TouchMove { x: to }));
        }
        if release_first {
            gallery.handle(Message::BackdropReleased);
            gallery.handle(Message::Input(LightboxInput::TouchEnd));
        } else {
            gallery.handle(Message::Input(LightboxInput::TouchEnd));
            gallery.handle(Message::BackdropReleased);
        }
    }

    #[test]
    fn swipe_across_backdrop_keeps_lightbox_open() {
        for release_first in [true, false] {
            let mut gallery = loaded(5);
            gallery.open_lightbox(2);

            touch_backdrop(&mut gallery, 300.0, 100.0, release_first);
            assert!(gallery.is_lightbox_open(), "release_first={release_first}");
            assert_eq!(gallery.lightbox_index(), Some(3));
            assert!(gallery.scroll_lock().is_locked());

            touch_backdrop(&mut gallery, 100.0, 300.0, release_first);
            assert_eq!(gallery.lightbox_index(), Some(2));
        }
    }

    #[test]
    fn tap_on_backdrop_closes_lightbox() {
        for release_first in [true, false] {
            let mut gallery = loaded(5);
            gallery.open_lightbox(2);

            touch_backdrop(&mut gallery, 200.0, 200.0, release_first);
            assert!(!gallery.is_lightbox_open(), "release_first={release_first}");
            assert!(!gallery.scroll_lock().is_locked());
        }
    }

    #[test]
    fn click_on_backdrop_closes_lightbox() {
        let mut gallery = loaded(5);
        gallery.open_lightbox(4);
        gallery.handle(Message::BackdropReleased);
        assert!(!gallery.is_lightbox_open());
        assert!(!gallery.scroll_lock().is_locked());
    }

    #[test]
    fn click_after_swipe_still_closes() {
        let mut gallery = loaded(5);
        gallery.open_lightbox(0);
        touch_backdrop(&mut gallery, 300.0, 100.0, false);
        assert_eq!(gallery.lightbox_index(), Some(1));

        gallery.handle(Message::BackdropReleased);
        assert!(!gallery.is_lightbox_open());
    }

    #[test]
    fn category_change_releases_open_lightbox() {
        let mut gallery = loaded(5);
        gallery.open_lightbox(1);
        assert!(gallery.scroll_lock().is_locked());

        gallery.load_category(Category::SocialMedia);
        assert!(!gallery.is_lightbox_open());
        assert!(!gallery.scroll_lock().is_locked());
    }

    #[test]
    fn dropping_controller_releases_scroll_lock() {
        let lock = ScrollLock::new();
        let mut gallery = GalleryController::new(lock.clone());
        let ticket = gallery.load_category(Category::Branding);
        gallery.apply_load(ticket, Ok(items(2)));
        gallery.open_lightbox(0);
        assert!(lock.is_locked());

        drop(gallery);
        assert!(!lock.is_locked());
    }

    #[test]
    fn button_messages_navigate() {
        let mut gallery = loaded(3);
        gallery.handle(Message::OpenLightbox(0));
        gallery.handle(Message::Previous);
        assert_eq!(gallery.lightbox_index(), Some(2));
        gallery.handle(Message::Next);
        assert_eq!(gallery.lightbox_index(), Some(0));
        gallery.handle(Message::CloseLightbox);
        assert!(!gallery.is_lightbox_open());
    }
}
