//! Application state (Model in TEA pattern)

use storefront_core::ProductRecord;
use tracing::debug;

use crate::card::CardState;
use crate::config::Settings;
use crate::detail_view::DetailViewProps;
use crate::product_list::ListBranch;
use crate::store::{ApplicationStore, ProductsAction, ProductsState};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Product grid (or its loading/error stand-in)
    #[default]
    Browse,

    /// A card's detail view is open on top of the grid
    Detail,
}

/// Severity of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One-line message shown under the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl StatusNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,

    /// Process-wide store with the `products` slice
    pub store: ApplicationStore,

    /// One card per product, parallel to `store.products().products`
    pub cards: Vec<CardState>,

    /// Index of the focused card
    pub focused: usize,

    /// Columns in the rendered grid, updated by the view
    pub grid_columns: usize,

    /// Where the catalog comes from, shown in the header
    pub catalog_name: String,

    pub notice: Option<StatusNotice>,

    /// Animation frame counter for the loading spinner
    pub animation_frame: u64,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            store: ApplicationStore::new(),
            cards: Vec::new(),
            focused: 0,
            grid_columns: 1,
            catalog_name: String::new(),
            notice: None,
            animation_frame: 0,
            should_quit: false,
        }
    }

    /// Use a specific store, e.g. one seeded with products or a custom reducer
    pub fn with_store(mut self, store: ApplicationStore) -> Self {
        self.store = store;
        self.sync_cards();
        self
    }

    pub fn products(&self) -> &ProductsState {
        self.store.products()
    }

    pub fn product(&self, index: usize) -> Option<&ProductRecord> {
        self.store.products().products.get(index)
    }

    pub fn list_branch(&self) -> ListBranch<'_> {
        ListBranch::from_state(self.store.products())
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.open_card_index().is_some() {
            UiMode::Detail
        } else {
            UiMode::Browse
        }
    }

    /// Index of the card whose detail view is open
    pub fn open_card_index(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.selection.is_open())
    }

    /// Props for the open detail view. Availability comes from the card's
    /// own product, not from the selection.
    pub fn detail_props(&self) -> Option<DetailViewProps<'_>> {
        let index = self.open_card_index()?;
        let card = &self.cards[index];
        let is_available = self
            .product(index)
            .map(ProductRecord::is_available)
            .unwrap_or(false);
        Some(DetailViewProps::new(
            card.selection.is_open(),
            card.selection.selected(),
            is_available,
        ))
    }

    /// Run an action through the store's reducer and realign the cards
    pub fn dispatch(&mut self, action: ProductsAction) {
        self.store.dispatch(action);
        self.sync_cards();
    }

    /// Keep one card per product. Cards whose product id is unchanged at the
    /// same position keep their selection.
    fn sync_cards(&mut self) {
        let products = &self.store.products().products;
        let unchanged = self.cards.len() == products.len()
            && self
                .cards
                .iter()
                .zip(products)
                .all(|(card, product)| card.product_id() == product.id);
        if unchanged {
            return;
        }

        let previous = std::mem::take(&mut self.cards);
        self.cards = products
            .iter()
            .enumerate()
            .map(|(i, product)| match previous.get(i) {
                Some(card) if card.product_id() == product.id => card.clone(),
                _ => CardState::new(product.id),
            })
            .collect();
        debug!("Rebuilt {} product cards", self.cards.len());

        self.focused = self.focused.min(self.cards.len().saturating_sub(1));
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
