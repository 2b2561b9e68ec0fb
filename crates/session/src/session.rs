//! One shopper's session.

use cart::{Cart, CartLine, Notifier, NullNotifier};
use catalog::{Catalog, CatalogView, Category, FilterState, Product};
use chrono::{DateTime, Utc};
use common::{Money, ProductId, SessionId};

/// A shopper session: the catalog for this session plus the two independent
/// state units derived over it, a [`CatalogView`] and a [`Cart`].
///
/// The presentation layer holds one of these per active session and invokes
/// the operations below in response to gestures (category buttons, search
/// box, filter panel, product cards, quantity steppers, checkout). Both
/// units start empty/default and are dropped with the session.
pub struct StorefrontSession<N: Notifier = NullNotifier> {
    id: SessionId,
    created_at: DateTime<Utc>,
    catalog: Catalog,
    view: CatalogView,
    cart: Cart<N>,
}

impl StorefrontSession<NullNotifier> {
    /// Creates a session without a notification surface.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_notifier(catalog, NullNotifier)
    }
}

impl<N: Notifier> StorefrontSession<N> {
    /// Creates a session over the given catalog, wiring cart side effects to
    /// the supplied notifier.
    pub fn with_notifier(catalog: Catalog, notifier: N) -> Self {
        let id = SessionId::new();
        tracing::info!(session_id = %id, products = catalog.len(), "session started");
        Self {
            id,
            created_at: Utc::now(),
            catalog,
            view: CatalogView::new(),
            cart: Cart::new(notifier),
        }
    }

    /// Returns the session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the session's catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the catalog view (read access for the presentation layer).
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Returns the cart (read access for the presentation layer).
    pub fn cart(&self) -> &Cart<N> {
        &self.cart
    }
}

// Catalog-side operations
impl<N: Notifier> StorefrontSession<N> {
    /// Products currently visible under the view's category, search and
    /// filters, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.view.visible(&self.catalog)
    }

    /// Selects a top-level category from the primary navigation.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub fn set_category(&mut self, category: Category) {
        self.view.set_category(category);
    }

    /// Sets the search query from the header search box.
    #[tracing::instrument(skip(self, query), fields(session_id = %self.id))]
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.set_search(query);
    }

    /// Applies a complete filter panel state.
    #[tracing::instrument(skip(self, filters), fields(session_id = %self.id))]
    pub fn set_filters(&mut self, filters: FilterState) {
        self.view.set_filters(filters);
    }

    /// Returns the filter panel state for in-place edits (toggles, slider).
    pub fn filters_mut(&mut self) -> &mut FilterState {
        self.view.filters_mut()
    }

    /// Clears the filter panel back to defaults, leaving category and
    /// search untouched.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset_filters(&mut self) {
        self.view.reset_filters();
    }

    /// The filter button badge count.
    pub fn active_filter_count(&self) -> usize {
        self.view.active_filter_count()
    }
}

// Cart-side operations
impl<N: Notifier> StorefrontSession<N> {
    /// Adds one unit of a catalog product to the cart.
    ///
    /// Returns false (and leaves the cart untouched) when the id is not in
    /// this session's catalog.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> bool {
        let Some(product) = self.catalog.get(product_id).cloned() else {
            tracing::warn!(%product_id, "add_to_cart for unknown product");
            return false;
        };

        self.cart.add(&product);
        metrics::counter!("storefront_cart_adds_total").increment(1);
        true
    }

    /// Replaces a line's quantity; 0 removes the line.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Applies a stepper delta to a line, flooring at zero.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub fn adjust_quantity(&mut self, product_id: &ProductId, delta: i64) {
        self.cart.adjust_quantity(product_id, delta);
    }

    /// Removes a line from the cart.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
        metrics::counter!("storefront_cart_removes_total").increment(1);
    }

    /// Triggers checkout.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub fn checkout(&self) {
        self.cart.checkout();
        metrics::counter!("storefront_checkouts_total").increment(1);
    }

    /// Cart lines in insertion order.
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The header badge count: sum of all line quantities.
    pub fn total_item_count(&self) -> u32 {
        self.cart.total_item_count()
    }

    /// The cart subtotal.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }
}
