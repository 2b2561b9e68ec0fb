//! Integration tests for the composed storefront session.
//!
//! These walk the same paths the storefront page does: browse with the
//! top-nav and filter panel, add from product cards, adjust quantities in
//! the cart sheet, and check out.

use cart::RecordingNotifier;
use catalog::{Catalog, Category, FilterState, Product};
use common::{Money, ProductId};
use session::StorefrontSession;

fn luxury_catalog() -> Catalog {
    let mut blouse = Product::new("blouse-1", "Silk Blouse", Money::from_dollars(450), Category::Women);
    blouse.colors = vec!["White".to_string(), "Beige".to_string()];
    blouse.sizes = vec!["S".to_string(), "M".to_string()];
    blouse.is_new = true;

    let mut suit = Product::new("suit-1", "Wool Suit", Money::from_dollars(5000), Category::Men);
    suit.colors = vec!["Navy".to_string(), "Gray".to_string()];
    suit.sizes = vec!["M".to_string(), "L".to_string(), "XL".to_string()];

    let mut tote = Product::new("tote-1", "Leather Tote", Money::from_dollars(900), Category::Bags);
    tote.colors = vec!["Black".to_string(), "Brown".to_string()];
    tote.original_price = Some(Money::from_dollars(1200));
    tote.is_on_sale = true;

    let mut loafers =
        Product::new("loafer-1", "Suede Loafers", Money::from_dollars(620), Category::Shoes);
    loafers.colors = vec!["Brown".to_string()];
    loafers.sizes = vec!["M".to_string(), "L".to_string()];

    Catalog::new(vec![blouse, suit, tote, loafers])
}

fn new_session() -> StorefrontSession<RecordingNotifier> {
    StorefrontSession::with_notifier(luxury_catalog(), RecordingNotifier::new())
}

mod browsing {
    use super::*;

    #[test]
    fn fresh_session_shows_the_whole_catalog() {
        let session = new_session();
        assert_eq!(session.visible_products().len(), 4);
        assert_eq!(session.active_filter_count(), 0);
        assert_eq!(session.total_item_count(), 0);
    }

    #[test]
    fn top_nav_search_and_panel_compose() {
        let mut session = new_session();
        session.set_category(Category::Men);
        assert_eq!(session.visible_products().len(), 1);

        session.set_search("wool");
        assert_eq!(session.visible_products().len(), 1);

        session.filters_mut().toggle_color("Navy");
        assert_eq!(session.visible_products().len(), 1);

        // A panel category that contradicts the top nav empties the grid:
        // both constraints apply.
        session.filters_mut().toggle_category(Category::Bags);
        assert!(session.visible_products().is_empty());
        assert_eq!(session.active_filter_count(), 2);
    }

    #[test]
    fn price_slider_narrows_by_inclusive_bounds() {
        let mut session = new_session();
        session
            .filters_mut()
            .set_price_range(Money::from_dollars(620), Money::from_dollars(900));

        let ids: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["tote-1", "loafer-1"]);
    }

    #[test]
    fn clear_all_restores_the_grid_but_not_nav_state() {
        let mut session = new_session();
        session.set_category(Category::Shoes);
        session.set_filters({
            let mut f = FilterState::default();
            f.toggle_color("Brown");
            f.toggle_size("L");
            f
        });
        assert_eq!(session.active_filter_count(), 2);

        session.reset_filters();
        assert_eq!(session.active_filter_count(), 0);
        // Top nav still on Shoes.
        let ids: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["loafer-1"]);
    }
}

mod cart_flow {
    use super::*;

    #[test]
    fn add_twice_merges_and_totals_follow() {
        let mut session = new_session();
        let id = ProductId::new("blouse-1");

        session.add_to_cart(&id);
        assert_eq!(session.total_item_count(), 1);
        assert_eq!(session.total_price(), Money::from_dollars(450));

        session.add_to_cart(&id);
        assert_eq!(session.total_item_count(), 2);
        assert_eq!(session.total_price(), Money::from_dollars(900));
        assert_eq!(session.cart_lines().len(), 1);
    }

    #[test]
    fn steppers_and_removal_through_the_session() {
        let mut session = new_session();
        let blouse = ProductId::new("blouse-1");
        let tote = ProductId::new("tote-1");

        session.add_to_cart(&blouse);
        session.add_to_cart(&tote);
        session.adjust_quantity(&tote, 1);
        assert_eq!(session.total_price(), Money::from_dollars(450 + 1800));

        session.set_quantity(&blouse, 3);
        assert_eq!(session.total_item_count(), 5);

        session.remove_from_cart(&blouse);
        assert_eq!(session.cart_lines().len(), 1);
        assert_eq!(session.total_price(), Money::from_dollars(1800));

        session.set_quantity(&tote, 0);
        assert!(session.cart_lines().is_empty());
        assert_eq!(session.total_item_count(), 0);
    }

    #[test]
    fn stepping_down_to_zero_removes_and_notifies() {
        let mut session = new_session();
        let id = ProductId::new("loafer-1");
        session.add_to_cart(&id);

        session.adjust_quantity(&id, -1);
        assert!(session.cart_lines().is_empty());
        assert_eq!(
            session.cart().notifier().last().unwrap().title,
            "Removed from cart"
        );
    }

    #[test]
    fn checkout_emits_without_touching_state() {
        let mut session = new_session();
        session.add_to_cart(&ProductId::new("suit-1"));
        session.checkout();

        assert_eq!(session.total_item_count(), 1);
        let last = session.cart().notifier().last().unwrap();
        assert_eq!(last.title, "Checkout initiated");
        assert_eq!(last.description, "Redirecting to secure checkout...");
    }

    #[test]
    fn notification_stream_for_a_full_visit() {
        let mut session = new_session();
        session.add_to_cart(&ProductId::new("blouse-1"));
        session.add_to_cart(&ProductId::new("tote-1"));
        session.remove_from_cart(&ProductId::new("blouse-1"));
        session.checkout();

        let notifications = session.cart().notifier().notifications();
        let titles: Vec<&str> = notifications.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Added to cart",
                "Added to cart",
                "Removed from cart",
                "Checkout initiated"
            ]
        );
        assert_eq!(
            notifications[0].description,
            "Silk Blouse has been added to your cart."
        );
    }
}

mod composition {
    use super::*;

    #[test]
    fn filtering_never_affects_the_cart_and_vice_versa() {
        let mut session = new_session();
        session.add_to_cart(&ProductId::new("suit-1"));

        session.set_category(Category::Bags);
        session.set_search("tote");
        session.filters_mut().toggle_color("Black");
        assert_eq!(session.total_item_count(), 1);

        session.adjust_quantity(&ProductId::new("suit-1"), 2);
        assert_eq!(session.visible_products().len(), 1);
        assert_eq!(session.visible_products()[0].id.as_str(), "tote-1");
    }

    #[test]
    fn visible_products_recompute_on_every_read() {
        let mut session = new_session();
        session.set_search("silk");
        assert_eq!(session.visible_products().len(), 1);

        session.set_search("");
        assert_eq!(session.visible_products().len(), 4);
    }
}
