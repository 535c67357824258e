use super::*;
use crate::canvas::Viewport;

fn viewport() -> Viewport {
    Viewport::new(0.0, 0.0, 700.0, 700.0)
}

fn shared_k(k: usize) -> SharedK {
    Rc::new(Cell::new(k))
}

#[test]
fn test_inactive_selector_ignores_clicks() {
    let mut selector = SeedSelector::new(shared_k(3));

    assert!(selector.on_click(PixelPoint::new(350.0, 350.0), viewport()).is_none());
    assert!(selector.is_empty());
}

#[test]
fn test_clicks_append_in_order_up_to_capacity() {
    let mut selector = SeedSelector::new(shared_k(2));
    selector.activate();

    selector.on_click(PixelPoint::new(350.0, 350.0), viewport()).unwrap();
    selector.on_click(PixelPoint::new(175.0, 175.0), viewport()).unwrap();
    // Third in-range click: set is full for k=2.
    assert!(selector.on_click(PixelPoint::new(525.0, 525.0), viewport()).is_none());

    assert_eq!(selector.len(), 2);
    assert_eq!(selector.seeds()[0], Point::new(0.0, 0.0));
    assert_eq!(selector.seeds()[1], Point::new(-5.0, 5.0));
}

#[test]
fn test_out_of_range_click_is_ignored() {
    let mut selector = SeedSelector::new(shared_k(2));
    selector.activate();

    assert!(selector.on_click(PixelPoint::new(-50.0, 350.0), viewport()).is_none());
    assert!(selector.is_empty());
}

#[test]
fn test_capacity_reads_k_at_click_time() {
    let k = shared_k(1);
    let mut selector = SeedSelector::new(Rc::clone(&k));
    selector.activate();

    selector.on_click(PixelPoint::new(350.0, 350.0), viewport()).unwrap();
    assert!(selector.on_click(PixelPoint::new(175.0, 175.0), viewport()).is_none());

    // Raising k after attachment widens the capacity seen by the handler.
    k.set(2);
    selector.on_click(PixelPoint::new(175.0, 175.0), viewport()).unwrap();
    assert_eq!(selector.len(), 2);
}

#[test]
fn test_deactivate_detaches_the_subscription() {
    let mut selector = SeedSelector::new(shared_k(5));
    selector.activate();
    selector.on_click(PixelPoint::new(350.0, 350.0), viewport()).unwrap();

    selector.deactivate();
    assert!(selector.on_click(PixelPoint::new(175.0, 175.0), viewport()).is_none());
    assert_eq!(selector.len(), 1);
}

#[test]
fn test_clear_empties_the_set() {
    let mut selector = SeedSelector::new(shared_k(3));
    selector.activate();
    selector.on_click(PixelPoint::new(350.0, 350.0), viewport()).unwrap();

    selector.clear();
    assert!(selector.is_empty());
}
