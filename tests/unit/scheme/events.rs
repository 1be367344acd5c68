use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn counts_per_item() {
    let mut bus = EventBus::new();
    let a = ItemId::new("a");
    let b = ItemId::new("b");
    bus.emit_item_changed(&a);
    bus.emit_item_changed(&a);
    bus.emit_item_changed(&b);
    assert_eq!(bus.changed_count(&a), 2);
    assert_eq!(bus.changed_count(&b), 1);
    assert_eq!(bus.changed_count(&ItemId::new("c")), 0);
    assert_eq!(bus.total_changes(), 3);
}

#[test]
fn listeners_receive_events_until_unsubscribed() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut bus = EventBus::new();
    let sink = Rc::clone(&seen);
    let sub = bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    bus.emit_item_changed(&ItemId::new("a"));
    assert!(bus.unsubscribe(sub));
    assert!(!bus.unsubscribe(sub));
    bus.emit_item_changed(&ItemId::new("b"));

    assert_eq!(
        *seen.borrow(),
        vec![SchemeEvent::ItemChanged(ItemId::new("a"))]
    );
}
