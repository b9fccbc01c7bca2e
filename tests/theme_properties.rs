//! End-to-end properties of the theme store and derivation, exercised
//! through the public crate API.

use folio::theme::{self, ThemeMode, ThemeStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn derivation_is_deterministic_regardless_of_call_order() {
    let dark_first = theme::derive(ThemeMode::Dark);
    let light = theme::derive(ThemeMode::Light);
    let dark_second = theme::derive(ThemeMode::Dark);
    assert_eq!(dark_first, dark_second);
    assert_eq!(light, theme::derive(ThemeMode::Light));
}

#[test]
fn derivation_populates_every_role_for_both_modes() {
    for mode in [ThemeMode::Dark, ThemeMode::Light] {
        let theme = theme::derive(mode);
        assert_eq!(theme.palette.accent_roles().len(), 6);
        for (role, entry) in theme.palette.accent_roles() {
            // Variants must be authored distinctly, not copied placeholders.
            assert_ne!(entry.light, entry.dark, "{role}: light equals dark");
        }
    }
}

#[test]
fn derived_themes_self_report_their_mode_and_differ() {
    let dark = theme::derive(ThemeMode::Dark);
    let light = theme::derive(ThemeMode::Light);
    assert_eq!(dark.mode, ThemeMode::Dark);
    assert_eq!(light.mode, ThemeMode::Light);
    assert_ne!(dark.palette.background.default, light.palette.background.default);
    assert_ne!(dark.palette.text.primary, light.palette.text.primary);
}

#[test]
fn fresh_store_defaults_to_dark_with_near_black_background() {
    let store = ThemeStore::default();
    assert_eq!(store.mode(), ThemeMode::Dark);
    let theme = theme::derive(store.mode());
    assert!(theme.palette.background.default.luminance() < 0.1);
}

#[test]
fn toggling_never_retroactively_mutates_a_returned_theme() {
    let store = ThemeStore::default();
    let snapshot = theme::derive(store.mode());
    let copy = snapshot.clone();
    store.toggle();
    assert_eq!(snapshot, copy);
    assert_eq!(snapshot.mode, ThemeMode::Dark);
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn double_toggle_restores_the_original_derivation() {
    let store = ThemeStore::default();
    let first = theme::derive(store.mode());
    store.toggle();
    store.toggle();
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert_eq!(theme::derive(store.mode()), first);
}

#[test]
fn both_listeners_fire_once_per_toggle_in_subscription_order() {
    let store = ThemeStore::default();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let a_calls = Rc::clone(&calls);
    let b_calls = Rc::clone(&calls);
    let _a = store.subscribe(move |mode| a_calls.borrow_mut().push(("a", mode)));
    let _b = store.subscribe(move |mode| b_calls.borrow_mut().push(("b", mode)));

    store.toggle();
    assert_eq!(
        calls.borrow().as_slice(),
        &[("a", ThemeMode::Light), ("b", ThemeMode::Light)]
    );
}

#[test]
fn unsubscribing_one_handle_reduces_notifications_to_the_rest() {
    let store = ThemeStore::default();
    let a = Rc::new(Cell::new(0u32));
    let b = Rc::new(Cell::new(0u32));
    let a_hits = Rc::clone(&a);
    let b_hits = Rc::clone(&b);
    let sub_a = store.subscribe(move |_| a_hits.set(a_hits.get() + 1));
    let _sub_b = store.subscribe(move |_| b_hits.set(b_hits.get() + 1));

    store.toggle();
    sub_a.unsubscribe();
    store.toggle();

    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 2);
}

#[test]
fn many_subscribers_are_each_notified_exactly_once() {
    let store = ThemeStore::default();
    let total = Rc::new(Cell::new(0u32));
    let subs: Vec<_> = (0..32)
        .map(|_| {
            let counter = Rc::clone(&total);
            store.subscribe(move |_| counter.set(counter.get() + 1))
        })
        .collect();

    store.toggle();
    assert_eq!(total.get(), 32);
    drop(subs);
    store.toggle();
    assert_eq!(total.get(), 32);
}

#[test]
fn listeners_observe_the_mode_the_store_reports_after_toggle() {
    let store = ThemeStore::new(ThemeMode::Light);
    let observed = Rc::new(Cell::new(None));
    let seen = Rc::clone(&observed);
    let _sub = store.subscribe(move |mode| seen.set(Some(mode)));

    store.toggle();
    assert_eq!(observed.get(), Some(ThemeMode::Dark));
    assert_eq!(store.mode(), ThemeMode::Dark);
}
