use super::*;

use std::cell::Cell;

#[test]
fn fresh_token_is_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let held_by_task = token.clone();
    token.cancel();
    assert!(held_by_task.is_cancelled());
}

#[test]
fn runs_when_live() {
    let ran = Cell::new(false);
    assert!(CancelToken::new().run_unless_cancelled(|| ran.set(true)));
    assert!(ran.get());
}

#[test]
fn skips_when_cancelled() {
    let token = CancelToken::new();
    token.cancel();
    let ran = Cell::new(false);
    assert!(!token.run_unless_cancelled(|| ran.set(true)));
    assert!(!ran.get());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn spawn_delayed_never_fires_off_browser() {
    let fired = std::rc::Rc::new(Cell::new(false));
    let flag = fired.clone();
    spawn_delayed(Duration::ZERO, CancelToken::new(), move || flag.set(true));
    assert!(!fired.get());
}
