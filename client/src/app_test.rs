use super::*;

use crate::state::theme::ThemeMode;

#[test]
fn initial_state_is_light_empty_and_open() {
    let (theme, notifications, layout) = initial_state();
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert!(notifications.history().is_empty());
    assert_eq!(notifications.unread_count(), 0);
    assert!(!notifications.is_banner_visible());
    assert!(layout.drawer_open);
}

#[test]
fn initial_state_signals_are_provided_and_readable() {
    let owner = Owner::new();
    owner.with(|| {
        let (theme, notifications, layout) = initial_state();
        provide_context(RwSignal::new(theme));
        provide_context(RwSignal::new(notifications));
        provide_context(RwSignal::new(layout));

        let theme = expect_context::<RwSignal<ThemeState>>();
        theme.update(|t| {
            t.toggle();
        });
        assert!(theme.get_untracked().is_dark());
        assert_eq!(expect_context::<RwSignal<NotificationState>>().with_untracked(NotificationState::unread_count), 0);
        assert!(expect_context::<RwSignal<LayoutState>>().get_untracked().drawer_open);
    });
}
