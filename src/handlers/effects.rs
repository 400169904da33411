//! Collects what a screen asked the UI to do while handling one request.

use crate::{
    navigation::{NavigationTarget, Navigator},
    notification::{Notification, Notifier},
};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct PageEffects {
    navigation: Mutex<Option<NavigationTarget>>,
    notifications: Mutex<Vec<Notification>>,
}

impl PageEffects {
    /// The last requested navigation, if any.
    pub fn take_navigation(&self) -> Option<NavigationTarget> {
        self.navigation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(
            &mut *self
                .notifications
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl Navigator for PageEffects {
    fn navigate(&self, target: NavigationTarget) {
        *self
            .navigation
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(target);
    }
}

impl Notifier for PageEffects {
    fn open(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
