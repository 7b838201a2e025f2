// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::toast;
use iced::{window, Subscription};

/// Delivers one message per presented frame while any countdown is running.
///
/// With no pending frame requests the subscription is dropped, so an idle or
/// fully hovered toast column costs nothing.
pub fn create_frame_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        window::frames().map(|at| Message::Toast(toast::Message::Frame(at)))
    } else {
        Subscription::none()
    }
}
