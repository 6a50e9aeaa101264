//! Blocking user notices for favorites changes.

use leptos::prelude::*;

use crate::favorites::Notice;

pub fn notify(notice: Notice) {
    log::info!("{}", notice.message());
    if let Err(err) = window().alert_with_message(notice.message()) {
        log::warn!("alert failed: {:?}", err);
    }
}
