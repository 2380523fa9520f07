use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Current time, refreshed every `tick_ms`. Drives the countdown widgets.
#[hook]
pub fn use_now(tick_ms: u32) -> DateTime<Utc> {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with(tick_ms, move |tick_ms| {
            let interval = Interval::new(*tick_ms, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    *now
}
