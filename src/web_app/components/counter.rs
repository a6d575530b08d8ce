// web_app/components/counter.rs - Animated number counter
//
// Counts from 0 up to a target on requestAnimationFrame. The server renders
// 0 and the browser animates after hydration.

use leptos::prelude::*;

use crate::web_app::model::counter::{format_thousands, COUNTER_DURATION_MS};
use crate::web_app::model::CounterAnimation;

fn now_ms() -> Option<f64> {
    leptos::web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

fn schedule_frame(
    animation: StoredValue<CounterAnimation>,
    value: RwSignal<u64>,
    pending: StoredValue<Option<AnimationFrameRequestHandle>>,
) {
    let step = move || {
        let Some(now) = now_ms() else {
            return;
        };
        let Some((current, done)) = animation.try_update_value(|a| a.frame(now)) else {
            return;
        };
        // Some(_) back from try_set means the view was disposed
        if value.try_set(current).is_some() {
            return;
        }
        if done {
            pending.try_update_value(|p| *p = None);
        } else {
            schedule_frame(animation, value, pending);
        }
    };

    match request_animation_frame_with_handle(step) {
        Ok(handle) => {
            pending.try_update_value(|p| *p = Some(handle));
        }
        Err(err) => tracing::warn!("Could not request animation frame: {:?}", err),
    }
}

/// AnimatedCounter
///
/// Displays `target` with thousands separators and a suffix, counting up
/// from 0 over `duration_ms`.
#[component]
pub fn AnimatedCounter(
    target: u64,
    #[prop(default = COUNTER_DURATION_MS)]
    duration_ms: f64,
    /// Text appended after the number ("+", "%", "/7")
    #[prop(default = "")]
    suffix: &'static str,
) -> impl IntoView {
    let value = RwSignal::new(0u64);
    let animation = StoredValue::new(CounterAnimation::new(target, duration_ms));
    let pending = StoredValue::new(None::<AnimationFrameRequestHandle>);

    Effect::new(move |_| {
        schedule_frame(animation, value, pending);
    });

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.cancel();
        }
    });

    view! {
        <span>{move || format!("{}{}", format_thousands(value.get()), suffix)}</span>
    }
}
