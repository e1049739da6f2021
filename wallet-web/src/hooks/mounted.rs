//! Mount flag
//!
//! Effects only run in the browser after the component is attached, so the
//! flag stays `false` for any markup produced before hydration.

use leptos::prelude::*;

pub fn use_is_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);

    Effect::new(move || {
        set_mounted.set(true);
    });

    mounted
}
