use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use site::typewriter::TypeSequence;
use site::typewriter::Typewriter;

use crate::compat;

/// Drives a [`Typewriter`] from a background task and exposes the visible text.
///
/// The task is dropped with the component, which stops the loop.
pub fn use_typewriter(sequence: TypeSequence) -> Signal<&'static str> {
    let mut text = use_signal(|| "");

    use_future(move || {
        let sequence = sequence.clone();
        async move {
            let mut typewriter = match Typewriter::new(sequence) {
                Ok(t) => t,
                Err(e) => {
                    warn!("typewriter disabled: {e}");
                    return;
                }
            };
            loop {
                let delay = typewriter.step();
                text.set(typewriter.text());
                compat::sleep(delay).await;
            }
        }
    });

    text
}
