// src/journal.rs
//
// Journalisation NATIVE (tracing-subscriber).
// En wasm32, aucun abonné : les évènements tracing sont ignorés.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filtre par défaut ; RUST_LOG a toujours priorité.
fn filtre(verbeux: bool) -> EnvFilter {
    let defaut = if verbeux {
        "calculatrice_web=debug,warn"
    } else {
        "calculatrice_web=info,warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut))
}

pub fn init(verbeux: bool) {
    tracing_subscriber::registry()
        .with(filtre(verbeux))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
