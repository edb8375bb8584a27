use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use viewrule::registry::{apply_all_global, with_global};
use viewrule::{LambdaOutcome, LambdaRuleRegistration, Properties};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let terminals = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&terminals);

    let registered = with_global(|registry| {
        registry.register(
            "count-terminals",
            LambdaRuleRegistration::new(r#"on created if app_id contains "term""#).on_match(
                move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    true
                },
            ),
        )?;
        // rejected: the key is already taken
        registry.register(
            "count-terminals",
            LambdaRuleRegistration::new("on created").on_match(|| false),
        )
    });
    println!("second registration: {registered:?}");

    for app_id in ["xterm", "firefox", "kitty-term"] {
        let props = Properties::new().set("app_id", app_id);
        let reports = apply_all_global("created", &props).unwrap_or_default();
        for report in reports {
            let matched = matches!(report.outcome, Ok(LambdaOutcome::Matched(_)));
            println!("{app_id}: {} matched={matched}", report.key);
        }
    }

    println!("terminals seen: {}", terminals.load(Ordering::SeqCst));
}
