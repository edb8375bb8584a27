use tracing_subscriber::EnvFilter;
use viewrule::view::{MemoryView, View, ViewAccess, ViewActions};
use viewrule::RuleBook;

const RULES: &str = r#"
# translucent terminals on the right half
on created if app_id contains "term" set(alpha, 0.85) snap(right)

# browsers open large, private windows are kept small
on created if app_id == "firefox" and not title contains "Private" set(geometry, 0, 0, 1600, 900)
on created if app_id == "firefox" and title contains "Private" resize(800, 600) move(-50, -50)

# typo on purpose: this rule is dropped with a warning
on created if title == maximize()

on maximized set(alpha, 1.0)
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut book = RuleBook::default();
    let report = book.load_text(RULES);
    println!("loaded {} rule(s), dropped {}", report.loaded, report.dropped.len());
    for rule in book.rules() {
        println!("  {rule}");
    }

    let views = [
        MemoryView::new("xterm", "shell").with_container(1920, 1080),
        MemoryView::new("firefox", "News").with_container(1920, 1080),
        MemoryView::new("firefox", "Private Browsing").with_container(1920, 1080),
    ];

    let mut access = ViewAccess::unbound();
    let mut actions = ViewActions::unbound();
    for view in &views {
        access.set_view(view);
        actions.set_view(view);
        let report = book.apply("created", &access, &mut actions);
        println!(
            "{} / {:?}: fired {} rule(s), {} failure(s), alpha {:.2}, requests {:?}",
            view.app_id(),
            view.title(),
            report.fired,
            report.failures.len(),
            view.alpha(),
            view.requests()
        );
    }
}
