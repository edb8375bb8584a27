use criterion::{black_box, criterion_group, criterion_main, Criterion};
use viewrule::view::{MemoryView, ViewAccess, ViewActions};
use viewrule::{ActionError, LambdaRuleRegistration, LambdaRuleRegistry, Properties, RuleBook, Value};

/// Build a rule book with `n` rules on `created`, each matching a unique
/// app id, and one rule that matches everything.
fn build_book(n: usize) -> RuleBook {
    let mut book = RuleBook::default();
    let texts: Vec<String> = (0..n)
        .map(|i| format!(r#"on created if app_id == "app{i}" and not title contains "x" move({i}, {i})"#))
        .chain(std::iter::once("on created set(alpha, 0.9) snap(center)".to_owned()))
        .collect();
    book.load(texts.iter().map(String::as_str));
    book
}

fn bench_rulebook(c: &mut Criterion) {
    let mut group = c.benchmark_group("rulebook_apply");

    for &n in &[5, 20, 50] {
        let book = build_book(n);
        let props = Properties::new().set("app_id", "app3").set("title", "shell");
        group.bench_function(&format!("{n}_rules_properties"), |b| {
            b.iter(|| {
                let mut executor = |_: &str, _: &[Value]| -> Result<(), ActionError> { Ok(()) };
                book.apply("created", black_box(&props), &mut executor)
            });
        });

        let view = MemoryView::new("app3", "shell");
        group.bench_function(&format!("{n}_rules_view"), |b| {
            b.iter(|| {
                view.clear_requests();
                book.apply(
                    "created",
                    &ViewAccess::new(black_box(&view)),
                    &mut ViewActions::new(&view),
                )
            });
        });
    }

    group.finish();
}

fn bench_lambda_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("lambda_apply_all");

    for &n in &[5, 20, 50] {
        let mut registry = LambdaRuleRegistry::new();
        for i in 0..n {
            registry
                .register(
                    &format!("k{i}"),
                    LambdaRuleRegistration::new(format!(r#"on created if app_id == "app{i}""#))
                        .on_match(|| true)
                        .on_mismatch(|| false),
                )
                .unwrap();
        }
        let props = Properties::new().set("app_id", "app3");
        group.bench_function(&format!("{n}_registrations"), |b| {
            b.iter(|| registry.apply_all("created", black_box(&props)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rulebook, bench_lambda_registry);
criterion_main!(benches);
