use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arcade_core::console::IoConsole;
use arcade_core::engine::{evaluate, normalize_input, run_station};
use arcade_core::model::Task;

fn quiz() -> Task {
    Task::quiz(
        "Which header declares malloc?",
        &["<stdio.h>", "<stdlib.h>", "<string.h>", "<memory.h>", "<malloc.h>"],
        1,
    )
}

fn free_answer() -> Task {
    Task::free_answer(
        "Name the function that releases heap memory.",
        &["free", "free()", "std::free", "free(ptr)", "free(p)"],
    )
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_input", |b| {
        b.iter(|| normalize_input(black_box("   <STDLIB.H>   \r\n")))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let quiz = quiz();
    let free = free_answer();

    c.bench_function("evaluate_quiz_index", |b| {
        b.iter(|| evaluate(black_box(&quiz), black_box("2")))
    });

    c.bench_function("evaluate_quiz_text", |b| {
        b.iter(|| evaluate(black_box(&quiz), black_box("<memory.h>")))
    });

    c.bench_function("evaluate_free_answer_miss", |b| {
        b.iter(|| evaluate(black_box(&free), black_box("delete")))
    });
}

fn bench_station(c: &mut Criterion) {
    let tasks: Vec<Task> = (0..10)
        .map(|i| if i % 2 == 0 { quiz() } else { free_answer() })
        .collect();
    let script = "x\n2\nhint\nfree\n".repeat(5);

    c.bench_function("run_station_10_tasks", |b| {
        b.iter(|| {
            let mut console = IoConsole::scripted(&script);
            run_station(&mut console, 12, black_box(&tasks))
        })
    });
}

criterion_group!(benches, bench_normalize, bench_evaluate, bench_station);
criterion_main!(benches);
