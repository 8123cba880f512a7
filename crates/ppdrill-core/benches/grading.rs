use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ppdrill_core::grader::{grade, Answers};
use ppdrill_core::model::{Quiz, TopicSelector};
use ppdrill_core::quiz::build_quiz;

fn make_quiz(n: usize) -> Quiz {
    build_quiz(TopicSelector::Mixed, n, &mut StdRng::seed_from_u64(7))
}

fn all_correct(quiz: &Quiz) -> Answers {
    quiz.exercises
        .iter()
        .enumerate()
        .map(|(i, e)| (i.to_string(), format!("  {}  ", e.answer.to_uppercase())))
        .collect()
}

fn bench_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");

    let quiz = make_quiz(20);
    let perfect = all_correct(&quiz);
    group.bench_function("perfect/20", |b| {
        b.iter(|| grade(black_box(&quiz), black_box(&perfect)))
    });

    let empty = Answers::new();
    group.bench_function("blank/20", |b| {
        b.iter(|| grade(black_box(&quiz), black_box(&empty)))
    });

    group.finish();
}

criterion_group!(benches, bench_grade);
criterion_main!(benches);
