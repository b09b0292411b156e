use criterion::{criterion_group, criterion_main, Criterion};
use digitcost::digits::DigitScript;
use digitcost::layouts::{LayoutName, LayoutSet};
use digitcost::matrix::ScenarioMatrixBuilder;
use digitcost::scorer::{ScoringMode, TypingCostCalculator};
use digitcost::typist::TypistRegistry;
use std::hint::black_box;

// Roughly a constitution chapter: Thai prose with sparse Thai and ASCII numbers.
fn corpus(len: usize) -> String {
    let words = [
        "มาตรา", "ประเทศไทย", "รัฐธรรมนูญ", "ประชาชน", "สิทธิ", "และ", "หน้าที่",
    ];
    let mut rng = fastrand::Rng::with_seed(42);
    let mut chunks: Vec<String> = Vec::new();
    let mut n = 0;
    while n < len {
        let chunk: String = match rng.u8(0..10) {
            0 => (0..rng.usize(1..5)).map(|_| rng.char('๐'..='๙')).collect(),
            1 => (0..rng.usize(1..5)).map(|_| rng.char('0'..='9')).collect(),
            _ => words[rng.usize(..words.len())].to_string(),
        };
        n += chunk.chars().count() + 1;
        chunks.push(chunk);
        chunks.push(if rng.u8(0..20) == 0 { "\n" } else { " " }.to_string());
    }
    chunks.concat()
}

fn bench_matrix(c: &mut Criterion) {
    let doc = corpus(50_000);
    let layouts = LayoutSet::standard().unwrap();
    let typists = TypistRegistry::standard().all().to_vec();

    let calc = TypingCostCalculator::new().with_scoring(ScoringMode::Ergonomic);
    c.bench_function("tally_kedmanee_thai", |b| {
        b.iter(|| {
            calc.tally(
                black_box(&doc),
                layouts.get(LayoutName::Kedmanee),
                DigitScript::Thai,
            )
            .unwrap()
        })
    });

    let builder = ScenarioMatrixBuilder::new(layouts.clone());
    c.bench_function("full_matrix_4_typists", |b| {
        b.iter(|| builder.build(black_box(&doc), &typists).unwrap())
    });
}

criterion_group!(benches, bench_matrix);
criterion_main!(benches);
