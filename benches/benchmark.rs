// Performance benchmarks for keyword search and teammate ranking
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;
use scholarx::{
    compatibility, search, EntityId, Profile, Project, SearchableEntity, SkillId, SkillRef, StudyGroup,
    TeammateQuery,
};

const WORDS: &[&str] = &[
    "web", "mobile", "robotics", "machine", "learning", "graph", "database", "compiler", "network",
    "security", "vision", "campus", "health", "energy", "finance", "game", "cloud", "embedded",
];

const SKILLS: &[&str] = &[
    "Rust", "Python", "React", "PostgreSQL", "Docker", "TensorFlow", "Figma", "Kotlin", "Go", "C++",
];

fn random_phrase(rng: &mut StdRng, words: usize) -> String {
    (0..words)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_skills(rng: &mut StdRng, count: usize) -> Vec<SkillRef> {
    (0..count)
        .map(|_| {
            let i = rng.random_range(0..SKILLS.len());
            SkillRef::new(i as u64, SKILLS[i])
        })
        .collect()
}

fn generate_entities(size: usize, seed: u64) -> Vec<SearchableEntity> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| match i % 3 {
            0 => Project {
                id: EntityId::Integer(i as u64),
                title: random_phrase(&mut rng, 3),
                description: Some(random_phrase(&mut rng, 12)),
                skills: random_skills(&mut rng, 4),
                ..Default::default()
            }
            .into(),
            1 => StudyGroup {
                id: EntityId::Integer(i as u64),
                name: random_phrase(&mut rng, 2),
                subject_area: Some(random_phrase(&mut rng, 2)),
                course_code: Some(format!("CS{}", 100 + i % 400)),
                topics: (0..3).map(|_| random_phrase(&mut rng, 2)).collect(),
                description: Some(random_phrase(&mut rng, 10)),
                ..Default::default()
            }
            .into(),
            _ => generate_profile(&mut rng, i),
        })
        .collect()
}

fn generate_profile(rng: &mut StdRng, i: usize) -> SearchableEntity {
    Profile {
        id: EntityId::String(format!("1RV21CS{:04}", i)),
        full_name: random_phrase(rng, 2),
        department: Some(random_phrase(rng, 1)),
        bio: Some(random_phrase(rng, 15)),
        skills: random_skills(rng, 5),
        ..Default::default()
    }
    .into()
}

fn benchmark_keyword_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyword_search");

    for size in [100, 1000, 10000].iter() {
        let entities = generate_entities(*size, 42);
        group.bench_with_input(BenchmarkId::new("two_keywords", size), size, |b, _| {
            b.iter(|| black_box(search(&entities, "machine learning")));
        });
        group.bench_with_input(BenchmarkId::new("empty_query", size), size, |b, _| {
            b.iter(|| black_box(search(&entities, "")));
        });
    }

    group.finish();
}

fn benchmark_compatibility(c: &mut Criterion) {
    let required: Vec<SkillId> = (0..5u64).map(SkillId::Integer).collect();
    let candidate: Vec<SkillId> = (3..10u64).map(SkillId::Integer).collect();

    c.bench_function("compatibility", |b| {
        b.iter(|| black_box(compatibility(black_box(&candidate), black_box(&required))));
    });
}

fn benchmark_teammates(c: &mut Criterion) {
    let mut group = c.benchmark_group("teammates");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [100, 1000, 10000].iter() {
        let profiles: Vec<SearchableEntity> = (0..*size).map(|i| generate_profile(&mut rng, i)).collect();
        let required: Vec<SkillId> = (0..4u64).map(SkillId::Integer).collect();

        group.bench_with_input(BenchmarkId::new("rank", size), size, |b, _| {
            b.iter(|| black_box(TeammateQuery::new(required.clone()).rank(&profiles)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_keyword_search, benchmark_compatibility, benchmark_teammates);
criterion_main!(benches);
