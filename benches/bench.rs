// Criterion benchmarks for Jobmatch Engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jobmatch_engine::core::{haversine_distance, score_candidate, score_job, Ranker};
use jobmatch_engine::models::{
    CandidateFilter, CandidateRecord, JobFilter, JobRecord, LanguageSkill, LocationFilter,
    NumericRange,
};

const SKILLS: &[&str] = &["Go", "Rust", "SQL", "Python", "Kubernetes", "Java", "React", "Terraform"];

fn skills_for(id: usize) -> Vec<String> {
    SKILLS
        .iter()
        .enumerate()
        .filter(|(i, _)| (id + i) % 3 == 0)
        .map(|(_, s)| s.to_string())
        .collect()
}

fn create_job(id: usize, lat: f64, lon: f64) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        title: Some(if id % 2 == 0 { "Backend Engineer" } else { "Data Analyst" }.to_string()),
        sector: Some("IT".to_string()),
        salary_min: Some(40000.0 + (id % 10) as f64 * 5000.0),
        salary_max: Some(60000.0 + (id % 10) as f64 * 5000.0),
        latitude: Some(lat),
        longitude: Some(lon),
        required_skills: skills_for(id),
        required_languages: vec![LanguageSkill::new("German", "B2")],
        experience_years: Some((id % 8) as f64),
        benefits: vec!["Gym membership".to_string(), "Job ticket".to_string()],
        ..Default::default()
    }
}

fn create_job_filter() -> JobFilter {
    JobFilter {
        title: Some("Engineer".to_string()),
        sector: Some("IT".to_string()),
        salary_range: NumericRange::between(55000.0, 75000.0),
        latitude: Some(52.52),
        longitude: Some(13.405),
        skills: vec!["Rust".to_string(), "SQL".to_string(), "Go".to_string()],
        languages: vec![LanguageSkill::new("German", "C1")],
        experience_years: Some(4.0),
        benefits: vec!["gym".to_string()],
        ..Default::default()
    }
}

fn create_candidate(id: usize, lat: f64, lon: f64) -> CandidateRecord {
    CandidateRecord {
        id: id.to_string(),
        job_title: Some("Software Engineer".to_string()),
        skills: skills_for(id),
        languages: vec![LanguageSkill::new("English", "C1")],
        experience_years: Some((id % 12) as f64),
        latitude: Some(lat),
        longitude: Some(lon),
        ..Default::default()
    }
}

fn create_candidate_filter() -> CandidateFilter {
    CandidateFilter {
        title: Some("Engineer".to_string()),
        skills: vec!["Rust".to_string(), "Kubernetes".to_string()],
        languages: vec![LanguageSkill::new("English", "B2")],
        experience_years: NumericRange::between(3.0, 8.0),
        location: LocationFilter {
            latitude: Some(52.52),
            longitude: Some(13.405),
            radius_km: Some(30.0),
            city: None,
        },
        ..Default::default()
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(52.52),
                black_box(13.405),
                black_box(48.1351),
                black_box(11.5820),
            )
        });
    });
}

fn bench_single_scores(c: &mut Criterion) {
    let job = create_job(4, 52.50, 13.40);
    let job_filter = create_job_filter();
    let candidate = create_candidate(4, 52.50, 13.40);
    let candidate_filter = create_candidate_filter();

    c.bench_function("score_job_strict", |b| {
        b.iter(|| score_job(black_box(&job), black_box(&job_filter), false));
    });
    c.bench_function("score_job_flexible", |b| {
        b.iter(|| score_job(black_box(&job), black_box(&job_filter), true));
    });
    c.bench_function("score_candidate", |b| {
        b.iter(|| score_candidate(black_box(&candidate), black_box(&candidate_filter)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::default();
    let filter = create_job_filter();

    let mut group = c.benchmark_group("ranking");

    for job_count in [10, 100, 1000].iter() {
        let jobs: Vec<JobRecord> = (0..*job_count)
            .map(|i| {
                let offset = (i as f64 * 0.001) % 2.0;
                create_job(i, 52.52 + offset, 13.405 - offset)
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("rank_jobs", job_count), job_count, |b, _| {
            b.iter(|| ranker.rank_jobs(black_box(&filter), black_box(&jobs), false, black_box(20)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_single_scores,
    bench_ranking
);

criterion_main!(benches);
