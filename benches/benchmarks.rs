criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        ranking_small_domain,
        ranking_large_domain,
        folding_opponent_offers,
        estimating_opponent_utility,
        conceding_through_window,
}

fn ranking_small_domain(c: &mut criterion::Criterion) {
    let profile = profile(3, 4);
    c.bench_function("rank a 64-bid domain", |b| {
        b.iter(|| Ranking::build(&profile))
    });
}

fn ranking_large_domain(c: &mut criterion::Criterion) {
    let profile = profile(6, 5);
    c.bench_function("rank a 15625-bid domain", |b| {
        b.iter(|| Ranking::build(&profile))
    });
}

fn folding_opponent_offers(c: &mut criterion::Criterion) {
    let profile = profile(6, 5);
    let ref actions = offers(&profile, 100);
    let ref progress = Progress::new(1, 100);
    c.bench_function("fold 100 offers into the opponent model", |b| {
        b.iter(|| {
            actions.iter().try_fold(
                FrequencyModel::default().with_domain(profile.domain().clone(), None),
                |model, action| model.with_action(action, progress),
            )
        })
    });
}

fn estimating_opponent_utility(c: &mut criterion::Criterion) {
    let profile = profile(6, 5);
    let ref progress = Progress::new(1, 100);
    let model = offers(&profile, 100)
        .iter()
        .try_fold(
            FrequencyModel::default().with_domain(profile.domain().clone(), None),
            |model, action| model.with_action(action, progress),
        )
        .expect("domain is set");
    let ref bids = profile.domain().bids().take(1000).collect::<Vec<_>>();
    c.bench_function("estimate opponent utility of 1000 bids", |b| {
        b.iter(|| bids.iter().map(|bid| model.utility(bid)).count())
    });
}

fn conceding_through_window(c: &mut criterion::Criterion) {
    let profile = profile(4, 5);
    let ref progress = Progress::new(50, 100);
    c.bench_function("concede 100 steps down the ranking", |b| {
        b.iter(|| {
            let mut schedule = Schedule::new(&Config {
                seed: Some(0),
                ..Config::default()
            });
            (0..100)
                .map(|_| schedule.next(&profile, progress))
                .collect::<Vec<_>>()
        })
    });
}

fn profile(issues: usize, values: usize) -> AdditiveProfile {
    let domain = Domain::new(
        "bench",
        (0..issues)
            .map(|i| {
                let labels = (0..values)
                    .map(|v| Value::from(format!("v{}", v).as_str()))
                    .collect();
                (Issue::from(format!("i{}", i)), labels)
            })
            .collect(),
    );
    AdditiveProfile::random("bench", &domain, &mut SmallRng::seed_from_u64(0))
}

fn offers(profile: &AdditiveProfile, n: usize) -> Vec<Action> {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let bids = profile.domain().bids().collect::<Vec<_>>();
    (0..n)
        .map(|_| Action::Offer {
            actor: PartyId::from("opponent"),
            bid: bids[rng.random_range(0..bids.len())].clone(),
        })
        .collect()
}

use negotiator::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
