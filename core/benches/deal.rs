use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memorama_core::*;
use std::hint::black_box;
use std::time::Duration;

fn deal(c: &mut Criterion) {
    let catalog = SymbolCatalog::default();
    let mut group = c.benchmark_group("deal");

    for size in [4, 8, 32, Coord::MAX] {
        let config = GameConfig::new(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
            let mut shuffler = RandomShuffler::new(0x5eed);
            b.iter(|| Deck::deal(black_box(&catalog), config, &mut shuffler))
        });
    }

    group.finish();
}

fn play(c: &mut Criterion) {
    c.bench_function("play 8x8", |b| {
        b.iter(|| {
            let mut game = MemoryGame::new(
                SymbolCatalog::default(),
                GameConfig::new(8),
                IdentityShuffler,
                ManualScheduler::new(),
            )
            .unwrap();

            // identity deals lay every pair out side by side
            for index in 0..game.total_cards() {
                game.select_card(index);
                game.advance(Duration::from_millis(100));
            }
            black_box(game.moves())
        })
    });
}

criterion_group!(benches, deal, play);
criterion_main!(benches);
