use criterion::{criterion_group, criterion_main, Criterion, black_box};
use pawnrace::Board;

fn bench_movegen(c: &mut Criterion) {
    let b: Board = "__BBBB/_BBBBB/______/_BW___/_WWWWW/___WWW".parse().unwrap();
    c.bench_function("generate_moves_midgame", |ben| {
        ben.iter(|| black_box(pawnrace::generate_moves(black_box(&b))).len())
    });
    c.bench_function("invert_midgame", |ben| {
        ben.iter(|| black_box(black_box(&b).inverted()))
    });
    c.bench_function("perft_4_initial", |ben| {
        ben.iter(|| black_box(pawnrace::perft::perft(black_box(&Board::initial()), 4)))
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
