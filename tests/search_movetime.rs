use pawnrace::{is_valid_move, Board, SearchParams, Searcher};
use std::time::{Duration, Instant};

#[test]
fn movetime_returns_quickly_with_move() {
    let b = Board::initial();
    let budget = Duration::from_millis(100);
    let params = SearchParams { depth: 20, movetime: Some(budget), max_nodes: None, use_pruning: true };
    let mut searcher = Searcher::new(params);
    let t0 = Instant::now();
    let res = searcher.search_with_params(&b, params);
    let elapsed = t0.elapsed();
    let bm = res.best_move.expect("no best move under movetime");
    assert!(is_valid_move(&b, bm));
    assert!(elapsed < budget + Duration::from_millis(250), "search exceeded time: {:?}", elapsed);
    assert!(res.nodes > 0);
}

#[test]
fn movetime_bounds_every_reference_position() {
    for text in [
        "BBBBBB/_BBBBB/______/_B____/_WWWWW/WWWWWW",
        "_BBBBB/_BBBBB/______/_B____/WWWWWW/__WWWW",
        "__BBBB/_BBBBB/______/_BW___/_WWWWW/___WWW",
    ] {
        let b: Board = text.parse().unwrap();
        let params = SearchParams { depth: 20, movetime: Some(Duration::from_millis(50)), max_nodes: None, use_pruning: true };
        let t0 = Instant::now();
        let res = Searcher::new(params).search_with_params(&b, params);
        assert!(t0.elapsed() < Duration::from_millis(300), "{text} took {:?}", t0.elapsed());
        assert!(res.best_move.map_or(false, |m| is_valid_move(&b, m)), "{text}: {:?}", res.best_move);
    }
}

#[test]
fn expired_deadline_gives_no_move() {
    let params = SearchParams { depth: 20, movetime: Some(Duration::ZERO), max_nodes: None, use_pruning: true };
    let res = Searcher::new(params).search_with_params(&Board::initial(), params);
    assert_eq!(res.best_move, None);
    assert_eq!(res.nodes, 1);
}
