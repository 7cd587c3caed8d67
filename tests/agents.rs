use pawnrace::agent::{Agent, AgentKind, FirstMoveAgent, RandomAgent};
use pawnrace::{first_legal_move, generate_moves, is_valid_move, Board, SearchParams};

#[test]
fn random_agent_is_seeded_and_legal() {
    let b = Board::initial();
    let mut a = RandomAgent::new(9);
    let mut c = RandomAgent::new(9);
    for _ in 0..20 {
        let m = a.make_move(&b).expect("moves available");
        assert!(is_valid_move(&b, m));
        assert_eq!(Some(m), c.make_move(&b));
    }
    let empty = Board::empty();
    assert_eq!(a.make_move(&empty), None);
}

#[test]
fn naive_agent_plays_the_fallback() {
    let b: Board = "__BBBB/_BBBBB/______/_BW___/_WWWWW/___WWW".parse().unwrap();
    assert_eq!(FirstMoveAgent.make_move(&b), first_legal_move(&b));
}

#[test]
fn kinds_build_named_agents() {
    let params = SearchParams { depth: 1, movetime: None, max_nodes: None, use_pruning: true };
    let names: Vec<String> = [AgentKind::Engine, AgentKind::Naive, AgentKind::Random]
        .into_iter()
        .map(|k| k.build(params, 1).name().to_string())
        .collect();
    assert_eq!(names, ["alphabeta", "naive", "random"]);

    let mut engine = AgentKind::Engine.build(params, 1);
    let b = Board::initial();
    assert_eq!(engine.make_move(&b), generate_moves(&b).first().copied());
}
