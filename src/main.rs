//! Headless simulator: plays seeded games with the AI policy driving both
//! tokens and prints the outcome of each.
//!
//! Usage: `coin-chase-sim [games] [seed]`. Set `RUST_LOG=debug` to follow
//! every move.

use std::time::Duration;

use coin_chase::{
    AiController, DecisionContext, GameConfig, GameMode, GamePhase, GameResult, GameRng, GameSession, ManualClock,
    TokenId,
};

const FRAME: Duration = Duration::from_millis(250);
const MAX_TICKS: u32 = 10_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let games: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let clock = ManualClock::new();
    let mut session = match GameSession::with_clock(GameConfig::default(), seed, clock.clone()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let mut input_rng = GameRng::new(seed).for_context("sim-input");

    let mut wins = [0u32; 2];
    let mut draws = 0;
    for game in 1..=games {
        session.new_game(GameMode::HumanVsHuman);

        let mut ticks = 0;
        while session.phase() == GamePhase::InProgress && ticks < MAX_TICKS {
            clock.advance(FRAME);
            let input = match (session.board(), session.token(session.current_turn())) {
                (Some(board), Some(token)) => {
                    let ctx = DecisionContext { token, board, input: None };
                    AiController.decide(&ctx, &mut input_rng)
                }
                _ => None,
            };
            session.tick(input);
            ticks += 1;
        }

        let snapshot = session.snapshot();
        let score = |id: TokenId| snapshot.tokens[id].token.score();
        let lives = |id: TokenId| snapshot.tokens[id].token.lives();
        let outcome = match snapshot.result {
            Some(GameResult::Winner(token)) => {
                wins[token.index()] += 1;
                format!("{token} wins")
            }
            Some(GameResult::Draw) => {
                draws += 1;
                "draw".to_string()
            }
            None => "unfinished".to_string(),
        };
        println!(
            "game {game:>3}: {outcome:<12} A {:>2} pts {} lives | B {:>2} pts {} lives | {ticks} ticks",
            score(TokenId::A),
            lives(TokenId::A),
            score(TokenId::B),
            lives(TokenId::B),
        );
    }

    println!("A wins: {}, B wins: {}, draws: {}", wins[0], wins[1], draws);
}
