//! Seeded self-play through the session store. The challenger seat reuses
//! the AI's target heuristic, so a run exercises every engine verb.

use anyhow::{anyhow, Result};
use armada::{choose_target, init_logging, Actor, Coord, SessionStore, Status};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "sim", about = "Play seeded matches against the AI and print a JSON summary")]
struct Args {
    /// RNG seed for placement and target selection.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of matches to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut results = Vec::new();
    for game in 0..args.games {
        let mut store = SessionStore::new();
        let challenger = Uuid::new_v4();
        let id = store.create(challenger, "challenger", &mut rng)?;
        store.challenge_ai(id, challenger, &mut rng)?;

        let mut moves = 0u32;
        loop {
            let (active, target) = {
                let session = store.get(id).ok_or_else(|| anyhow!("session vanished"))?;
                if session.status() != Status::Active {
                    (false, None)
                } else if session.turn_owner().map(|s| s.is_ai()).unwrap_or(false) {
                    (true, None)
                } else {
                    let shots = session
                        .shot_record(Actor::Human(challenger))
                        .ok_or_else(|| anyhow!("challenger has no seat"))?;
                    let target =
                        choose_target(shots, &mut rng).ok_or_else(|| anyhow!("board exhausted"))?;
                    (true, Some(target))
                }
            };
            if !active {
                break;
            }
            match target {
                Some(Coord { row, col }) => {
                    store.fire(id, challenger, row, col)?;
                }
                None => {
                    store.ai_turn(id, &mut rng)?;
                }
            }
            moves += 1;
        }

        let view = store.view(id, None)?;
        results.push(json!({
            "game": game,
            "moves": moves,
            "winner": view.winner,
        }));
    }

    println!("{}", serde_json::to_string(&json!({ "seed": args.seed, "results": results }))?);
    Ok(())
}
