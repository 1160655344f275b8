//! Hot/Cold entry point
//!
//! Native builds run a small terminal driver: each line of input is a
//! `<distance> <direction>` step. The web build's entry point lives in the
//! library (`platform::web`).

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::io::{BufRead, Write};

    use anyhow::Context;
    use hot_cold::Session;
    use hot_cold::platform::{fresh_seed, init_logging};
    use hot_cold::sim::{GameState, StepCommand};

    fn print_state(state: &GameState) {
        println!(
            "  steps: {}  traveled: {:.2}  from home: {:.2}  temperature: {:.3}  efficiency: {:.0}%",
            state.steps,
            state.traveled,
            state.from_home,
            state.temperature,
            state.efficiency * 100.0
        );
    }

    init_logging();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed must be an unsigned integer")?
        .unwrap_or_else(fresh_seed);
    let mut session = Session::with_seed(seed);
    log::info!("Hot/Cold (native) starting with seed {}", seed);

    println!("A goal is hidden somewhere near you. Walk to it using as little distance as you can.");
    println!("Enter `<distance> <direction in degrees>` (0 = east, 90 = north), `reset` or `quit`.");
    print_state(&session.state());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "q" => break,
            "reset" => {
                println!("New goal hidden (attempt {}).", session.attempts() + 1);
                print_state(&session.reset());
                continue;
            }
            _ => {}
        }

        let was_solved = session.solved();
        match StepCommand::try_from(line) {
            Ok(command) => {
                let state = session.apply(command);
                print_state(&state);
                if !was_solved && session.solved() {
                    println!(
                        "You found it! {} steps, {:.0}% efficient. Type `reset` to play again.",
                        state.steps,
                        state.efficiency * 100.0
                    );
                }
            }
            Err(e) => eprintln!("  {:#}", e),
        }
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}
