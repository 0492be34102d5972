#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging,
    ui::{banner, confirm, narrate, side_by_side},
    AiPlayer, Board, BoardFactory, CliPlayer, Match, MatchState, Player, NUM_SHIPS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[cfg(feature = "std")]
#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(short, long, help = "Skip the start confirmation")]
        yes: bool,
    },
    /// Watch two automated players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        yes: false,
    }) {
        Commands::Play { seed, yes } => play(seed, yes),
        Commands::Auto { seed } => auto(seed),
    }
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
fn new_match(players: [Box<dyn Player>; 2], mut rng: SmallRng) -> anyhow::Result<Match> {
    let factory = BoardFactory::default();
    let boards: [Board; 2] = [factory.generate(&mut rng)?, factory.generate(&mut rng)?];
    Ok(Match::new(players, boards, rng))
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, yes: bool) -> anyhow::Result<()> {
    println!("{}", banner("All hands on deck!"));
    println!("Welcome to sea battle!");
    println!("Goal: destroy all {} enemy ships.", NUM_SHIPS);
    println!("Enter targets as `row col`, e.g. `2 5`.");

    if !yes {
        let stdin = std::io::stdin();
        let started = confirm(&mut stdin.lock(), &mut std::io::stdout())?;
        if !started {
            println!("{}", banner("Come back and play later! Bye!"));
            return Ok(());
        }
    }

    let rng = seeded_rng(seed);
    let players: [Box<dyn Player>; 2] = [Box::new(CliPlayer::stdio()), Box::new(AiPlayer::new())];
    let mut game = new_match(players, rng)?;

    loop {
        println!(
            "{}",
            side_by_side(
                "Your board:",
                game.board(0).view(true),
                "Enemy board:",
                game.board(1).view(false),
            )
        );
        match game.state() {
            MatchState::AwaitingTurn(0) => println!("Your move!"),
            MatchState::AwaitingTurn(_) => println!("Computer's move!"),
            MatchState::Finished(_) => break,
        }
        if let Some((seat, report)) = game.step()? {
            if seat == 1 {
                println!(
                    "Computer fired at {} {}",
                    report.target.row + 1,
                    report.target.col + 1
                );
            }
            println!("{}", narrate(report.outcome));
        }
    }

    match game.winner() {
        Some(0) => println!("{}", banner("You won!")),
        _ => println!("{}", banner("The computer won!")),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    println!("Starting automated match...");
    let rng = seeded_rng(seed);
    let players: [Box<dyn Player>; 2] = [
        Box::new(AiPlayer::named("Player 1")),
        Box::new(AiPlayer::named("Player 2")),
    ];
    let mut game = new_match(players, rng)?;

    while let Some((seat, report)) = game.step()? {
        println!(
            "Player {} fires at {} {}: {}",
            seat + 1,
            report.target.row + 1,
            report.target.col + 1,
            narrate(report.outcome)
        );
    }

    println!(
        "{}",
        side_by_side(
            "Player 1:",
            game.board(0).view(true),
            "Player 2:",
            game.board(1).view(true),
        )
    );
    if let Some(winner) = game.winner() {
        println!(
            "{}",
            banner(&format!(
                "Player {} wins after {} shots",
                winner + 1,
                game.shots_fired(winner)
            ))
        );
    }
    Ok(())
}
