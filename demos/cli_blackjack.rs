//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjmatch::{
    Action, Controller, GameOptions, GameSession, Hand, Outcome, Round, SessionEvent, TurnReport,
    wants_replay,
};

struct Console;

impl Controller for Console {
    fn choose_action(&mut self, _round: &Round) -> Action {
        loop {
            // Treat a closed stdin as standing so the round can finish.
            let Some(input) = prompt_line("Hit or Stand? (h/s): ") else {
                return Action::Stand;
            };
            match input.parse() {
                Ok(action) => return action,
                Err(_) => println!("Invalid choice. Please enter 'h' or 's'."),
            }
        }
    }

    fn play_again(&mut self, _outcome: Outcome) -> bool {
        prompt_line("Do you want to play again? (y/n): ").is_some_and(|input| wants_replay(&input))
    }

    fn observe(&mut self, round: &Round, event: &SessionEvent) {
        match event {
            SessionEvent::Dealt => {
                print_hand("Player", round.player_hand());
                print_hand("Dealer", round.dealer_hand());
            }
            SessionEvent::Turn(TurnReport::Hit { busted, .. }) => {
                print_hand("Player", round.player_hand());
                if *busted {
                    println!("Player busted! Dealer wins.");
                }
            }
            SessionEvent::Turn(TurnReport::DealerPlayed { drawn }) => {
                for card in drawn {
                    println!("Dealer hits: {card}");
                }
                print_hand("Dealer", round.dealer_hand());
                if round.dealer_hand().is_busted() {
                    println!("Dealer busted! Player wins.");
                }
            }
            SessionEvent::Resolved(outcome) => println!("{outcome}"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(GameOptions::default(), seed);
    let mut console = Console;

    loop {
        println!("Menu:");
        println!("1. Start New Game");
        println!("2. View Match History");
        println!("Press any other keys if you want to exit");

        match prompt_line("Enter your choice: ").as_deref() {
            Some("1") => {
                if let Err(err) = session.run(&mut console) {
                    println!("Round aborted: {err}");
                }
            }
            Some("2") => print_history(&session),
            _ => {
                println!("Thank you for playing Blackjack.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn print_hand(owner: &str, hand: &Hand) {
    println!("{owner}'s Hand: {hand} (score {})", hand.score());
}

fn print_history(session: &GameSession) {
    println!("Match History:");
    if session.history().is_empty() {
        println!("(no matches played yet)");
        return;
    }
    session.history().for_each_entry(|number, entry, outcome| {
        println!(
            "Match {number}: {outcome} (player {}, dealer {})",
            entry.player_hand().score(),
            entry.dealer_hand().score()
        );
    });
}
