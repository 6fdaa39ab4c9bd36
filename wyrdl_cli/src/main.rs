use std::{
    env, fs,
    io::{self, BufRead, Write},
    process,
};

use log::debug;
use owo_colors::{AnsiColors, OwoColorize, Stream};
use wyrdl::{
    AlphabetKnowledge, GuessResult, InvalidGuess, Presenter, Session, Status, Verdict, Word,
    WordBank, WordSource,
};

/// Renders session events as colored terminal lines.
struct Terminal;

fn paint(verdict: Option<Verdict>) -> AnsiColors {
    match verdict {
        Some(Verdict::Correct) => AnsiColors::Green,
        Some(Verdict::Misplaced) => AnsiColors::Yellow,
        Some(Verdict::Absent) => AnsiColors::BrightBlack,
        None => AnsiColors::Default,
    }
}

impl Presenter for Terminal {
    fn invalid_guess(&mut self, error: &InvalidGuess) {
        println!("Invalid guess: {}. Please enter a five letter word.", error);
    }

    fn guess_evaluated(&mut self, result: &GuessResult, knowledge: &AlphabetKnowledge) {
        for (letter, verdict) in result.iter() {
            let color = paint(Some(verdict));
            print!(
                "{} ",
                letter.if_supports_color(Stream::Stdout, move |text| text.color(color))
            );
        }
        println!();

        for (letter, best) in knowledge.iter() {
            let color = paint(best);
            print!(
                "{}",
                letter.if_supports_color(Stream::Stdout, move |text| text.color(color))
            );
        }
        println!();
        println!("{}", knowledge);
        println!();
    }

    fn won(&mut self, attempts_used: usize) {
        println!("You guessed the word in {} tries!", attempts_used);
    }

    fn lost(&mut self, secret: &Word) {
        println!("Game over! The word was {}.", secret);
    }
}

fn run() -> wyrdl::Result<()> {
    let mut bank = match env::args_os().nth(1) {
        Some(path) => WordBank::new(fs::read_to_string(path)?.lines())?,
        None => WordBank::builtin(),
    };
    debug!("playing with a bank of {} words", bank.len());

    let secret = bank.choose_secret_word();
    let mut session = Session::new(secret);
    let mut screen = Terminal;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Guess {}: ", session.attempt());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                // EOF abandons the game without revealing the secret.
                println!();
                return Ok(());
            }
        };

        if let Status::Won | Status::Lost = session.submit_to(line.trim(), &mut screen)? {
            return Ok(());
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
