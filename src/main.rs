use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use lines_of_action::core::{Board, Side};
use lines_of_action::game::Game;
use lines_of_action::player::{MachinePlayer, PlayerController, RandomPlayer, TuiController};
use std::io;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    print!("=== Lines of Action ===\r\n");
    print!("\r\nSelect players:\r\n");
    print!("1. Human (Black) vs Machine\r\n");
    print!("2. Machine vs Machine\r\n");
    print!("3. Human vs Human\r\n");
    print!("4. Human (Black) vs Random\r\n");
    print!("q. Quit\r\n");

    let choice = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char(c @ '1'..='4') => break c,
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    let (black, white): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match choice {
        '1' => (
            Box::new(TuiController::new(Side::Black, "Human")),
            Box::new(MachinePlayer::new(Side::White, "Machine")),
        ),
        '2' => (
            Box::new(MachinePlayer::new(Side::Black, "Machine B")),
            Box::new(MachinePlayer::new(Side::White, "Machine W")),
        ),
        '3' => (
            Box::new(TuiController::new(Side::Black, "Player 1")),
            Box::new(TuiController::new(Side::White, "Player 2")),
        ),
        _ => (
            Box::new(TuiController::new(Side::Black, "Human")),
            Box::new(RandomPlayer::new("Random")),
        ),
    };

    let mut game = Game::new(Board::new());
    game.play(black.as_ref(), white.as_ref(), |_| {});

    Ok(())
}
