use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use triplecoach::{get_best_move, resolve_placement, validate_card, Board, Card, CardError, Rules};

#[derive(Debug, Parser)]
#[command(name = "suggest", about = "Triple Triad move advisor")]
struct Args {
    /// Position JSON file: { "board": [...9], "hand": [...], "rules": {...}, "opponent": [...] }.
    /// Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Rules toggles as comma-separated list, overriding the input's rules
    /// (reverse,fallen_ace,same,plus,ascension,descension,order or 'none')
    #[arg(long)]
    rules: Option<String>,

    /// Resolve the card already placed at this cell instead of suggesting a move
    #[arg(long)]
    resolve: Option<u8>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
struct Position {
    #[serde(default)]
    board: Board,
    #[serde(default)]
    hand: Vec<Card>,
    #[serde(default)]
    rules: Rules,
    #[serde(default)]
    opponent: Option<Vec<Card>>,
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

impl Position {
    fn validate(&self) -> Result<(), CardError> {
        let on_board = (0u8..9).filter_map(|i| self.board.get(i));
        let opponent = self.opponent.iter().flatten();
        for card in on_board.chain(&self.hand).chain(opponent) {
            validate_card(card)?;
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let raw = read_input(args.input.as_ref()).map_err(|e| format!("Input read error: {e}"))?;
    let pos: Position = serde_json::from_str(&raw).map_err(|e| format!("Position parse error: {e}"))?;
    pos.validate().map_err(|e| format!("[suggest] Invalid position: {e}"))?;
    let rules = match args.rules.as_deref() {
        Some(s) => s.parse::<Rules>().map_err(|e| format!("Rules parse error: {e}"))?,
        None => pos.rules,
    };
    log::debug!("[suggest] rules {rules:?}, {} empty cells", pos.board.empty_cells().len());

    let out = match args.resolve {
        Some(cell) => {
            if cell >= 9 {
                return Err(format!("Cell index {cell} out of range").into());
            }
            serde_json::to_value(resolve_placement(&pos.board, cell, &rules))?
        }
        None => serde_json::to_value(get_best_move(&pos.board, &pos.hand, &rules, pos.opponent.as_deref()))?,
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{out}");
    }
    Ok(())
}
