use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::{Board, CELLS};
use crate::engine::capture::{beats, effective_sides, Census};
use crate::engine::events::LogEntry;
use crate::rules::Rules;
use crate::types::{Dir, Side};

/// Result of resolving one placement: the updated board copy and its event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub board: Board,
    pub logs: Vec<LogEntry>,
}

/// An occupied neighbor of the placed card with both facing values resolved.
#[derive(Debug, Clone, Copy)]
struct Facing {
    idx: u8,
    side: Side,
    attack: u8,
    defend: u8,
}

/// Occupied neighbors of `origin` in resolution order (up, down, left, right),
/// with effective facing values computed against `census`.
fn facing_neighbors(board: &Board, origin: u8, census: &Census, rules: &Rules) -> Vec<Facing> {
    let Some(card) = board.get(origin) else {
        return Vec::new();
    };
    let o_sides = effective_sides(card, census, rules);

    let mut out = Vec::with_capacity(4);
    for dir in Dir::RESOLVE_ORDER {
        let Some(nidx) = Board::neighbor(origin, dir) else { continue };
        let Some(ncard) = board.get(nidx) else { continue };
        let n_sides = effective_sides(ncard, census, rules);
        out.push(Facing {
            idx: nidx,
            side: ncard.side,
            attack: o_sides[dir.side_index()],
            defend: n_sides[dir.opposite().side_index()],
        });
    }
    out
}

/// Same: two or more equal facing pairs (friendly neighbors count toward the
/// threshold) capture every matching enemy neighbor.
fn apply_same(
    board: &mut Board,
    neighbors: &[Facing],
    owner: Side,
    special: &mut [bool; CELLS],
    queue: &mut VecDeque<u8>,
    logs: &mut Vec<LogEntry>,
) {
    let matches: Vec<&Facing> = neighbors.iter().filter(|n| n.attack == n.defend).collect();
    if matches.len() < 2 {
        return;
    }
    logs.push(LogEntry::info("Same rule triggered!"));
    for n in matches {
        if n.side != owner {
            board.set_side(n.idx, owner);
            logs.push(LogEntry::flip(format!("Card at cell {} flipped by Same", n.idx + 1)));
            special[n.idx as usize] = true;
            queue.push_back(n.idx);
        }
    }
}

/// Plus: neighbors grouped by facing sum; any group of two or more captures
/// its enemy members not already taken this step.
fn apply_plus(
    board: &mut Board,
    neighbors: &[Facing],
    owner: Side,
    special: &mut [bool; CELLS],
    queue: &mut VecDeque<u8>,
    logs: &mut Vec<LogEntry>,
) {
    // Groups kept in first-seen order of their sum.
    let mut groups: Vec<(u16, Vec<&Facing>)> = Vec::with_capacity(4);
    for n in neighbors {
        let sum = u16::from(n.attack) + u16::from(n.defend);
        match groups.iter_mut().find(|(s, _)| *s == sum) {
            Some((_, members)) => members.push(n),
            None => groups.push((sum, vec![n])),
        }
    }

    for (sum, members) in groups {
        if members.len() < 2 {
            continue;
        }
        logs.push(LogEntry::info(format!("Plus rule triggered (sum {sum})!")));
        for n in members {
            if special[n.idx as usize] || n.side == owner {
                continue;
            }
            board.set_side(n.idx, owner);
            logs.push(LogEntry::flip(format!("Card at cell {} flipped by Plus", n.idx + 1)));
            special[n.idx as usize] = true;
            queue.push_back(n.idx);
        }
    }
}

/// Resolve a placement as a pure transform: the card at `placed_idx` must
/// already be on the board. Applies Same, Plus, Basic, then Combo cascades,
/// and returns a new board with the ordered event log.
///
/// An empty or off-board `placed_idx` yields the board unchanged and no logs.
pub fn resolve_placement(board: &Board, placed_idx: u8, rules: &Rules) -> Resolution {
    let mut nb = board.clone();
    let mut logs: Vec<LogEntry> = Vec::new();

    let owner = match nb.get(placed_idx) {
        Some(card) => card.side,
        None => return Resolution { board: nb, logs },
    };

    // Census over the post-placement board, reused for the whole call.
    let census = Census::of(&nb);
    let neighbors = facing_neighbors(&nb, placed_idx, &census, rules);

    let mut special = [false; CELLS];
    let mut queue: VecDeque<u8> = VecDeque::new();

    if rules.same {
        apply_same(&mut nb, &neighbors, owner, &mut special, &mut queue, &mut logs);
    }
    if rules.plus {
        apply_plus(&mut nb, &neighbors, owner, &mut special, &mut queue, &mut logs);
    }

    // Basic: always evaluated for whatever Same/Plus left alone. Never seeds combos.
    for n in &neighbors {
        if special[n.idx as usize] || n.side == owner {
            continue;
        }
        if beats(n.attack, n.defend, rules) {
            nb.set_side(n.idx, owner);
            logs.push(LogEntry::flip(format!("Card at cell {} captured by comparison", n.idx + 1)));
        }
    }

    // Combo cascades: BFS over Same/Plus captures, applying the capture test only.
    while let Some(idx) = queue.pop_front() {
        let Some(side) = nb.side_at(idx) else { continue };
        for n in facing_neighbors(&nb, idx, &census, rules) {
            if n.side == side {
                continue;
            }
            if beats(n.attack, n.defend, rules) {
                nb.set_side(n.idx, side);
                trace!("combo: cell {idx} captures cell {}", n.idx);
                logs.push(LogEntry::combo(format!("Combo! Cell {} captured in chain", n.idx + 1)));
                queue.push_back(n.idx);
            }
        }
    }

    debug!(
        "resolved cell {placed_idx} for {owner:?}: {} events, {} cells held",
        logs.len(),
        nb.count_side(owner)
    );

    Resolution { board: nb, logs }
}
