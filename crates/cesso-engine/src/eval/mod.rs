//! Static evaluation for cesso.
//!
//! Combines a flat material count with a phase-tapered sum of weighted
//! piece-square contributions, all computed from White's perspective and
//! negated for the caller when Black is to move. Checkmate and stalemate are
//! *not* handled here -- the search detects the absence of legal moves itself
//! and substitutes a mate/draw score without ever asking the evaluator to
//! score a terminal node.

pub mod material;
pub mod phase;
pub mod pst;
pub mod score;

use cesso_core::{Board, Color, PieceKind};

use self::phase::{game_phase, MAX_PHASE};
use self::pst::pst_value;
use self::score::Score;

/// Per-piece-kind weight applied to the tapered piece-square contribution,
/// in hundredths (coefficients P 1.3, N 0.8, B 0.9, R 1.2, Q 1.3, K 1.0).
/// Indexed by [`PieceKind::index`]. The spec's final 0.1 scale is folded
/// into `taper`'s division below.
const PST_WEIGHT_NUM: [i32; PieceKind::COUNT] = [130, 80, 90, 120, 130, 100];
const PST_WEIGHT_DEN: i32 = 100;

/// Sum the raw piece-square contribution over the whole board, White minus
/// Black, weighted per piece kind.
fn weighted_pst(board: &Board) -> Score {
    let mut total = Score::ZERO;
    for kind in PieceKind::ALL {
        let weight = PST_WEIGHT_NUM[kind.index()] as i16;
        for sq in board.pieces(kind) & board.side(Color::White) {
            total += pst_value(kind, Color::White, sq) * weight;
        }
        for sq in board.pieces(kind) & board.side(Color::Black) {
            total -= pst_value(kind, Color::Black, sq) * weight;
        }
    }
    total
}

/// Interpolate a packed [`Score`] between its middlegame and endgame
/// components using the 0..=[`MAX_PHASE`] phase value (`MAX_PHASE` = full
/// material, 0 = bare kings).
fn taper(score: Score, phase: i32) -> i32 {
    let mg = score.mg() as i64;
    let eg = score.eg() as i64;
    let phase = phase as i64;
    let max_phase = MAX_PHASE as i64;
    ((mg * phase + eg * (max_phase - phase)) / max_phase) as i32
}

/// Static evaluation, in centipawns, from White's perspective.
///
/// Material (see [`material::material`]) is a flat, untapered sum; the
/// weighted piece-square term is phase-interpolated and then scaled down by
/// the spec's 0.1 factor (folded into `PST_WEIGHT_DEN` and an extra order of
/// magnitude here). This never detects or scores checkmate/stalemate -- see
/// [`evaluate`].
pub fn evaluate_white(board: &Board) -> i32 {
    let mat = material::material(board);
    let phase = game_phase(board);
    let tapered = taper(weighted_pst(board), phase) / (PST_WEIGHT_DEN / 10);
    mat + tapered
}

/// Static evaluation in centipawns, from the perspective of the side to
/// move.
///
/// This is the ordinary, non-terminal scoring path: it never returns a mate
/// or stalemate score. The search is responsible for detecting the absence
/// of legal moves and substituting a ply-adjusted mate score or a draw
/// score in that case, rather than asking this function to encode it.
pub fn evaluate(board: &Board) -> i32 {
    let white_score = evaluate_white(board);
    match board.side_to_move() {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}
