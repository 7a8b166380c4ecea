//! Attack generation: precomputed tables for all piece types.

mod magic;
mod magic_data;
mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

use self::magic::{bishop_attacks_lookup, rook_attacks_lookup};
use self::tables::{BETWEEN, KING_ATTACKS, KNIGHT_ATTACKS, LINE, PAWN_ATTACKS};

/// Return the squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Return the squares a pawn of `color` on `sq` attacks.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Return rook attacks from `sq` given `occupied` squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks_lookup(sq.index(), occupied)
}

/// Return bishop attacks from `sq` given `occupied` squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks_lookup(sq.index(), occupied)
}

/// Return queen attacks from `sq` given `occupied` squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Return squares strictly between `sq1` and `sq2` (exclusive of both endpoints).
///
/// Returns an empty bitboard if the two squares are not on the same rank, file,
/// or diagonal.
#[inline]
pub fn between(sq1: Square, sq2: Square) -> Bitboard {
    BETWEEN[sq1.index()][sq2.index()]
}

/// Return all squares on the line through `sq1` and `sq2`, including both endpoints
/// and extending to the board edges.
///
/// Returns an empty bitboard if the two squares are not on the same rank, file,
/// or diagonal.
#[inline]
pub fn line(sq1: Square, sq2: Square) -> Bitboard {
    LINE[sq1.index()][sq2.index()]
}

/// Walk a single ray from `start` in the direction `(dx, dy)`, stopping at the
/// first square occupied by `blockers`.
///
/// `dx`/`dy` are file/rank steps in `{-1, 0, 1}`; passing `(0, 0)` yields an
/// empty (or `start`-only) result. `include_start` adds `start` itself to the
/// result; `include_stop` adds the blocking square (if one is hit) rather than
/// stopping just short of it. This is the general-purpose primitive the
/// per-direction `BETWEEN`/`LINE` tables and the magic-bitboard on-the-fly
/// generators are specialized instances of.
pub fn ray(
    start: Square,
    dx: i8,
    dy: i8,
    blockers: Bitboard,
    include_start: bool,
    include_stop: bool,
) -> Bitboard {
    let mut bits = 0u64;
    if include_start {
        bits |= 1u64 << start.index();
    }

    let mut file = start.file().index() as i8 + dx;
    let mut rank = start.rank().index() as i8 + dy;
    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let idx = rank as usize * 8 + file as usize;
        let bit = 1u64 << idx;
        if (blockers.inner() & bit) != 0 {
            if include_stop {
                bits |= bit;
            }
            break;
        }
        bits |= bit;
        file += dx;
        rank += dy;
    }

    Bitboard::new(bits)
}

#[cfg(test)]
mod tests {
    use super::magic;
    use super::*;
    use crate::bitboard::Bitboard;
    use crate::color::Color;
    use crate::square::Square;

    // --- Leaper spot checks ---

    #[test]
    fn knight_e4_has_8_attacks() {
        assert_eq!(knight_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn knight_a1_has_2_attacks() {
        assert_eq!(knight_attacks(Square::A1).count(), 2);
    }

    #[test]
    fn king_e1_has_5_attacks() {
        assert_eq!(king_attacks(Square::E1).count(), 5);
    }

    #[test]
    fn king_e4_has_8_attacks() {
        assert_eq!(king_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn pawn_no_wrap_file_a() {
        // White pawn on A4 should attack B5 only (not wrap to H-file).
        let attacks = pawn_attacks(Color::White, Square::A4);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.contains(Square::B5));
    }

    #[test]
    fn pawn_no_wrap_file_h() {
        let attacks = pawn_attacks(Color::White, Square::H4);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.contains(Square::G5));
    }

    #[test]
    fn pawn_black_attacks_south() {
        let attacks = pawn_attacks(Color::Black, Square::E5);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(Square::D4));
        assert!(attacks.contains(Square::F4));
    }

    // --- Sliding piece on empty board ---

    #[test]
    fn rook_empty_board_always_14() {
        for sq in Square::all() {
            assert_eq!(
                rook_attacks(sq, Bitboard::EMPTY).count(),
                14,
                "rook on {} should have 14 attacks on empty board",
                sq
            );
        }
    }

    #[test]
    fn bishop_d4_empty_board_13() {
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
    }

    // --- Blocker test ---

    #[test]
    fn rook_e4_blocked_e6() {
        let occupied = Square::E6.bitboard();
        let attacks = rook_attacks(Square::E4, occupied);
        assert!(attacks.contains(Square::E5));
        assert!(attacks.contains(Square::E6)); // blocker square included
        assert!(!attacks.contains(Square::E7)); // blocked beyond
    }

    // --- BETWEEN / LINE ---

    #[test]
    fn between_e1_e4() {
        let bb = between(Square::E1, Square::E4);
        assert_eq!(bb.count(), 2);
        assert!(bb.contains(Square::E2));
        assert!(bb.contains(Square::E3));
    }

    #[test]
    fn between_a1_h8() {
        let bb = between(Square::A1, Square::H8);
        assert_eq!(bb.count(), 6); // B2..G7
    }

    #[test]
    fn between_non_aligned_empty() {
        let bb = between(Square::A1, Square::B3);
        assert!(bb.is_empty());
    }

    #[test]
    fn line_a1_h8() {
        let bb = line(Square::A1, Square::H8);
        assert_eq!(bb.count(), 8); // full main diagonal
    }

    #[test]
    fn line_non_aligned_empty() {
        let bb = line(Square::A1, Square::B3);
        assert!(bb.is_empty());
    }

    // --- Cross-validation: magic lookup vs. on-the-fly ---

    #[test]
    fn rook_magic_vs_naive() {
        let mut rng: u64 = 0xDEADBEEF12345678;
        for sq_idx in 0..64usize {
            let sq = Square::from_index(sq_idx as u8).unwrap();
            for _ in 0..128 {
                // LCG PRNG
                rng = rng
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let occupied = Bitboard::new(rng);
                let magic_result = rook_attacks(sq, occupied);
                let naive_result =
                    Bitboard::new(magic::rook_attacks_on_the_fly(sq_idx, rng));
                assert_eq!(
                    magic_result, naive_result,
                    "rook mismatch on sq {} with occ {:016x}",
                    sq, rng
                );
            }
        }
    }

    // --- ray() ---

    #[test]
    fn ray_matches_rook_attacks_on_empty_board() {
        // Union of the four orthogonal rays from e4 should equal the full rook attack set.
        let sq = Square::E4;
        let mut union = Bitboard::EMPTY;
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            union |= ray(sq, dx, dy, Bitboard::EMPTY, false, true);
        }
        assert_eq!(union, rook_attacks(sq, Bitboard::EMPTY));
    }

    #[test]
    fn ray_matches_bishop_attacks_with_blockers() {
        let sq = Square::D4;
        let occupied = Square::F6.bitboard() | Square::B2.bitboard();
        let mut union = Bitboard::EMPTY;
        for (dx, dy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            union |= ray(sq, dx, dy, occupied, false, true);
        }
        assert_eq!(union, bishop_attacks(sq, occupied));
    }

    #[test]
    fn ray_include_start_adds_origin_square() {
        let r = ray(Square::E4, 1, 0, Bitboard::EMPTY, true, true);
        assert!(r.contains(Square::E4));
        assert!(r.contains(Square::H4));
    }

    #[test]
    fn ray_exclude_stop_halts_before_blocker() {
        let occupied = Square::E6.bitboard();
        let r = ray(Square::E4, 0, 1, occupied, false, false);
        assert!(r.contains(Square::E5));
        assert!(!r.contains(Square::E6));
    }

    #[test]
    fn ray_include_stop_adds_blocker() {
        let occupied = Square::E6.bitboard();
        let r = ray(Square::E4, 0, 1, occupied, false, true);
        assert!(r.contains(Square::E5));
        assert!(r.contains(Square::E6));
        assert!(!r.contains(Square::E7));
    }

    #[test]
    fn ray_off_board_immediately_is_empty() {
        let r = ray(Square::A1, -1, 0, Bitboard::EMPTY, false, true);
        assert!(r.is_empty());
    }

    #[test]
    fn bishop_magic_vs_naive() {
        let mut rng: u64 = 0xCAFEBABE87654321;
        for sq_idx in 0..64usize {
            let sq = Square::from_index(sq_idx as u8).unwrap();
            for _ in 0..128 {
                rng = rng
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let occupied = Bitboard::new(rng);
                let magic_result = bishop_attacks(sq, occupied);
                let naive_result =
                    Bitboard::new(magic::bishop_attacks_on_the_fly(sq_idx, rng));
                assert_eq!(
                    magic_result, naive_result,
                    "bishop mismatch on sq {} with occ {:016x}",
                    sq, rng
                );
            }
        }
    }
}
