use crate::grid::Grid;

use super::{count_crossings, count_word, word_appears_at, Direction, SearchPath};

fn grid(text: &str) -> Grid {
    Grid::parse(text.as_bytes()).unwrap()
}

// The worked example from the day 4 puzzle statement.
const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

#[test]
fn first_step_out_of_bounds() {
    let g = grid("X");

    for direction in Direction::ALL {
        let path = SearchPath::new(direction);
        assert!(!word_appears_at(&g, 0, 0, path, b"XM").unwrap());
    }
}

#[test]
fn single_byte_word() {
    let g = grid("X");
    let path = SearchPath::new(Direction::Right);
    assert!(word_appears_at(&g, 0, 0, path, b"X").unwrap());
}

#[test]
fn wrong_anchor_is_an_error() {
    let g = grid("AB");
    let path = SearchPath::new(Direction::Right);
    assert!(word_appears_at(&g, 0, 1, path, b"AB").is_err());
}

#[test]
fn mismatch_along_the_path() {
    let g = grid("XMAX");
    let path = SearchPath::new(Direction::Right);
    assert!(!word_appears_at(&g, 0, 0, path, b"XMAS").unwrap());
}

#[test]
fn horizontal_and_diagonal() {
    let g = grid("XMAS\n.M..\n..A.\n...S");
    assert_eq!(count_word(&g, b"XMAS").unwrap(), 2);
}

#[test]
fn count_word_example() {
    let g = grid(EXAMPLE);
    assert_eq!(count_word(&g, b"XMAS").unwrap(), 18);
}

#[test]
fn crossing_counted_once() {
    // One X shape readable from both M corners; the consumed center keeps
    // it from being counted twice.
    let mut g = grid("M.S\n.A.\nM.S");
    assert_eq!(count_crossings(&mut g, b"MAS").unwrap(), 1);
}

#[test]
fn count_crossings_example() {
    let mut g = grid(EXAMPLE);
    assert_eq!(count_crossings(&mut g, b"MAS").unwrap(), 9);
}

#[test]
fn deltas_cover_all_neighbours() {
    let mut seen = [(0isize, 0isize); 8];

    for (at, direction) in Direction::ALL.into_iter().enumerate() {
        let (row_step, col_step) = direction.delta();
        assert!((-1..=1).contains(&row_step));
        assert!((-1..=1).contains(&col_step));
        assert_ne!((row_step, col_step), (0, 0));
        seen[at] = (row_step, col_step);
    }

    seen.sort_unstable();
    seen.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
}
