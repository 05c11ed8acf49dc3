use std::collections::{HashMap, HashSet};

use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d08.txt");
    let (o1, o2) = solve(&input.grid()?);

    cli::answer(8, 1, o1);
    cli::answer(8, 2, o2);
    Ok(())
}

fn solve(grid: &Grid) -> (usize, usize) {
    let mut antennas = HashMap::<u8, Vec<(isize, isize)>>::new();

    for (row, cells) in grid.rows().enumerate() {
        for (column, &byte) in cells.iter().enumerate() {
            if byte != b'.' {
                antennas
                    .entry(byte)
                    .or_default()
                    .push((row as isize, column as isize));
            }
        }
    }

    let rows = grid.rows_len() as isize;
    let columns = grid.columns_len() as isize;
    let in_bounds = |(r, c): (isize, isize)| r >= 0 && c >= 0 && r < rows && c < columns;

    let mut antinodes = HashSet::new();
    let mut harmonics = HashSet::new();

    for positions in antennas.values() {
        for (at, &a) in positions.iter().enumerate() {
            for &b in &positions[at + 1..] {
                let delta = (a.0 - b.0, a.1 - b.1);

                // Walk outwards from each antenna of the pair; the first
                // step past the antenna is the part one antinode, every
                // position on the ray counts for part two.
                for (start, step) in [(a, delta), (b, (-delta.0, -delta.1))] {
                    let mirror = (start.0 + step.0, start.1 + step.1);

                    if in_bounds(mirror) {
                        antinodes.insert(mirror);
                    }

                    let mut position = start;

                    while in_bounds(position) {
                        harmonics.insert(position);
                        position = (position.0 + step.0, position.1 + step.1);
                    }
                }
            }
        }
    }

    (antinodes.len(), harmonics.len())
}

#[cfg(test)]
mod tests {
    use lib::grid::Grid;

    use super::solve;

    const INPUT: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn example() {
        let grid = Grid::parse(INPUT.as_bytes()).unwrap();
        assert_eq!(solve(&grid), (14, 34));
    }
}
