use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d07.txt");
    let (o1, o2) = solve(input.as_str())?;

    cli::answer(7, 1, o1);
    cli::answer(7, 2, o2);
    Ok(())
}

fn solve(input: &str) -> Result<(u64, u64)> {
    let mut o1 = 0;
    let mut o2 = 0;

    for line in input.lines().filter(|line| !line.is_empty()) {
        let (value, rest) = line
            .split_once(':')
            .with_context(|| anyhow!("missing test value: {line:?}"))?;

        let value = value.parse::<u64>()?;

        let operands = rest
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()?;

        let Some((&first, rest)) = operands.split_first() else {
            bail!("empty equation: {line:?}");
        };

        if reachable(value, first, rest, false) {
            o1 += value;
            o2 += value;
        } else if reachable(value, first, rest, true) {
            o2 += value;
        }
    }

    Ok((o1, o2))
}

/// Test whether the target can be produced left to right from the operands
/// with `+`, `*`, and optionally digit concatenation.
fn reachable(target: u64, acc: u64, rest: &[u64], concat: bool) -> bool {
    let Some((&next, rest)) = rest.split_first() else {
        return acc == target;
    };

    // Operands are positive, so the accumulator never shrinks.
    if acc > target {
        return false;
    }

    reachable(target, acc + next, rest, concat)
        || reachable(target, acc * next, rest, concat)
        || (concat && reachable(target, concatenate(acc, next), rest, concat))
}

/// Append the digits of `b` to `a`, so `concatenate(12, 345)` is `12345`.
fn concatenate(a: u64, b: u64) -> u64 {
    let mut shift = 10;

    while shift <= b {
        shift *= 10;
    }

    a * shift + b
}

#[cfg(test)]
mod tests {
    use super::{concatenate, solve};

    const INPUT: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn example() {
        assert_eq!(solve(INPUT).unwrap(), (3749, 11387));
    }

    #[test]
    fn digit_concatenation() {
        assert_eq!(concatenate(12, 345), 12345);
        assert_eq!(concatenate(1, 0), 10);
        assert_eq!(concatenate(15, 6), 156);
    }
}
