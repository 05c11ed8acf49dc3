use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d01.txt");
    let (distance, similarity) = solve(input.as_str())?;

    cli::answer(1, 1, distance);
    cli::answer(1, 2, similarity);
    Ok(())
}

fn solve(input: &str) -> Result<(u64, u64)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for line in input.lines().filter(|line| !line.is_empty()) {
        let mut it = line.split_whitespace();

        let (Some(a), Some(b)) = (it.next(), it.next()) else {
            bail!("expected two columns: {line:?}");
        };

        left.push(a.parse::<u64>()?);
        right.push(b.parse::<u64>()?);
    }

    left.sort_unstable();
    right.sort_unstable();

    let distance = left.iter().zip(&right).map(|(a, b)| a.abs_diff(*b)).sum();

    let similarity = left
        .iter()
        .map(|a| a * right.iter().filter(|b| *b == a).count() as u64)
        .sum();

    Ok((distance, similarity))
}
